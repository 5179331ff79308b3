//! Drop transformer for transweave.
//!
//! [`DropTransformer`] discards the first `n` elements and forwards everything
//! after them. Dropped elements leave the accumulator unchanged. Once the
//! counter is exhausted it stays exhausted, so driving the same chain instance
//! a second time forwards every element.

use crate::error::Result;
use crate::step::Step;
use crate::transformer::Transformer;

/// A stage that skips the first `n` elements.
#[derive(Debug, Clone)]
pub struct DropTransformer<D> {
  /// How many more elements will be discarded.
  pub remaining: usize,
  /// The downstream transformer.
  pub downstream: D,
}

impl<D> DropTransformer<D> {
  /// Creates a new `DropTransformer` discarding `n` elements.
  pub fn new(n: usize, downstream: D) -> Self {
    Self {
      remaining: n,
      downstream,
    }
  }
}

impl<In, D> Transformer<In> for DropTransformer<D>
where
  D: Transformer<In>,
{
  type Acc = D::Acc;
  type Output = D::Output;

  #[inline]
  fn init(&mut self) -> Self::Acc {
    self.downstream.init()
  }

  #[inline]
  fn step(&mut self, acc: Self::Acc, value: In) -> Step<Self::Acc> {
    if self.remaining > 0 {
      self.remaining -= 1;
      Step::Continue(acc)
    } else {
      self.downstream.step(acc, value)
    }
  }

  #[inline]
  fn finish(&mut self, acc: Step<Self::Acc>) -> Result<Self::Output> {
    self.downstream.finish(acc)
  }
}
