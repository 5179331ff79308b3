//! Filter transformer for transweave.
//!
//! [`FilterTransformer`] forwards an element only when its predicate accepts it.
//! A rejected element leaves the accumulator untouched and the downstream
//! transformer is not called at all.

use crate::error::Result;
use crate::step::Step;
use crate::transformer::Transformer;

/// A stage that discards elements for which the predicate returns `false`.
///
/// # Example
///
/// ```rust
/// use transweave::reducers::VecReducer;
/// use transweave::sources::{RangeSource, Source};
/// use transweave::transformers::FilterTransformer;
///
/// let evens = RangeSource::new(0, 7)
///   .drive(FilterTransformer::new(|x: &i32| x % 2 == 0, VecReducer))
///   .unwrap();
/// assert_eq!(evens, vec![0, 2, 4, 6]);
/// ```
#[derive(Debug, Clone)]
pub struct FilterTransformer<P, D> {
  /// The predicate deciding which elements pass.
  pub predicate: P,
  /// The downstream transformer.
  pub downstream: D,
}

impl<P, D> FilterTransformer<P, D> {
  /// Creates a new `FilterTransformer` in front of `downstream`.
  pub fn new(predicate: P, downstream: D) -> Self {
    Self {
      predicate,
      downstream,
    }
  }
}

impl<In, P, D> Transformer<In> for FilterTransformer<P, D>
where
  P: FnMut(&In) -> bool,
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
    if (self.predicate)(&value) {
      self.downstream.step(acc, value)
    } else {
      Step::Continue(acc)
    }
  }

  #[inline]
  fn finish(&mut self, acc: Step<Self::Acc>) -> Result<Self::Output> {
    self.downstream.finish(acc)
  }
}
