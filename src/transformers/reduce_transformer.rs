//! Reduce transformer for transweave.
//!
//! [`ReduceTransformer`] emits the running reduction of the elements seen so
//! far. The first element seeds the running value and is forwarded as is; every
//! later element forwards `f(running, element)`.
//!
//! Paired with the keep-last reducer this computes a plain fold; paired with the
//! vec reducer it yields every intermediate value.
//!
//! ```rust
//! use transweave::Pipeline;
//!
//! let max = Pipeline::from_array(&[3, 9, 4]).reduce(i32::max).last().unwrap();
//! assert_eq!(max, 9);
//!
//! let running = Pipeline::from_range(1, 5).reduce(|a, b| a + b).to_vec().unwrap();
//! assert_eq!(running, vec![1, 3, 6, 10]);
//! ```

use crate::error::Result;
use crate::step::Step;
use crate::transformer::Transformer;

/// A stage forwarding the running reduction of its input.
#[derive(Debug, Clone)]
pub struct ReduceTransformer<F, T, D> {
  /// The reducing function.
  pub f: F,
  /// The reduction so far; `None` until the first element arrives.
  pub running: Option<T>,
  /// The downstream transformer.
  pub downstream: D,
}

impl<F, T, D> ReduceTransformer<F, T, D> {
  /// Creates a new `ReduceTransformer` with no running value.
  pub fn new(f: F, downstream: D) -> Self {
    Self {
      f,
      running: None,
      downstream,
    }
  }
}

impl<F, T, D> Transformer<T> for ReduceTransformer<F, T, D>
where
  F: FnMut(T, T) -> T,
  T: Clone,
  D: Transformer<T>,
{
  type Acc = D::Acc;
  type Output = D::Output;

  #[inline]
  fn init(&mut self) -> Self::Acc {
    self.downstream.init()
  }

  fn step(&mut self, acc: Self::Acc, value: T) -> Step<Self::Acc> {
    let next = match self.running.take() {
      Some(running) => (self.f)(running, value),
      None => value,
    };
    self.running = Some(next.clone());
    self.downstream.step(acc, next)
  }

  #[inline]
  fn finish(&mut self, acc: Step<Self::Acc>) -> Result<Self::Output> {
    self.downstream.finish(acc)
  }
}
