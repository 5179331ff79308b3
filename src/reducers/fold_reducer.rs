use crate::error::Result;
use crate::step::Step;
use crate::transformer::Transformer;

/// A reducer built from a seed and a step function.
///
/// The seed is cloned on every `init`, so the same reducer can finish several
/// runs independently.
///
/// ```rust
/// use transweave::Pipeline;
///
/// let csv = Pipeline::from_range(1, 4)
///   .fold(String::new(), |mut acc, x| {
///     if !acc.is_empty() {
///       acc.push(',');
///     }
///     acc.push_str(&x.to_string());
///     acc
///   })
///   .unwrap();
/// assert_eq!(csv, "1,2,3");
/// ```
#[derive(Debug, Clone)]
pub struct FoldReducer<A, F> {
  /// The initial accumulator.
  pub seed: A,
  /// Combines the accumulator with one element.
  pub f: F,
}

impl<A, F> FoldReducer<A, F> {
  /// Creates a new `FoldReducer`.
  pub fn new(seed: A, f: F) -> Self {
    Self { seed, f }
  }
}

impl<T, A, F> Transformer<T> for FoldReducer<A, F>
where
  A: Clone,
  F: FnMut(A, T) -> A,
{
  type Acc = A;
  type Output = A;

  fn init(&mut self) -> A {
    self.seed.clone()
  }

  #[inline]
  fn step(&mut self, acc: A, value: T) -> Step<A> {
    Step::Continue((self.f)(acc, value))
  }

  fn finish(&mut self, acc: Step<A>) -> Result<A> {
    Ok(acc.into_inner())
  }
}
