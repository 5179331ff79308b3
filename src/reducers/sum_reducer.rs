use crate::error::Result;
use crate::step::Step;
use crate::transformer::Transformer;
use num_traits::Zero;
use std::ops::Add;

/// A reducer adding every element to a running total seeded with zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct SumReducer;

impl<T> Transformer<T> for SumReducer
where
  T: Zero + Add<Output = T>,
{
  type Acc = T;
  type Output = T;

  fn init(&mut self) -> T {
    T::zero()
  }

  #[inline]
  fn step(&mut self, acc: T, value: T) -> Step<T> {
    Step::Continue(acc + value)
  }

  fn finish(&mut self, acc: Step<T>) -> Result<T> {
    Ok(acc.into_inner())
  }
}
