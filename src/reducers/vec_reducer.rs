use crate::error::Result;
use crate::step::Step;
use crate::transformer::Transformer;

/// A reducer that collects every element into a `Vec`, in arrival order.
#[derive(Debug, Clone, Copy, Default)]
pub struct VecReducer;

impl<T> Transformer<T> for VecReducer {
  type Acc = Vec<T>;
  type Output = Vec<T>;

  fn init(&mut self) -> Vec<T> {
    Vec::new()
  }

  #[inline]
  fn step(&mut self, mut acc: Vec<T>, value: T) -> Step<Vec<T>> {
    acc.push(value);
    Step::Continue(acc)
  }

  fn finish(&mut self, acc: Step<Vec<T>>) -> Result<Vec<T>> {
    Ok(acc.into_inner())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::sources::{RangeSource, Source};

  #[test]
  fn test_vec_reducer_collects_in_order() {
    let result = RangeSource::new(10, 13).drive(VecReducer).unwrap();
    assert_eq!(result, vec![10, 11, 12]);
  }

  #[test]
  fn test_vec_reducer_empty() {
    let result = RangeSource::new(5, 5).drive(VecReducer).unwrap();
    assert_eq!(result, Vec::<i32>::new());
  }
}
