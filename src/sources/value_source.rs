use super::{Source, drive_finished, drive_started};
use crate::error::Result;
use crate::transformer::Transformer;

/// A source producing exactly one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueSource<T> {
  value: T,
}

impl<T> ValueSource<T> {
  /// Creates a new `ValueSource` holding `value`.
  pub fn new(value: T) -> Self {
    Self { value }
  }
}

impl<T> Source for ValueSource<T> {
  type Item = T;

  fn drive<X>(self, mut transformer: X) -> Result<X::Output>
  where
    X: Transformer<T>,
  {
    drive_started("value");
    let acc = transformer.init();
    let last = transformer.step(acc, self.value);
    drive_finished("value", 1, last.is_reduced());
    transformer.finish(last)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::TransduceError;
  use crate::reducers::{LastReducer, VecReducer};
  use crate::transformers::{FilterTransformer, TakeTransformer};

  #[test]
  fn test_value_single_element() {
    assert_eq!(ValueSource::new(7).drive(VecReducer).unwrap(), vec![7]);
  }

  #[test]
  fn test_value_filtered_out() {
    let err = ValueSource::new(7)
      .drive(FilterTransformer::new(|x: &i32| *x > 10, LastReducer))
      .unwrap_err();
    assert_eq!(err, TransduceError::EmptyResult { reducer: "last" });
  }

  #[test]
  fn test_value_take_zero() {
    let result = ValueSource::new("a")
      .drive(TakeTransformer::new(0, VecReducer))
      .unwrap();
    assert!(result.is_empty());
  }
}
