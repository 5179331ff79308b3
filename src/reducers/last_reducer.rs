//! Single-value reducers.
//!
//! Both reducers keep only the most recent element. They differ in what happens
//! when no element ever arrived: [`LastReducer`] fails with
//! [`TransduceError::EmptyResult`], [`LastOrReducer`] returns the default it was
//! built with.

use crate::error::{Result, TransduceError};
use crate::step::Step;
use crate::transformer::Transformer;

/// A reducer returning the last element, failing when there was none.
#[derive(Debug, Clone, Copy, Default)]
pub struct LastReducer;

impl<T> Transformer<T> for LastReducer {
  type Acc = Option<T>;
  type Output = T;

  fn init(&mut self) -> Option<T> {
    None
  }

  #[inline]
  fn step(&mut self, _acc: Option<T>, value: T) -> Step<Option<T>> {
    Step::Continue(Some(value))
  }

  fn finish(&mut self, acc: Step<Option<T>>) -> Result<T> {
    acc
      .into_inner()
      .ok_or(TransduceError::EmptyResult { reducer: "last" })
  }
}

/// A reducer returning the last element, or a default when there was none.
#[derive(Debug, Clone)]
pub struct LastOrReducer<T> {
  /// Returned by `finish` when no element arrived.
  pub default: T,
}

impl<T> LastOrReducer<T> {
  /// Creates a new `LastOrReducer` falling back to `default`.
  pub fn new(default: T) -> Self {
    Self { default }
  }
}

impl<T: Clone> Transformer<T> for LastOrReducer<T> {
  type Acc = Option<T>;
  type Output = T;

  fn init(&mut self) -> Option<T> {
    None
  }

  #[inline]
  fn step(&mut self, _acc: Option<T>, value: T) -> Step<Option<T>> {
    Step::Continue(Some(value))
  }

  fn finish(&mut self, acc: Step<Option<T>>) -> Result<T> {
    Ok(acc.into_inner().unwrap_or_else(|| self.default.clone()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::sources::{ArraySource, Source};

  #[test]
  fn test_last_keeps_last_value() {
    assert_eq!(ArraySource::new(&[1, 2, 3]).drive(LastReducer).unwrap(), 3);
  }

  #[test]
  fn test_last_without_step_is_empty_result() {
    let err = ArraySource::<i32>::new(&[])
      .drive(LastReducer)
      .unwrap_err();
    assert_eq!(err, TransduceError::EmptyResult { reducer: "last" });
  }

  #[test]
  fn test_last_or_default() {
    let empty = ArraySource::<i32>::new(&[])
      .drive(LastOrReducer::new(-1))
      .unwrap();
    assert_eq!(empty, -1);

    let full = ArraySource::new(&[5, 6])
      .drive(LastOrReducer::new(-1))
      .unwrap();
    assert_eq!(full, 6);
  }
}
