//! Distinct transformer for transweave.
//!
//! [`DistinctTransformer`] forwards an element only the first time an equal
//! element is seen. The seen-set lives in the transformer, so each build of a
//! chain starts with an empty set.

use crate::error::Result;
use crate::step::Step;
use crate::transformer::Transformer;
use std::collections::HashSet;
use std::hash::Hash;

/// A stage that drops elements equal to one already forwarded.
#[derive(Debug, Clone)]
pub struct DistinctTransformer<T, D> {
  /// Elements forwarded so far.
  pub seen: HashSet<T>,
  /// The downstream transformer.
  pub downstream: D,
}

impl<T, D> DistinctTransformer<T, D> {
  /// Creates a new `DistinctTransformer` with an empty seen-set.
  pub fn new(downstream: D) -> Self {
    Self {
      seen: HashSet::new(),
      downstream,
    }
  }
}

impl<T, D> Transformer<T> for DistinctTransformer<T, D>
where
  T: Hash + Eq + Clone,
  D: Transformer<T>,
{
  type Acc = D::Acc;
  type Output = D::Output;

  #[inline]
  fn init(&mut self) -> Self::Acc {
    self.downstream.init()
  }

  fn step(&mut self, acc: Self::Acc, value: T) -> Step<Self::Acc> {
    if self.seen.contains(&value) {
      return Step::Continue(acc);
    }
    self.seen.insert(value.clone());
    self.downstream.step(acc, value)
  }

  #[inline]
  fn finish(&mut self, acc: Step<Self::Acc>) -> Result<Self::Output> {
    self.downstream.finish(acc)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::reducers::VecReducer;
  use crate::sources::{ArraySource, Source};

  fn distinct(input: &[i32]) -> Vec<i32> {
    ArraySource::new(input)
      .drive(DistinctTransformer::new(VecReducer))
      .unwrap()
  }

  #[test]
  fn test_distinct_one_item() {
    assert_eq!(distinct(&[1]), vec![1]);
  }

  #[test]
  fn test_distinct_two_equivalent_items() {
    assert_eq!(distinct(&[1, 1]), vec![1]);
  }

  #[test]
  fn test_distinct_two_distinct_items() {
    assert_eq!(distinct(&[1, 2]), vec![1, 2]);
  }

  #[test]
  fn test_distinct_non_consecutive_duplicates() {
    assert_eq!(distinct(&[1, 2, 1]), vec![1, 2]);
  }
}
