//! Flatten transformer for transweave.
//!
//! This module provides [`Nested`], a value that is either a single element or
//! an arbitrarily deep sequence of further [`Nested`] values, and
//! [`FlattenTransformer`], which forwards the leaves of a [`Nested`] value one
//! by one, depth first and in order.
//!
//! # Example
//!
//! ```rust
//! use transweave::Pipeline;
//! use transweave::transformers::Nested;
//!
//! let input = vec![
//!   Nested::many([Nested::item(1), Nested::item(2)]),
//!   Nested::many([Nested::many([Nested::many([Nested::item(3)])])]),
//!   Nested::many([Nested::item(4), Nested::many([Nested::item(5)])]),
//! ];
//! let flat = Pipeline::from_array(&input).flatten().to_vec().unwrap();
//! assert_eq!(flat, vec![1, 2, 3, 4, 5]);
//! ```

use crate::error::Result;
use crate::step::Step;
use crate::transformer::Transformer;

/// Either a leaf element or a sequence of nested values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nested<T> {
  /// A single element.
  Item(T),
  /// A sequence whose members may themselves be sequences.
  Many(Vec<Nested<T>>),
}

impl<T> Nested<T> {
  /// Creates a leaf.
  pub fn item(value: T) -> Self {
    Nested::Item(value)
  }

  /// Creates a sequence from its members.
  pub fn many<I>(members: I) -> Self
  where
    I: IntoIterator<Item = Nested<T>>,
  {
    Nested::Many(members.into_iter().collect())
  }
}

impl<T> From<Vec<Nested<T>>> for Nested<T> {
  fn from(members: Vec<Nested<T>>) -> Self {
    Nested::Many(members)
  }
}

/// A stage that recursively flattens [`Nested`] elements into their leaves.
#[derive(Debug, Clone)]
pub struct FlattenTransformer<D> {
  /// The downstream transformer.
  pub downstream: D,
}

impl<D> FlattenTransformer<D> {
  /// Creates a new `FlattenTransformer` in front of `downstream`.
  pub fn new(downstream: D) -> Self {
    Self { downstream }
  }
}

impl<T, D> Transformer<Nested<T>> for FlattenTransformer<D>
where
  D: Transformer<T>,
{
  type Acc = D::Acc;
  type Output = D::Output;

  #[inline]
  fn init(&mut self) -> Self::Acc {
    self.downstream.init()
  }

  fn step(&mut self, acc: Self::Acc, value: Nested<T>) -> Step<Self::Acc> {
    match value {
      Nested::Item(leaf) => self.downstream.step(acc, leaf),
      Nested::Many(members) => {
        let mut acc = acc;
        for member in members {
          match Transformer::<Nested<T>>::step(self, acc, member) {
            Step::Continue(next) => acc = next,
            reduced @ Step::Reduced(_) => return reduced,
          }
        }
        Step::Continue(acc)
      }
    }
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
  use crate::transformers::TakeTransformer;

  fn leaves(values: &[i32]) -> Nested<i32> {
    Nested::many(values.iter().copied().map(Nested::item))
  }

  #[test]
  fn test_flatten_scalars_pass_through() {
    let input = [Nested::item(1), Nested::item(2)];
    let result = ArraySource::new(&input)
      .drive(FlattenTransformer::new(VecReducer))
      .unwrap();
    assert_eq!(result, vec![1, 2]);
  }

  #[test]
  fn test_flatten_deep_nesting() {
    let input = [
      leaves(&[1, 2]),
      Nested::many([Nested::many([leaves(&[3])])]),
      Nested::many([Nested::item(4), leaves(&[5])]),
    ];
    let result = ArraySource::new(&input)
      .drive(FlattenTransformer::new(VecReducer))
      .unwrap();
    assert_eq!(result, vec![1, 2, 3, 4, 5]);
  }

  #[test]
  fn test_flatten_empty_sequences() {
    let input = [Nested::many([]), leaves(&[]), leaves(&[9])];
    let result = ArraySource::new(&input)
      .drive(FlattenTransformer::new(VecReducer))
      .unwrap();
    assert_eq!(result, vec![9]);
  }

  #[test]
  fn test_flatten_stops_mid_sequence_on_signal() {
    let input = [leaves(&[1, 2, 3, 4]), leaves(&[5, 6])];
    let chain = FlattenTransformer::new(TakeTransformer::new(3, VecReducer));
    let result = ArraySource::new(&input).drive(chain).unwrap();
    assert_eq!(result, vec![1, 2, 3]);
  }
}
