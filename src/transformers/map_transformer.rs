//! Map transformer for transweave.
//!
//! This module provides [`MapTransformer`], a stage that applies a function to
//! each element and forwards the result downstream, creating a one-to-one
//! mapping between input and output elements.
//!
//! # Overview
//!
//! [`MapTransformer`] is the most basic stage. It holds no state besides the
//! function itself, so the same descriptor can be wired into any number of
//! chains.
//!
//! # Quick Start
//!
//! ```rust
//! use transweave::reducers::VecReducer;
//! use transweave::sources::{ArraySource, Source};
//! use transweave::transformers::MapTransformer;
//!
//! let chain = MapTransformer::new(|x: i32| x * 2, VecReducer);
//! let doubled = ArraySource::new(&[1, 2, 3]).drive(chain).unwrap();
//! assert_eq!(doubled, vec![2, 4, 6]);
//! ```
//!
//! # Behavior
//!
//! - `init` and `finish` are passed through to the downstream transformer.
//! - `step(acc, v)` is exactly `downstream.step(acc, f(v))`.
//! - A `Reduced` signal coming back from downstream is returned unchanged.

use crate::error::Result;
use crate::step::Step;
use crate::transformer::Transformer;

/// A stage that forwards `f(value)` for every value.
#[derive(Debug, Clone)]
pub struct MapTransformer<F, D> {
  /// The function applied to each element.
  pub f: F,
  /// The downstream transformer.
  pub downstream: D,
}

impl<F, D> MapTransformer<F, D> {
  /// Creates a new `MapTransformer` in front of `downstream`.
  ///
  /// # Arguments
  ///
  /// * `f` - The function applied to each element.
  /// * `downstream` - The transformer receiving the mapped elements.
  pub fn new(f: F, downstream: D) -> Self {
    Self { f, downstream }
  }
}

impl<In, Out, F, D> Transformer<In> for MapTransformer<F, D>
where
  F: FnMut(In) -> Out,
  D: Transformer<Out>,
{
  type Acc = D::Acc;
  type Output = D::Output;

  #[inline]
  fn init(&mut self) -> Self::Acc {
    self.downstream.init()
  }

  #[inline]
  fn step(&mut self, acc: Self::Acc, value: In) -> Step<Self::Acc> {
    self.downstream.step(acc, (self.f)(value))
  }

  #[inline]
  fn finish(&mut self, acc: Step<Self::Acc>) -> Result<Self::Output> {
    self.downstream.finish(acc)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::reducers::{SumReducer, VecReducer};
  use crate::sources::{ArraySource, RangeSource, Source};

  #[test]
  fn test_map_basic() {
    let chain = MapTransformer::new(|x: i32| x + 1, VecReducer);
    let result = ArraySource::new(&[1, 2]).drive(chain).unwrap();
    assert_eq!(result, vec![2, 3]);
  }

  #[test]
  fn test_map_empty_input() {
    let chain = MapTransformer::new(|x: i32| x + 1, VecReducer);
    let result = ArraySource::<i32>::new(&[]).drive(chain).unwrap();
    assert_eq!(result, Vec::<i32>::new());
  }

  #[test]
  fn test_map_changes_type() {
    let chain = MapTransformer::new(|x: i32| x.to_string(), VecReducer);
    let result = ArraySource::new(&[7, 8]).drive(chain).unwrap();
    assert_eq!(result, vec!["7".to_string(), "8".to_string()]);
  }

  #[test]
  fn test_map_powers_of_two_sum() {
    let chain = MapTransformer::new(|n: u32| 2u64.pow(n), SumReducer);
    let result = RangeSource::new(0u32, 11).drive(chain).unwrap();
    assert_eq!(result, 2047);
  }

  #[test]
  fn test_map_nested() {
    let inner = MapTransformer::new(|x: i32| x * 10, VecReducer);
    let chain = MapTransformer::new(|x: i32| x - 1, inner);
    let result = ArraySource::new(&[1, 2, 3]).drive(chain).unwrap();
    assert_eq!(result, vec![0, 10, 20]);
  }
}
