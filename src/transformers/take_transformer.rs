//! Take transformer for transweave.
//!
//! This module provides [`TakeTransformer`], the only stage that creates a
//! [`Step::Reduced`] signal. It forwards the first `n` elements and then tells
//! the driving source to stop.
//!
//! # Behavior
//!
//! - While the counter is positive, an element is forwarded and the counter is
//!   decremented.
//! - The step that brings the counter to zero returns `Reduced` right away, so
//!   a `take(n)` chain reads at most `n` elements from its source, bounded or not.
//! - With a counter of zero (`take(0)`, or a chain driven again after it
//!   finished), the element is not forwarded and `Reduced` is returned.
//! - A signal produced further downstream is passed back up unchanged, never
//!   wrapped a second time.
//! - `finish` unwraps the signal once before handing the accumulator to the
//!   downstream `finish`.
//!
//! # Example
//!
//! ```rust
//! use transweave::reducers::VecReducer;
//! use transweave::sources::{IterSource, Source};
//! use transweave::transformers::TakeTransformer;
//!
//! // An unbounded source still terminates.
//! let first = IterSource::new(1u64..)
//!   .drive(TakeTransformer::new(3, VecReducer))
//!   .unwrap();
//! assert_eq!(first, vec![1, 2, 3]);
//! ```

use crate::error::Result;
use crate::step::Step;
use crate::transformer::Transformer;

/// A stage that forwards the first `n` elements, then signals completion.
#[derive(Debug, Clone)]
pub struct TakeTransformer<D> {
  /// How many more elements may be forwarded.
  pub remaining: usize,
  /// The downstream transformer.
  pub downstream: D,
}

impl<D> TakeTransformer<D> {
  /// Creates a new `TakeTransformer` allowing `n` elements through.
  pub fn new(n: usize, downstream: D) -> Self {
    Self {
      remaining: n,
      downstream,
    }
  }
}

impl<In, D> Transformer<In> for TakeTransformer<D>
where
  D: Transformer<In>,
{
  type Acc = D::Acc;
  type Output = D::Output;

  #[inline]
  fn init(&mut self) -> Self::Acc {
    self.downstream.init()
  }

  fn step(&mut self, acc: Self::Acc, value: In) -> Step<Self::Acc> {
    if self.remaining == 0 {
      return Step::Reduced(acc);
    }
    self.remaining -= 1;
    let next = self.downstream.step(acc, value);
    if self.remaining == 0 {
      next.into_reduced()
    } else {
      next
    }
  }

  fn finish(&mut self, acc: Step<Self::Acc>) -> Result<Self::Output> {
    self.downstream.finish(Step::Continue(acc.into_inner()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::reducers::VecReducer;
  use crate::sources::{ArraySource, RangeSource, Source};
  use crate::transformers::MapTransformer;
  use std::cell::Cell;

  #[test]
  fn test_take_one() {
    let result = ArraySource::new(&[1, 2, 3])
      .drive(TakeTransformer::new(1, VecReducer))
      .unwrap();
    assert_eq!(result, vec![1]);
  }

  #[test]
  fn test_take_two() {
    let result = ArraySource::new(&[1, 2, 3])
      .drive(TakeTransformer::new(2, VecReducer))
      .unwrap();
    assert_eq!(result, vec![1, 2]);
  }

  #[test]
  fn test_take_zero() {
    let result = ArraySource::new(&[1, 2, 3])
      .drive(TakeTransformer::new(0, VecReducer))
      .unwrap();
    assert!(result.is_empty());
  }

  #[test]
  fn test_take_more_than_available() {
    let result = ArraySource::new(&[1, 2, 3])
      .drive(TakeTransformer::new(4, VecReducer))
      .unwrap();
    assert_eq!(result, vec![1, 2, 3]);
  }

  #[test]
  fn test_take_from_empty_source() {
    let result = ArraySource::<i32>::new(&[])
      .drive(TakeTransformer::new(1, VecReducer))
      .unwrap();
    assert!(result.is_empty());
  }

  #[test]
  fn test_take_zero_never_reaches_downstream() {
    let calls = Cell::new(0);
    let counting = MapTransformer::new(
      |x: i32| {
        calls.set(calls.get() + 1);
        x
      },
      VecReducer,
    );
    let result = RangeSource::new(0i32, 100)
      .drive(TakeTransformer::new(0, counting))
      .unwrap();
    assert!(result.is_empty());
    assert_eq!(calls.get(), 0);
  }

  #[test]
  fn test_take_reads_at_most_n_elements() {
    let pulled = Cell::new(0);
    let source = (0..).inspect(|_| pulled.set(pulled.get() + 1));
    let result = crate::sources::IterSource::new(source)
      .drive(TakeTransformer::new(4, VecReducer))
      .unwrap();
    assert_eq!(result, vec![0, 1, 2, 3]);
    assert_eq!(pulled.get(), 4);
  }

  #[test]
  fn test_take_step_after_signal_is_ignored() {
    let mut take = TakeTransformer::new(1, VecReducer);
    let acc = Transformer::<i32>::init(&mut take);
    let acc = Transformer::<i32>::step(&mut take, acc, 10);
    assert_eq!(acc, Step::Reduced(vec![10]));

    let again = Transformer::<i32>::step(&mut take, acc.into_inner(), 11);
    assert_eq!(again, Step::Reduced(vec![10]));
    assert_eq!(
      Transformer::<i32>::finish(&mut take, again).unwrap(),
      vec![10]
    );
  }

  #[test]
  fn test_nested_take_signals_once() {
    let inner = TakeTransformer::new(2, VecReducer);
    let outer = TakeTransformer::new(5, inner);
    let result = RangeSource::new(0, 10).drive(outer).unwrap();
    assert_eq!(result, vec![0, 1]);
  }
}
