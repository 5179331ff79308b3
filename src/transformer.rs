//! # Transformer Protocol
//!
//! This module defines the [`Transformer`] trait, the unit of composition in
//! transweave. A chain is a linear sequence of transformers: every stage owns
//! exactly one downstream transformer, and the last link (a reducer) owns none.
//!
//! ## Lifecycle
//!
//! A source drives a fully wired chain head `T` like this:
//!
//! 1. `acc = T.init()` once.
//! 2. `acc = T.step(acc, element)` once per element, until the source is
//!    exhausted or a step returns [`Step::Reduced`].
//! 3. `T.finish(acc)` once, producing the terminal value.
//!
//! Non-terminal stages pass `init` and `finish` through to their downstream and
//! only differ in `step`. Reducers define all three in terms of the value they
//! build.
//!
//! ## Example
//!
//! A custom reducer counting the elements it sees:
//!
//! ```rust
//! use transweave::{Pipeline, Result, Step, Transformer};
//!
//! struct Count;
//!
//! impl<T> Transformer<T> for Count {
//!   type Acc = usize;
//!   type Output = usize;
//!
//!   fn init(&mut self) -> usize {
//!     0
//!   }
//!
//!   fn step(&mut self, acc: usize, _value: T) -> Step<usize> {
//!     Step::Continue(acc + 1)
//!   }
//!
//!   fn finish(&mut self, acc: Step<usize>) -> Result<usize> {
//!     Ok(acc.into_inner())
//!   }
//! }
//!
//! let n = Pipeline::from_range(0, 10)
//!   .filter(|x| x % 3 == 0)
//!   .transduce(Count)
//!   .unwrap();
//! assert_eq!(n, 4);
//! ```

use crate::error::Result;
use crate::step::Step;

/// A stage of a transformation chain accepting elements of type `In`.
///
/// `Acc` is the accumulator threaded through `step`; it is owned by the
/// terminal reducer and every non-terminal stage simply reuses its
/// downstream's `Acc` and `Output`. Ownership of the accumulator moves into
/// each `step` call and back out in the returned [`Step`]; it is never aliased.
///
/// Implementations for custom reducers must return [`Step::Continue`] from
/// `step` unless they deliberately end the accumulation early.
pub trait Transformer<In> {
  /// The accumulator threaded through `step`.
  type Acc;
  /// The value produced by `finish`.
  type Output;

  /// Produces the seed accumulator.
  fn init(&mut self) -> Self::Acc;

  /// Feeds one element into the accumulator.
  fn step(&mut self, acc: Self::Acc, value: In) -> Step<Self::Acc>;

  /// Turns the final accumulator into the terminal value.
  ///
  /// `acc` is whatever the last `step` (or `init`, if there was no step)
  /// returned, including a `Reduced` signal.
  fn finish(&mut self, acc: Step<Self::Acc>) -> Result<Self::Output>;
}

impl<In, T> Transformer<In> for &mut T
where
  T: Transformer<In> + ?Sized,
{
  type Acc = T::Acc;
  type Output = T::Output;

  fn init(&mut self) -> Self::Acc {
    (**self).init()
  }

  fn step(&mut self, acc: Self::Acc, value: In) -> Step<Self::Acc> {
    (**self).step(acc, value)
  }

  fn finish(&mut self, acc: Step<Self::Acc>) -> Result<Self::Output> {
    (**self).finish(acc)
  }
}
