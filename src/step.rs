//! # Step Results and the Reduced Signal
//!
//! Every call to [`Transformer::step`](crate::Transformer::step) returns a [`Step`]:
//! either the accumulator to keep going with, or the accumulator wrapped as
//! [`Step::Reduced`], which tells the driving source to stop pulling elements.
//!
//! A `Reduced` value is created by exactly one stage (`take`) and is then passed
//! back up through every enclosing stage untouched. It is unwrapped once, at
//! `finish` time.
//!
//! ```rust
//! use transweave::Step;
//!
//! let running: Step<i32> = Step::Continue(3);
//! let done: Step<i32> = Step::Reduced(3);
//!
//! assert!(!running.is_reduced());
//! assert!(done.is_reduced());
//! assert_eq!(done.into_inner(), 3);
//! ```

/// Outcome of a single step: continue with the accumulator, or stop with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub enum Step<A> {
  /// Accumulation may continue.
  Continue(A),
  /// Accumulation is complete; the driver must not pull another element.
  Reduced(A),
}

impl<A> Step<A> {
  /// Returns `true` if this is the short-circuit signal.
  #[inline]
  pub const fn is_reduced(&self) -> bool {
    matches!(self, Step::Reduced(_))
  }

  /// Extracts the accumulator regardless of variant.
  #[inline]
  pub fn into_inner(self) -> A {
    match self {
      Step::Continue(acc) | Step::Reduced(acc) => acc,
    }
  }

  /// Wraps the payload as `Reduced`, leaving an existing signal as it is.
  #[inline]
  pub fn into_reduced(self) -> Self {
    Step::Reduced(self.into_inner())
  }

  /// Borrows the accumulator regardless of variant.
  #[inline]
  pub const fn as_inner(&self) -> &A {
    match self {
      Step::Continue(acc) | Step::Reduced(acc) => acc,
    }
  }
}
