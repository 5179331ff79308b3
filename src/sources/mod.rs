//! # Sources Module
//!
//! Sources own the sequence being consumed and drive it through a fully wired
//! chain. Every driver runs the same loop; only the way elements are produced
//! differs:
//!
//! 1. `acc = chain.init()`
//! 2. pull the next element; stop if the source is exhausted
//! 3. `acc = chain.step(acc, element)`
//! 4. stop immediately if `acc` is [`Step::Reduced`](crate::Step::Reduced)
//! 5. return `chain.finish(acc)`
//!
//! ## Sources
//!
//! - **[`RangeSource`]**: the numbers in `[start, end)`
//! - **[`ArraySource`]**: the elements of a borrowed slice, cloned out in order
//! - **[`IterSource`]**: any pull-based [`Iterator`]
//! - **[`ValueSource`]**: exactly one element
//!
//! Range, array and value sources are plain descriptions: every `drive` starts a
//! fresh traversal. An [`IterSource`] built over `&mut iter` resumes the
//! underlying iterator wherever the previous run left it.
//!
//! ## Logging
//!
//! Drivers emit a `trace` event when they start and a `debug` event when they
//! stop, with the number of elements pulled and whether the chain
//! short-circuited. Nothing is logged per element.

use crate::error::Result;
use crate::transformer::Transformer;
use tracing::{debug, trace};

/// Driver over a borrowed slice.
pub mod array_source;
/// Driver over any pull-based iterator.
pub mod iter_source;
/// Driver over a half-open numeric range.
pub mod range_source;
/// Driver over exactly one element.
pub mod value_source;

pub use array_source::ArraySource;
pub use iter_source::IterSource;
pub use range_source::RangeSource;
pub use value_source::ValueSource;

/// A sequence that can drive a transformation chain to completion.
pub trait Source {
  /// The element type produced.
  type Item;

  /// Runs `transformer` over this source's elements and returns its result.
  fn drive<X>(self, transformer: X) -> Result<X::Output>
  where
    X: Transformer<Self::Item>;
}

pub(crate) fn drive_started(source: &'static str) {
  trace!(source, "driving chain");
}

pub(crate) fn drive_finished(source: &'static str, pulled: usize, reduced: bool) {
  debug!(source, pulled, reduced, "chain driven");
}
