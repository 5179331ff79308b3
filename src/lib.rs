//! # transweave
//!
//! Composable, allocation-free transformation chains in pure Rust.
//!
//! transweave lets you declare a chain of element-wise operations (map, filter,
//! take, drop, flatten, fan-out) once, and run it against any source (ranges,
//! slices, iterators) into any terminal accumulation (a `Vec`, a sum, a
//! min/max, a grouping), without building intermediate collections between
//! stages.
//!
//! ## Key Features
//!
//! - **Declaration order is execution order**: stages see each element in the
//!   order they were declared, even though the chain is wired back to front
//! - **Early termination**: a `take` stage stops the source as soon as its
//!   count is exhausted, so unbounded sources are fine
//! - **Static dispatch**: a wired chain is a nest of concrete generic structs
//! - **Decoupled**: the same stages work with every source and every reducer
//!
//! ## Quick Start
//!
//! ```rust
//! use transweave::Pipeline;
//!
//! let total = Pipeline::from_range(0u32, 11)
//!   .map(|n| 2u64.pow(n))
//!   .sum()?;
//! assert_eq!(total, 2047);
//!
//! let window = Pipeline::from_range(1, 5).drop(2)?.take(1)?.to_vec()?;
//! assert_eq!(window, vec![3]);
//! # Ok::<(), transweave::TransduceError>(())
//! ```
//!
//! ## Layers
//!
//! - [`Pipeline`] declares stages and runs them.
//! - [`stage`] holds the declared form of each stage and the chain wiring.
//! - [`transformers`] and [`reducers`] are the wired stages and terminals,
//!   all implementing [`Transformer`].
//! - [`sources`] drive a wired chain over a sequence.

// Documentation enforcement - treat missing docs as errors
#![deny(missing_docs)]

/// Error types and the crate `Result` alias.
pub mod error;
/// The fluent pipeline builder.
pub mod pipeline;
/// Terminal transformers producing the final result.
pub mod reducers;
/// Source drivers feeding elements into a chain.
pub mod sources;
/// Declared stages and reverse-order chain wiring.
pub mod stage;
/// The step result and its short-circuit signal.
pub mod step;
/// The transformer protocol trait.
pub mod transformer;
/// Built-in non-terminal stages.
pub mod transformers;

pub use error::{ComponentInfo, Result, TransduceError};
pub use pipeline::{Pipeline, PipelineConfig};
pub use sources::Source;
pub use step::Step;
pub use transformer::Transformer;
pub use transformers::Nested;
