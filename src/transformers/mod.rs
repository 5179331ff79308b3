//! # Transformers Module
//!
//! The non-terminal stages of a transformation chain. Every transformer here
//! owns exactly one downstream [`Transformer`](crate::Transformer), passes `init`
//! and `finish` through to it, and differs only in what it does in `step`.
//!
//! ## Overview
//!
//! - **[`MapTransformer`]**: forwards `f(value)`
//! - **[`FilterTransformer`]**: forwards values accepted by a predicate
//! - **[`TakeTransformer`]**: forwards the first `n` values, then signals completion
//! - **[`DropTransformer`]**: discards the first `n` values
//! - **[`FlattenTransformer`]**: forwards the leaves of [`Nested`] values
//! - **[`JuxtTransformer`]** / **[`NamedJuxtTransformer`]**: fan one value out
//!   to several functions and forward the collected results
//! - **[`DistinctTransformer`]**: forwards the first occurrence of each value
//! - **[`ReduceTransformer`]**: forwards the running reduction
//!
//! ## Short-Circuiting
//!
//! Only [`TakeTransformer`] creates a [`Step::Reduced`](crate::Step::Reduced)
//! signal. Every other stage returns a signal it receives from downstream
//! unchanged, so it reaches the driving source untouched.
//!
//! ## Example Usage
//!
//! Transformers are normally wired by a [`Pipeline`](crate::Pipeline), but they
//! can be nested by hand:
//!
//! ```rust
//! use transweave::reducers::VecReducer;
//! use transweave::sources::{RangeSource, Source};
//! use transweave::transformers::{DropTransformer, TakeTransformer};
//!
//! let chain = DropTransformer::new(2, TakeTransformer::new(1, VecReducer));
//! assert_eq!(RangeSource::new(1, 5).drive(chain).unwrap(), vec![3]);
//! ```

pub mod distinct_transformer;
pub mod drop_transformer;
pub mod filter_transformer;
pub mod flatten_transformer;
pub mod juxt_transformer;
pub mod map_transformer;
pub mod reduce_transformer;
pub mod take_transformer;

pub use distinct_transformer::DistinctTransformer;
pub use drop_transformer::DropTransformer;
pub use filter_transformer::FilterTransformer;
pub use flatten_transformer::{FlattenTransformer, Nested};
pub use juxt_transformer::{JuxtFn, JuxtTransformer, NamedJuxtTransformer, keep_if};
pub use map_transformer::MapTransformer;
pub use reduce_transformer::ReduceTransformer;
pub use take_transformer::TakeTransformer;
