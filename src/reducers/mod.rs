//! # Reducers Module
//!
//! Terminal transformers: the last link of every chain. A reducer has no
//! downstream; it defines `init`, `step` and `finish` directly in terms of the
//! value it builds.
//!
//! ## Overview
//!
//! | Reducer | Seed | Step | Result |
//! |---|---|---|---|
//! | [`VecReducer`] | empty `Vec` | push | the `Vec` |
//! | [`SumReducer`] | zero | add | the total |
//! | [`MinReducer`] / [`MaxReducer`] | top / bottom sentinel | keep smaller / larger | the extremum |
//! | [`GroupByReducer`] | empty `BTreeMap` | push under key | the groups |
//! | [`ToMapReducer`] | empty `BTreeMap` | insert pair | the map |
//! | [`LastReducer`] | unset | replace | the value, or `EmptyResult` |
//! | [`LastOrReducer`] | unset | replace | the value, or the default |
//! | [`FoldReducer`] | caller's seed | caller's function | the accumulator |
//!
//! Every reducer unwraps a [`Step::Reduced`](crate::Step::Reduced) it is given
//! at `finish`, so custom early-terminating stages compose with all of them.

/// Reducer built from a caller seed and step function.
pub mod fold_reducer;
/// Grouping of elements by a key function.
pub mod group_by_reducer;
/// Single-value reducers keeping the last element.
pub mod last_reducer;
/// Smallest and largest element, with sentinels for empty input.
pub mod min_max_reducer;
/// Running total seeded with zero.
pub mod sum_reducer;
/// Key/value pairs collected into an ordered map.
pub mod to_map_reducer;
/// Elements collected into a `Vec`.
pub mod vec_reducer;

pub use fold_reducer::FoldReducer;
pub use group_by_reducer::GroupByReducer;
pub use last_reducer::{LastOrReducer, LastReducer};
pub use min_max_reducer::{Extremum, MaxReducer, MinReducer};
pub use sum_reducer::SumReducer;
pub use to_map_reducer::ToMapReducer;
pub use vec_reducer::VecReducer;
