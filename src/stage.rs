//! # Stage Descriptors and Chain Building
//!
//! A stage descriptor is the declared, not-yet-wired form of a transformer: the
//! function or count it was declared with, and nothing else. [`Stage::wrap`]
//! turns a descriptor into a live transformer around a given downstream.
//!
//! ## Declaration Order vs. Wiring Order
//!
//! Stages are declared left to right, in the order they should see each
//! element. The declared list is a type-level cons list:
//!
//! ```text
//! Then<Then<Then<Identity, Filter>, Map>, Take>     // filter, then map, then take
//! ```
//!
//! Wiring has to proceed the other way round, because a transformer can only
//! be built once its downstream exists. [`Then::wrap`] does the inversion: the
//! later stage wraps the downstream first, and the earlier stages wrap the
//! result.
//!
//! ```text
//! wrap(reducer) = Filter(Map(Take(reducer)))
//! ```
//!
//! so `step` calls enter at the first-declared stage and flow toward the
//! reducer.
//!
//! ## Fresh State per Build
//!
//! Descriptors carry counts, not counters. Every `wrap` creates new
//! [`TakeTransformer`]/[`DropTransformer`] counters and a new
//! [`DistinctTransformer`] seen-set, so building the same (cloned) descriptor
//! list twice yields two chains with independent state.

use crate::transformers::{
  DistinctTransformer, DropTransformer, FilterTransformer, FlattenTransformer, JuxtFn,
  JuxtTransformer, MapTransformer, NamedJuxtTransformer, ReduceTransformer, TakeTransformer,
};
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

/// A declared stage that can be wired in front of a downstream `D`.
pub trait Stage<D> {
  /// The transformer produced by wiring this stage in front of `D`.
  type Transformer;

  /// Builds the transformer, taking ownership of `downstream`.
  fn wrap(self, downstream: D) -> Self::Transformer;
}

/// The empty stage list. Wiring it returns the downstream unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl<D> Stage<D> for Identity {
  type Transformer = D;

  #[inline]
  fn wrap(self, downstream: D) -> D {
    downstream
  }
}

/// A stage list: everything declared so far, followed by one more stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct Then<Earlier, Later> {
  /// The stages declared before `later`.
  pub earlier: Earlier,
  /// The most recently declared stage.
  pub later: Later,
}

impl<Earlier, Later> Then<Earlier, Later> {
  /// Appends `later` after `earlier`.
  pub fn new(earlier: Earlier, later: Later) -> Self {
    Self { earlier, later }
  }
}

impl<D, Earlier, Later> Stage<D> for Then<Earlier, Later>
where
  Later: Stage<D>,
  Earlier: Stage<Later::Transformer>,
{
  type Transformer = Earlier::Transformer;

  #[inline]
  fn wrap(self, downstream: D) -> Self::Transformer {
    self.earlier.wrap(self.later.wrap(downstream))
  }
}

/// Declared `map(f)`.
#[derive(Clone, Copy)]
pub struct MapStage<F>(pub F);

impl<F> fmt::Debug for MapStage<F> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("MapStage")
  }
}

impl<F, D> Stage<D> for MapStage<F> {
  type Transformer = MapTransformer<F, D>;

  fn wrap(self, downstream: D) -> Self::Transformer {
    MapTransformer::new(self.0, downstream)
  }
}

/// Declared `filter(predicate)`.
#[derive(Clone, Copy)]
pub struct FilterStage<P>(pub P);

impl<P> fmt::Debug for FilterStage<P> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("FilterStage")
  }
}

impl<P, D> Stage<D> for FilterStage<P> {
  type Transformer = FilterTransformer<P, D>;

  fn wrap(self, downstream: D) -> Self::Transformer {
    FilterTransformer::new(self.0, downstream)
  }
}

/// Declared `take(n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TakeStage(pub usize);

impl<D> Stage<D> for TakeStage {
  type Transformer = TakeTransformer<D>;

  fn wrap(self, downstream: D) -> Self::Transformer {
    TakeTransformer::new(self.0, downstream)
  }
}

/// Declared `drop(n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropStage(pub usize);

impl<D> Stage<D> for DropStage {
  type Transformer = DropTransformer<D>;

  fn wrap(self, downstream: D) -> Self::Transformer {
    DropTransformer::new(self.0, downstream)
  }
}

/// Declared `flatten()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlattenStage;

impl<D> Stage<D> for FlattenStage {
  type Transformer = FlattenTransformer<D>;

  fn wrap(self, downstream: D) -> Self::Transformer {
    FlattenTransformer::new(downstream)
  }
}

/// Declared `juxt(fns)`.
pub struct JuxtStage<T, U>(pub Rc<[JuxtFn<T, U>]>);

impl<T, U> Clone for JuxtStage<T, U> {
  fn clone(&self) -> Self {
    Self(Rc::clone(&self.0))
  }
}

impl<T, U> fmt::Debug for JuxtStage<T, U> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("JuxtStage")
      .field("members", &self.0.len())
      .finish()
  }
}

impl<T, U, D> Stage<D> for JuxtStage<T, U> {
  type Transformer = JuxtTransformer<T, U, D>;

  fn wrap(self, downstream: D) -> Self::Transformer {
    JuxtTransformer::new(self.0, downstream)
  }
}

/// Declared `named_juxt(fns)`.
pub struct NamedJuxtStage<K, T, U>(pub Rc<BTreeMap<K, JuxtFn<T, U>>>);

impl<K, T, U> Clone for NamedJuxtStage<K, T, U> {
  fn clone(&self) -> Self {
    Self(Rc::clone(&self.0))
  }
}

impl<K: fmt::Debug, T, U> fmt::Debug for NamedJuxtStage<K, T, U> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("NamedJuxtStage")
      .field("keys", &self.0.keys().collect::<Vec<_>>())
      .finish()
  }
}

impl<K, T, U, D> Stage<D> for NamedJuxtStage<K, T, U> {
  type Transformer = NamedJuxtTransformer<K, T, U, D>;

  fn wrap(self, downstream: D) -> Self::Transformer {
    NamedJuxtTransformer::new(self.0, downstream)
  }
}

/// Declared `distinct()`.
pub struct DistinctStage<T>(PhantomData<fn(T)>);

impl<T> DistinctStage<T> {
  /// Declares a distinct stage over elements of type `T`.
  pub fn new() -> Self {
    Self(PhantomData)
  }
}

impl<T> Default for DistinctStage<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> Clone for DistinctStage<T> {
  fn clone(&self) -> Self {
    Self::new()
  }
}

impl<T> fmt::Debug for DistinctStage<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("DistinctStage")
  }
}

impl<T, D> Stage<D> for DistinctStage<T> {
  type Transformer = DistinctTransformer<T, D>;

  fn wrap(self, downstream: D) -> Self::Transformer {
    DistinctTransformer::new(downstream)
  }
}

/// Declared `reduce(f)`.
pub struct ReduceStage<F, T> {
  f: F,
  _phantom: PhantomData<fn(T) -> T>,
}

impl<F, T> ReduceStage<F, T> {
  /// Declares a running reduction with `f`.
  pub fn new(f: F) -> Self {
    Self {
      f,
      _phantom: PhantomData,
    }
  }
}

impl<F: Clone, T> Clone for ReduceStage<F, T> {
  fn clone(&self) -> Self {
    Self::new(self.f.clone())
  }
}

impl<F, T> fmt::Debug for ReduceStage<F, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("ReduceStage")
  }
}

impl<F, T, D> Stage<D> for ReduceStage<F, T> {
  type Transformer = ReduceTransformer<F, T, D>;

  fn wrap(self, downstream: D) -> Self::Transformer {
    ReduceTransformer::new(self.f, downstream)
  }
}
