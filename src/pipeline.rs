//! # Pipeline Builder
//!
//! [`Pipeline`] is the fluent front end of transweave. It pairs a source with
//! the list of stages declared on it, then wires and drives the chain when a
//! terminal method is called.
//!
//! ## Overview
//!
//! A pipeline goes through three phases:
//!
//! 1. **Construction**: pick a source with one of the `from_*` constructors or
//!    [`Pipeline::new`].
//! 2. **Declaration**: append stages with [`map`](Pipeline::map),
//!    [`filter`](Pipeline::filter), [`take`](Pipeline::take),
//!    [`drop`](Pipeline::drop), [`flatten`](Pipeline::flatten),
//!    [`juxt`](Pipeline::juxt), [`named_juxt`](Pipeline::named_juxt),
//!    [`distinct`](Pipeline::distinct) and [`reduce`](Pipeline::reduce). Each
//!    call returns a new pipeline whose element type is the stage's output type.
//!    Nothing runs yet.
//! 3. **Execution**: a terminal method ([`to_vec`](Pipeline::to_vec),
//!    [`sum`](Pipeline::sum), [`transduce`](Pipeline::transduce), ...) wraps the
//!    declared stages around a reducer in reverse declaration order and drives
//!    the source through the result.
//!
//! ## Example
//!
//! ```rust
//! use transweave::Pipeline;
//!
//! let squares = Pipeline::from_range(0, 100)
//!   .filter(|x| x % 2 == 1)
//!   .map(|x| x * x)
//!   .take(3)?
//!   .to_vec()?;
//! assert_eq!(squares, vec![1, 9, 25]);
//! # Ok::<(), transweave::TransduceError>(())
//! ```
//!
//! ## Reuse
//!
//! Terminal methods consume the pipeline. Fresh transformers, counters
//! included, are built on every execution, so a pipeline whose stages are
//! `Clone` can be cloned and run again with independent state:
//!
//! ```rust
//! use transweave::Pipeline;
//!
//! let head = Pipeline::from_array(&[5, 6, 7, 8]).take(2)?;
//! assert_eq!(head.clone().to_vec()?, vec![5, 6]);
//! assert_eq!(head.sum()?, 11);
//! # Ok::<(), transweave::TransduceError>(())
//! ```
//!
//! ## Logging
//!
//! Every execution runs inside a `debug`-level `tracing` span named
//! `transduce`. The span carries the pipeline's [`ComponentInfo`]: the
//! configured name (`"pipeline"` when none is set) and the source type. The
//! source's start and stop events are recorded inside it.

use crate::error::{ComponentInfo, Result, non_negative};
use crate::reducers::{
  Extremum, FoldReducer, GroupByReducer, LastOrReducer, LastReducer, MaxReducer, MinReducer,
  SumReducer, ToMapReducer, VecReducer,
};
use crate::sources::{ArraySource, IterSource, RangeSource, Source, ValueSource};
use crate::stage::{
  DistinctStage, DropStage, FilterStage, FlattenStage, Identity, JuxtStage, MapStage,
  NamedJuxtStage, ReduceStage, Stage, TakeStage, Then,
};
use crate::transformer::Transformer;
use crate::transformers::{JuxtFn, Nested};
use num_traits::{Num, Zero};
use std::collections::BTreeMap;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use std::ops::Add;
use std::rc::Rc;
use tracing::debug_span;

/// Configuration for a pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineConfig {
  /// Optional name for identifying this pipeline in logs.
  pub name: Option<String>,
}

impl PipelineConfig {
  /// Sets the name for this pipeline configuration.
  ///
  /// # Arguments
  ///
  /// * `name` - The name to assign to the pipeline.
  pub fn with_name(mut self, name: impl Into<String>) -> Self {
    self.name = Some(name.into());
    self
  }

  /// Returns the current name, if set.
  pub fn name(&self) -> Option<String> {
    self.name.clone()
  }

  fn log_name(&self) -> &str {
    self.name.as_deref().unwrap_or("pipeline")
  }
}

/// A source together with the stages declared on it.
///
/// `S` is the source, `L` the declared stage list (see [`crate::stage`]) and
/// `T` the element type the last declared stage produces.
pub struct Pipeline<S, L, T> {
  source: S,
  stages: L,
  config: PipelineConfig,
  _element: PhantomData<fn() -> T>,
}

impl<S: Clone, L: Clone, T> Clone for Pipeline<S, L, T> {
  fn clone(&self) -> Self {
    Self {
      source: self.source.clone(),
      stages: self.stages.clone(),
      config: self.config.clone(),
      _element: PhantomData,
    }
  }
}

impl<S: fmt::Debug, L: fmt::Debug, T> fmt::Debug for Pipeline<S, L, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Pipeline")
      .field("source", &self.source)
      .field("stages", &self.stages)
      .field("config", &self.config)
      .finish()
  }
}

impl<S, T> Pipeline<S, Identity, T> {
  fn with_source(source: S) -> Self {
    Self {
      source,
      stages: Identity,
      config: PipelineConfig::default(),
      _element: PhantomData,
    }
  }
}

impl<S: Source> Pipeline<S, Identity, S::Item> {
  /// Creates a pipeline with no stages over an arbitrary source.
  pub fn new(source: S) -> Self {
    Self::with_source(source)
  }
}

impl<N> Pipeline<RangeSource<N>, Identity, N>
where
  N: Num + Copy + PartialOrd,
{
  /// Creates a pipeline over the numbers in `[start, end)`.
  pub fn from_range(start: N, end: N) -> Self {
    Self::with_source(RangeSource::new(start, end))
  }
}

impl<'a, T: Clone> Pipeline<ArraySource<'a, T>, Identity, T> {
  /// Creates a pipeline over the elements of `items`, in index order.
  pub fn from_array(items: &'a [T]) -> Self {
    Self::with_source(ArraySource::new(items))
  }
}

impl<I: Iterator> Pipeline<IterSource<I>, Identity, I::Item> {
  /// Creates a pipeline pulling from an external sequence.
  pub fn from_iterator<C>(iter: C) -> Self
  where
    C: IntoIterator<IntoIter = I>,
  {
    Self::with_source(IterSource::new(iter))
  }
}

impl<T> Pipeline<ValueSource<T>, Identity, T> {
  /// Creates a pipeline over exactly one element.
  pub fn from_value(value: T) -> Self {
    Self::with_source(ValueSource::new(value))
  }
}

impl<S, L, T> Pipeline<S, L, T> {
  fn then<X, U>(self, stage: X) -> Pipeline<S, Then<L, X>, U> {
    Pipeline {
      source: self.source,
      stages: Then::new(self.stages, stage),
      config: self.config,
      _element: PhantomData,
    }
  }

  /// Replaces the pipeline's configuration.
  #[must_use]
  pub fn with_config(mut self, config: PipelineConfig) -> Self {
    self.config = config;
    self
  }

  /// Sets the name used for this pipeline in logs.
  #[must_use]
  pub fn with_name(mut self, name: impl Into<String>) -> Self {
    self.config = self.config.with_name(name);
    self
  }

  /// Returns the pipeline's configuration.
  pub fn config(&self) -> &PipelineConfig {
    &self.config
  }

  /// Returns the name and source type of this pipeline.
  pub fn component_info(&self) -> ComponentInfo {
    ComponentInfo::new(
      self.config.log_name().to_string(),
      std::any::type_name::<S>().to_string(),
    )
  }

  /// Declares a stage forwarding `f(value)` for every value.
  pub fn map<U, F>(self, f: F) -> Pipeline<S, Then<L, MapStage<F>>, U>
  where
    F: FnMut(T) -> U,
  {
    self.then(MapStage(f))
  }

  /// Declares a stage forwarding only the values `predicate` accepts.
  pub fn filter<P>(self, predicate: P) -> Pipeline<S, Then<L, FilterStage<P>>, T>
  where
    P: FnMut(&T) -> bool,
  {
    self.then(FilterStage(predicate))
  }

  /// Declares a stage forwarding the first `n` values and then stopping the
  /// source.
  ///
  /// # Errors
  ///
  /// Returns [`TransduceError::InvalidArgument`](crate::TransduceError::InvalidArgument)
  /// if `n` is negative.
  pub fn take(self, n: i64) -> Result<Pipeline<S, Then<L, TakeStage>, T>> {
    let n = non_negative("take", n)?;
    Ok(self.then(TakeStage(n)))
  }

  /// Declares a stage discarding the first `n` values.
  ///
  /// # Errors
  ///
  /// Returns [`TransduceError::InvalidArgument`](crate::TransduceError::InvalidArgument)
  /// if `n` is negative.
  pub fn drop(self, n: i64) -> Result<Pipeline<S, Then<L, DropStage>, T>> {
    let n = non_negative("drop", n)?;
    Ok(self.then(DropStage(n)))
  }

  /// Declares a stage forwarding `[f(value) for f in fns]` for every value.
  pub fn juxt<U>(self, fns: Vec<JuxtFn<T, U>>) -> Pipeline<S, Then<L, JuxtStage<T, U>>, Vec<U>> {
    self.then(JuxtStage(Rc::from(fns)))
  }

  /// Declares a stage forwarding `{key: f(value)}` for every value.
  pub fn named_juxt<K, U>(
    self,
    fns: BTreeMap<K, JuxtFn<T, U>>,
  ) -> Pipeline<S, Then<L, NamedJuxtStage<K, T, U>>, BTreeMap<K, U>>
  where
    K: Ord + Clone,
  {
    self.then(NamedJuxtStage(Rc::new(fns)))
  }

  /// Declares a stage forwarding each value the first time it is seen.
  pub fn distinct(self) -> Pipeline<S, Then<L, DistinctStage<T>>, T>
  where
    T: Hash + Eq + Clone,
  {
    self.then(DistinctStage::new())
  }

  /// Declares a stage forwarding the running reduction of the values.
  pub fn reduce<F>(self, f: F) -> Pipeline<S, Then<L, ReduceStage<F, T>>, T>
  where
    F: FnMut(T, T) -> T,
    T: Clone,
  {
    self.then(ReduceStage::new(f))
  }
}

impl<S, L, U> Pipeline<S, L, Nested<U>> {
  /// Declares a stage forwarding the leaves of nested values, depth first.
  pub fn flatten(self) -> Pipeline<S, Then<L, FlattenStage>, U> {
    self.then(FlattenStage)
  }
}

impl<S, L, T> Pipeline<S, L, T>
where
  S: Source,
{
  /// Wires the declared stages in front of `reducer` without running them.
  ///
  /// The first declared stage becomes the head of the returned chain.
  pub fn build<R>(self, reducer: R) -> L::Transformer
  where
    L: Stage<R>,
  {
    self.stages.wrap(reducer)
  }

  /// Wires the declared stages in front of `reducer` and drives the source
  /// through the chain.
  ///
  /// # Errors
  ///
  /// Returns whatever error the reducer's `finish` reports.
  pub fn transduce<R>(self, reducer: R) -> Result<R::Output>
  where
    R: Transformer<T>,
    L: Stage<R>,
    L::Transformer: Transformer<S::Item, Output = R::Output>,
  {
    let info = self.component_info();
    let span = debug_span!(
      "transduce",
      pipeline = %info.name,
      source_type = %info.type_name
    );
    let _entered = span.enter();
    let chain = self.stages.wrap(reducer);
    self.source.drive(chain)
  }

  /// Collects the values into a `Vec`, in order.
  pub fn to_vec(self) -> Result<Vec<T>>
  where
    L: Stage<VecReducer>,
    L::Transformer: Transformer<S::Item, Output = Vec<T>>,
  {
    self.transduce(VecReducer)
  }

  /// Adds the values up, starting from zero.
  pub fn sum(self) -> Result<T>
  where
    T: Zero + Add<Output = T>,
    L: Stage<SumReducer>,
    L::Transformer: Transformer<S::Item, Output = T>,
  {
    self.transduce(SumReducer)
  }

  /// Returns the smallest value, or the type's top sentinel if there was none.
  pub fn min(self) -> Result<T>
  where
    T: Extremum,
    L: Stage<MinReducer>,
    L::Transformer: Transformer<S::Item, Output = T>,
  {
    self.transduce(MinReducer)
  }

  /// Returns the largest value, or the type's bottom sentinel if there was none.
  pub fn max(self) -> Result<T>
  where
    T: Extremum,
    L: Stage<MaxReducer>,
    L::Transformer: Transformer<S::Item, Output = T>,
  {
    self.transduce(MaxReducer)
  }

  /// Groups the values by `key_fn`.
  pub fn group_by<K, F>(self, key_fn: F) -> Result<BTreeMap<K, Vec<T>>>
  where
    F: FnMut(&T) -> K,
    K: Ord,
    L: Stage<GroupByReducer<F>>,
    L::Transformer: Transformer<S::Item, Output = BTreeMap<K, Vec<T>>>,
  {
    self.transduce(GroupByReducer::new(key_fn))
  }

  /// Returns the last value.
  ///
  /// # Errors
  ///
  /// Returns [`TransduceError::EmptyResult`](crate::TransduceError::EmptyResult)
  /// if no value reached the reducer.
  pub fn last(self) -> Result<T>
  where
    L: Stage<LastReducer>,
    L::Transformer: Transformer<S::Item, Output = T>,
  {
    self.transduce(LastReducer)
  }

  /// Returns the last value, or `default` if no value reached the reducer.
  pub fn last_or(self, default: T) -> Result<T>
  where
    T: Clone,
    L: Stage<LastOrReducer<T>>,
    L::Transformer: Transformer<S::Item, Output = T>,
  {
    self.transduce(LastOrReducer::new(default))
  }

  /// Folds the values into `seed` with `f`.
  pub fn fold<A, F>(self, seed: A, f: F) -> Result<A>
  where
    A: Clone,
    F: FnMut(A, T) -> A,
    L: Stage<FoldReducer<A, F>>,
    L::Transformer: Transformer<S::Item, Output = A>,
  {
    self.transduce(FoldReducer::new(seed, f))
  }
}

impl<S, L, K, V> Pipeline<S, L, (K, V)>
where
  S: Source,
  K: Ord,
{
  /// Collects `(key, value)` pairs into a map; later keys overwrite earlier ones.
  pub fn to_map(self) -> Result<BTreeMap<K, V>>
  where
    L: Stage<ToMapReducer>,
    L::Transformer: Transformer<S::Item, Output = BTreeMap<K, V>>,
  {
    self.transduce(ToMapReducer)
  }
}
