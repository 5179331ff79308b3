//! Juxtapose transformers for transweave.
//!
//! Juxtaposition fans one element out to several functions and forwards all of
//! their results downstream as a single element:
//!
//! - [`JuxtTransformer`] collects the results positionally into a `Vec`:
//!   `juxt([cos, sin])(x) == [cos(x), sin(x)]`.
//! - [`NamedJuxtTransformer`] collects them into a `BTreeMap` keyed by the
//!   member's name: `named_juxt({c: cos, s: sin})(x) == {c: cos(x), s: sin(x)}`.
//!
//! These are the only built-in stages that allocate per element, one
//! collection for each forwarded result.
//!
//! A member that rejects its input does not remove its slot. Members built with
//! [`keep_if`] return `Some(value)` when the predicate accepts and a `None`
//! placeholder otherwise, so positions stay aligned across elements.

use crate::error::Result;
use crate::step::Step;
use crate::transformer::Transformer;
use std::collections::BTreeMap;
use std::rc::Rc;

/// A single member of a juxtaposition.
pub type JuxtFn<T, U> = Box<dyn Fn(&T) -> U>;

/// Builds a juxtaposition member that keeps `value` when `predicate` accepts
/// it and yields a `None` placeholder when it does not.
///
/// ```rust
/// use transweave::Pipeline;
/// use transweave::transformers::{JuxtFn, keep_if};
///
/// let members: Vec<JuxtFn<i32, Option<i32>>> = vec![
///   Box::new(|x: &i32| Some(x * 10)) as JuxtFn<i32, Option<i32>>,
///   keep_if(|x: &i32| x % 2 == 0),
/// ];
/// let rows = Pipeline::from_range(1, 4).juxt(members).to_vec().unwrap();
/// assert_eq!(
///   rows,
///   vec![
///     vec![Some(10), None],
///     vec![Some(20), Some(2)],
///     vec![Some(30), None],
///   ]
/// );
/// ```
pub fn keep_if<T, P>(predicate: P) -> JuxtFn<T, Option<T>>
where
  T: Clone + 'static,
  P: Fn(&T) -> bool + 'static,
{
  Box::new(move |value: &T| predicate(value).then(|| value.clone()))
}

/// A stage that forwards `[f(value) for f in fns]` for every value.
pub struct JuxtTransformer<T, U, D> {
  /// The members, applied in order.
  pub fns: Rc<[JuxtFn<T, U>]>,
  /// The downstream transformer.
  pub downstream: D,
}

impl<T, U, D> JuxtTransformer<T, U, D> {
  /// Creates a new `JuxtTransformer` in front of `downstream`.
  pub fn new(fns: Rc<[JuxtFn<T, U>]>, downstream: D) -> Self {
    Self { fns, downstream }
  }
}

impl<T, U, D> Transformer<T> for JuxtTransformer<T, U, D>
where
  D: Transformer<Vec<U>>,
{
  type Acc = D::Acc;
  type Output = D::Output;

  #[inline]
  fn init(&mut self) -> Self::Acc {
    self.downstream.init()
  }

  fn step(&mut self, acc: Self::Acc, value: T) -> Step<Self::Acc> {
    let values = self.fns.iter().map(|f| f(&value)).collect();
    self.downstream.step(acc, values)
  }

  #[inline]
  fn finish(&mut self, acc: Step<Self::Acc>) -> Result<Self::Output> {
    self.downstream.finish(acc)
  }
}

/// A stage that forwards `{k: f(value) for (k, f) in fns}` for every value.
///
/// Keys are visited in their `Ord` order, so the output is deterministic.
pub struct NamedJuxtTransformer<K, T, U, D> {
  /// The members, keyed by the name their result is stored under.
  pub fns: Rc<BTreeMap<K, JuxtFn<T, U>>>,
  /// The downstream transformer.
  pub downstream: D,
}

impl<K, T, U, D> NamedJuxtTransformer<K, T, U, D> {
  /// Creates a new `NamedJuxtTransformer` in front of `downstream`.
  pub fn new(fns: Rc<BTreeMap<K, JuxtFn<T, U>>>, downstream: D) -> Self {
    Self { fns, downstream }
  }
}

impl<K, T, U, D> Transformer<T> for NamedJuxtTransformer<K, T, U, D>
where
  K: Ord + Clone,
  D: Transformer<BTreeMap<K, U>>,
{
  type Acc = D::Acc;
  type Output = D::Output;

  #[inline]
  fn init(&mut self) -> Self::Acc {
    self.downstream.init()
  }

  fn step(&mut self, acc: Self::Acc, value: T) -> Step<Self::Acc> {
    let values = self
      .fns
      .iter()
      .map(|(key, f)| (key.clone(), f(&value)))
      .collect();
    self.downstream.step(acc, values)
  }

  #[inline]
  fn finish(&mut self, acc: Step<Self::Acc>) -> Result<Self::Output> {
    self.downstream.finish(acc)
  }
}
