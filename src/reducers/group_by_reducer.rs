use crate::error::Result;
use crate::step::Step;
use crate::transformer::Transformer;
use std::collections::BTreeMap;

/// A reducer grouping elements by a key function.
///
/// Each element is appended to the `Vec` stored under its key, creating the
/// `Vec` on the key's first occurrence. Within a group the arrival order is
/// kept; groups themselves are ordered by key.
///
/// ```rust
/// use transweave::Pipeline;
///
/// let groups = Pipeline::from_range(0, 7).group_by(|x| x % 3).unwrap();
/// assert_eq!(groups[&0], vec![0, 3, 6]);
/// assert_eq!(groups[&1], vec![1, 4]);
/// assert_eq!(groups[&2], vec![2, 5]);
/// ```
#[derive(Debug, Clone)]
pub struct GroupByReducer<F> {
  /// Extracts the grouping key from an element.
  pub key_fn: F,
}

impl<F> GroupByReducer<F> {
  /// Creates a new `GroupByReducer` using `key_fn` to compute keys.
  pub fn new(key_fn: F) -> Self {
    Self { key_fn }
  }
}

impl<T, K, F> Transformer<T> for GroupByReducer<F>
where
  F: FnMut(&T) -> K,
  K: Ord,
{
  type Acc = BTreeMap<K, Vec<T>>;
  type Output = BTreeMap<K, Vec<T>>;

  fn init(&mut self) -> Self::Acc {
    BTreeMap::new()
  }

  fn step(&mut self, mut acc: Self::Acc, value: T) -> Step<Self::Acc> {
    let key = (self.key_fn)(&value);
    acc.entry(key).or_default().push(value);
    Step::Continue(acc)
  }

  fn finish(&mut self, acc: Step<Self::Acc>) -> Result<Self::Output> {
    Ok(acc.into_inner())
  }
}
