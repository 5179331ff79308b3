use crate::error::Result;
use crate::step::Step;
use crate::transformer::Transformer;
use std::collections::BTreeMap;

/// A reducer collecting `(key, value)` pairs into a `BTreeMap`.
///
/// A later pair overwrites an earlier one with the same key.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToMapReducer;

impl<K: Ord, V> Transformer<(K, V)> for ToMapReducer {
  type Acc = BTreeMap<K, V>;
  type Output = BTreeMap<K, V>;

  fn init(&mut self) -> Self::Acc {
    BTreeMap::new()
  }

  #[inline]
  fn step(&mut self, mut acc: Self::Acc, (key, value): (K, V)) -> Step<Self::Acc> {
    acc.insert(key, value);
    Step::Continue(acc)
  }

  fn finish(&mut self, acc: Step<Self::Acc>) -> Result<Self::Output> {
    Ok(acc.into_inner())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::sources::{ArraySource, Source};

  #[test]
  fn test_to_map_later_pairs_win() {
    let pairs = [("a", 1), ("b", 2), ("a", 3)];
    let map = ArraySource::new(&pairs).drive(ToMapReducer).unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map["a"], 3);
    assert_eq!(map["b"], 2);
  }
}
