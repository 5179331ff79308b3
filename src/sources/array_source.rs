use super::{Source, drive_finished, drive_started};
use crate::error::Result;
use crate::step::Step;
use crate::transformer::Transformer;

/// The elements of a borrowed slice, cloned out in index order.
#[derive(Debug, PartialEq, Eq)]
pub struct ArraySource<'a, T> {
  items: &'a [T],
}

impl<T> Clone for ArraySource<'_, T> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<T> Copy for ArraySource<'_, T> {}

impl<'a, T: Clone> ArraySource<'a, T> {
  /// Creates a new `ArraySource` over `items`.
  pub fn new(items: &'a [T]) -> Self {
    Self { items }
  }

  /// Number of elements the source holds.
  pub fn len(&self) -> usize {
    self.items.len()
  }

  /// Returns `true` if the source holds no elements.
  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }
}

impl<T: Clone> Source for ArraySource<'_, T> {
  type Item = T;

  fn drive<X>(self, mut transformer: X) -> Result<X::Output>
  where
    X: Transformer<T>,
  {
    drive_started("array");
    let mut index = 0;
    let mut acc = transformer.init();
    let last = loop {
      if index >= self.items.len() {
        break Step::Continue(acc);
      }
      let element = self.items[index].clone();
      index += 1;
      match transformer.step(acc, element) {
        Step::Continue(next) => acc = next,
        reduced @ Step::Reduced(_) => break reduced,
      }
    };
    drive_finished("array", index, last.is_reduced());
    transformer.finish(last)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::reducers::VecReducer;
  use crate::transformers::TakeTransformer;

  #[test]
  fn test_array_basic() {
    let words = vec!["x".to_string(), "y".to_string()];
    let result = ArraySource::new(&words).drive(VecReducer).unwrap();
    assert_eq!(result, words);
  }

  #[test]
  fn test_array_len() {
    let source = ArraySource::new(&[1, 2, 3]);
    assert_eq!(source.len(), 3);
    assert!(!source.is_empty());
    assert!(ArraySource::<u8>::new(&[]).is_empty());
  }

  #[test]
  fn test_array_stops_on_signal() {
    let source = ArraySource::new(&[1, 2, 3, 4]);
    let result = source.drive(TakeTransformer::new(2, VecReducer)).unwrap();
    assert_eq!(result, vec![1, 2]);
    // the source itself is untouched, a new run starts over
    let again = source.drive(TakeTransformer::new(3, VecReducer)).unwrap();
    assert_eq!(again, vec![1, 2, 3]);
  }
}
