use super::{Source, drive_finished, drive_started};
use crate::error::Result;
use crate::step::Step;
use crate::transformer::Transformer;
use std::iter::Fuse;

/// A pull-based external sequence.
///
/// The iterator is fused: once it reports exhaustion it is never polled again.
/// The source does not rewind anything. Passing `&mut iter` lets a later run
/// continue from where the previous one stopped:
///
/// ```rust
/// use transweave::reducers::VecReducer;
/// use transweave::sources::{IterSource, Source};
/// use transweave::transformers::TakeTransformer;
///
/// let mut numbers = 1..=5;
/// let head = IterSource::new(&mut numbers)
///   .drive(TakeTransformer::new(2, VecReducer))
///   .unwrap();
/// let tail = IterSource::new(&mut numbers).drive(VecReducer).unwrap();
/// assert_eq!(head, vec![1, 2]);
/// assert_eq!(tail, vec![3, 4, 5]);
/// ```
#[derive(Debug, Clone)]
pub struct IterSource<I> {
  iter: Fuse<I>,
}

impl<I: Iterator> IterSource<I> {
  /// Creates a new `IterSource` pulling from `iter`.
  pub fn new<T>(iter: T) -> Self
  where
    T: IntoIterator<IntoIter = I>,
  {
    Self {
      iter: iter.into_iter().fuse(),
    }
  }
}

impl<I: Iterator> Source for IterSource<I> {
  type Item = I::Item;

  fn drive<X>(mut self, mut transformer: X) -> Result<X::Output>
  where
    X: Transformer<I::Item>,
  {
    drive_started("iter");
    let mut pulled = 0;
    let mut acc = transformer.init();
    let last = loop {
      let Some(element) = self.iter.next() else {
        break Step::Continue(acc);
      };
      pulled += 1;
      match transformer.step(acc, element) {
        Step::Continue(next) => acc = next,
        reduced @ Step::Reduced(_) => break reduced,
      }
    };
    drive_finished("iter", pulled, last.is_reduced());
    transformer.finish(last)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::reducers::{SumReducer, VecReducer};
  use crate::transformers::TakeTransformer;

  /// Yields `0..limit`, then keeps counting calls made after exhaustion.
  struct Flaky {
    next: u32,
    limit: u32,
    calls_after_end: u32,
  }

  impl Iterator for Flaky {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
      if self.next < self.limit {
        self.next += 1;
        Some(self.next - 1)
      } else {
        self.calls_after_end += 1;
        // misbehaving iterators may resume after reporting the end
        (self.calls_after_end > 1).then_some(99)
      }
    }
  }

  #[test]
  fn test_iter_basic() {
    let result = IterSource::new(vec![3, 1, 2]).drive(VecReducer).unwrap();
    assert_eq!(result, vec![3, 1, 2]);
  }

  #[test]
  fn test_iter_unbounded_with_take() {
    let result = IterSource::new(0u64..)
      .drive(TakeTransformer::new(5, SumReducer))
      .unwrap();
    assert_eq!(result, 10);
  }

  #[test]
  fn test_iter_exhaustion_is_sticky() {
    let mut flaky = Flaky {
      next: 0,
      limit: 2,
      calls_after_end: 0,
    };
    let first = IterSource::new(&mut flaky).drive(VecReducer).unwrap();
    assert_eq!(first, vec![0, 1]);
    assert_eq!(flaky.calls_after_end, 1);
  }
}
