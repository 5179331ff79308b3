use super::{Source, drive_finished, drive_started};
use crate::error::Result;
use crate::step::Step;
use crate::transformer::Transformer;
use num_traits::Num;

/// The numbers `start, start + 1, ...` up to but excluding `end`.
///
/// An empty or inverted range (`start >= end`) produces nothing.
///
/// ```rust
/// use transweave::reducers::VecReducer;
/// use transweave::sources::{RangeSource, Source};
///
/// assert_eq!(RangeSource::new(10, 13).drive(VecReducer).unwrap(), vec![10, 11, 12]);
/// assert!(RangeSource::new(3, 1).drive(VecReducer).unwrap().is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSource<N> {
  start: N,
  end: N,
}

impl<N> RangeSource<N>
where
  N: Num + Copy + PartialOrd,
{
  /// Creates a new `RangeSource` over `[start, end)`.
  pub fn new(start: N, end: N) -> Self {
    Self { start, end }
  }
}

impl<N> Source for RangeSource<N>
where
  N: Num + Copy + PartialOrd,
{
  type Item = N;

  fn drive<X>(self, mut transformer: X) -> Result<X::Output>
  where
    X: Transformer<N>,
  {
    drive_started("range");
    let mut pulled = 0;
    let mut acc = transformer.init();
    let mut current = self.start;
    let last = loop {
      if current >= self.end {
        break Step::Continue(acc);
      }
      pulled += 1;
      match transformer.step(acc, current) {
        Step::Continue(next) => acc = next,
        reduced @ Step::Reduced(_) => break reduced,
      }
      current = current + N::one();
    };
    drive_finished("range", pulled, last.is_reduced());
    transformer.finish(last)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::reducers::VecReducer;

  #[test]
  fn test_range_basic() {
    let result = RangeSource::new(10, 13).drive(VecReducer).unwrap();
    assert_eq!(result, vec![10, 11, 12]);
  }

  #[test]
  fn test_range_empty_and_inverted() {
    assert!(RangeSource::new(4, 4).drive(VecReducer).unwrap().is_empty());
    assert!(RangeSource::new(4, 2).drive(VecReducer).unwrap().is_empty());
  }

  #[test]
  fn test_range_up_to_type_max_does_not_overflow() {
    let result = RangeSource::new(u8::MAX - 2, u8::MAX)
      .drive(VecReducer)
      .unwrap();
    assert_eq!(result, vec![253, 254]);
  }

  #[test]
  fn test_range_drives_fresh_each_time() {
    let range = RangeSource::new(0, 3);
    assert_eq!(range.drive(VecReducer).unwrap(), vec![0, 1, 2]);
    assert_eq!(range.drive(VecReducer).unwrap(), vec![0, 1, 2]);
  }

  #[test]
  fn test_range_floats() {
    let result = RangeSource::new(0.5, 3.0).drive(VecReducer).unwrap();
    assert_eq!(result, vec![0.5, 1.5, 2.5]);
  }
}
