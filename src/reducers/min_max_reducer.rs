//! Minimum and maximum reducers.
//!
//! Both reducers are seeded with a sentinel that every real element beats:
//! [`MinReducer`] starts at [`Extremum::top`] and [`MaxReducer`] at
//! [`Extremum::bottom`]. An empty source therefore yields the sentinel itself,
//! which is a documented result rather than an error.
//!
//! For floats the sentinels are positive and negative infinity. Integer types
//! have no infinity, so their `MAX` and `MIN` stand in for it.
//!
//! A NaN element poisons the result: once one is seen, both reducers return
//! NaN no matter what follows.
//!
//! ```rust
//! use transweave::Pipeline;
//!
//! assert_eq!(Pipeline::from_array(&[3.0, -1.5, 2.0]).min().unwrap(), -1.5);
//!
//! let empty: [f64; 0] = [];
//! assert_eq!(Pipeline::from_array(&empty).min().unwrap(), f64::INFINITY);
//! assert_eq!(Pipeline::from_array(&empty).max().unwrap(), f64::NEG_INFINITY);
//! ```

use crate::error::Result;
use crate::step::Step;
use crate::transformer::Transformer;

/// Ordered values with sentinels at both ends of their range.
pub trait Extremum: PartialOrd + Copy {
  /// A value no element compares greater than.
  fn top() -> Self;
  /// A value no element compares less than.
  fn bottom() -> Self;

  /// Returns `true` for values that are unordered with everything (NaN).
  fn is_nan(&self) -> bool {
    false
  }
}

macro_rules! impl_extremum_float {
  ($($t:ty),*) => {
    $(
      impl Extremum for $t {
        fn top() -> Self {
          <$t>::INFINITY
        }

        fn bottom() -> Self {
          <$t>::NEG_INFINITY
        }

        fn is_nan(&self) -> bool {
          <$t>::is_nan(*self)
        }
      }
    )*
  };
}

macro_rules! impl_extremum_int {
  ($($t:ty),*) => {
    $(
      impl Extremum for $t {
        fn top() -> Self {
          <$t>::MAX
        }

        fn bottom() -> Self {
          <$t>::MIN
        }
      }
    )*
  };
}

impl_extremum_float!(f32, f64);
impl_extremum_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// A reducer keeping the smallest element seen.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinReducer;

impl<T: Extremum> Transformer<T> for MinReducer {
  type Acc = T;
  type Output = T;

  fn init(&mut self) -> T {
    T::top()
  }

  #[inline]
  fn step(&mut self, acc: T, value: T) -> Step<T> {
    Step::Continue(if value.is_nan() || value < acc { value } else { acc })
  }

  fn finish(&mut self, acc: Step<T>) -> Result<T> {
    Ok(acc.into_inner())
  }
}

/// A reducer keeping the largest element seen.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxReducer;

impl<T: Extremum> Transformer<T> for MaxReducer {
  type Acc = T;
  type Output = T;

  fn init(&mut self) -> T {
    T::bottom()
  }

  #[inline]
  fn step(&mut self, acc: T, value: T) -> Step<T> {
    Step::Continue(if value.is_nan() || value > acc { value } else { acc })
  }

  fn finish(&mut self, acc: Step<T>) -> Result<T> {
    Ok(acc.into_inner())
  }
}
