//! # Error Handling
//!
//! Errors produced while building or running a transformation chain.
//!
//! ## Overview
//!
//! There are exactly two failure conditions owned by the engine:
//!
//! - **InvalidArgument**: a stage was declared with an argument it cannot accept
//!   (a negative count for `take` or `drop`). Reported when the stage is declared,
//!   before any element is pulled.
//! - **EmptyResult**: a single-value reducer was asked for its result but never
//!   received an element.
//!
//! Early termination through [`Step::Reduced`](crate::step::Step::Reduced) is a normal
//! control path and never surfaces as an error. A panic inside a caller-supplied
//! closure is not caught; it unwinds out of the call that drove the chain.
//!
//! ## Example
//!
//! ```rust
//! use transweave::error::TransduceError;
//! use transweave::Pipeline;
//!
//! let err = Pipeline::from_range(0, 10).take(-1).unwrap_err();
//! assert_eq!(
//!   err,
//!   TransduceError::InvalidArgument { stage: "take", value: -1 }
//! );
//! ```

/// Error raised by stage construction or by a reducer's `finish`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransduceError {
  /// A stage count was negative.
  #[error("{stage}: n cannot be negative: {value}")]
  InvalidArgument {
    /// Name of the stage that rejected the argument.
    stage: &'static str,
    /// The rejected value.
    value: i64,
  },
  /// A single-value reducer finished without ever receiving an element.
  #[error("{reducer}: step() never called")]
  EmptyResult {
    /// Name of the reducer that had nothing to return.
    reducer: &'static str,
  },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TransduceError>;

/// Information about a pipeline component.
///
/// Identifies a component in log records by its configured name and its Rust
/// type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentInfo {
  /// The name of the component.
  pub name: String,
  /// The type name of the component.
  pub type_name: String,
}

impl Default for ComponentInfo {
  fn default() -> Self {
    Self {
      name: "default".to_string(),
      type_name: "default".to_string(),
    }
  }
}

impl ComponentInfo {
  /// Creates a new `ComponentInfo` with the given name and type name.
  ///
  /// # Arguments
  ///
  /// * `name` - The name of the component.
  /// * `type_name` - The type name of the component.
  pub fn new(name: String, type_name: String) -> Self {
    Self { name, type_name }
  }
}

/// Converts a signed count into a `usize`, rejecting negative values.
pub(crate) fn non_negative(stage: &'static str, value: i64) -> Result<usize> {
  usize::try_from(value).map_err(|_| TransduceError::InvalidArgument { stage, value })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_non_negative_accepts_zero_and_positive() {
    assert_eq!(non_negative("take", 0), Ok(0));
    assert_eq!(non_negative("take", 7), Ok(7));
  }

  #[test]
  fn test_non_negative_rejects_negative() {
    assert_eq!(
      non_negative("drop", -1),
      Err(TransduceError::InvalidArgument {
        stage: "drop",
        value: -1
      })
    );
  }

  #[test]
  fn test_error_messages() {
    let invalid = TransduceError::InvalidArgument {
      stage: "take",
      value: -3,
    };
    assert_eq!(invalid.to_string(), "take: n cannot be negative: -3");

    let empty = TransduceError::EmptyResult { reducer: "last" };
    assert_eq!(empty.to_string(), "last: step() never called");
  }

  #[test]
  fn test_component_info_default() {
    let info = ComponentInfo::default();
    assert_eq!(info.name, "default");
    assert_eq!(info.type_name, "default");
  }
}
