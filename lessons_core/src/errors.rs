//! # Error Types
//!
//! Structured error types for lessons_core. Mutators that can reject a value
//! return [`LessonResult`], and the error carries enough context (which axis,
//! what was attempted, what the limit is) to be handled programmatically.
//!
//! ## Example
//!
//! ```rust
//! use lessons_core::errors::LessonError;
//! use lessons_core::position::Axis;
//!
//! let err = LessonError::out_of_range(Axis::Y, 13.0, 8.0);
//! assert_eq!(err.to_string(), "y cannot be bigger than 8");
//! assert_eq!(err.error_code(), "OUT_OF_RANGE");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::position::Axis;

/// Result type alias for lessons_core operations
pub type LessonResult<T> = Result<T, LessonError>;

/// Structured error type for lesson operations.
///
/// The `Display` text is part of the observable contract and must not change.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum LessonError {
    /// A coordinate was set above its upper bound
    #[error("{axis} cannot be bigger than {bound}")]
    OutOfRange { axis: Axis, value: f64, bound: f64 },
}

impl LessonError {
    /// Create an OutOfRange error
    pub fn out_of_range(axis: Axis, value: f64, bound: f64) -> Self {
        LessonError::OutOfRange { axis, value, bound }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            LessonError::OutOfRange { .. } => "OUT_OF_RANGE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = LessonError::out_of_range(Axis::X, 11.0, 10.0);
        assert_eq!(err.to_string(), "x cannot be bigger than 10");

        let err = LessonError::out_of_range(Axis::Y, 9.5, 8.25);
        assert_eq!(err.to_string(), "y cannot be bigger than 8.25");
    }

    #[test]
    fn test_error_serialization() {
        let error = LessonError::out_of_range(Axis::Y, 13.0, 8.0);
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(
            json,
            r#"{"type":"OutOfRange","details":{"axis":"y","value":13.0,"bound":8.0}}"#
        );

        let roundtrip: LessonError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            LessonError::out_of_range(Axis::X, 1.0, 0.0).error_code(),
            "OUT_OF_RANGE"
        );
    }
}
