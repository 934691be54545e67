//! Errors raised when a value does not have the shape an operation requires.

use std::fmt;

use crate::value::Value;

/// `Result` type alias for range errors.
pub type Result<T> = std::result::Result<T, Error>;

/// Shape (or other kind of value) that a coercion was trying to produce.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Expected {
    /// Number.
    Number,
    /// List of any length.
    Array,
    /// Empty range.
    EmptyRange,
    /// One-dimensional range.
    Range1D,
    /// Two-dimensional range.
    Range2D,
    /// Multi-dimensional range.
    MultiDimRange,
    /// Non-empty range.
    NonEmptyRange,
    /// Any range.
    Range,
    /// Shift amount: a number, or a list of numbers.
    Delta,
    /// Test point of a range: a number, or a list of numbers.
    Point,
}
impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number => write!(f, "number"),
            Self::Array => write!(f, "array"),
            Self::EmptyRange => write!(f, "empty range"),
            Self::Range1D => write!(f, "one-dimensional range"),
            Self::Range2D => write!(f, "two-dimensional range"),
            Self::MultiDimRange => write!(f, "multi-dimensional range"),
            Self::NonEmptyRange => write!(f, "non-empty range"),
            Self::Range => write!(f, "range"),
            Self::Delta => write!(f, "number or array of numbers"),
            Self::Point => write!(f, "number or array of numbers"),
        }
    }
}

/// Coarse classification of an [`Error`], used by operations that turn
/// validation failures into a fallback result.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Value has the wrong type or shape.
    Type,
    /// List has the wrong number of elements.
    Length,
    /// No handler of an alternative accepted the value.
    NoMatch,
}

/// Error produced when a value cannot be used as the input of an operation.
///
/// Offending values are stored in their rendered form so that errors stay
/// independent of the input they were produced from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Value cannot be converted to the expected shape.
    Type {
        /// Rendered offending value.
        value: String,
        /// Shape the value was expected to have.
        expected: Expected,
    },
    /// List does not have the required number of elements.
    Length {
        /// Rendered offending list.
        value: String,
        /// Required number of elements.
        expected: usize,
        /// Actual number of elements.
        actual: usize,
    },
    /// Every handler of an alternative rejected the value.
    NoMatchingAlternative {
        /// Rendered value that no handler accepted.
        value: String,
    },
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type { value, expected } => {
                write!(f, "Cannot convert value {} to {}", value, expected)?;
            }
            Self::Length {
                value,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Array {} should have length {} but has {}",
                    value, expected, actual,
                )?;
            }
            Self::NoMatchingAlternative { value } => {
                write!(f, "No matching function among the alternatives for {}", value)?;
            }
        }
        Ok(())
    }
}
impl std::error::Error for Error {}

impl Error {
    /// Returns a type error for a value that does not have the expected shape.
    pub fn type_error(value: &Value, expected: Expected) -> Self {
        Self::Type {
            value: value.to_string(),
            expected,
        }
    }
    /// Returns a length error for a list with the wrong number of elements.
    pub fn length_error(value: &Value, expected: usize, actual: usize) -> Self {
        Self::Length {
            value: value.to_string(),
            expected,
            actual,
        }
    }
    /// Returns an error for a value that no alternative accepted.
    pub fn no_matching_alternative(value: impl fmt::Display) -> Self {
        Self::NoMatchingAlternative {
            value: value.to_string(),
        }
    }

    /// Returns the kind of error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Type { .. } => ErrorKind::Type,
            Self::Length { .. } => ErrorKind::Length,
            Self::NoMatchingAlternative { .. } => ErrorKind::NoMatch,
        }
    }
}
