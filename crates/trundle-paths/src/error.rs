//! Errors raised by the constrained search.

use std::fmt;
use trundle_core::Point;

/// Errors that can occur when setting up or running a route search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The run limits are not a valid pair (`min` negative or above `max`).
    InvalidRunLimits { min: i32, max: i32 },
    /// A search endpoint lies outside the searched range.
    OutOfBounds(Point),
    /// No route from start to target honors the run constraints.
    Unreachable,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRunLimits { min, max } => {
                write!(f, "invalid run limits: min {min}, max {max}")
            }
            Self::OutOfBounds(p) => write!(f, "search endpoint {p} out of bounds"),
            Self::Unreachable => write!(f, "target unreachable under the run constraints"),
        }
    }
}

impl std::error::Error for SearchError {}
