//! Run-length limits for the movement constraint.

use crate::error::SearchError;

/// Validated run-length limits.
///
/// After turning, a traveler must continue straight for at least `min` cells
/// before turning again, and may continue for at most `max` cells before a
/// turn becomes mandatory. `min = 0` behaves like `min = 1`: a run always
/// covers at least one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RunLimits {
    min: i32,
    max: i32,
}

impl RunLimits {
    /// Create a new pair of limits.
    ///
    /// Fails with [`SearchError::InvalidRunLimits`] if `min` is negative or
    /// exceeds `max`.
    pub fn new(min: i32, max: i32) -> Result<Self, SearchError> {
        if min < 0 || min > max {
            return Err(SearchError::InvalidRunLimits { min, max });
        }
        Ok(Self { min, max })
    }

    /// Minimum run length.
    #[inline]
    pub fn min(self) -> i32 {
        self.min
    }

    /// Maximum run length.
    #[inline]
    pub fn max(self) -> i32 {
        self.max
    }
}

// Deserialization re-validates through `new` so invalid pairs cannot enter
// through serde.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for RunLimits {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            min: i32,
            max: i32,
        }
        let raw = Raw::deserialize(deserializer)?;
        RunLimits::new(raw.min, raw.max).map_err(serde::de::Error::custom)
    }
}
