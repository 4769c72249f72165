//! Error taxonomy for geography, palette and composition calls.
//!
//! Every variant is a terminal failure of the single call that produced it.

use thiserror::Error;

/// Errors reported by map composition operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MapError {
    /// Date string is not `YYYY-MM-DD`.
    #[error("invalid date `{0}`, expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("aspect ratio {0} outside [0.5, 2]")]
    InvalidAspectRatio(f64),

    #[error("zoom {0} outside [0.5, 1]")]
    InvalidZoom(f64),

    #[error("count_colors {0} outside [2, 10]")]
    InvalidColorCount(usize),

    #[error("invalid color literal: {0}")]
    InvalidColor(String),

    /// `value_min` must be finite and strictly below `value_max`.
    #[error("invalid value range [{min}, {max}]")]
    InvalidRange { min: f64, max: f64 },

    /// Raised only under [`crate::OutOfRangePolicy::Error`].
    #[error("value {value} for `{name}` outside [{min}, {max}]")]
    ValueOutOfRange { name: String, value: f64, min: f64, max: f64 },

    #[error("no territory matches the selection: {0}")]
    EmptySelection(String),

    #[error("duplicate territory names: {}", .0.join(", "))]
    DuplicateNames(Vec<String>),

    #[error("length mismatch: {what} has {actual} entries, expected {expected}")]
    LengthMismatch { what: &'static str, expected: usize, actual: usize },

    #[error("unknown territory `{0}`")]
    UnknownTerritory(String),
}

impl MapError {
    /// True for the malformed-argument family (dates, ranges, colors).
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            MapError::InvalidDate(_)
                | MapError::InvalidAspectRatio(_)
                | MapError::InvalidZoom(_)
                | MapError::InvalidColorCount(_)
                | MapError::InvalidColor(_)
                | MapError::InvalidRange { .. }
                | MapError::ValueOutOfRange { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, MapError>;
