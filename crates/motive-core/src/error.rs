//! Model Errors
//!
//! Invariant violations detected while building motives, desires, weights
//! and relation tables.

use thiserror::Error;

/// Errors raised when a caller tries to construct an invalid entity.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// `min` would end up above `max` on a motive
    #[error("motive '{motive}': min ({min}) may not exceed max ({max})")]
    MotiveBounds {
        motive: String,
        min: i32,
        max: i32,
    },

    /// Desire ideal point outside its own range
    #[error("desire ideal must lie within [min, max], got {min} <= {ideal} <= {max}")]
    DesireOutOfRange {
        min: i32,
        ideal: i32,
        max: i32,
    },

    /// Motive weights must be non-negative
    #[error("motive weight must be non-negative and finite, got {weight} for motive '{motive}'")]
    InvalidWeight {
        motive: String,
        weight: f64,
    },

    /// Relations may not involve blank labels
    #[error("relations may not involve blank labels: '{first}' vs '{second}'")]
    BlankRelationLabel {
        first: String,
        second: String,
    },
}
