//! Phase-change estimation errors.

use rb_core::CoreError;
use thiserror::Error;

/// Result type for phase-change estimation.
pub type PhaseResult<T> = Result<T, PhaseError>;

/// Both variants are validation failures reported straight back to the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhaseError {
    /// Pressure outside the interpolation domain.
    #[error("pressure {pressure:?} MPa is out of range; must be between {min:?} and {max:?} MPa")]
    Range { pressure: f64, min: f64, max: f64 },

    /// Pressure absent, unparsable or not finite.
    #[error("{message}")]
    InvalidInput { message: String },
}

impl From<CoreError> for PhaseError {
    fn from(err: CoreError) -> Self {
        PhaseError::InvalidInput {
            message: err.to_string(),
        }
    }
}
