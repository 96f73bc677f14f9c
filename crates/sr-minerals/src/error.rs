//! Mineral and rock errors.

use sr_core::SrError;
use thiserror::Error;

/// Result type for mineral operations.
pub type MineralResult<T> = Result<T, MineralError>;

/// Errors that can occur while building rocks or evaluating minerals.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MineralError {
    /// Non-physical values (non-positive volume, negative modulus, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Value out of the model's valid range.
    #[error("Value out of range for {what}")]
    OutOfRange { what: &'static str },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Unknown mineral name.
    #[error("Unknown mineral: {query}")]
    NotFound { query: String },

    /// Shared domain/shape error.
    #[error(transparent)]
    Core(#[from] SrError),
}

impl MineralError {
    /// Invalid physical input or EOS state.
    pub fn is_domain(&self) -> bool {
        match self {
            MineralError::NonPhysical { .. } | MineralError::OutOfRange { .. } => true,
            MineralError::Core(e) => e.is_domain(),
            _ => false,
        }
    }

    /// Mismatched or empty sequences.
    pub fn is_shape(&self) -> bool {
        matches!(self, MineralError::Core(e) if e.is_shape())
    }
}
