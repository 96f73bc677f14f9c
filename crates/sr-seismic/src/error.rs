//! Error types for the velocity pipeline.

use sr_core::SrError;
use sr_minerals::MineralError;
use thiserror::Error;

/// Errors raised while computing or scoring velocity profiles.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeismicError {
    #[error(transparent)]
    Core(#[from] SrError),

    #[error("Mineral error: {0}")]
    Mineral(#[from] MineralError),

    #[error("Phase {phase} ({mineral}) failed at evaluation point {index}: {source}")]
    PhaseEvaluation {
        phase: usize,
        mineral: String,
        index: usize,
        #[source]
        source: MineralError,
    },

    #[error("Averaging scheme {scheme} failed at evaluation point {index}: {source}")]
    Averaging {
        scheme: String,
        index: usize,
        #[source]
        source: SrError,
    },
}

pub type SeismicResult<T> = Result<T, SeismicError>;

impl SeismicError {
    /// Invalid physical input (DomainError).
    pub fn is_domain(&self) -> bool {
        match self {
            SeismicError::Core(e) => e.is_domain(),
            SeismicError::Mineral(e) => e.is_domain(),
            SeismicError::PhaseEvaluation { source, .. } => source.is_domain(),
            SeismicError::Averaging { source, .. } => source.is_domain(),
        }
    }

    /// Mismatched lengths or empty inputs (ShapeError).
    pub fn is_shape(&self) -> bool {
        match self {
            SeismicError::Core(e) => e.is_shape(),
            SeismicError::Mineral(e) => e.is_shape(),
            SeismicError::PhaseEvaluation { source, .. } => source.is_shape(),
            SeismicError::Averaging { source, .. } => source.is_shape(),
        }
    }
}
