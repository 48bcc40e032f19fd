//! Error types for generator construction and reporting
//!
//! Generation itself never fails: once a generator exists, every draw is a
//! total function over its state. Errors only surface at the edges
//! (seed input, configuration, statistics).

use thiserror::Error;

/// Errors produced by the factory, configuration and statistics layers
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RandomError {
    #[error("Invalid seed: {reason}")]
    InvalidSeed { reason: String },

    #[error("Unknown PRNG algorithm '{0}'")]
    UnknownAlgorithm(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Cannot compute statistics over zero samples")]
    EmptySample,
}

impl RandomError {
    pub(crate) fn invalid_seed(reason: impl Into<String>) -> Self {
        RandomError::InvalidSeed {
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for RandomError {
    fn from(err: serde_json::Error) -> Self {
        RandomError::Config(err.to_string())
    }
}
