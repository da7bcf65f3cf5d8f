//! Error types for the tree-seed optimizer.

use thiserror::Error;

/// Failure reported by a [`MutationOracle`](super::MutationOracle).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OracleError {
    /// The feature vector contained NaN or infinite values.
    #[error("malformed oracle features: {features:?}")]
    MalformedFeatures {
        /// The rejected feature vector.
        features: [f64; 2],
    },
    /// The oracle could not produce a score (e.g., a remote model is down).
    #[error("oracle unavailable: {0}")]
    Unavailable(String),
}

/// Errors returned by [`TreeSeedOptimizer`](super::TreeSeedOptimizer).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimizerError {
    /// Empty or malformed catalogs, or out-of-range configuration values.
    /// No optimizer is created.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// The best mapping was requested before any evaluation pass completed.
    #[error("optimizer has not completed an evaluation pass")]
    NotYetOptimized,
    /// The oracle failed while [`OracleFallback::Abort`](super::OracleFallback::Abort)
    /// was configured.
    #[error("mutation oracle unavailable")]
    OracleUnavailable(#[from] OracleError),
}
