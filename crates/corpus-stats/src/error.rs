//! Error types for statistics computation.

use corpus_model::ModelError;
use thiserror::Error;

/// Errors that can occur while computing corpus statistics.
#[derive(Debug, Error)]
pub enum StatsError {
    /// Corpus column access failed.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
}

/// Result type for statistics operations.
pub type Result<T> = std::result::Result<T, StatsError>;
