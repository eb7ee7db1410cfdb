//! Error types for the corpus model.

use thiserror::Error;

/// Errors raised while building or querying a [`Corpus`](crate::Corpus).
#[derive(Debug, Error)]
pub enum ModelError {
    /// Column not found in the corpus.
    #[error("column '{column}' not found in corpus")]
    ColumnNotFound { column: String },

    /// Row index past the end of the corpus.
    #[error("index {index} out of bounds for corpus with {len} samples")]
    RowOutOfBounds { index: usize, len: usize },

    /// Derived columns may never replace a loaded source column.
    #[error("refusing to overwrite source column '{column}'")]
    SourceColumnOverwrite { column: String },

    /// Derived column length does not match the corpus height.
    #[error("column '{column}' has {actual} rows, corpus has {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
}

/// Result type for corpus model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ModelError::RowOutOfBounds { index: 5, len: 2 };
        assert_eq!(
            err.to_string(),
            "index 5 out of bounds for corpus with 2 samples"
        );
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("text".into());
        let model_err: ModelError = polars_err.into();
        assert!(matches!(model_err, ModelError::Polars(_)));
    }
}
