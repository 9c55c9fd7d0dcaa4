//! Writer errors

use std::io;

use thiserror::Error;

use crate::filters::FilterError;

/// Result type for export operations
pub type WriterResult<T> = Result<T, WriterError>;

/// Errors raised while exporting query results
#[derive(Debug, Error)]
pub enum WriterError {
    #[error("Failed to create {path}: {source}")]
    Create {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Unsupported output format '{0}': expected .csv or .json")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The query stream failed while being exported
    #[error(transparent)]
    Query(#[from] FilterError),
}
