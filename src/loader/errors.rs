//! Loader errors

use std::io;

use thiserror::Error;

/// Result type for dataset loading
pub type LoaderResult<T> = Result<T, LoaderError>;

/// Errors raised while reading the source datasets
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing field in close approach data: {0}")]
    MissingField(&'static str),

    #[error("Record {record}: invalid {field} value '{value}'")]
    InvalidValue {
        record: usize,
        field: &'static str,
        value: String,
    },
}

impl LoaderError {
    pub(crate) fn invalid(record: usize, field: &'static str, value: impl Into<String>) -> Self {
        LoaderError::InvalidValue {
            record,
            field,
            value: value.into(),
        }
    }
}
