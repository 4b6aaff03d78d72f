use std::path::PathBuf;

use thiserror::Error;

/// Validation errors for screener domain values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("unknown field '{value}', expected one of: {expected}")]
    UnknownField { value: String, expected: String },

    #[error("invalid operator '{value}', expected one of >=, <=, >, <, =")]
    InvalidOperator { value: String },
}

/// Failures raised while loading the stock dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to open dataset '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset has no header row")]
    MissingHeader,
}
