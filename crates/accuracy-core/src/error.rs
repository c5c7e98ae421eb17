//! Record-level error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Malformed dataset line {line}: expected at least 7 fields, found {fields}")]
    Malformed { line: u64, fields: usize },

    #[error("Prediction stream outlived the dataset at prediction line {line}")]
    StreamLengthMismatch { line: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
