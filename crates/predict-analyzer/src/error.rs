//! Analyzer error types

use std::path::PathBuf;

use accuracy_core::RecordError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("expected dataset")]
    MissingArgument,

    #[error("Cannot open dataset {}: {source}", .path.display())]
    Dataset {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Read error: {0}")]
    Record(#[from] RecordError),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
