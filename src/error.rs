// ⚠️ Report Errors - two ways a query can refuse to answer
//
// A query that legitimately finds nothing returns `Option::None`.
// A query that was asked something impossible returns one of these.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    /// The caller asked for something the dataset cannot satisfy
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The dataset is in a state where the query has no answer
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Export to {} failed: {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed export line {line}: {reason}")]
    MalformedExport { line: usize, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dataset error: {0}")]
    Dataset(#[from] serde_json::Error),
}

impl ReportError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ReportError::InvalidArgument(_))
    }

    pub fn is_invalid_state(&self) -> bool {
        matches!(self, ReportError::InvalidState(_))
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
