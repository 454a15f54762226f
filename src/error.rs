//! Error types for tweet analysis.

use thiserror::Error;

/// Errors produced while loading or analyzing tweets.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// An argument violated a precondition (e.g. an empty tweet list passed to
    /// `get_timespan`, or a timespan whose start is after its end).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Reading a tweets file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A tweets file was not a valid JSON array of tweets.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
