//! Error types for transcript-harvest.

use std::io;
use thiserror::Error;

/// Result type alias for harvesting operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Hard failures. A non-200 response is not one of these; it is reported
/// through [`crate::fetch::FetchOutcome::Failed`] and handled softly.
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level failure while talking to the server.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The supplied URL could not be parsed.
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error reading or writing the CSV output.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error rendering output as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The job configuration is malformed.
    #[error("Configuration error: {0}")]
    Config(String),
}
