//! Error types for the core library.

use thiserror::Error;

/// Errors that can occur in core operations.
///
/// The image view itself never fails; these cover parsing incoming
/// metadata and configuring the URL builder.
#[derive(Debug, Error)]
pub enum Error {
    /// Server base URL is empty or not http(s).
    #[error("Invalid server URL: {0}")]
    InvalidServerUrl(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
