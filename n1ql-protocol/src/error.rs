use std::result;
use thiserror::Error as ThisError;

pub type Result<T> = result::Result<T, Error>;

/// Crate-wide error type, shared with the client layer. Most values are
/// produced while validating user input; `Json` covers the request body
/// serialization itself.
#[derive(Debug, ThisError)]
pub enum Error {
    /// General error
    #[error("General error: {0}")]
    General(String),
    /// Unrecognized scan consistency token.
    #[error("Unknown scan consistency: {0}")]
    UnknownConsistency(String),
    /// Request body serialization error.
    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),
    /// Malformed node address or connection string.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),
    /// Cluster configuration without any contact point.
    #[error("No contact points were given")]
    MissingContactPoints,
}

impl From<String> for Error {
    fn from(err: String) -> Error {
        Error::General(err)
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Error {
        Error::General(err.to_string())
    }
}
