//! Unified error types for the user directory.

use thiserror::Error;

/// Unified error type for process-level operations.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Users source error.
    #[error("client error: {0}")]
    Client(#[from] ClientError),

    /// HTTP request error.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while fetching users from the directory API.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("unexpected status {status} from {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// The body could not be decoded as a users response.
    #[error("failed to decode users response: {0}")]
    Decode(String),

    /// The body decoded but reported `success: false`.
    #[error("api rejected request: {0}")]
    Rejected(String),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;
