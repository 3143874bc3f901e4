//! Error types for Spotify Web API calls.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A convenient Result type alias for operations against the API.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by library operations.
///
/// Exactly one error is returned per failed call; nothing is retried or
/// swallowed inside the client. The variants keep a rejected request
/// (`Request`), a malformed success body (`Decode`), a failed exchange
/// (`Transport`) and caller-driven cancellation (`Cancelled`) distinguishable
/// by matching.
#[derive(Error, Debug)]
pub enum Error {
    /// The network exchange could not be completed.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The caller's cancellation token fired before the exchange completed.
    #[error("request cancelled")]
    Cancelled,

    /// The server rejected the request with a non-2xx status.
    #[error("spotify api error {status}: {message}")]
    Request { status: u16, message: String },

    /// A success response carried a body of an unexpected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// True when the error came from the caller's cancellation token.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }
}

/// Error body returned by the Spotify Web API on non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ApiError,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}
