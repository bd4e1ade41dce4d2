//! Client error types.

use thiserror::Error;

/// Client errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Request could not be completed (network failure, timeout, HTTP status).
    #[error("transport error: {0}")]
    Transport(String),

    /// Response body could not be turned into documents.
    #[error("parse error: {0}")]
    Parse(String),

    /// Query options or document schema were rejected.
    #[error(transparent)]
    Proto(#[from] lucent_proto::Error),
}

impl Error {
    /// Check if this error came from the transport.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// Check if this error came from the response parser.
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse(_))
    }
}
