//! Protocol error types.

use thiserror::Error;

/// Errors raised while building or compiling a query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Query options are inconsistent (e.g. random ordering mixed with field sorts).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Document type does not declare exactly one usable unique key.
    #[error("schema error: {0}")]
    Schema(String),
}
