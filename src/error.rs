//! Error types for wiregen

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// wiregen errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("Graph parse error: {0}")]
    GraphParse(String),

    /// A framework-internal invariant was violated by the input graph.
    /// Signals a bug in the upstream resolution stage, not a user error.
    #[error("Invariant violation: {0}")]
    Invariant(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_norway::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}
