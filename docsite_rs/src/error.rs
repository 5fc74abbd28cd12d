//! Error types shared by the loader and the configuration layer.

use thiserror::Error;

/// Failure to fetch a single section fragment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response (offline, CORS, aborted).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("failed to load {path}: HTTP {status}")]
    Status {
        /// Requested path
        path: String,
        /// HTTP status code
        status: u16,
    },
    /// The response body could not be read as text.
    #[error("failed to read response body: {0}")]
    Body(String),
    /// The environment cannot fetch at all (no window, no fetch API).
    #[error("fetch unavailable: {0}")]
    Unavailable(String),
}

/// Failure of the aggregate load step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The section source refused to start the batch.
    #[error("section source unavailable: {0}")]
    SourceUnavailable(#[source] FetchError),
}

/// Invalid site configuration or section registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A registry entry has an empty key.
    #[error("section key must not be empty")]
    EmptyKey,
    /// Two registry entries share a key.
    #[error("duplicate section key: {0}")]
    DuplicateKey(String),
    /// A key cannot be used as an HTML id.
    #[error("section key is not a valid element id: {0:?}")]
    InvalidKey(String),
    /// A registry entry has an empty path.
    #[error("section {0} has an empty path")]
    EmptyPath(String),
    /// The configuration document could not be parsed.
    #[error("invalid site configuration: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
