/// Unified error type for dirsort
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirsortError {
    // Malformed entity listings
    #[error("Parse error: {0}")]
    Parse(String),

    // Configuration errors
    #[error("Unknown comparator: {0}")]
    UnknownComparator(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias using DirsortError
pub type Result<T> = std::result::Result<T, DirsortError>;

impl DirsortError {
    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create an unknown comparator error
    pub fn unknown_comparator(name: impl Into<String>) -> Self {
        Self::UnknownComparator(name.into())
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
