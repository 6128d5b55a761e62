//! Error types for tagcloud-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while building a tag cloud.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CloudError {
    /// The input source produced no lines at all.
    #[error("non-valid file or empty file")]
    EmptyInput,

    /// A run parameter was rejected before processing started.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type alias using [`CloudError`].
pub type CloudResult<T> = Result<T, CloudError>;
