//! # Quote Host Errors
//!
//! ```text
//! ConfigurationError (tiership-core) ──┐
//! ConfigError (env overrides)        ──┼──► QuoteError ──► stderr, exit 1
//! io / serde_json                    ──┘
//! ```

use std::path::PathBuf;

use thiserror::Error;
use tiership_core::ConfigurationError;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum QuoteError {
    /// Settings file could not be read.
    #[error("Cannot read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid settings JSON.
    #[error("Invalid settings file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Quote could not be serialized for output.
    #[error("Cannot encode quote: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Environment(#[from] ConfigError),

    /// Settings were read but rejected.
    #[error("Shipping settings rejected: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type QuoteResult<T> = Result<T, QuoteError>;
