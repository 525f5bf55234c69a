//! Errors from loading the host configuration.

use std::path::PathBuf;

use thiserror::Error;

use super::CounterError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine home directory")]
    NoHomeDirectory,

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("counter {index} in config is invalid: {source}")]
    Counter {
        index: usize,
        #[source]
        source: CounterError,
    },
}
