//! Errors raised while reading, writing, or checking the config file.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file (or its directory) could not be read or written.
    #[error("cannot access config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but is not a YAML document matching `Config`.
    #[error("config file '{}' is not valid: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// The in-memory config could not be turned into YAML.
    #[error("cannot serialize config: {0}")]
    Serialize(#[source] serde_yaml_ng::Error),

    /// A top-level setting has a value that parses but cannot be used.
    #[error("config setting `{field}` is invalid: {reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },

    /// An entry of the `filters` list cannot be used.
    #[error("filter #{index} '{label}' is invalid: {reason}")]
    InvalidFilter {
        index: usize,
        label: String,
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.into(),
            source,
        }
    }
}
