// ABOUTME: Error type for CLI commands
// ABOUTME: Wraps file, record, configuration, and strict validation failures

use crate::config::ConfigError;
use architect_core::CoreError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid answer record: {0}")]
    Record(#[from] CoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown catalog: {0}")]
    UnknownCatalog(String),

    #[error("Strict validation failed: {0} section(s) have invalid fields")]
    StrictValidation(usize),
}

pub type Result<T> = std::result::Result<T, CliError>;
