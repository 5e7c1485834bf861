// ABOUTME: CLI configuration read from environment variables
// ABOUTME: Parses log filter, output format, and strict validation with typed errors

use architect_config::{
    ARCHITECT_LOG, ARCHITECT_OUTPUT, ARCHITECT_STRICT_VALIDATION, DEFAULT_LOG_FILTER,
    DEFAULT_OUTPUT_FORMAT,
};
use std::env;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid output format: {0} (expected 'table' or 'json')")]
    InvalidOutputFormat(String),
    #[error("Invalid boolean for {var}: {value}")]
    InvalidBool { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidOutputFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub log_filter: String,
    pub output: OutputFormat,
    pub strict_validation: bool,
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable source; unset variables take their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_filter = lookup(ARCHITECT_LOG)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let output = lookup(ARCHITECT_OUTPUT)
            .unwrap_or_else(|| DEFAULT_OUTPUT_FORMAT.to_string())
            .parse::<OutputFormat>()?;

        let strict_validation = match lookup(ARCHITECT_STRICT_VALIDATION) {
            Some(value) => parse_bool(ARCHITECT_STRICT_VALIDATION, &value)?,
            None => false,
        };

        Ok(Config {
            log_filter,
            output,
            strict_validation,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            output: OutputFormat::Table,
            strict_validation: false,
        }
    }
}
