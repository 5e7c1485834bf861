// ABOUTME: Architect Prime CLI library
// ABOUTME: Configuration, command implementations, and terminal rendering for the architect binary

pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use config::{Config, ConfigError, OutputFormat};
pub use error::{CliError, Result};

#[cfg(test)]
mod tests;
