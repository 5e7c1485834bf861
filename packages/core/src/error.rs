// ABOUTME: Error types for the core package
// ABOUTME: Covers record parsing, section validation, and template lookup failures

use crate::validation::{FieldError, Section};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Invalid section number: {0}")]
    InvalidSection(u8),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{section} section has {} invalid field(s): {}", .errors.len(), field_list(.errors))]
    Section {
        section: Section,
        errors: Vec<FieldError>,
    },
}

fn field_list(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.field)
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, CoreError>;
