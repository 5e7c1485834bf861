// ABOUTME: Core types, catalogs, and validation for Architect Prime
// ABOUTME: Foundational package holding the answer record consumed by every engine

pub mod catalogs;
pub mod constants;
pub mod error;
pub mod templates;
pub mod types;
pub mod utils;
pub mod validation;

// Re-export main types
pub use types::{
    AnswerRecord, AuthProvider, AuthType, BackgroundStyle, CatalogValue, DeploymentTarget,
    DifficultyLevel, LoadingPreference, MobileDesktop, MonetizationModel, ProductCategory,
    Scalability, TeamStructure,
};

pub use catalogs::CatalogOption;
pub use constants::TOTAL_SECTIONS;
pub use error::{CoreError, Result, ValidationError};
pub use templates::{apply_template, get_template, list_templates, Template};
pub use validation::{ensure_valid, validate_all, validate_section, FieldError, Section, SectionReport};
