// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across Architect Prime

// Logging
pub const ARCHITECT_LOG: &str = "ARCHITECT_LOG";

// Output Configuration
pub const ARCHITECT_OUTPUT: &str = "ARCHITECT_OUTPUT";

// Validation
pub const ARCHITECT_STRICT_VALIDATION: &str = "ARCHITECT_STRICT_VALIDATION";

// Defaults
pub const DEFAULT_LOG_FILTER: &str = "warn";
pub const DEFAULT_OUTPUT_FORMAT: &str = "table";
