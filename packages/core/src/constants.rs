// ABOUTME: Shared constants for the questionnaire
// ABOUTME: Defaults and limits referenced by the record, validation, and templates

/// First colour preset ("Electric Violet")
pub const DEFAULT_PRIMARY_COLOR: &str = "#8B5CF6";

/// Number of questionnaire sections after the template picker
pub const TOTAL_SECTIONS: u8 = 9;

/// Maximum number of accent colours a brand may declare
pub const MAX_ACCENT_COLORS: usize = 3;
