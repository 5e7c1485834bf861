// ABOUTME: Shared ordinal types for engine results
// ABOUTME: Severity is used both for risk issues and for SEO issue impact

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal classification of a detected issue.
///
/// Variants are declared most severe first, so the derived `Ord` sorts
/// `High` before `Medium` before `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
