// ABOUTME: Architect Prime engine library - inference, estimation, risk, and SEO scoring
// ABOUTME: Pure, synchronous functions over an answer record; no engine call can fail

pub mod analysis;
pub mod complexity;
pub mod cost_estimator;
pub mod inference;
pub mod policy;
pub mod risk_assessment;
pub mod seo_analyzer;
pub mod suggestions;
pub mod time_estimator;
pub mod types;

pub use analysis::{analyze, ProjectAnalysis};
pub use complexity::{estimate_complexity, recommended_team_size};
pub use cost_estimator::{cost_breakdown_items, cost_tier, estimate_cost, CostBreakdown, CostEstimate, CostTier};
pub use inference::{infer, InferenceResult};
pub use risk_assessment::{assess_risks, risk_mitigation_tips, RiskAssessment, RiskIssue, RiskLevel};
pub use seo_analyzer::{score_seo, seo_checklist, seo_recommendations, seo_tips, SeoGrade, SeoIssue, SeoScore};
pub use suggestions::{autocomplete, suggest, Suggestion, MAX_SUGGESTIONS};
pub use time_estimator::{estimate_time, format_weeks, recommended_timeline, time_tier, TimeEstimate, TimeTier};
pub use types::Severity;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::analysis::{analyze, ProjectAnalysis};
    pub use crate::inference::{infer, InferenceResult};
    pub use crate::risk_assessment::{assess_risks, RiskAssessment};
    pub use crate::seo_analyzer::{score_seo, SeoScore};
    pub use crate::suggestions::{suggest, Suggestion};
    pub use crate::types::Severity;
    pub use architect_core::AnswerRecord;
}
