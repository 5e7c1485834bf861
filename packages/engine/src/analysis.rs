// ABOUTME: One-call analysis bundling every engine's output for a record
// ABOUTME: Used by report exporters and the CLI's analyze command

use crate::complexity::{estimate_complexity, team_size_for};
use crate::cost_estimator::{cost_breakdown_items, cost_tier, estimate_cost, CostEstimate, CostLineItem, CostTier};
use crate::inference::{infer, InferenceResult};
use crate::risk_assessment::{assess_risks, risk_mitigation_tips, RiskAssessment};
use crate::seo_analyzer::{
    score_seo, seo_checklist, seo_recommendations, seo_tips, ChecklistItem, SeoRecommendation, SeoScore,
};
use crate::time_estimator::{estimate_time, recommended_timeline, time_tier, Milestone, TimeEstimate, TimeTier};
use architect_core::{AnswerRecord, CatalogValue};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAnalysis {
    pub inference: InferenceResult,
    pub complexity: f64,
    pub team_size: &'static str,
    pub time: TimeEstimate,
    pub time_tier: TimeTier,
    pub timeline: Vec<Milestone>,
    pub cost: CostEstimate,
    pub cost_tier: CostTier,
    pub cost_items: Vec<CostLineItem>,
    pub risks: RiskAssessment,
    pub mitigation_tips: Vec<&'static str>,
    pub seo: SeoScore,
    pub seo_recommendations: Vec<SeoRecommendation>,
    pub seo_tips: Vec<&'static str>,
    pub seo_checklist: Vec<ChecklistItem>,
}

/// Run every engine once against `record`
pub fn analyze(record: &AnswerRecord) -> ProjectAnalysis {
    let complexity = estimate_complexity(record);
    let time = estimate_time(record);
    let cost = estimate_cost(record);

    let analysis = ProjectAnalysis {
        inference: infer(record),
        complexity,
        team_size: team_size_for(complexity),
        time_tier: time_tier(time.mvp_weeks),
        timeline: recommended_timeline(record),
        time,
        cost_tier: cost_tier(cost.monthly_total),
        cost_items: cost_breakdown_items(&cost.breakdown),
        cost,
        risks: assess_risks(record),
        mitigation_tips: risk_mitigation_tips(record),
        seo: score_seo(record),
        seo_recommendations: seo_recommendations(record),
        seo_tips: seo_tips(record),
        seo_checklist: seo_checklist(record),
    };

    info!(
        category = record.category.as_str(),
        complexity = analysis.complexity,
        mvp_weeks = analysis.time.mvp_weeks,
        monthly_cost = analysis.cost.monthly_total,
        risk = %analysis.risks.level,
        seo = analysis.seo.score,
        "Analyzed project"
    );

    analysis
}

#[cfg(test)]
mod tests {
    use super::*;
    use architect_core::{apply_template, ProductCategory};

    #[test]
    fn test_analysis_matches_individual_engines() {
        let record = apply_template(&AnswerRecord::default(), "ecommerce").unwrap();
        let analysis = analyze(&record);

        assert_eq!(analysis.inference, infer(&record));
        assert_eq!(analysis.time, estimate_time(&record));
        assert_eq!(analysis.cost, estimate_cost(&record));
        assert_eq!(analysis.risks, assess_risks(&record));
        assert_eq!(analysis.seo, score_seo(&record));
        assert_eq!(analysis.cost_tier, cost_tier(analysis.cost.monthly_total));
        assert_eq!(record.category, ProductCategory::Ecommerce);
    }

    #[test]
    fn test_analysis_serializes_to_camel_case() {
        let json = serde_json::to_value(analyze(&AnswerRecord::default())).unwrap();

        assert!(json.get("teamSize").is_some());
        assert!(json["cost"].get("monthlyTotal").is_some());
        assert!(json["time"].get("mvpWeeks").is_some());
    }
}
