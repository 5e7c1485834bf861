// ABOUTME: Risk assessment over answer combinations that commonly cause trouble
// ABOUTME: Seven independent scans append issues; the severity mix decides the overall level

use crate::types::Severity;
use architect_core::{
    AnswerRecord, AuthProvider, AuthType, MonetizationModel, ProductCategory, Scalability,
    TeamStructure,
};
use architect_core::utils::{char_len, contains_value};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Characters of external API notes beyond which integration scope is flagged
const EXTERNAL_APIS_LIMIT: usize = 2000;
const MVP_FEATURE_LIMIT: usize = 15;
const TESTING_STRATEGY_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskIssue {
    pub category: String,
    pub description: String,
    pub severity: Severity,
    pub mitigation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    /// Most severe first
    pub issues: Vec<RiskIssue>,
}

impl RiskAssessment {
    pub fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }
}

#[derive(Default)]
struct Issues(Vec<RiskIssue>);

impl Issues {
    fn add(&mut self, category: &str, description: &str, severity: Severity, mitigation: &str) {
        self.0.push(RiskIssue {
            category: category.to_string(),
            description: description.to_string(),
            severity,
            mitigation: Some(mitigation.to_string()),
        });
    }
}

pub fn assess_risks(record: &AnswerRecord) -> RiskAssessment {
    let mut issues = Issues::default();

    scan_category(record, &mut issues);
    scan_auth(record, &mut issues);
    scan_backend(record, &mut issues);
    scan_scalability(record, &mut issues);
    scan_security(record, &mut issues);
    scan_integrations(record, &mut issues);
    scan_timeline(record, &mut issues);

    let mut issues = issues.0;
    issues.sort_by_key(|issue| issue.severity);
    let level = overall_level(&issues);

    debug!(level = %level, issues = issues.len(), "Assessed project risks");

    RiskAssessment { level, issues }
}

/// High on three highs, or two highs with three mediums; medium on any high or two mediums
pub fn overall_level(issues: &[RiskIssue]) -> RiskLevel {
    let high = issues.iter().filter(|i| i.severity == Severity::High).count();
    let medium = issues.iter().filter(|i| i.severity == Severity::Medium).count();

    if high >= 3 || (high >= 2 && medium >= 3) {
        RiskLevel::High
    } else if high >= 1 || medium >= 2 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

fn lacks_monetization(record: &AnswerRecord) -> bool {
    matches!(
        record.monetization,
        MonetizationModel::Free | MonetizationModel::Unknown
    )
}

fn scan_category(record: &AnswerRecord, issues: &mut Issues) {
    match record.category {
        ProductCategory::Ecommerce => {
            if !record.has_payment_integration() {
                issues.add(
                    "Missing Integration",
                    "E-commerce without payment processing",
                    Severity::High,
                    "Add Stripe or PayPal integration",
                );
            }
            if !record.has_file_uploads() {
                issues.add(
                    "Missing Feature",
                    "E-commerce without product image uploads",
                    Severity::Medium,
                    "Add file upload functionality for products",
                );
            }
        }
        ProductCategory::WebAppSaas => {
            if lacks_monetization(record) {
                issues.add(
                    "Business Model",
                    "SaaS without monetization strategy",
                    Severity::Medium,
                    "Consider freemium or subscription model",
                );
            }
            if record.user_data_storage && !record.has_database() {
                issues.add(
                    "Architecture",
                    "User data storage without specified database",
                    Severity::High,
                    "Select a database solution",
                );
            }
        }
        ProductCategory::Marketplace => {
            if record.team_structure != TeamStructure::MultiUserShared {
                issues.add(
                    "Architecture",
                    "Marketplace typically requires multi-user support",
                    Severity::Medium,
                    "Enable multi-user with shared data",
                );
            }
            if !record.has_realtime_features() {
                issues.add(
                    "User Experience",
                    "Marketplace benefits from real-time updates",
                    Severity::Low,
                    "Consider adding live updates for listings",
                );
            }
        }
        _ => {}
    }
}

fn scan_auth(record: &AnswerRecord, issues: &mut Issues) {
    match record.auth_type {
        AuthType::EmailPassword if !record.requires_security("encryption") => {
            issues.add(
                "Security",
                "Email/password without encryption",
                Severity::High,
                "Add encryption for sensitive data",
            );
        }
        AuthType::Oauth if record.oauth_providers.is_empty() => {
            issues.add(
                "Configuration",
                "OAuth selected but no providers specified",
                Severity::Medium,
                "Select OAuth providers (Google, GitHub, etc.)",
            );
        }
        AuthType::MagicLink if record.auth_provider == AuthProvider::Unset => {
            issues.add(
                "Configuration",
                "Magic link without auth provider",
                Severity::High,
                "Select Supabase or other auth provider",
            );
        }
        _ => {}
    }
}

fn scan_backend(record: &AnswerRecord, issues: &mut Issues) {
    if record.user_data_storage && !record.has_database() {
        issues.add(
            "Architecture",
            "User data storage without database",
            Severity::High,
            "Select a database solution",
        );
    }

    if record.has_file_uploads() && record.storage_solution.is_empty() {
        issues.add(
            "Architecture",
            "File uploads without storage solution",
            Severity::High,
            "Select a storage service (S3, Cloudinary, etc.)",
        );
    }

    if record.has_realtime_features() && record.realtime_solution.is_empty() {
        issues.add(
            "Architecture",
            "Real-time features without solution",
            Severity::Medium,
            "Select Supabase Realtime, Pusher, etc.",
        );
    }

    if record.has_payment_integration() && record.monetization == MonetizationModel::Free {
        issues.add(
            "Business Logic",
            "Payment integration with free model",
            Severity::Low,
            "Review monetization strategy",
        );
    }
}

fn scan_scalability(record: &AnswerRecord, issues: &mut Issues) {
    if record.scalability == Scalability::Enterprise {
        if matches!(record.database_preference.as_str(), "firebase" | "mongodb") {
            issues.add(
                "Scalability",
                "NoSQL databases may not suit enterprise scale",
                Severity::Medium,
                "Consider PostgreSQL for complex relationships",
            );
        }
        if !record.requires_security("encryption") {
            issues.add(
                "Security",
                "Enterprise scale requires encryption",
                Severity::High,
                "Add encryption for data at rest and in transit",
            );
        }
    }

    if record.team_structure == TeamStructure::OrganizationHierarchy
        && record.scalability == Scalability::Mvp
    {
        issues.add(
            "Architecture",
            "Organization hierarchy may be complex for MVP",
            Severity::Low,
            "Consider simplifying team structure initially",
        );
    }
}

fn scan_security(record: &AnswerRecord, issues: &mut Issues) {
    if record.user_data_storage {
        if record.security_requirements.is_empty() {
            issues.add(
                "Security",
                "User data storage without security measures",
                Severity::High,
                "Add authentication, encryption, and access controls",
            );
        }
        if !record.requires_security("encryption") {
            issues.add(
                "Security",
                "User data without encryption",
                Severity::High,
                "Implement encryption for sensitive data",
            );
        }
        if record.auth_type.is_enabled() && !record.requires_security("auth") {
            issues.add(
                "Security",
                "Authentication without security best practices",
                Severity::Medium,
                "Implement OAuth 2.0 and proper session management",
            );
        }
    }

    if record.has_payment_integration() && !record.requires_security("encryption") {
        issues.add(
            "Security",
            "Payment processing without encryption",
            Severity::High,
            "Ensure PCI DSS compliance with payment provider",
        );
    }
}

fn scan_integrations(record: &AnswerRecord, issues: &mut Issues) {
    if char_len(&record.external_apis) > EXTERNAL_APIS_LIMIT {
        issues.add(
            "Complexity",
            "Many external APIs increase complexity",
            Severity::Medium,
            "Prioritize essential APIs, consider API aggregators",
        );
    }

    if record.has_calendar_integration() && record.has_payment_integration() {
        issues.add(
            "Complexity",
            "Multiple integrations increase development time",
            Severity::Low,
            "Phase integrations, prioritize core features",
        );
    }
}

fn scan_timeline(record: &AnswerRecord, issues: &mut Issues) {
    if record.feature_count() > MVP_FEATURE_LIMIT && record.scalability == Scalability::Mvp {
        issues.add(
            "Scope",
            "Many features for MVP",
            Severity::Medium,
            "Consider phased approach, prioritize core features",
        );
    }

    if record.testing_strategy.len() > TESTING_STRATEGY_LIMIT {
        issues.add(
            "Timeline",
            "Comprehensive testing increases development time",
            Severity::Low,
            "Focus on critical testing for MVP",
        );
    }

    if record.monetization == MonetizationModel::Subscription && record.pricing_tiers.is_empty() {
        issues.add(
            "Business Logic",
            "Subscription model without pricing tiers",
            Severity::Medium,
            "Define pricing structure and tiers",
        );
    }
}

/// Short remediation tips independent of the issue list
pub fn risk_mitigation_tips(record: &AnswerRecord) -> Vec<&'static str> {
    let mut tips = Vec::new();

    if record.user_data_storage && !record.requires_security("encryption") {
        tips.push("Implement end-to-end encryption for user data");
    }
    if record.category == ProductCategory::Ecommerce && !record.has_payment_integration() {
        tips.push("Integrate Stripe for secure payment processing");
    }
    if record.scalability == Scalability::Enterprise && record.database_preference == "firebase" {
        tips.push("Consider PostgreSQL or Supabase for enterprise-scale data");
    }
    if record.team_structure == TeamStructure::TeamWorkspaces
        && !contains_value(&record.realtime_features, "collaborative-editing")
    {
        tips.push("Add collaborative editing features for better team experience");
    }
    if record.category == ProductCategory::WebAppSaas && lacks_monetization(record) {
        tips.push("Define a monetization strategy (freemium, subscription, etc.)");
    }
    if record.auth_type == AuthType::None && record.user_data_storage {
        tips.push("Consider adding authentication for better security and user management");
    }
    if record.has_file_uploads() && record.storage_solution.is_empty() {
        tips.push("Choose a cloud storage provider (AWS S3, Cloudinary, Supabase Storage)");
    }

    tips
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn issue(severity: Severity) -> RiskIssue {
        RiskIssue {
            category: "Test".to_string(),
            description: "test".to_string(),
            severity,
            mitigation: None,
        }
    }

    fn descriptions(assessment: &RiskAssessment) -> Vec<&str> {
        assessment
            .issues
            .iter()
            .map(|i| i.description.as_str())
            .collect()
    }

    #[rstest]
    #[case(0, 0, RiskLevel::Low)]
    #[case(0, 1, RiskLevel::Low)]
    #[case(0, 2, RiskLevel::Medium)]
    #[case(1, 0, RiskLevel::Medium)]
    #[case(2, 2, RiskLevel::Medium)]
    #[case(2, 3, RiskLevel::High)]
    #[case(3, 0, RiskLevel::High)]
    fn test_overall_level(#[case] high: usize, #[case] medium: usize, #[case] expected: RiskLevel) {
        let mut issues = vec![issue(Severity::Low); 4];
        issues.extend(std::iter::repeat(issue(Severity::High)).take(high));
        issues.extend(std::iter::repeat(issue(Severity::Medium)).take(medium));

        assert_eq!(overall_level(&issues), expected);
    }

    #[test]
    fn test_clean_landing_page_has_no_issues() {
        let record = AnswerRecord {
            category: ProductCategory::LandingPage,
            auth_type: AuthType::None,
            monetization: MonetizationModel::Free,
            ..Default::default()
        };

        let assessment = assess_risks(&record);
        assert!(assessment.issues.is_empty());
        assert_eq!(assessment.level, RiskLevel::Low);
    }

    #[test]
    fn test_issues_sorted_with_stable_scan_order() {
        let record = AnswerRecord {
            category: ProductCategory::Marketplace,
            team_structure: TeamStructure::SingleUser,
            auth_type: AuthType::Oauth,
            monetization: MonetizationModel::Free,
            payment_integration: "stripe".to_string(),
            ..Default::default()
        };

        let assessment = assess_risks(&record);

        assert_eq!(
            descriptions(&assessment),
            vec![
                "Payment processing without encryption",
                "Marketplace typically requires multi-user support",
                "OAuth selected but no providers specified",
                "Marketplace benefits from real-time updates",
                "Payment integration with free model",
            ]
        );
        assert_eq!(assessment.level, RiskLevel::Medium);
    }

    #[test]
    fn test_magic_link_only_flagged_without_provider() {
        let without = AnswerRecord {
            auth_type: AuthType::MagicLink,
            auth_provider: AuthProvider::Unset,
            ..Default::default()
        };
        let with = AnswerRecord {
            auth_provider: AuthProvider::Supabase,
            ..without.clone()
        };

        assert!(descriptions(&assess_risks(&without)).contains(&"Magic link without auth provider"));
        assert!(!descriptions(&assess_risks(&with)).contains(&"Magic link without auth provider"));
    }

    #[test]
    fn test_feature_scope_counts_non_blank_lines() {
        let features = (1..=16).map(|n| format!("feature {}\n", n)).collect::<String>();
        let record = AnswerRecord {
            scalability: Scalability::Mvp,
            primary_features: features,
            ..Default::default()
        };

        assert!(descriptions(&assess_risks(&record)).contains(&"Many features for MVP"));
    }

    #[test]
    fn test_mitigation_tips() {
        let record = AnswerRecord {
            category: ProductCategory::WebAppSaas,
            monetization: MonetizationModel::Free,
            auth_type: AuthType::None,
            user_data_storage: true,
            file_uploads: vec!["avatars".to_string()],
            ..Default::default()
        };

        assert_eq!(
            risk_mitigation_tips(&record),
            vec![
                "Implement end-to-end encryption for user data",
                "Define a monetization strategy (freemium, subscription, etc.)",
                "Consider adding authentication for better security and user management",
                "Choose a cloud storage provider (AWS S3, Cloudinary, Supabase Storage)",
            ]
        );
    }
}
