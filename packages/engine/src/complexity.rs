// ABOUTME: Multiplicative complexity model for a planned project
// ABOUTME: Produces the weight applied per answer and recommends a team size from the product

use architect_core::{AnswerRecord, AuthType, ProductCategory, TeamStructure};
use serde::Serialize;
use tracing::debug;

/// One weight that contributed to the complexity product
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComplexityFactor {
    pub name: &'static str,
    pub weight: f64,
}

/// Factors in application order and their product
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplexityReport {
    pub factors: Vec<ComplexityFactor>,
    pub score: f64,
}

pub fn category_weight(category: ProductCategory) -> f64 {
    match category {
        ProductCategory::LandingPage => 0.5,
        ProductCategory::Portfolio => 0.6,
        ProductCategory::InternalTool => 0.8,
        ProductCategory::Dashboard => 1.0,
        ProductCategory::WebAppSaas => 1.2,
        ProductCategory::Ecommerce => 1.5,
        ProductCategory::BlogApp => 1.1,
        ProductCategory::Marketplace => 1.8,
        ProductCategory::Other | ProductCategory::Unknown => 1.0,
    }
}

pub fn auth_weight(auth_type: AuthType) -> f64 {
    match auth_type {
        AuthType::None => 0.7,
        AuthType::EmailPassword => 1.0,
        AuthType::MagicLink => 1.1,
        AuthType::Oauth => 1.2,
        AuthType::SocialLogin => 1.3,
        AuthType::Unknown => 1.0,
    }
}

pub fn team_weight(team_structure: TeamStructure) -> f64 {
    match team_structure {
        TeamStructure::SingleUser => 0.8,
        TeamStructure::MultiUserShared => 1.0,
        TeamStructure::TeamWorkspaces => 1.3,
        TeamStructure::OrganizationHierarchy => 1.5,
        TeamStructure::Unknown => 1.0,
    }
}

/// Every weight that applies to `record`, in the order they are multiplied
pub fn complexity_factors(record: &AnswerRecord) -> Vec<ComplexityFactor> {
    let mut factors = vec![
        ComplexityFactor {
            name: "category",
            weight: category_weight(record.category),
        },
        ComplexityFactor {
            name: "auth",
            weight: auth_weight(record.auth_type),
        },
        ComplexityFactor {
            name: "team",
            weight: team_weight(record.team_structure),
        },
    ];

    let mut add = |name: &'static str, applies: bool, weight: f64| {
        if applies {
            factors.push(ComplexityFactor { name, weight });
        }
    };

    add("user data storage", record.user_data_storage, 1.2);
    add("file uploads", record.has_file_uploads(), 1.15);
    add("real-time features", record.has_realtime_features(), 1.2);
    add("payments", record.has_payment_integration(), 1.3);
    add("email notifications", record.has_email_notifications(), 1.1);
    add("calendar", record.has_calendar_integration(), 1.15);
    add(
        "ui components",
        true,
        1.0 + record.key_ui_components.len() as f64 * 0.03,
    );
    add("animations", record.animation_preferences.len() > 2, 1.1);
    add("testing", !record.testing_strategy.is_empty(), 1.15);
    add("ci/cd", !record.cicd_requirements.is_empty(), 1.1);

    factors
}

pub fn analyze_complexity(record: &AnswerRecord) -> ComplexityReport {
    let factors = complexity_factors(record);
    // Fold from 1.0 in a fixed order so the float result is reproducible
    let score = factors.iter().fold(1.0, |acc, f| acc * f.weight);

    debug!(score, factors = factors.len(), "Estimated complexity");

    ComplexityReport { factors, score }
}

/// Positive complexity multiplier where 1.0 is a typical project
pub fn estimate_complexity(record: &AnswerRecord) -> f64 {
    analyze_complexity(record).score
}

pub fn team_size_for(complexity: f64) -> &'static str {
    if complexity < 0.8 {
        "1 developer (part-time)"
    } else if complexity < 1.2 {
        "1-2 developers"
    } else if complexity < 1.8 {
        "2-3 developers + 1 designer"
    } else {
        "3-5 developers + 1-2 designers + 1 PM"
    }
}

pub fn recommended_team_size(record: &AnswerRecord) -> &'static str {
    team_size_for(estimate_complexity(record))
}
