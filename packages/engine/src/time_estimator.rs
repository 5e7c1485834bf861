// ABOUTME: Development time estimates derived from project complexity
// ABOUTME: Converts week counts to human-readable durations and recommends milestones

use crate::complexity::estimate_complexity;
use architect_core::AnswerRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

const BASE_MVP_WEEKS: f64 = 4.0;
const PRODUCTION_MULTIPLIER: f64 = 2.5;

const DESIGN_SHARE: f64 = 0.2;
const FRONTEND_SHARE: f64 = 0.35;
const BACKEND_SHARE: f64 = 0.3;
const TESTING_SHARE: f64 = 0.1;
const DEPLOYMENT_SHARE: f64 = 0.05;

/// Share of the MVP duration spent in each phase, in breakdown order
pub const PHASE_SHARES: [f64; 5] = [
    DESIGN_SHARE,
    FRONTEND_SHARE,
    BACKEND_SHARE,
    TESTING_SHARE,
    DEPLOYMENT_SHARE,
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBreakdown {
    pub design: String,
    pub frontend: String,
    pub backend: String,
    pub testing: String,
    pub deployment: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEstimate {
    pub mvp: String,
    pub production: String,
    pub mvp_weeks: u32,
    pub production_weeks: u32,
    /// MVP phases; the fractions sum to the whole MVP duration
    pub breakdown: TimeBreakdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeTier {
    QuickStart,
    Mvp,
    Beta,
    Production,
    Enterprise,
}

impl TimeTier {
    pub fn label(&self) -> &'static str {
        match self {
            TimeTier::QuickStart => "Quick Start",
            TimeTier::Mvp => "MVP",
            TimeTier::Beta => "Beta",
            TimeTier::Production => "Production",
            TimeTier::Enterprise => "Enterprise",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TimeTier::QuickStart => "Can be built in 1-2 weeks",
            TimeTier::Mvp => "Typical MVP timeline",
            TimeTier::Beta => "Good for beta release",
            TimeTier::Production => "Full production build",
            TimeTier::Enterprise => "Complex, long-term project",
        }
    }
}

impl fmt::Display for TimeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub milestone: &'static str,
    pub time: String,
}

fn plural(unit: &str, singular: bool) -> String {
    if singular {
        unit.to_string()
    } else {
        format!("{}s", unit)
    }
}

/// Render a week count in the coarsest unit that keeps the number at least 1.
///
/// Days are five per week and months four weeks. Weeks print with one decimal
/// and drop a trailing `.0`; years always print one decimal.
pub fn format_weeks(weeks: f64) -> String {
    if weeks < 1.0 {
        let days = (weeks * 5.0).round();
        format!("{} {}", days, plural("day", days == 1.0))
    } else if weeks < 4.0 {
        let rounded = (weeks * 10.0).round() / 10.0;
        let text = if rounded.fract() == 0.0 {
            format!("{}", rounded)
        } else {
            format!("{:.1}", rounded)
        };
        format!("{} {}", text, plural("week", rounded == 1.0))
    } else if weeks < 52.0 {
        let months = (weeks / 4.0).round();
        format!("{} {}", months, plural("month", months == 1.0))
    } else {
        let years = format!("{:.1}", weeks / 52.0);
        let singular = years == "1.0";
        format!("{} {}", years, plural("year", singular))
    }
}

pub fn mvp_weeks_for(complexity: f64) -> u32 {
    (BASE_MVP_WEEKS * complexity).round() as u32
}

pub fn production_weeks_for(mvp_weeks: u32) -> u32 {
    (mvp_weeks as f64 * PRODUCTION_MULTIPLIER).round() as u32
}

pub fn estimate_time(record: &AnswerRecord) -> TimeEstimate {
    let complexity = estimate_complexity(record);
    let mvp_weeks = mvp_weeks_for(complexity);
    let production_weeks = production_weeks_for(mvp_weeks);

    let mvp = mvp_weeks as f64;
    let estimate = TimeEstimate {
        mvp: format_weeks(mvp),
        production: format_weeks(production_weeks as f64),
        mvp_weeks,
        production_weeks,
        breakdown: TimeBreakdown {
            design: format_weeks(mvp * DESIGN_SHARE),
            frontend: format_weeks(mvp * FRONTEND_SHARE),
            backend: format_weeks(mvp * BACKEND_SHARE),
            testing: format_weeks(mvp * TESTING_SHARE),
            deployment: format_weeks(mvp * DEPLOYMENT_SHARE),
        },
    };

    debug!(
        complexity,
        mvp_weeks, production_weeks, "Estimated development time"
    );

    estimate
}

pub fn time_tier(weeks: u32) -> TimeTier {
    match weeks {
        0..=1 => TimeTier::QuickStart,
        2..=5 => TimeTier::Mvp,
        6..=11 => TimeTier::Beta,
        12..=25 => TimeTier::Production,
        _ => TimeTier::Enterprise,
    }
}

/// Four milestones spanning the MVP and the production build
pub fn recommended_timeline(record: &AnswerRecord) -> Vec<Milestone> {
    let estimate = estimate_time(record);
    let mvp = estimate.mvp_weeks as f64;
    let production = estimate.production_weeks as f64;

    vec![
        Milestone {
            milestone: "Design & Planning",
            time: format_weeks(mvp * 0.2),
        },
        Milestone {
            milestone: "MVP Development",
            time: format_weeks(mvp * 0.8),
        },
        Milestone {
            milestone: "Testing & Refinement",
            time: format_weeks(production * 0.3),
        },
        Milestone {
            milestone: "Production Build",
            time: format_weeks(production * 0.7),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use architect_core::{AuthType, ProductCategory, TeamStructure};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, "0 days")]
    #[case(0.2, "1 day")]
    #[case(0.6, "3 days")]
    #[case(1.0, "1 week")]
    #[case(1.4, "1.4 weeks")]
    #[case(1.75, "1.8 weeks")]
    #[case(3.0, "3 weeks")]
    #[case(4.0, "1 month")]
    #[case(10.0, "3 months")]
    #[case(52.0, "1.0 year")]
    #[case(130.0, "2.5 years")]
    fn test_format_weeks(#[case] weeks: f64, #[case] expected: &str) {
        assert_eq!(format_weeks(weeks), expected);
    }

    #[rstest]
    #[case(0, TimeTier::QuickStart)]
    #[case(1, TimeTier::QuickStart)]
    #[case(2, TimeTier::Mvp)]
    #[case(6, TimeTier::Beta)]
    #[case(12, TimeTier::Production)]
    #[case(26, TimeTier::Enterprise)]
    fn test_time_tier(#[case] weeks: u32, #[case] expected: TimeTier) {
        assert_eq!(time_tier(weeks), expected);
    }

    #[test]
    fn test_landing_page_estimate() {
        // 0.5 * 0.7 * 0.8 = 0.28 -> round(1.12) = 1 week
        let record = AnswerRecord {
            category: ProductCategory::LandingPage,
            auth_type: AuthType::None,
            team_structure: TeamStructure::SingleUser,
            ..Default::default()
        };

        let estimate = estimate_time(&record);

        assert_eq!(estimate.mvp_weeks, 1);
        assert_eq!(estimate.production_weeks, 3);
        assert_eq!(estimate.mvp, "1 week");
        assert_eq!(estimate.production, "3 weeks");
        assert_eq!(estimate.breakdown.design, "1 day");
        assert_eq!(estimate.breakdown.frontend, "2 days");
    }

    #[test]
    fn test_phase_shares_cover_the_whole_mvp() {
        let total: f64 = PHASE_SHARES.iter().sum();
        assert!((total - 1.0).abs() < 1e-9, "shares sum to {}", total);
    }

    #[rstest]
    #[case::saas(ProductCategory::WebAppSaas, TeamStructure::MultiUserShared, false)]
    #[case::ecommerce(ProductCategory::Ecommerce, TeamStructure::MultiUserShared, true)]
    #[case::marketplace(ProductCategory::Marketplace, TeamStructure::OrganizationHierarchy, true)]
    fn test_breakdown_is_fixed_share_of_mvp(
        #[case] category: ProductCategory,
        #[case] team_structure: TeamStructure,
        #[case] user_data_storage: bool,
    ) {
        let record = AnswerRecord {
            category,
            team_structure,
            user_data_storage,
            payment_integration: if user_data_storage { "stripe".to_string() } else { String::new() },
            ..Default::default()
        };

        let estimate = estimate_time(&record);
        assert!(estimate.mvp_weeks >= 2, "expected a multi-week mvp, got {}", estimate.mvp_weeks);

        let mvp = estimate.mvp_weeks as f64;
        let expected = TimeBreakdown {
            design: format_weeks(mvp * 0.2),
            frontend: format_weeks(mvp * 0.35),
            backend: format_weeks(mvp * 0.3),
            testing: format_weeks(mvp * 0.1),
            deployment: format_weeks(mvp * 0.05),
        };
        assert_eq!(estimate.breakdown, expected);
    }

    #[test]
    fn test_production_never_shorter_than_mvp() {
        for category in [
            ProductCategory::LandingPage,
            ProductCategory::Dashboard,
            ProductCategory::Marketplace,
        ] {
            let record = AnswerRecord {
                category,
                ..Default::default()
            };
            let estimate = estimate_time(&record);
            assert!(estimate.production_weeks >= estimate.mvp_weeks);
        }
    }

    #[test]
    fn test_recommended_timeline_milestones() {
        // default saas: 1.2 * (1 + 0) = 1.2 -> 5 mvp weeks, 13 production weeks
        let timeline = recommended_timeline(&AnswerRecord::default());

        let pairs: Vec<_> = timeline
            .iter()
            .map(|m| (m.milestone, m.time.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Design & Planning", "1 week"),
                ("MVP Development", "1 month"),
                ("Testing & Refinement", "3.9 weeks"),
                ("Production Build", "2 months"),
            ]
        );
    }
}
