// ABOUTME: Rule-based "you probably also want" suggestions
// ABOUTME: Evaluates ordered condition rules, ranks by confidence, and caps the list

use architect_core::utils::contains_value;
use architect_core::{AnswerRecord, AuthType, MonetizationModel, ProductCategory, TeamStructure};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Maximum number of suggestions returned by [`suggest`]
pub const MAX_SUGGESTIONS: usize = 10;

/// Maximum number of autocomplete matches returned by [`autocomplete`]
pub const MAX_AUTOCOMPLETE: usize = 8;

/// An advisory value for one answer field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub field: String,
    pub value: String,
    /// Ranking weight in [0, 1]
    pub confidence: f64,
    pub reason: String,
}

struct Candidates(Vec<Suggestion>);

impl Candidates {
    fn push(&mut self, field: &str, value: &str, confidence: f64, reason: &str) {
        self.0.push(Suggestion {
            field: field.to_string(),
            value: value.to_string(),
            confidence,
            reason: reason.to_string(),
        });
    }
}

/// Ranked suggestions for a record, highest confidence first, at most [`MAX_SUGGESTIONS`]
pub fn suggest(record: &AnswerRecord) -> Vec<Suggestion> {
    let mut c = Candidates(Vec::new());

    category_rules(record, &mut c);
    monetization_rules(record, &mut c);
    auth_rules(record, &mut c);
    team_rules(record, &mut c);
    seo_rules(record, &mut c);
    engagement_rules(record, &mut c);
    default_rules(record, &mut c);

    let mut suggestions = c.0;
    let candidate_count = suggestions.len();

    // Stable: equal confidence keeps rule order
    suggestions.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    suggestions.truncate(MAX_SUGGESTIONS);

    debug!(
        candidates = candidate_count,
        returned = suggestions.len(),
        "Generated suggestions"
    );

    suggestions
}

fn category_rules(record: &AnswerRecord, c: &mut Candidates) {
    match record.category {
        ProductCategory::Ecommerce => {
            if !contains_value(&record.file_uploads, "product-images") {
                c.push(
                    "fileUploads",
                    "Product Images",
                    0.95,
                    "E-commerce stores require product image uploads",
                );
            }
            if !record.has_payment_integration() {
                c.push(
                    "paymentIntegration",
                    "stripe",
                    0.98,
                    "E-commerce stores need payment processing",
                );
            }
            if !record.has_ui_component("pricing-tables") {
                c.push(
                    "keyUiComponents",
                    "pricing-tables",
                    0.90,
                    "Product listings benefit from pricing tables",
                );
            }
        }
        ProductCategory::WebAppSaas => {
            if !contains_value(&record.realtime_features, "live-updates") {
                c.push(
                    "realtimeFeatures",
                    "live-updates",
                    0.75,
                    "SaaS apps often benefit from real-time updates",
                );
            }
            if record.analytics_integration.is_empty() {
                c.push(
                    "analyticsIntegration",
                    "posthog",
                    0.85,
                    "SaaS products need user behavior analytics",
                );
            }
            if record.team_structure == TeamStructure::TeamWorkspaces
                && !contains_value(&record.realtime_features, "collaborative-editing")
            {
                c.push(
                    "realtimeFeatures",
                    "collaborative-editing",
                    0.70,
                    "Team workspaces benefit from collaborative editing",
                );
            }
        }
        ProductCategory::LandingPage => {
            if !record.has_ui_component("newsletter") {
                c.push(
                    "keyUiComponents",
                    "newsletter",
                    0.82,
                    "Landing pages often benefit from email capture",
                );
            }
            if !contains_value(&record.animation_preferences, "scroll-animations") {
                c.push(
                    "animationPreferences",
                    "scroll-animations",
                    0.78,
                    "Scroll animations improve engagement on landing pages",
                );
            }
            if !record.requires_seo("structured-data") {
                c.push(
                    "seoRequirements",
                    "structured-data",
                    0.85,
                    "Landing pages benefit from structured data for SEO",
                );
            }
        }
        ProductCategory::Dashboard => {
            if record.navigation_structure != "sidebar" {
                c.push(
                    "navigationStructure",
                    "sidebar",
                    0.88,
                    "Dashboards typically use sidebar navigation",
                );
            }
            if !record.has_ui_component("search") {
                c.push(
                    "keyUiComponents",
                    "search",
                    0.80,
                    "Dashboards benefit from search functionality",
                );
            }
        }
        _ => {}
    }
}

fn monetization_rules(record: &AnswerRecord, c: &mut Candidates) {
    if !matches!(
        record.monetization,
        MonetizationModel::Subscription | MonetizationModel::Freemium
    ) {
        return;
    }

    if !record.has_payment_integration() {
        c.push(
            "paymentIntegration",
            "stripe",
            0.98,
            "Subscription models require payment processing",
        );
    }
    if !record.has_ui_component("pricing-tables") {
        c.push(
            "keyUiComponents",
            "pricing-tables",
            0.92,
            "Subscription apps need pricing tables",
        );
    }
}

fn auth_rules(record: &AnswerRecord, c: &mut Candidates) {
    if record.auth_type != AuthType::EmailPassword || !record.user_data_storage {
        return;
    }

    if !record.requires_security("encryption") {
        c.push(
            "securityRequirements",
            "encryption",
            0.90,
            "Apps with user data should implement encryption",
        );
    }
    if !record.requires_security("auth") {
        c.push(
            "securityRequirements",
            "auth",
            0.95,
            "Secure authentication is required for user accounts",
        );
    }
}

fn team_rules(record: &AnswerRecord, c: &mut Candidates) {
    if !matches!(
        record.team_structure,
        TeamStructure::TeamWorkspaces | TeamStructure::OrganizationHierarchy
    ) {
        return;
    }

    if !record.user_data_storage {
        c.push(
            "userDataStorage",
            "true",
            0.85,
            "Team structures require user data storage",
        );
    }
    if !record.has_database() {
        c.push(
            "databasePreference",
            "supabase",
            0.80,
            "Team apps need a database for user and team data",
        );
    }
}

fn seo_rules(record: &AnswerRecord, c: &mut Candidates) {
    if !record.category.is_public_facing() {
        return;
    }

    if !record.requires_seo("meta-tags") {
        c.push(
            "seoRequirements",
            "meta-tags",
            0.95,
            "Public-facing sites require meta tags for SEO",
        );
    }
    if !record.requires_seo("sitemap") {
        c.push(
            "seoRequirements",
            "sitemap",
            0.85,
            "Sitemaps help search engines index your site",
        );
    }
}

fn engagement_rules(record: &AnswerRecord, c: &mut Candidates) {
    if matches!(
        record.category,
        ProductCategory::WebAppSaas | ProductCategory::Dashboard
    ) && !record.has_realtime_features()
    {
        c.push(
            "realtimeFeatures",
            "notifications",
            0.65,
            "Consider adding notifications for better user engagement",
        );
    }
}

/// Category-independent rules that fire whenever the answer is missing
fn default_rules(record: &AnswerRecord, c: &mut Candidates) {
    if !contains_value(&record.performance_goals, "lighthouse-95") {
        c.push(
            "performanceGoals",
            "lighthouse-95",
            0.75,
            "Aiming for Lighthouse 95+ ensures good performance",
        );
    }
    if !contains_value(&record.accessibility_requirements, "keyboard-nav") {
        c.push(
            "accessibilityRequirements",
            "keyboard-nav",
            0.90,
            "Keyboard navigation improves accessibility for all users",
        );
    }
}

lazy_static! {
    static ref AUTOCOMPLETE: HashMap<&'static str, Vec<&'static str>> = {
        let mut m = HashMap::new();
        m.insert(
            "integrations",
            vec![
                "stripe",
                "stripe payments",
                "stripe subscriptions",
                "paypal",
                "google analytics",
                "google calendar",
                "slack",
                "github",
                "sendgrid",
                "resend",
                "aws s3",
                "cloudinary",
                "twilio",
                "pusher",
                "mixpanel",
                "amplitude",
                "segment",
                "posthog",
                "sentry",
                "logrocket",
            ],
        );
        m.insert(
            "features",
            vec![
                "user authentication",
                "user registration",
                "user profiles",
                "dashboard",
                "admin panel",
                "real-time notifications",
                "file upload",
                "search functionality",
                "pagination",
                "filters",
                "sorting",
                "export to csv",
                "export to pdf",
                "calendar integration",
                "email notifications",
                "push notifications",
                "social login",
                "two-factor authentication",
                "multi-language support",
                "dark mode",
                "responsive design",
            ],
        );
        m.insert(
            "apis",
            vec![
                "openai api",
                "anthropic api",
                "stripe api",
                "google maps api",
                "google calendar api",
                "github api",
                "twitter api",
                "facebook api",
                "sendgrid api",
                "aws sdk",
                "twilio api",
                "pusher channels",
                "firebase auth",
                "supabase client",
            ],
        );
        m
    };
}

/// Free-text completions for integrations, features, or apis fields
pub fn autocomplete(field: &str, query: &str) -> Vec<&'static str> {
    let query = query.to_lowercase();

    AUTOCOMPLETE
        .get(field)
        .map(|entries| {
            entries
                .iter()
                .copied()
                .filter(|entry| entry.contains(query.as_str()))
                .take(MAX_AUTOCOMPLETE)
                .collect()
        })
        .unwrap_or_default()
}
