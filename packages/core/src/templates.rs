// ABOUTME: Quickstart templates that prefill the answer record
// ABOUTME: Provides template listing, lookup, and application onto an existing record

use crate::error::{CoreError, Result};
use crate::types::{
    AnswerRecord, AuthType, MonetizationModel, ProductCategory, Scalability, TeamStructure,
};
use serde::Serialize;

/// A quickstart template offered before the first section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: ProductCategory,
}

pub const TEMPLATES: &[Template] = &[
    Template {
        id: "saas-mvp",
        name: "SaaS MVP",
        description: "Multi-user web app with subscriptions, auth, and a dashboard",
        category: ProductCategory::WebAppSaas,
    },
    Template {
        id: "ecommerce",
        name: "E-commerce Store",
        description: "Product catalog with image uploads, checkout, and order emails",
        category: ProductCategory::Ecommerce,
    },
    Template {
        id: "landing-page",
        name: "Landing Page",
        description: "Marketing site focused on conversion and search visibility",
        category: ProductCategory::LandingPage,
    },
    Template {
        id: "dashboard",
        name: "Analytics Dashboard",
        description: "Data-heavy internal dashboard with live updates",
        category: ProductCategory::Dashboard,
    },
    Template {
        id: "portfolio",
        name: "Portfolio",
        description: "Personal showcase with projects and social links",
        category: ProductCategory::Portfolio,
    },
];

pub fn list_templates() -> &'static [Template] {
    TEMPLATES
}

pub fn get_template(id: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.id == id)
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Return a copy of `record` with the template's answers written over it.
///
/// Fields the template does not mention keep the record's current values.
pub fn apply_template(record: &AnswerRecord, id: &str) -> Result<AnswerRecord> {
    let template = get_template(id).ok_or_else(|| CoreError::TemplateNotFound(id.to_string()))?;

    let mut next = record.clone();
    next.category = template.category;

    match template.id {
        "saas-mvp" => {
            next.auth_type = AuthType::EmailPassword;
            next.team_structure = TeamStructure::TeamWorkspaces;
            next.scalability = Scalability::Mvp;
            next.monetization = MonetizationModel::Subscription;
            next.user_data_storage = true;
            next.database_preference = "supabase".to_string();
            next.payment_integration = "stripe".to_string();
            next.email_notifications = strings(&["resend"]);
            next.navigation_structure = "sidebar".to_string();
            next.key_ui_components =
                strings(&["pricing-tables", "user-settings", "onboarding", "team-invite"]);
            next.security_requirements = strings(&["auth", "encryption"]);
        }
        "ecommerce" => {
            next.auth_type = AuthType::EmailPassword;
            next.team_structure = TeamStructure::MultiUserShared;
            next.scalability = Scalability::Production;
            next.monetization = MonetizationModel::OneTime;
            next.user_data_storage = true;
            next.database_preference = "postgresql".to_string();
            next.file_uploads = strings(&["product-images"]);
            next.storage_solution = "cloudinary".to_string();
            next.payment_integration = "stripe".to_string();
            next.email_notifications = strings(&["sendgrid"]);
            next.key_ui_components = strings(&["search", "pricing-tables", "testimonials"]);
            next.seo_requirements = strings(&["meta-tags", "sitemap", "structured-data"]);
            next.security_requirements = strings(&["auth", "encryption"]);
        }
        "landing-page" => {
            next.auth_type = AuthType::None;
            next.team_structure = TeamStructure::SingleUser;
            next.scalability = Scalability::Mvp;
            next.monetization = MonetizationModel::Free;
            next.key_ui_components =
                strings(&["feature-grids", "testimonials", "faq-accordion", "newsletter"]);
            next.animation_preferences = strings(&["micro-interactions", "scroll-animations"]);
            next.seo_requirements =
                strings(&["meta-tags", "sitemap", "robots-txt", "structured-data", "og-tags"]);
            next.performance_goals = strings(&["lighthouse-95", "seo-optimized"]);
        }
        "dashboard" => {
            next.auth_type = AuthType::Oauth;
            next.oauth_providers = strings(&["google", "github"]);
            next.team_structure = TeamStructure::TeamWorkspaces;
            next.scalability = Scalability::Beta;
            next.monetization = MonetizationModel::Free;
            next.user_data_storage = true;
            next.database_preference = "supabase".to_string();
            next.realtime_features = strings(&["live-updates"]);
            next.realtime_solution = "supabase-realtime".to_string();
            next.navigation_structure = "sidebar".to_string();
            next.key_ui_components = strings(&["search", "notifications", "dark-mode-toggle"]);
            next.security_requirements = strings(&["auth"]);
        }
        "portfolio" => {
            next.auth_type = AuthType::None;
            next.team_structure = TeamStructure::SingleUser;
            next.scalability = Scalability::Mvp;
            next.monetization = MonetizationModel::Free;
            next.hero_image_style = "photo".to_string();
            next.animation_preferences = strings(&["page-transitions", "hero-animations"]);
            next.social_media_integration = strings(&["linkedin", "twitter"]);
            next.seo_requirements = strings(&["meta-tags", "og-tags"]);
            next.image_optimization = strings(&["next-image", "webp", "lazy-load"]);
        }
        _ => {}
    }

    Ok(next)
}
