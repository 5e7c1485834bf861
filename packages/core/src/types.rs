// ABOUTME: Answer record and single-select enumerations for the questionnaire
// ABOUTME: Every field has a default so derivations can treat empty values as unset

use crate::catalogs::{self, CatalogOption};
use crate::constants::DEFAULT_PRIMARY_COLOR;
use crate::error::Result;
use crate::utils::{contains_value, non_empty_lines};
use serde::{Deserialize, Deserializer, Serialize};

/// A single-select enumeration backed by an option catalog
pub trait CatalogValue {
    const CATALOG: &'static [CatalogOption];

    fn as_str(&self) -> &'static str;

    /// Human-readable label from the catalog, or the raw value
    fn label(&self) -> &'static str {
        catalogs::find(Self::CATALOG, self.as_str())
            .map(|o| o.label)
            .unwrap_or_else(|| self.as_str())
    }

    /// Whether the value is one of the catalog entries
    fn is_known(&self) -> bool {
        catalogs::is_known(Self::CATALOG, self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DifficultyLevel {
    Beginner,
    #[default]
    Advanced,
    Expert,
    #[serde(other)]
    Unknown,
}

impl CatalogValue for DifficultyLevel {
    const CATALOG: &'static [CatalogOption] = catalogs::DIFFICULTY;

    fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Advanced => "advanced",
            Self::Expert => "expert",
            Self::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundStyle {
    #[default]
    Gradient,
    Solid,
    Pattern,
    Animated,
    #[serde(other)]
    Unknown,
}

impl CatalogValue for BackgroundStyle {
    const CATALOG: &'static [CatalogOption] = catalogs::BACKGROUND_STYLE;

    fn as_str(&self) -> &'static str {
        match self {
            Self::Gradient => "gradient",
            Self::Solid => "solid",
            Self::Pattern => "pattern",
            Self::Animated => "animated",
            Self::Unknown => "unknown",
        }
    }
}

/// Product category chosen in the product type section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductCategory {
    LandingPage,
    #[default]
    WebAppSaas,
    InternalTool,
    Ecommerce,
    Portfolio,
    BlogApp,
    Marketplace,
    Dashboard,
    Other,
    /// Any value not present in the category catalog
    #[serde(other)]
    Unknown,
}

impl CatalogValue for ProductCategory {
    const CATALOG: &'static [CatalogOption] = catalogs::CATEGORY;

    fn as_str(&self) -> &'static str {
        match self {
            Self::LandingPage => "landing-page",
            Self::WebAppSaas => "web-app-saas",
            Self::InternalTool => "internal-tool",
            Self::Ecommerce => "ecommerce",
            Self::Portfolio => "portfolio",
            Self::BlogApp => "blog-app",
            Self::Marketplace => "marketplace",
            Self::Dashboard => "dashboard",
            Self::Other => "other",
            Self::Unknown => "unknown",
        }
    }
}

impl ProductCategory {
    /// Categories whose pages are meant to be found through search engines
    pub fn is_public_facing(&self) -> bool {
        matches!(self, Self::LandingPage | Self::Ecommerce | Self::Portfolio)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthType {
    None,
    #[default]
    EmailPassword,
    MagicLink,
    Oauth,
    SocialLogin,
    #[serde(other)]
    Unknown,
}

impl CatalogValue for AuthType {
    const CATALOG: &'static [CatalogOption] = catalogs::AUTH_TYPE;

    fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::EmailPassword => "email-password",
            Self::MagicLink => "magic-link",
            Self::Oauth => "oauth",
            Self::SocialLogin => "social-login",
            Self::Unknown => "unknown",
        }
    }
}

impl AuthType {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Hosted auth provider for OAuth and social login.
///
/// Values outside the catalog are kept verbatim so they can still be named in
/// recommendations. `null` and `""` both load as [`AuthProvider::Unset`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum AuthProvider {
    #[default]
    Clerk,
    Supabase,
    Auth0,
    Nextauth,
    Custom,
    /// The empty selection
    Unset,
    Unknown(String),
}

impl From<Option<String>> for AuthProvider {
    fn from(value: Option<String>) -> Self {
        match value.as_deref().unwrap_or_default() {
            "" => Self::Unset,
            "clerk" => Self::Clerk,
            "supabase" => Self::Supabase,
            "auth0" => Self::Auth0,
            "nextauth" => Self::Nextauth,
            "custom" => Self::Custom,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl From<AuthProvider> for String {
    fn from(provider: AuthProvider) -> Self {
        provider.value().to_string()
    }
}

impl CatalogValue for AuthProvider {
    const CATALOG: &'static [CatalogOption] = catalogs::AUTH_PROVIDER;

    fn as_str(&self) -> &'static str {
        match self {
            Self::Clerk => "clerk",
            Self::Supabase => "supabase",
            Self::Auth0 => "auth0",
            Self::Nextauth => "nextauth",
            Self::Custom => "custom",
            Self::Unset => "",
            Self::Unknown(_) => "unknown",
        }
    }
}

impl AuthProvider {
    pub fn is_set(&self) -> bool {
        !matches!(self, Self::Unset)
    }

    /// The value as written in the answer file
    pub fn value(&self) -> &str {
        match self {
            Self::Unknown(raw) => raw,
            known => known.as_str(),
        }
    }

    /// Catalog label for known providers, the raw value otherwise
    pub fn display_name(&self) -> &str {
        match self {
            Self::Unknown(raw) => raw,
            known => known.label(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TeamStructure {
    SingleUser,
    #[default]
    MultiUserShared,
    TeamWorkspaces,
    OrganizationHierarchy,
    #[serde(other)]
    Unknown,
}

impl CatalogValue for TeamStructure {
    const CATALOG: &'static [CatalogOption] = catalogs::TEAM_STRUCTURE;

    fn as_str(&self) -> &'static str {
        match self {
            Self::SingleUser => "single-user",
            Self::MultiUserShared => "multi-user-shared",
            Self::TeamWorkspaces => "team-workspaces",
            Self::OrganizationHierarchy => "organization-hierarchy",
            Self::Unknown => "unknown",
        }
    }
}

/// Declared usage scale tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scalability {
    Mvp,
    #[default]
    Beta,
    Production,
    Enterprise,
    #[serde(other)]
    Unknown,
}

impl CatalogValue for Scalability {
    const CATALOG: &'static [CatalogOption] = catalogs::SCALABILITY;

    fn as_str(&self) -> &'static str {
        match self {
            Self::Mvp => "mvp",
            Self::Beta => "beta",
            Self::Production => "production",
            Self::Enterprise => "enterprise",
            Self::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MonetizationModel {
    Free,
    #[default]
    Freemium,
    Subscription,
    OneTime,
    UsageBased,
    Ads,
    #[serde(other)]
    Unknown,
}

impl CatalogValue for MonetizationModel {
    const CATALOG: &'static [CatalogOption] = catalogs::MONETIZATION;

    fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Freemium => "freemium",
            Self::Subscription => "subscription",
            Self::OneTime => "one-time",
            Self::UsageBased => "usage-based",
            Self::Ads => "ads",
            Self::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeploymentTarget {
    #[default]
    Vercel,
    Netlify,
    Aws,
    SelfHosted,
    #[serde(other)]
    Unknown,
}

impl CatalogValue for DeploymentTarget {
    const CATALOG: &'static [CatalogOption] = catalogs::DEPLOYMENT;

    fn as_str(&self) -> &'static str {
        match self {
            Self::Vercel => "vercel",
            Self::Netlify => "netlify",
            Self::Aws => "aws",
            Self::SelfHosted => "self-hosted",
            Self::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MobileDesktop {
    #[default]
    MobileFirst,
    DesktopFirst,
    #[serde(other)]
    Unknown,
}

impl CatalogValue for MobileDesktop {
    const CATALOG: &'static [CatalogOption] = catalogs::MOBILE_DESKTOP;

    fn as_str(&self) -> &'static str {
        match self {
            Self::MobileFirst => "mobile-first",
            Self::DesktopFirst => "desktop-first",
            Self::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoadingPreference {
    #[default]
    Skeletons,
    Spinners,
    Progressive,
    #[serde(other)]
    Unknown,
}

impl CatalogValue for LoadingPreference {
    const CATALOG: &'static [CatalogOption] = catalogs::LOADING_PREFERENCE;

    fn as_str(&self) -> &'static str {
        match self {
            Self::Skeletons => "skeletons",
            Self::Spinners => "spinners",
            Self::Progressive => "progressive",
            Self::Unknown => "unknown",
        }
    }
}

/// Read a field that may be `null` in the answer file
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Every questionnaire answer for one project.
///
/// Text fields use `""`, multi-selects an empty list and flags `false` as the
/// "not set" value. Deserialization fills any missing field from
/// [`AnswerRecord::default`], while an explicit `null` loads as the unset
/// value of the field's type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnswerRecord {
    // Project vision
    #[serde(deserialize_with = "null_as_default")]
    pub app_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tagline: String,
    #[serde(deserialize_with = "null_as_default")]
    pub elevator_pitch: String,
    #[serde(deserialize_with = "null_as_default")]
    pub problem_solved: String,
    #[serde(deserialize_with = "null_as_default")]
    pub competitive_advantage: String,
    #[serde(deserialize_with = "null_as_default")]
    pub target_audience: String,
    #[serde(deserialize_with = "null_as_default")]
    pub competitors: String,
    #[serde(deserialize_with = "null_as_default")]
    pub difficulty: DifficultyLevel,

    // Branding
    #[serde(deserialize_with = "null_as_default")]
    pub primary_color: String,
    #[serde(deserialize_with = "null_as_default")]
    pub accent_colors: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub design_vibe: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub typography: String,
    #[serde(deserialize_with = "null_as_default")]
    pub logo_assets: String,
    #[serde(deserialize_with = "null_as_default")]
    pub brand_voice: String,
    #[serde(deserialize_with = "null_as_default")]
    pub background_style: BackgroundStyle,

    // Product type
    #[serde(deserialize_with = "null_as_default")]
    pub category: ProductCategory,
    #[serde(deserialize_with = "null_as_default")]
    pub auth_type: AuthType,
    #[serde(deserialize_with = "null_as_default")]
    pub oauth_providers: Vec<String>,
    pub auth_provider: AuthProvider,
    #[serde(deserialize_with = "null_as_default")]
    pub team_structure: TeamStructure,
    #[serde(deserialize_with = "null_as_default")]
    pub scalability: Scalability,
    #[serde(deserialize_with = "null_as_default")]
    pub expected_growth: String,

    // Features
    #[serde(deserialize_with = "null_as_default")]
    pub primary_features: String,
    #[serde(deserialize_with = "null_as_default")]
    pub secondary_features: String,
    #[serde(deserialize_with = "null_as_default")]
    pub user_flows: String,
    #[serde(deserialize_with = "null_as_default")]
    pub monetization: MonetizationModel,
    #[serde(deserialize_with = "null_as_default")]
    pub pricing_tiers: String,
    #[serde(deserialize_with = "null_as_default")]
    pub feature_priority: String,

    // Backend
    #[serde(deserialize_with = "null_as_default")]
    pub user_data_storage: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub database_preference: String,
    #[serde(deserialize_with = "null_as_default")]
    pub file_uploads: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub storage_solution: String,
    #[serde(deserialize_with = "null_as_default")]
    pub realtime_features: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub realtime_solution: String,
    #[serde(deserialize_with = "null_as_default")]
    pub calendar_integration: String,
    #[serde(deserialize_with = "null_as_default")]
    pub payment_integration: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email_notifications: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub external_apis: String,
    #[serde(deserialize_with = "null_as_default")]
    pub api_rate_limiting: String,
    #[serde(deserialize_with = "null_as_default")]
    pub data_retention: String,
    #[serde(deserialize_with = "null_as_default")]
    pub security_requirements: Vec<String>,

    // Pages
    #[serde(deserialize_with = "null_as_default")]
    pub must_have_pages: String,
    #[serde(deserialize_with = "null_as_default")]
    pub navigation_structure: String,
    #[serde(deserialize_with = "null_as_default")]
    pub hero_headline: String,
    #[serde(deserialize_with = "null_as_default")]
    pub hero_subheadline: String,
    #[serde(deserialize_with = "null_as_default")]
    pub hero_cta: String,
    #[serde(deserialize_with = "null_as_default")]
    pub hero_image_style: String,
    #[serde(deserialize_with = "null_as_default")]
    pub key_ui_components: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub seo_requirements: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub social_media_integration: Vec<String>,

    // Design
    #[serde(deserialize_with = "null_as_default")]
    pub inspirations: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mobile_desktop: MobileDesktop,
    #[serde(deserialize_with = "null_as_default")]
    pub animation_preferences: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub loading_preference: LoadingPreference,
    #[serde(deserialize_with = "null_as_default")]
    pub accessibility_requirements: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub performance_goals: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub image_optimization: Vec<String>,

    // Tech stack
    #[serde(deserialize_with = "null_as_default")]
    pub additional_tech_preferences: String,
    #[serde(deserialize_with = "null_as_default")]
    pub avoid_tech: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cms: String,
    #[serde(deserialize_with = "null_as_default")]
    pub deployment_target: DeploymentTarget,
    #[serde(deserialize_with = "null_as_default")]
    pub cicd_requirements: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub environment_variables: String,
    #[serde(deserialize_with = "null_as_default")]
    pub testing_strategy: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub error_tracking: String,
    #[serde(deserialize_with = "null_as_default")]
    pub analytics_integration: String,

    // Additional
    #[serde(deserialize_with = "null_as_default")]
    pub existing_repo: String,
    #[serde(deserialize_with = "null_as_default")]
    pub technical_constraints: String,
    #[serde(deserialize_with = "null_as_default")]
    pub third_party_libraries: String,
    #[serde(deserialize_with = "null_as_default")]
    pub known_limitations: String,
    #[serde(deserialize_with = "null_as_default")]
    pub success_metrics: String,
    #[serde(deserialize_with = "null_as_default")]
    pub team_size: String,
    #[serde(deserialize_with = "null_as_default")]
    pub budget_constraints: String,
    #[serde(deserialize_with = "null_as_default")]
    pub timeline: String,
    #[serde(deserialize_with = "null_as_default")]
    pub maintenance: String,
}

impl Default for AnswerRecord {
    fn default() -> Self {
        let list = |values: &[&str]| values.iter().map(|v| v.to_string()).collect::<Vec<_>>();

        Self {
            app_name: String::new(),
            tagline: String::new(),
            elevator_pitch: String::new(),
            problem_solved: String::new(),
            competitive_advantage: String::new(),
            target_audience: String::new(),
            competitors: String::new(),
            difficulty: DifficultyLevel::Advanced,

            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            accent_colors: Vec::new(),
            design_vibe: Vec::new(),
            typography: "inter".to_string(),
            logo_assets: String::new(),
            brand_voice: "professional".to_string(),
            background_style: BackgroundStyle::Gradient,

            category: ProductCategory::WebAppSaas,
            auth_type: AuthType::EmailPassword,
            oauth_providers: Vec::new(),
            auth_provider: AuthProvider::Clerk,
            team_structure: TeamStructure::MultiUserShared,
            scalability: Scalability::Beta,
            expected_growth: String::new(),

            primary_features: String::new(),
            secondary_features: String::new(),
            user_flows: String::new(),
            monetization: MonetizationModel::Freemium,
            pricing_tiers: String::new(),
            feature_priority: String::new(),

            user_data_storage: false,
            database_preference: String::new(),
            file_uploads: Vec::new(),
            storage_solution: String::new(),
            realtime_features: Vec::new(),
            realtime_solution: String::new(),
            calendar_integration: String::new(),
            payment_integration: String::new(),
            email_notifications: Vec::new(),
            external_apis: String::new(),
            api_rate_limiting: String::new(),
            data_retention: String::new(),
            security_requirements: Vec::new(),

            must_have_pages: String::new(),
            navigation_structure: "top-nav".to_string(),
            hero_headline: String::new(),
            hero_subheadline: String::new(),
            hero_cta: String::new(),
            hero_image_style: "gradient".to_string(),
            key_ui_components: Vec::new(),
            seo_requirements: Vec::new(),
            social_media_integration: Vec::new(),

            inspirations: String::new(),
            mobile_desktop: MobileDesktop::MobileFirst,
            animation_preferences: list(&["micro-interactions"]),
            loading_preference: LoadingPreference::Skeletons,
            accessibility_requirements: list(&["wcag-aa", "keyboard-nav"]),
            performance_goals: list(&["instant"]),
            image_optimization: list(&["next-image", "lazy-load"]),

            additional_tech_preferences: String::new(),
            avoid_tech: String::new(),
            cms: String::new(),
            deployment_target: DeploymentTarget::Vercel,
            cicd_requirements: Vec::new(),
            environment_variables: String::new(),
            testing_strategy: Vec::new(),
            error_tracking: String::new(),
            analytics_integration: String::new(),

            existing_repo: String::new(),
            technical_constraints: String::new(),
            third_party_libraries: String::new(),
            known_limitations: String::new(),
            success_metrics: String::new(),
            team_size: String::new(),
            budget_constraints: String::new(),
            timeline: String::new(),
            maintenance: String::new(),
        }
    }
}

impl AnswerRecord {
    /// Parse a record from the questionnaire's JSON shape, defaulting missing fields
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn has_file_uploads(&self) -> bool {
        !self.file_uploads.is_empty()
    }

    pub fn has_realtime_features(&self) -> bool {
        !self.realtime_features.is_empty()
    }

    pub fn has_email_notifications(&self) -> bool {
        !self.email_notifications.is_empty()
    }

    pub fn has_payment_integration(&self) -> bool {
        !self.payment_integration.is_empty()
    }

    pub fn has_calendar_integration(&self) -> bool {
        !self.calendar_integration.is_empty()
    }

    pub fn has_database(&self) -> bool {
        !self.database_preference.is_empty()
    }

    pub fn requires_security(&self, requirement: &str) -> bool {
        contains_value(&self.security_requirements, requirement)
    }

    pub fn requires_seo(&self, requirement: &str) -> bool {
        contains_value(&self.seo_requirements, requirement)
    }

    pub fn has_ui_component(&self, component: &str) -> bool {
        contains_value(&self.key_ui_components, component)
    }

    /// Number of declared primary plus secondary features (one per non-blank line)
    pub fn feature_count(&self) -> usize {
        non_empty_lines(&self.primary_features) + non_empty_lines(&self.secondary_features)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_match_questionnaire() {
        let record = AnswerRecord::default();

        assert_eq!(record.category, ProductCategory::WebAppSaas);
        assert_eq!(record.auth_type, AuthType::EmailPassword);
        assert_eq!(record.scalability, Scalability::Beta);
        assert_eq!(record.primary_color, "#8B5CF6");
        assert_eq!(record.accessibility_requirements, vec!["wcag-aa", "keyboard-nav"]);
        assert!(!record.user_data_storage);
        assert!(record.payment_integration.is_empty());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let record = AnswerRecord::from_json(
            r#"{"appName": "Acme", "category": "ecommerce", "userDataStorage": true}"#,
        )
        .unwrap();

        assert_eq!(record.app_name, "Acme");
        assert_eq!(record.category, ProductCategory::Ecommerce);
        assert!(record.user_data_storage);
        assert_eq!(record.deployment_target, DeploymentTarget::Vercel);
        assert_eq!(record.navigation_structure, "top-nav");
    }

    #[test]
    fn test_unrecognized_enum_values_become_unknown() {
        let record = AnswerRecord::from_json(
            r#"{"category": "crypto-exchange", "authType": "passkeys", "authProvider": ""}"#,
        )
        .unwrap();

        assert_eq!(record.category, ProductCategory::Unknown);
        assert_eq!(record.auth_type, AuthType::Unknown);
        assert_eq!(record.auth_provider, AuthProvider::Unset);
        assert!(!record.category.is_known());
    }

    #[test]
    fn test_null_fields_load_as_unset() {
        let record = AnswerRecord::from_json(
            r#"{"paymentIntegration": null, "fileUploads": null, "typography": null,
                "userDataStorage": null, "category": null, "authProvider": null}"#,
        )
        .unwrap();

        assert_eq!(record.payment_integration, "");
        assert!(record.file_uploads.is_empty());
        assert_eq!(record.typography, "");
        assert!(!record.user_data_storage);
        assert_eq!(record.category, ProductCategory::WebAppSaas);
        assert_eq!(record.auth_provider, AuthProvider::Unset);
        assert!(!record.has_payment_integration());
    }

    #[test]
    fn test_uncatalogued_auth_provider_keeps_raw_value() {
        let record = AnswerRecord::from_json(r#"{"authProvider": "firebase"}"#).unwrap();

        assert_eq!(record.auth_provider, AuthProvider::Unknown("firebase".to_string()));
        assert_eq!(record.auth_provider.display_name(), "firebase");
        assert!(!record.auth_provider.is_known());

        let json = serde_json::to_string(&record.auth_provider).unwrap();
        assert_eq!(json, "\"firebase\"");
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(AnswerRecord::from_json("{not json").is_err());
        assert!(AnswerRecord::from_json(r#"{"userDataStorage": "yes"}"#).is_err());
    }

    #[test]
    fn test_labels_come_from_catalogs() {
        assert_eq!(AuthProvider::Clerk.label(), "Clerk (Recommended)");
        assert_eq!(ProductCategory::BlogApp.label(), "Blog + App Hybrid");
        assert_eq!(ProductCategory::Unknown.label(), "unknown");
    }

    #[test]
    fn test_enum_wire_names_match_catalog_values() {
        let json = serde_json::to_string(&TeamStructure::OrganizationHierarchy).unwrap();
        assert_eq!(json, "\"organization-hierarchy\"");
        assert_eq!(TeamStructure::OrganizationHierarchy.as_str(), "organization-hierarchy");
    }

    #[test]
    fn test_feature_count_ignores_blank_lines() {
        let record = AnswerRecord {
            primary_features: "Login\n\n  \nDashboard\n".to_string(),
            secondary_features: "Exports".to_string(),
            ..Default::default()
        };

        assert_eq!(record.feature_count(), 3);
    }
}
