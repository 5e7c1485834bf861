// ABOUTME: Per-section field validation for the questionnaire
// ABOUTME: Minimum lengths and cross-field requirements that gate section progression

use crate::constants::{MAX_ACCENT_COLORS, TOTAL_SECTIONS};
use crate::error::{CoreError, ValidationError};
use crate::types::{AnswerRecord, AuthType, CatalogValue};
use crate::utils::char_len;
use serde::Serialize;
use std::fmt;

/// Questionnaire sections, numbered 1-9 in the order they are presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Vision,
    Branding,
    ProductType,
    Features,
    Backend,
    Pages,
    Design,
    TechStack,
    Additional,
}

impl Section {
    pub const ALL: [Section; TOTAL_SECTIONS as usize] = [
        Section::Vision,
        Section::Branding,
        Section::ProductType,
        Section::Features,
        Section::Backend,
        Section::Pages,
        Section::Design,
        Section::TechStack,
        Section::Additional,
    ];

    pub fn number(&self) -> u8 {
        match self {
            Section::Vision => 1,
            Section::Branding => 2,
            Section::ProductType => 3,
            Section::Features => 4,
            Section::Backend => 5,
            Section::Pages => 6,
            Section::Design => 7,
            Section::TechStack => 8,
            Section::Additional => 9,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Vision => "Project Vision",
            Section::Branding => "Branding",
            Section::ProductType => "Product Type",
            Section::Features => "Features",
            Section::Backend => "Backend",
            Section::Pages => "Pages",
            Section::Design => "Design",
            Section::TechStack => "Tech Stack",
            Section::Additional => "Additional",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl TryFrom<u8> for Section {
    type Error = CoreError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        if !(1..=TOTAL_SECTIONS).contains(&number) {
            return Err(CoreError::InvalidSection(number));
        }
        Ok(Section::ALL[usize::from(number - 1)])
    }
}

/// A single failed field constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Validation outcome for one section
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionReport {
    pub section: Section,
    pub errors: Vec<FieldError>,
}

impl SectionReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Collects failed constraints for one section
struct Checker {
    errors: Vec<FieldError>,
}

impl Checker {
    fn new() -> Self {
        Self { errors: Vec::new() }
    }

    fn require(&mut self, ok: bool, field: &'static str, message: &'static str) {
        if !ok {
            self.errors.push(FieldError { field, message });
        }
    }

    fn min_len(&mut self, value: &str, min: usize, field: &'static str, message: &'static str) {
        self.require(char_len(value) >= min, field, message);
    }
}

/// Validate one section of the record
pub fn validate_section(record: &AnswerRecord, section: Section) -> SectionReport {
    let mut c = Checker::new();

    match section {
        Section::Vision => {
            c.min_len(&record.app_name, 2, "appName", "App name must be at least 2 characters");
            c.min_len(&record.tagline, 5, "tagline", "Tagline must be at least 5 characters");
            c.min_len(
                &record.elevator_pitch,
                20,
                "elevatorPitch",
                "Elevator pitch must be at least 20 characters",
            );
            c.min_len(
                &record.problem_solved,
                10,
                "problemSolved",
                "Problem solved must be at least 10 characters",
            );
            c.min_len(
                &record.competitive_advantage,
                10,
                "competitiveAdvantage",
                "Competitive advantage must be at least 10 characters",
            );
            c.min_len(
                &record.target_audience,
                10,
                "targetAudience",
                "Target audience must be at least 10 characters",
            );
            c.require(record.difficulty.is_known(), "difficulty", "Select a difficulty level");
        }
        Section::Branding => {
            c.min_len(&record.primary_color, 7, "primaryColor", "Select a primary color");
            c.require(
                record.accent_colors.len() <= MAX_ACCENT_COLORS,
                "accentColors",
                "Maximum 3 accent colors",
            );
            c.require(
                !record.design_vibe.is_empty(),
                "designVibe",
                "Select at least one design vibe",
            );
            c.min_len(&record.typography, 1, "typography", "Select typography preference");
            c.min_len(&record.brand_voice, 1, "brandVoice", "Select brand voice");
            c.require(
                record.background_style.is_known(),
                "backgroundStyle",
                "Select background style",
            );
        }
        Section::ProductType => {
            c.require(record.category.is_known(), "category", "Select product category");
            c.require(record.auth_type.is_known(), "authType", "Select authentication type");
            c.require(
                record.team_structure.is_known(),
                "teamStructure",
                "Select team structure",
            );
            c.require(
                record.scalability.is_known(),
                "scalability",
                "Select scalability requirements",
            );
            if matches!(record.auth_type, AuthType::Oauth | AuthType::SocialLogin) {
                c.require(
                    record.auth_provider.is_set(),
                    "authProvider",
                    "Auth provider is required for OAuth/social login",
                );
            }
        }
        Section::Features => {
            c.min_len(
                &record.primary_features,
                20,
                "primaryFeatures",
                "Primary features must be at least 20 characters",
            );
            c.min_len(
                &record.user_flows,
                20,
                "userFlows",
                "User flows must be at least 20 characters",
            );
            c.require(
                record.monetization.is_known(),
                "monetization",
                "Select monetization model",
            );
        }
        Section::Backend => {
            c.require(
                !record.user_data_storage || record.has_database(),
                "databasePreference",
                "Database preference is required when storing user data",
            );
            c.require(
                !record.has_file_uploads() || !record.storage_solution.is_empty(),
                "storageSolution",
                "Storage solution is required when enabling file uploads",
            );
            c.require(
                !record.has_realtime_features() || !record.realtime_solution.is_empty(),
                "realtimeSolution",
                "Real-time solution is required when enabling real-time features",
            );
        }
        Section::Pages => {
            c.min_len(
                &record.must_have_pages,
                10,
                "mustHavePages",
                "Must have pages must be at least 10 characters",
            );
            c.min_len(
                &record.navigation_structure,
                1,
                "navigationStructure",
                "Select navigation structure",
            );
            c.min_len(
                &record.hero_headline,
                5,
                "heroHeadline",
                "Hero headline must be at least 5 characters",
            );
            c.min_len(&record.hero_image_style, 1, "heroImageStyle", "Select hero image style");
        }
        Section::Design => {
            c.require(
                record.mobile_desktop.is_known(),
                "mobileDesktop",
                "Select mobile or desktop first",
            );
            c.require(
                record.loading_preference.is_known(),
                "loadingPreference",
                "Select loading preference",
            );
        }
        Section::TechStack => {
            c.require(
                record.deployment_target.is_known(),
                "deploymentTarget",
                "Select deployment target",
            );
        }
        Section::Additional => {}
    }

    SectionReport {
        section,
        errors: c.errors,
    }
}

/// Validate every section in questionnaire order
pub fn validate_all(record: &AnswerRecord) -> Vec<SectionReport> {
    Section::ALL
        .iter()
        .map(|section| validate_section(record, *section))
        .collect()
}

/// Fail with the section's field errors if it does not validate
pub fn ensure_valid(record: &AnswerRecord, section: Section) -> Result<(), ValidationError> {
    let report = validate_section(record, section);
    if report.is_valid() {
        Ok(())
    } else {
        Err(ValidationError::Section {
            section,
            errors: report.errors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AuthProvider, ProductCategory};
    use rstest::rstest;

    fn field_names(report: &SectionReport) -> Vec<&'static str> {
        report.errors.iter().map(|e| e.field).collect()
    }

    #[test]
    fn test_empty_vision_reports_every_text_field() {
        let report = validate_section(&AnswerRecord::default(), Section::Vision);

        assert_eq!(
            field_names(&report),
            vec![
                "appName",
                "tagline",
                "elevatorPitch",
                "problemSolved",
                "competitiveAdvantage",
                "targetAudience"
            ]
        );
    }

    #[test]
    fn test_backend_cross_field_requirements() {
        let record = AnswerRecord {
            user_data_storage: true,
            file_uploads: vec!["avatars".to_string()],
            realtime_features: vec!["chat".to_string()],
            ..Default::default()
        };

        let report = validate_section(&record, Section::Backend);
        assert_eq!(
            field_names(&report),
            vec!["databasePreference", "storageSolution", "realtimeSolution"]
        );

        let fixed = AnswerRecord {
            database_preference: "supabase".to_string(),
            storage_solution: "s3".to_string(),
            realtime_solution: "pusher".to_string(),
            ..record
        };
        assert!(validate_section(&fixed, Section::Backend).is_valid());
    }

    #[rstest]
    #[case(AuthType::Oauth, AuthProvider::Unset, false)]
    #[case(AuthType::SocialLogin, AuthProvider::Unset, false)]
    #[case(AuthType::Oauth, AuthProvider::Auth0, true)]
    #[case(AuthType::EmailPassword, AuthProvider::Unset, true)]
    fn test_oauth_requires_provider(
        #[case] auth_type: AuthType,
        #[case] auth_provider: AuthProvider,
        #[case] valid: bool,
    ) {
        let record = AnswerRecord {
            auth_type,
            auth_provider,
            ..Default::default()
        };

        assert_eq!(validate_section(&record, Section::ProductType).is_valid(), valid);
    }

    #[test]
    fn test_unknown_category_fails_product_type() {
        let record = AnswerRecord {
            category: ProductCategory::Unknown,
            ..Default::default()
        };

        let report = validate_section(&record, Section::ProductType);
        assert_eq!(field_names(&report), vec!["category"]);
    }

    #[test]
    fn test_accent_color_limit() {
        let record = AnswerRecord {
            accent_colors: vec!["#000000".into(), "#111111".into(), "#222222".into(), "#333333".into()],
            design_vibe: vec!["modern-minimal".into()],
            ..Default::default()
        };

        let report = validate_section(&record, Section::Branding);
        assert_eq!(field_names(&report), vec!["accentColors"]);
    }

    #[test]
    fn test_defaults_pass_select_only_sections() {
        let record = AnswerRecord::default();

        for section in [Section::ProductType, Section::Design, Section::TechStack, Section::Additional] {
            assert!(validate_section(&record, section).is_valid(), "{} should pass", section);
        }
    }

    #[test]
    fn test_validate_all_covers_nine_sections() {
        let reports = validate_all(&AnswerRecord::default());
        assert_eq!(reports.len(), usize::from(TOTAL_SECTIONS));
        assert_eq!(reports[0].section, Section::Vision);
        assert_eq!(reports[8].section, Section::Additional);
    }

    #[test]
    fn test_ensure_valid_returns_section_error() {
        let err = ensure_valid(&AnswerRecord::default(), Section::Features).unwrap_err();

        let ValidationError::Section { section, errors } = &err;
        assert_eq!(*section, Section::Features);
        assert_eq!(errors.len(), 2);
        assert!(err.to_string().contains("primaryFeatures"));
    }

    #[test]
    fn test_section_numbers_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::try_from(section.number()).unwrap(), section);
        }
        assert!(Section::try_from(0).is_err());
        assert!(Section::try_from(TOTAL_SECTIONS + 1).is_err());
    }
}
