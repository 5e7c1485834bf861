// ABOUTME: Technology inference from questionnaire answers
// ABOUTME: First-match decision trees recommending database, auth, storage, realtime, payments, email, calendar

use crate::policy::{REALTIME_POLICY, STORAGE_POLICY};
use crate::suggestions::{suggest, Suggestion};
use architect_core::{AnswerRecord, AuthProvider, AuthType, MonetizationModel, Scalability, TeamStructure};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const NOT_REQUIRED: &str = "Not required";

/// Recommended technology per concern, plus advisory suggestions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceResult {
    pub database: String,
    pub auth: String,
    pub storage: String,
    pub realtime: String,
    pub payments: String,
    pub email: String,
    pub calendar: String,
    pub suggestions: Vec<Suggestion>,
}

/// Derive every technology recommendation for a record
pub fn infer(record: &AnswerRecord) -> InferenceResult {
    let result = InferenceResult {
        database: infer_database(record).to_string(),
        auth: infer_auth(record),
        storage: infer_storage(record).to_string(),
        realtime: infer_realtime(record).to_string(),
        payments: infer_payments(record).to_string(),
        email: infer_email(record).to_string(),
        calendar: infer_calendar(record).to_string(),
        suggestions: suggest(record),
    };

    debug!(
        database = %result.database,
        auth = %result.auth,
        suggestions = result.suggestions.len(),
        "Inferred technology stack"
    );

    result
}

pub fn infer_database(record: &AnswerRecord) -> &'static str {
    if !record.user_data_storage {
        return "None required";
    }

    if record.has_realtime_features() {
        return "Supabase (PostgreSQL with Realtime support)";
    }

    match record.scalability {
        Scalability::Enterprise => "PostgreSQL with connection pooling",
        Scalability::Production => "PostgreSQL or MongoDB Atlas",
        _ => "Supabase (PostgreSQL) or Firebase Firestore",
    }
}

pub fn infer_auth(record: &AnswerRecord) -> String {
    match record.auth_type {
        AuthType::None => "No authentication required".to_string(),
        AuthType::MagicLink => "Supabase Auth with Magic Links".to_string(),
        AuthType::Oauth | AuthType::SocialLogin => {
            let provider = match &record.auth_provider {
                AuthProvider::Unset => "An OAuth-capable auth provider",
                provider => provider.display_name(),
            };
            format!("{} with OAuth providers (Google, GitHub, etc.)", provider)
        }
        AuthType::EmailPassword => {
            if record.scalability == Scalability::Enterprise {
                "Auth0 Enterprise or Clerk Enterprise".to_string()
            } else if record.team_structure == TeamStructure::OrganizationHierarchy {
                "Clerk with organization support".to_string()
            } else {
                "Clerk or Supabase Auth with email/password".to_string()
            }
        }
        AuthType::Unknown => "NextAuth.js with email/password".to_string(),
    }
}

pub fn infer_storage(record: &AnswerRecord) -> &'static str {
    if !record.has_file_uploads() {
        return NOT_REQUIRED;
    }
    STORAGE_POLICY.recommend(&record.file_uploads)
}

pub fn infer_realtime(record: &AnswerRecord) -> &'static str {
    if !record.has_realtime_features() {
        return NOT_REQUIRED;
    }
    REALTIME_POLICY.recommend(&record.realtime_features)
}

/// The explicit payment choice wins; otherwise decided by monetization
pub fn infer_payments(record: &AnswerRecord) -> &str {
    if record.has_payment_integration() {
        return &record.payment_integration;
    }

    match record.monetization {
        MonetizationModel::Free | MonetizationModel::Ads => NOT_REQUIRED,
        _ => "Stripe (recommended) or Paddle",
    }
}

pub fn infer_email(record: &AnswerRecord) -> &'static str {
    if record.has_email_notifications() {
        "Resend or SendGrid"
    } else {
        NOT_REQUIRED
    }
}

pub fn infer_calendar(record: &AnswerRecord) -> &'static str {
    if record.has_calendar_integration() {
        "Cal.com API or Google Calendar API"
    } else {
        NOT_REQUIRED
    }
}
