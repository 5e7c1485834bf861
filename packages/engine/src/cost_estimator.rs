// ABOUTME: Monthly running-cost estimate from provider choices and scale
// ABOUTME: Five additive cost lines, a tier classifier, and zero-cost alternatives per line

use architect_core::{utils::contains_value, AnswerRecord, DeploymentTarget, Scalability};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Monthly USD per cost line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub hosting: u32,
    pub database: u32,
    pub storage: u32,
    pub email: u32,
    pub other: u32,
}

impl CostBreakdown {
    pub fn total(&self) -> u32 {
        self.hosting + self.database + self.storage + self.email + self.other
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostEstimate {
    pub monthly_total: u32,
    pub breakdown: CostBreakdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostTier {
    Free,
    Low,
    Medium,
    High,
    Enterprise,
}

impl CostTier {
    pub fn label(&self) -> &'static str {
        match self {
            CostTier::Free => "Free",
            CostTier::Low => "Low",
            CostTier::Medium => "Medium",
            CostTier::High => "High",
            CostTier::Enterprise => "Enterprise",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CostTier::Free => "All services can be run on free tiers",
            CostTier::Low => "Affordable, suitable for MVP",
            CostTier::Medium => "Moderate costs, good for beta",
            CostTier::High => "Significant investment, production-ready",
            CostTier::Enterprise => "Enterprise-level costs",
        }
    }
}

impl fmt::Display for CostTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A named cost line for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostLineItem {
    pub name: &'static str,
    pub cost: u32,
    /// Present only when the line costs something
    pub zero_cost_alternative: Option<&'static str>,
}

fn hosting_cost(record: &AnswerRecord) -> u32 {
    let mvp = record.scalability == Scalability::Mvp;
    match record.deployment_target {
        DeploymentTarget::Vercel if mvp => 0,
        DeploymentTarget::Vercel => 20,
        DeploymentTarget::Netlify if mvp => 0,
        DeploymentTarget::Netlify => 19,
        DeploymentTarget::Aws => 50,
        DeploymentTarget::SelfHosted => 30,
        DeploymentTarget::Unknown => 0,
    }
}

fn database_cost(record: &AnswerRecord) -> u32 {
    if !record.user_data_storage {
        return 0;
    }

    match record.database_preference.as_str() {
        "supabase" | "firebase" if record.scalability == Scalability::Mvp => 0,
        "supabase" | "firebase" => 25,
        "postgresql" | "planetscale" => 15,
        "mongodb" => 57,
        _ => 0,
    }
}

fn storage_cost(record: &AnswerRecord) -> u32 {
    if !record.has_file_uploads() {
        return 0;
    }

    match record.storage_solution.as_str() {
        "cloudinary" => 89,
        "s3" => 20,
        "supabase-storage" | "firebase-storage" => 5,
        _ => 0,
    }
}

/// Priced email providers in precedence order
const EMAIL_PRICING: &[(&str, u32)] = &[("resend", 20), ("sendgrid", 15), ("ses", 10), ("novu", 50)];

fn email_cost(record: &AnswerRecord) -> u32 {
    EMAIL_PRICING
        .iter()
        .find(|(provider, _)| contains_value(&record.email_notifications, provider))
        .map(|(_, cost)| *cost)
        .unwrap_or(0)
}

fn other_cost(record: &AnswerRecord) -> u32 {
    let realtime = if record.has_realtime_features() {
        match record.realtime_solution.as_str() {
            "pusher" => 50,
            "socket.io" => 30,
            _ => 0,
        }
    } else {
        0
    };

    let analytics = match record.analytics_integration.as_str() {
        "amplitude" => 49,
        _ => 0,
    };

    let error_tracking = match record.error_tracking.as_str() {
        "sentry" => 26,
        "logrocket" => 99,
        _ => 0,
    };

    realtime + analytics + error_tracking
}

pub fn estimate_cost(record: &AnswerRecord) -> CostEstimate {
    let breakdown = CostBreakdown {
        hosting: hosting_cost(record),
        database: database_cost(record),
        storage: storage_cost(record),
        email: email_cost(record),
        other: other_cost(record),
    };
    let monthly_total = breakdown.total();

    debug!(monthly_total, ?breakdown, "Estimated monthly cost");

    CostEstimate {
        monthly_total,
        breakdown,
    }
}

pub fn cost_tier(monthly_total: u32) -> CostTier {
    match monthly_total {
        0 => CostTier::Free,
        1..=49 => CostTier::Low,
        50..=149 => CostTier::Medium,
        150..=299 => CostTier::High,
        _ => CostTier::Enterprise,
    }
}

pub fn cost_breakdown_items(breakdown: &CostBreakdown) -> Vec<CostLineItem> {
    let item = |name, cost: u32, alternative| CostLineItem {
        name,
        cost,
        zero_cost_alternative: (cost != 0).then_some(alternative),
    };

    vec![
        item("Hosting", breakdown.hosting, "Vercel/Netlify free tier"),
        item("Database", breakdown.database, "Supabase/Firebase free tier"),
        item("Storage", breakdown.storage, "Supabase Storage free tier"),
        item("Email/Notifications", breakdown.email, "Resend/Postmark free tier"),
        item("Other Services", breakdown.other, "Open source alternatives"),
    ]
}
