// ABOUTME: Human-readable rendering of analyses, validation reports, and catalogs
// ABOUTME: Builds comfy-table tables with colored headings for terminal output

use architect_core::{catalogs, CatalogOption, CatalogValue, SectionReport, Template};
use architect_engine::{ProjectAnalysis, RiskLevel, SeoGrade, Severity, Suggestion};
use colored::*;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn severity_label(severity: Severity) -> ColoredString {
    match severity {
        Severity::High => severity.as_str().red().bold(),
        Severity::Medium => severity.as_str().yellow(),
        Severity::Low => severity.as_str().dimmed(),
    }
}

fn risk_label(level: RiskLevel) -> ColoredString {
    match level {
        RiskLevel::High => level.as_str().to_uppercase().red().bold(),
        RiskLevel::Medium => level.as_str().to_uppercase().yellow().bold(),
        RiskLevel::Low => level.as_str().to_uppercase().green().bold(),
    }
}

fn grade_label(grade: SeoGrade) -> ColoredString {
    match grade {
        SeoGrade::A | SeoGrade::B => grade.as_str().green().bold(),
        SeoGrade::C | SeoGrade::D => grade.as_str().yellow().bold(),
        SeoGrade::F => grade.as_str().red().bold(),
    }
}

pub fn render_analysis(title: &str, analysis: &ProjectAnalysis) -> String {
    let mut sections = vec![format!("{}\n", format!("📐 {}", title).blue().bold())];

    let inference = &analysis.inference;
    let mut stack = new_table();
    stack.set_header(vec!["Concern", "Recommendation"]);
    for (concern, recommendation) in [
        ("Database", &inference.database),
        ("Authentication", &inference.auth),
        ("Storage", &inference.storage),
        ("Real-time", &inference.realtime),
        ("Payments", &inference.payments),
        ("Email", &inference.email),
        ("Calendar", &inference.calendar),
    ] {
        stack.add_row(vec![concern, recommendation.as_str()]);
    }
    sections.push(format!("{}\n{}\n", "Technology Stack".bold(), stack));

    let mut cost = new_table();
    cost.set_header(vec!["Cost Line", "Monthly (USD)", "Zero-cost Alternative"]);
    for item in &analysis.cost_items {
        cost.add_row(vec![
            item.name.to_string(),
            item.cost.to_string(),
            item.zero_cost_alternative.unwrap_or("-").to_string(),
        ]);
    }
    cost.add_row(vec![
        "Total".to_string(),
        analysis.cost.monthly_total.to_string(),
        format!("{}: {}", analysis.cost_tier, analysis.cost_tier.description()),
    ]);
    sections.push(format!(
        "{}\n  Complexity: {:.2} ({})\n  MVP: {} · Production: {} · Tier: {} ({})\n{}\n",
        "Estimates".bold(),
        analysis.complexity,
        analysis.team_size,
        analysis.time.mvp,
        analysis.time.production,
        analysis.time_tier,
        analysis.time_tier.description(),
        cost
    ));

    let mut risk_section = format!("{} {}\n", "Risk Level:".bold(), risk_label(analysis.risks.level));
    if !analysis.risks.issues.is_empty() {
        let mut risks = new_table();
        risks.set_header(vec!["Severity", "Category", "Issue", "Mitigation"]);
        for issue in &analysis.risks.issues {
            risks.add_row(vec![
                severity_label(issue.severity).to_string(),
                issue.category.clone(),
                issue.description.clone(),
                issue.mitigation.clone().unwrap_or_default(),
            ]);
        }
        risk_section.push_str(&format!("{}\n", risks));
    }
    sections.push(risk_section);

    let mut seo_section = format!(
        "{} {}/100 (grade {})\n",
        "SEO Score:".bold(),
        analysis.seo.score,
        grade_label(analysis.seo.grade)
    );
    for issue in &analysis.seo.issues {
        seo_section.push_str(&format!(
            "  [{}] {}: {}\n",
            severity_label(issue.impact),
            issue.category,
            issue.description
        ));
    }
    sections.push(seo_section);

    if !analysis.inference.suggestions.is_empty() {
        sections.push(format!(
            "{}\n{}",
            "Suggestions".bold(),
            render_suggestions(&analysis.inference.suggestions)
        ));
    }

    sections.join("\n")
}

/// Suggested values show their catalog label when the field has a catalog
pub fn render_suggestions(suggestions: &[Suggestion]) -> String {
    if suggestions.is_empty() {
        return format!("{}\n", "No suggestions, the answers look complete".green());
    }

    let mut table = new_table();
    table.set_header(vec!["Field", "Value", "Confidence", "Reason"]);
    for s in suggestions {
        let value = match catalogs::catalog(&s.field) {
            Some(options) => catalogs::label_for(options, &s.value),
            None => s.value.as_str(),
        };
        table.add_row(vec![
            s.field.clone(),
            value.to_string(),
            format!("{:.0}%", s.confidence * 100.0),
            s.reason.clone(),
        ]);
    }
    format!("{}\n", table)
}

pub fn render_validation(reports: &[SectionReport]) -> String {
    let mut table = new_table();
    table.set_header(vec!["#", "Section", "Status", "Problems"]);

    for report in reports {
        let status = if report.is_valid() {
            "✓ valid".green().to_string()
        } else {
            format!("✗ {} invalid", report.errors.len()).red().to_string()
        };
        let problems = report
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("\n");

        table.add_row(vec![
            report.section.number().to_string(),
            report.section.title().to_string(),
            status,
            problems,
        ]);
    }

    format!("{}\n", table)
}

pub fn render_templates(templates: &[Template]) -> String {
    let mut table = new_table();
    table.set_header(vec!["ID", "Name", "Category", "Description"]);
    for t in templates {
        table.add_row(vec![t.id, t.name, t.category.as_str(), t.description]);
    }
    format!("{}\n", table)
}

pub fn render_catalog(name: &str, options: &[CatalogOption]) -> String {
    let mut table = new_table();
    table.set_header(vec!["Value", "Label", "Description"]);
    for option in options {
        table.add_row(vec![
            option.value,
            option.label,
            option.description.unwrap_or(""),
        ]);
    }
    format!("{}\n{}\n", format!("🗂  {}", name).blue().bold(), table)
}
