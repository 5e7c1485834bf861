use crate::commands::{
    analyze_command, catalog_command, catalog_names, complete_command, defaults_command,
    load_record, suggest_command, template_show_command, templates_list_command,
    validate_command,
};
use crate::config::OutputFormat;
use crate::error::CliError;
use architect_core::{AnswerRecord, CoreError, ProductCategory};
use pretty_assertions::assert_eq;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

fn write_record(json: &serde_json::Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", json).unwrap();
    file
}

fn complete_record() -> serde_json::Value {
    serde_json::json!({
        "appName": "Tally",
        "tagline": "Invoices your clients actually pay",
        "elevatorPitch": "Tally sends invoices and chases late payments for freelancers",
        "problemSolved": "Freelancers lose hours chasing unpaid invoices",
        "competitiveAdvantage": "Automatic reminders tuned per client",
        "targetAudience": "Independent designers and developers",
        "designVibe": ["modern-minimal"],
        "primaryFeatures": "Invoice builder with branded templates",
        "userFlows": "Create invoice, send to client, get paid",
        "mustHavePages": "Dashboard, invoices, settings",
        "heroHeadline": "Get paid on time",
        "userDataStorage": true,
        "databasePreference": "supabase",
        "securityRequirements": ["auth", "encryption"]
    })
}

#[test]
fn test_load_record_missing_file() {
    let err = load_record(Path::new("/nonexistent/answers.json")).unwrap_err();
    assert!(matches!(err, CliError::Io { .. }));
}

#[test]
fn test_load_record_malformed_json() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();

    let err = load_record(file.path()).unwrap_err();
    assert!(matches!(err, CliError::Record(CoreError::Serialization(_))));
}

#[test]
fn test_load_record_with_null_fields() {
    let mut record = complete_record();
    record["paymentIntegration"] = serde_json::Value::Null;
    record["fileUploads"] = serde_json::Value::Null;
    record["competitors"] = serde_json::Value::Null;
    let file = write_record(&record);

    let loaded = load_record(file.path()).unwrap();
    assert_eq!(loaded.app_name, "Tally");
    assert!(loaded.payment_integration.is_empty());
    assert!(loaded.file_uploads.is_empty());
    assert!(loaded.competitors.is_empty());

    assert!(analyze_command(file.path(), OutputFormat::Json, true).is_ok());
}

#[test]
fn test_analyze_json_output() {
    let file = write_record(&complete_record());

    let output = analyze_command(file.path(), OutputFormat::Json, true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["inference"]["database"], "Supabase (PostgreSQL) or Firebase Firestore");
    assert!(value["cost"]["monthlyTotal"].is_u64());
    assert!(value["seo"]["score"].as_u64().unwrap() <= 100);
}

#[test]
fn test_analyze_table_output_names_the_project() {
    let file = write_record(&complete_record());

    let output = analyze_command(file.path(), OutputFormat::Table, false).unwrap();

    assert!(output.contains("Tally"));
    assert!(output.contains("Technology Stack"));
    assert!(output.contains("Supabase (PostgreSQL) or Firebase Firestore"));
}

#[test]
fn test_analyze_strict_rejects_invalid_record() {
    let file = write_record(&serde_json::json!({ "appName": "X" }));

    let err = analyze_command(file.path(), OutputFormat::Json, true).unwrap_err();
    assert!(matches!(err, CliError::StrictValidation(n) if n > 0));

    // Without strict mode the same record still analyzes
    assert!(analyze_command(file.path(), OutputFormat::Json, false).is_ok());
}

#[test]
fn test_validate_single_section() {
    let file = write_record(&serde_json::json!({ "appName": "X" }));

    let output = validate_command(file.path(), Some(1), OutputFormat::Json).unwrap();
    let reports: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(reports.as_array().unwrap().len(), 1);
    assert_eq!(reports[0]["section"], "vision");
    assert_eq!(reports[0]["errors"][0]["field"], "appName");
}

#[test]
fn test_validate_rejects_unknown_section() {
    let file = write_record(&complete_record());

    let err = validate_command(file.path(), Some(12), OutputFormat::Table).unwrap_err();
    assert!(matches!(err, CliError::Record(CoreError::InvalidSection(12))));
}

#[test]
fn test_suggest_output() {
    let file = write_record(&serde_json::json!({ "category": "ecommerce" }));

    let output = suggest_command(file.path(), OutputFormat::Json).unwrap();
    let suggestions: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(suggestions[0]["field"], "paymentIntegration");
    assert_eq!(suggestions[0]["value"], "stripe");
}

#[test]
fn test_templates() {
    let list = templates_list_command(OutputFormat::Json).unwrap();
    assert!(list.contains("saas-mvp"));

    let shown = template_show_command("portfolio").unwrap();
    let record = AnswerRecord::from_json(&shown).unwrap();
    assert_eq!(record.category, ProductCategory::Portfolio);

    let err = template_show_command("crm").unwrap_err();
    assert!(matches!(err, CliError::Record(CoreError::TemplateNotFound(_))));
}

#[test]
fn test_catalog_lookup() {
    let output = catalog_command("deploymentTarget", OutputFormat::Table).unwrap();
    assert!(output.contains("self-hosted"));

    assert!(catalog_names().contains(&"category"));
    assert!(matches!(
        catalog_command("colours", OutputFormat::Json).unwrap_err(),
        CliError::UnknownCatalog(_)
    ));
}

#[test]
fn test_complete_and_defaults() {
    assert_eq!(complete_command("apis", "GitHub"), "github api");

    let defaults = defaults_command().unwrap();
    assert_eq!(AnswerRecord::from_json(&defaults).unwrap(), AnswerRecord::default());
}
