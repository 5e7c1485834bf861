// ABOUTME: Command implementations behind the architect binary
// ABOUTME: Each command loads its inputs, runs the engines, and returns rendered output

use crate::config::OutputFormat;
use crate::error::{CliError, Result};
use crate::output;
use architect_core::{
    apply_template, catalogs, list_templates, validate_all, validate_section,
    AnswerRecord, Section, SectionReport,
};
use architect_engine::{analyze, autocomplete, suggest};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Read and parse an answer record; missing fields take questionnaire defaults
pub fn load_record(path: &Path) -> Result<AnswerRecord> {
    let contents = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let record = AnswerRecord::from_json(&contents)?;
    debug!(path = %path.display(), app = %record.app_name, "Loaded answer record");
    Ok(record)
}

/// Log every invalid section; in strict mode any invalid section is an error
fn check_validation(record: &AnswerRecord, strict: bool) -> Result<()> {
    let invalid: Vec<SectionReport> = validate_all(record)
        .into_iter()
        .filter(|r| !r.is_valid())
        .collect();

    for report in &invalid {
        let fields: Vec<_> = report.errors.iter().map(|e| e.field).collect();
        warn!(
            section = %report.section,
            fields = %fields.join(", "),
            "Section has invalid fields"
        );
    }

    if strict && !invalid.is_empty() {
        return Err(CliError::StrictValidation(invalid.len()));
    }
    Ok(())
}

pub fn analyze_command(path: &Path, format: OutputFormat, strict: bool) -> Result<String> {
    let record = load_record(path)?;
    check_validation(&record, strict)?;

    let analysis = analyze(&record);

    match format {
        OutputFormat::Json => to_json(&analysis),
        OutputFormat::Table => {
            let title = if record.app_name.is_empty() {
                "Untitled project"
            } else {
                record.app_name.as_str()
            };
            Ok(output::render_analysis(title, &analysis))
        }
    }
}

pub fn validate_command(path: &Path, section: Option<u8>, format: OutputFormat) -> Result<String> {
    let record = load_record(path)?;

    let reports = match section {
        Some(number) => vec![validate_section(&record, Section::try_from(number)?)],
        None => validate_all(&record),
    };

    match format {
        OutputFormat::Json => to_json(&reports),
        OutputFormat::Table => Ok(output::render_validation(&reports)),
    }
}

pub fn suggest_command(path: &Path, format: OutputFormat) -> Result<String> {
    let record = load_record(path)?;
    let suggestions = suggest(&record);

    match format {
        OutputFormat::Json => to_json(&suggestions),
        OutputFormat::Table => Ok(output::render_suggestions(&suggestions)),
    }
}

pub fn templates_list_command(format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(list_templates()),
        OutputFormat::Table => Ok(output::render_templates(list_templates())),
    }
}

/// The default record with the template applied, as JSON
pub fn template_show_command(id: &str) -> Result<String> {
    let record = apply_template(&AnswerRecord::default(), id)?;
    Ok(record.to_json_pretty()?)
}

pub fn catalog_command(name: &str, format: OutputFormat) -> Result<String> {
    let options = catalogs::catalog(name).ok_or_else(|| CliError::UnknownCatalog(name.to_string()))?;

    match format {
        OutputFormat::Json => to_json(options),
        OutputFormat::Table => Ok(output::render_catalog(name, options)),
    }
}

pub fn catalog_names() -> Vec<&'static str> {
    catalogs::ALL_CATALOGS.iter().map(|(name, _)| *name).collect()
}

pub fn complete_command(field: &str, query: &str) -> String {
    autocomplete(field, query).join("\n")
}

pub fn defaults_command() -> Result<String> {
    Ok(AnswerRecord::default().to_json_pretty()?)
}
