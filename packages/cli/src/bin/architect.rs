// ABOUTME: architect command-line entry point
// ABOUTME: Parses subcommands, initializes logging from the environment, and prints command output

use anyhow::Context;
use architect_cli::commands;
use architect_cli::{Config, OutputFormat};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "architect")]
#[command(about = "Architect Prime - plan a web product from questionnaire answers")]
#[command(version)]
struct Cli {
    /// Emit JSON instead of tables (overrides ARCHITECT_OUTPUT)
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Infer a stack and estimate time, cost, risk, and SEO readiness
    Analyze {
        /// Path to an answer record JSON file
        file: PathBuf,
        /// Refuse to analyze records with invalid sections
        #[arg(long)]
        strict: bool,
    },
    /// Check questionnaire field constraints
    Validate {
        file: PathBuf,
        /// Only validate this section (1-9)
        #[arg(long)]
        section: Option<u8>,
    },
    /// Suggest answers the record is probably missing
    Suggest { file: PathBuf },
    /// Quickstart templates
    #[command(subcommand)]
    Templates(TemplatesCommands),
    /// Show the options of a select field, or list catalog names
    Catalog { name: Option<String> },
    /// Autocomplete free-text answers (integrations, features, apis)
    Complete { field: String, query: String },
    /// Print the default answer record
    Defaults,
}

#[derive(Subcommand)]
enum TemplatesCommands {
    /// List all templates
    List,
    /// Print the default record with a template applied
    Show {
        /// Template ID
        id: String,
    },
}

fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match run(cli, &config) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            process::exit(1);
        }
    }
}

fn run(cli: Cli, config: &Config) -> anyhow::Result<String> {
    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output
    };

    let output = match cli.command {
        Commands::Analyze { file, strict } => {
            commands::analyze_command(&file, format, strict || config.strict_validation)
                .with_context(|| format!("analyze {}", file.display()))?
        }
        Commands::Validate { file, section } => {
            commands::validate_command(&file, section, format)?
        }
        Commands::Suggest { file } => commands::suggest_command(&file, format)?,
        Commands::Templates(TemplatesCommands::List) => commands::templates_list_command(format)?,
        Commands::Templates(TemplatesCommands::Show { id }) => {
            commands::template_show_command(&id)?
        }
        Commands::Catalog { name: Some(name) } => commands::catalog_command(&name, format)?,
        Commands::Catalog { name: None } => commands::catalog_names().join("\n"),
        Commands::Complete { field, query } => commands::complete_command(&field, &query),
        Commands::Defaults => commands::defaults_command()?,
    };

    Ok(output)
}
