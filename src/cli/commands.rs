//! Command execution
//!
//! Wires the configuration, engine, insight provider, history store and
//! output layers together for each subcommand.

use std::path::PathBuf;

use crate::cli::args::{AnalyzeArgs, Cli, CliCommand};
use crate::config;
use crate::core::AnalysisEngine;
use crate::error::Result;
use crate::insight::OpenAiProvider;
use crate::models::config::{OutputFormat, Settings};
use crate::output::{create_formatter, create_writer, ProgressReporter};
use crate::storage::{JsonHistoryStore, ProfileStore};
use crate::{NAME, VERSION};

/// Execute the parsed command line
pub fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        CliCommand::Analyze(ref args) => {
            let partial = args.to_partial_settings(cli.quiet, cli.verbose);
            let settings = config::load_config(cli.config.as_deref(), partial)?;
            run_analyze(args, settings)
        }
        CliCommand::History(ref args) => {
            let partial = args.to_partial_settings(cli.quiet, cli.verbose);
            let settings = config::load_config(cli.config.as_deref(), partial)?;
            run_history(settings)
        }
        CliCommand::Init => run_init(),
    }
}

/// Analyze one repository and print or save the profile
fn run_analyze(args: &AnalyzeArgs, settings: Settings) -> Result<()> {
    if !settings.quiet {
        println!("{} v{} - repository profiler", NAME, VERSION);
        println!("Analyzing: {}", args.url);
        if settings.verbose {
            println!("  Fetch timeout: {}s", settings.fetch_timeout_secs);
            println!("  Insight: {}", if settings.insight_enabled { "enabled" } else { "disabled" });
            println!("  Output format: {}", settings.output_format);
        }
    }

    let provider = OpenAiProvider::from_settings(&settings)?;
    let engine = AnalysisEngine::new(settings.clone(), &provider);

    let progress = ProgressReporter::new(!settings.quiet && settings.show_progress);
    progress.phase(format!("Fetching {}", args.url));
    let profile = match engine.analyze(&args.url) {
        Ok(profile) => {
            progress.finish();
            profile
        }
        Err(err) => {
            progress.finish();
            return Err(err);
        }
    };

    let store = history_store(&settings);
    if let Err(err) = store.save(&profile) {
        // A damaged history never blocks delivering the profile
        tracing::warn!(error = %err, "failed to persist profile");
        if !settings.quiet {
            eprintln!("Warning: {}", err.user_message());
        }
    }

    let formatter = create_formatter(&settings.output_format, settings.use_colors, settings.verbose);
    let formatted = formatter.format(&profile)?;

    let writer = create_writer(settings.output_file.as_ref());
    writer.write(&formatted)?;

    if let Some(path) = &settings.output_file {
        if !settings.quiet {
            println!("Profile written to: {}", path.display());
        }
    }

    Ok(())
}

/// Print the most recent analyses
fn run_history(settings: Settings) -> Result<()> {
    let store = history_store(&settings);
    let profiles = store.recent(settings.history_limit)?;

    if profiles.is_empty() {
        if !settings.quiet {
            println!("No analyses recorded yet.");
        }
        return Ok(());
    }

    match settings.output_format {
        OutputFormat::Json => {
            let formatted = serde_json::to_string_pretty(&profiles)?;
            create_writer(settings.output_file.as_ref()).write(&formatted)?;
        }
        OutputFormat::Text => {
            println!("Recent analyses ({}):", profiles.len());
            for profile in &profiles {
                println!(
                    "  {}  {:<24} {:<20} {} files",
                    profile.created_at.format("%Y-%m-%d %H:%M"),
                    profile.repo_name,
                    profile.framework,
                    profile.file_count()
                );
            }
        }
    }

    Ok(())
}

/// Create a default configuration file in the current directory
fn run_init() -> Result<()> {
    let config_path = PathBuf::from(config::parser::DEFAULT_CONFIG_FILE);

    if config_path.exists() {
        println!("Configuration file already exists at: {}", config_path.display());
        println!("To overwrite it, delete the file first and run this command again.");
        return Ok(());
    }

    config::create_default_config(&config_path)?;

    println!("Created default configuration file at: {}", config_path.display());
    println!("\nEdit this file to configure repolens, for example:");
    println!("  - output_format: profile output format (text, json)");
    println!("  - fetch_timeout_secs: remote fetch timeout");
    println!("  - model / api_base_url / api_key: insight provider");
    println!("  - history_file / history_limit: analysis history");

    Ok(())
}

/// Resolve the history store from settings
fn history_store(settings: &Settings) -> JsonHistoryStore {
    match &settings.history_file {
        Some(path) => JsonHistoryStore::new(path),
        None => JsonHistoryStore::new(JsonHistoryStore::default_path()),
    }
}
