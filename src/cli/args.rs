//! Command-line argument parsing

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::models::config::{OutputFormat, PartialSettings};

/// repolens - remote repository profiler
#[derive(Parser, Debug)]
#[command(name = "repolens")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Profile a remote repository: frameworks, entry points and import maps")]
#[command(long_about = "repolens fetches a shallow snapshot of a remote repository and produces a \
structured profile: detected frameworks, conventional entry points, a per-file import inventory \
and an aggregated dependency map, optionally enriched with an AI-generated summary.")]
#[command(after_help = "EXAMPLES:

Basic Usage:
    # Analyze a repository and print a text profile
    repolens analyze https://github.com/acme/widgets

    # Machine-readable output
    repolens analyze https://github.com/acme/widgets --output json

    # Save the profile to a file
    repolens analyze https://github.com/acme/widgets --output json --output-file profile.json

    # Skip the AI insight pass
    repolens analyze https://github.com/acme/widgets --no-insight

History:
    # Show the most recent analyses
    repolens history

    # Show the last five
    repolens history --limit 5

Configuration:
    # Create a default configuration file (.repolens.toml)
    repolens init

    # Use a specific configuration file
    repolens analyze https://github.com/acme/widgets --config ./repolens.toml
")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Show detailed progress and debug information
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Analyze a remote repository and print its profile
    Analyze(AnalyzeArgs),
    /// Show recently analyzed repositories
    History(HistoryArgs),
    /// Create a default configuration file in the current directory
    Init,
}

#[derive(clap::Args, Debug)]
pub struct AnalyzeArgs {
    /// Repository location (any URL git can clone)
    pub url: String,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputArg>,

    /// Output file path (stdout if not specified)
    #[arg(long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Skip the AI insight request
    #[arg(long)]
    pub no_insight: bool,

    /// Model identifier requested from the insight provider
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Remote fetch timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Disable colored output
    #[arg(long)]
    pub no_colors: bool,

    /// Disable the progress spinner
    #[arg(long)]
    pub no_progress: bool,

    /// History file to append the profile to
    #[arg(long, value_name = "FILE")]
    pub history_file: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct HistoryArgs {
    /// Maximum number of profiles to show
    #[arg(short, long, value_name = "N")]
    pub limit: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputArg>,

    /// History file to read
    #[arg(long, value_name = "FILE")]
    pub history_file: Option<PathBuf>,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Text => OutputFormat::Text,
            OutputArg::Json => OutputFormat::Json,
        }
    }
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

impl AnalyzeArgs {
    /// Convert analyze flags into partial settings for config merging
    pub fn to_partial_settings(&self, global_quiet: bool, global_verbose: bool) -> PartialSettings {
        let mut partial = PartialSettings::default();
        partial.output_format = self.output.map(Into::into);
        partial.output_file = self.output_file.clone();
        partial.fetch_timeout_secs = self.timeout;
        partial.model = self.model.clone();
        partial.history_file = self.history_file.clone();
        if self.no_insight {
            partial.insight_enabled = Some(false);
        }
        if self.no_colors {
            partial.use_colors = Some(false);
        }
        if self.no_progress {
            partial.show_progress = Some(false);
        }
        if global_quiet {
            partial.quiet = Some(true);
        }
        if global_verbose {
            partial.verbose = Some(true);
        }
        partial
    }
}

impl HistoryArgs {
    /// Convert history flags into partial settings for config merging
    pub fn to_partial_settings(&self, global_quiet: bool, global_verbose: bool) -> PartialSettings {
        let mut partial = PartialSettings::default();
        partial.output_format = self.output.map(Into::into);
        partial.history_limit = self.limit;
        partial.history_file = self.history_file.clone();
        if global_quiet {
            partial.quiet = Some(true);
        }
        if global_verbose {
            partial.verbose = Some(true);
        }
        partial
    }
}
