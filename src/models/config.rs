//! Configuration-related data structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration settings for repolens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Output format (text, json)
    pub output_format: OutputFormat,

    /// Output file path (if not specified, output to stdout)
    pub output_file: Option<PathBuf>,

    /// Whether to suppress non-essential output
    pub quiet: bool,

    /// Whether to show detailed progress and debug information
    pub verbose: bool,

    /// Whether to use colors in text output
    pub use_colors: bool,

    /// Whether to show progress spinners
    pub show_progress: bool,

    /// Timeout for the remote fetch, in seconds
    pub fetch_timeout_secs: u64,

    /// Whether to request an AI insight for each profile
    pub insight_enabled: bool,

    /// Model identifier requested from the insight provider
    pub model: String,

    /// Base URL of the OpenAI-compatible insight API
    pub api_base_url: String,

    /// API key for the insight provider (falls back to OPENAI_API_KEY)
    pub api_key: Option<String>,

    /// History file path (defaults to the user data directory)
    pub history_file: Option<PathBuf>,

    /// Maximum number of profiles returned by a history query
    pub history_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Text,
            output_file: None,
            quiet: false,
            verbose: false,
            use_colors: true,
            show_progress: true,
            fetch_timeout_secs: 120,
            insight_enabled: true,
            model: "gpt-4o-mini".to_string(),
            api_base_url: "https://api.openai.com/v1".to_string(),
            api_key: None,
            history_file: None,
            history_limit: 20,
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Partial settings for configuration merging
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartialSettings {
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
    pub use_colors: Option<bool>,
    pub show_progress: Option<bool>,
    pub fetch_timeout_secs: Option<u64>,
    pub insight_enabled: Option<bool>,
    pub model: Option<String>,
    pub api_base_url: Option<String>,
    pub api_key: Option<String>,
    pub history_file: Option<PathBuf>,
    pub history_limit: Option<usize>,
}

impl PartialSettings {
    /// Merge another PartialSettings into this one.
    /// Fields from `other` take precedence over existing fields.
    pub fn merge_from(&mut self, other: PartialSettings) {
        if other.output_format.is_some() {
            self.output_format = other.output_format;
        }
        if other.output_file.is_some() {
            self.output_file = other.output_file;
        }
        if other.quiet.is_some() {
            self.quiet = other.quiet;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
        if other.use_colors.is_some() {
            self.use_colors = other.use_colors;
        }
        if other.show_progress.is_some() {
            self.show_progress = other.show_progress;
        }
        if other.fetch_timeout_secs.is_some() {
            self.fetch_timeout_secs = other.fetch_timeout_secs;
        }
        if other.insight_enabled.is_some() {
            self.insight_enabled = other.insight_enabled;
        }
        if other.model.is_some() {
            self.model = other.model;
        }
        if other.api_base_url.is_some() {
            self.api_base_url = other.api_base_url;
        }
        if other.api_key.is_some() {
            self.api_key = other.api_key;
        }
        if other.history_file.is_some() {
            self.history_file = other.history_file;
        }
        if other.history_limit.is_some() {
            self.history_limit = other.history_limit;
        }
    }

    /// Convert partial settings to full settings.
    /// Uses defaults for any fields that are None.
    pub fn to_settings(&self) -> Settings {
        let mut settings = Settings::default();

        if let Some(output_format) = &self.output_format {
            settings.output_format = output_format.clone();
        }
        if let Some(output_file) = &self.output_file {
            settings.output_file = Some(output_file.clone());
        }
        if let Some(quiet) = self.quiet {
            settings.quiet = quiet;
        }
        if let Some(verbose) = self.verbose {
            settings.verbose = verbose;
        }
        if let Some(use_colors) = self.use_colors {
            settings.use_colors = use_colors;
        }
        if let Some(show_progress) = self.show_progress {
            settings.show_progress = show_progress;
        }
        if let Some(fetch_timeout_secs) = self.fetch_timeout_secs {
            settings.fetch_timeout_secs = fetch_timeout_secs;
        }
        if let Some(insight_enabled) = self.insight_enabled {
            settings.insight_enabled = insight_enabled;
        }
        if let Some(model) = &self.model {
            settings.model = model.clone();
        }
        if let Some(api_base_url) = &self.api_base_url {
            settings.api_base_url = api_base_url.clone();
        }
        if let Some(api_key) = &self.api_key {
            settings.api_key = Some(api_key.clone());
        }
        if let Some(history_file) = &self.history_file {
            settings.history_file = Some(history_file.clone());
        }
        if let Some(history_limit) = self.history_limit {
            settings.history_limit = history_limit;
        }

        settings
    }
}
