//! Output formatting and writing functionality

mod progress;
mod writers;

pub use self::progress::ProgressReporter;
pub use self::writers::{create_writer, FileWriter, OutputWriter, StdoutWriter};

use ansi_term::Colour;

use crate::error::Result;
use crate::models::config::OutputFormat;
use crate::models::profile::RepositoryProfile;

/// Trait for different output formatters
pub trait Formatter {
    /// Format a repository profile into a string
    fn format(&self, profile: &RepositoryProfile) -> Result<String>;
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    pub use_colors: bool,
    pub verbose: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(use_colors: bool, verbose: bool) -> Self {
        Self { use_colors, verbose }
    }

    fn heading(&self, text: &str) -> String {
        if self.use_colors {
            Colour::Cyan.bold().paint(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn label(&self, text: &str) -> String {
        if self.use_colors {
            Colour::Green.paint(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, profile: &RepositoryProfile) -> Result<String> {
        let mut out = String::new();

        out.push_str(&self.heading(&format!("=== {} ===", profile.repo_name)));
        out.push('\n');
        out.push_str(&format!("{} {}\n", self.label("Source:"), profile.source_url));
        out.push_str(&format!("{} {}\n", self.label("Framework:"), profile.framework));
        out.push_str(&format!("{} {}\n", self.label("Files:"), profile.file_count()));
        out.push_str(&format!(
            "{} {}\n",
            self.label("Analyzed:"),
            profile.created_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        out.push('\n');
        out.push_str(&self.heading("Entry points"));
        out.push('\n');
        if profile.entry_points.is_empty() {
            out.push_str("  (none found)\n");
        } else {
            for entry in &profile.entry_points {
                out.push_str(&format!("  - {}\n", entry));
            }
        }

        out.push('\n');
        out.push_str(&self.heading("Dependencies"));
        out.push('\n');
        if profile.dependencies.is_empty() {
            out.push_str("  (no imports found)\n");
        } else {
            for (path, imports) in &profile.dependencies {
                out.push_str(&format!("  {}: {}\n", path, imports.join(", ")));
            }
        }

        if self.verbose {
            out.push('\n');
            out.push_str(&self.heading("Files"));
            out.push('\n');
            for file in &profile.file_structure {
                out.push_str(&format!("  {} ({} bytes)\n", file.path, file.size));
            }
        }

        if let Some(insight) = &profile.insight {
            out.push('\n');
            out.push_str(&self.heading("Insight"));
            out.push('\n');
            out.push_str(insight);
            out.push('\n');
        }

        Ok(out)
    }
}

/// JSON formatter for programmatic consumption
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, profile: &RepositoryProfile) -> Result<String> {
        Ok(serde_json::to_string_pretty(profile)?)
    }
}

/// Create a formatter for the configured output format
pub fn create_formatter(format: &OutputFormat, use_colors: bool, verbose: bool) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(use_colors, verbose)),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
