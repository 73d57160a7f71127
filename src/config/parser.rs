//! Configuration file parsing

use std::path::Path;

use crate::error::{LensError, Result};
use crate::models::config::PartialSettings;

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = ".repolens.toml";

/// Parse a configuration file into partial settings
pub fn parse_config_file(path: &Path) -> Result<PartialSettings> {
    let content = std::fs::read_to_string(path).map_err(|err| LensError::ConfigRead {
        path: path.to_path_buf(),
        source: err,
    })?;

    parse_config_content(&content).map_err(|err| match err {
        LensError::ConfigParse { source, .. } => LensError::ConfigParse {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}

/// Parse configuration content into partial settings
pub fn parse_config_content(content: &str) -> Result<PartialSettings> {
    toml::from_str(content).map_err(|err| LensError::ConfigParse {
        path: Path::new(DEFAULT_CONFIG_FILE).to_path_buf(),
        source: err,
    })
}

/// Find and parse the default configuration file, if present
pub fn find_default_config() -> Result<Option<PartialSettings>> {
    let path = Path::new(DEFAULT_CONFIG_FILE);
    if path.exists() && path.is_file() {
        parse_config_file(path).map(Some)
    } else {
        Ok(None)
    }
}

/// Write a default configuration file at the given location
pub fn create_default_config(path: &Path) -> Result<()> {
    let template = r#"# repolens configuration
#
# All keys are optional; command line flags take precedence.

# Output format: "text" or "json"
# output_format = "text"

# Write the profile to a file instead of stdout
# output_file = "profile.json"

# Remote fetch timeout in seconds
# fetch_timeout_secs = 120

# Request an AI insight for each profile
# insight_enabled = true

# Insight model and endpoint (any OpenAI-compatible API)
# model = "gpt-4o-mini"
# api_base_url = "https://api.openai.com/v1"
# api_key = ""

# History file location and query limit
# history_file = "~/.local/share/repolens/history.jsonl"
# history_limit = 20

# Presentation
# use_colors = true
# show_progress = true
# quiet = false
# verbose = false
"#;

    std::fs::write(path, template).map_err(|err| LensError::OutputWrite {
        path: path.to_path_buf(),
        source: err,
    })
}
