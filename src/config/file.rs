//! Configuration file and environment variable sources

use std::path::{Path, PathBuf};

use super::{parser, ConfigSource};
use crate::error::{LensError, Result};
use crate::models::config::PartialSettings;

/// Configuration file source
pub struct FileConfig {
    path: PathBuf,
    name: String,
}

impl FileConfig {
    /// Create a file source for the default config location
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(parser::DEFAULT_CONFIG_FILE),
            name: "default config file".to_string(),
        }
    }

    /// Create a file source with a custom path
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            name: format!("config file ({})", path.as_ref().display()),
        }
    }

    /// Get the path of this configuration file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigSource for FileConfig {
    fn load(&self) -> Result<PartialSettings> {
        if !self.is_available() {
            return Err(LensError::ConfigNotFound {
                path: self.path.clone(),
            });
        }
        parser::parse_config_file(&self.path)
    }

    fn is_available(&self) -> bool {
        self.path.exists() && self.path.is_file()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Environment variable configuration source
pub struct EnvConfig {
    prefix: String,
    name: String,
}

impl EnvConfig {
    /// Create an environment source with the given variable prefix
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            name: format!("{} environment variables", &prefix),
            prefix,
        }
    }

    fn var(&self, key: &str) -> Option<String> {
        std::env::var(format!("{}_{}", self.prefix, key)).ok()
    }

    fn bool_var(&self, key: &str) -> Option<bool> {
        self.var(key).map(|value| {
            matches!(
                value.to_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            )
        })
    }
}

impl ConfigSource for EnvConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings::default();

        if let Some(format) = self.var("OUTPUT") {
            settings.output_format = Some(format.parse().map_err(LensError::config_error)?);
        }
        if let Some(output_file) = self.var("OUTPUT_FILE") {
            settings.output_file = Some(PathBuf::from(output_file));
        }
        if let Some(timeout) = self.var("FETCH_TIMEOUT_SECS") {
            let parsed = timeout.parse().map_err(|_| {
                LensError::config_error(format!("invalid {}_FETCH_TIMEOUT_SECS: {}", self.prefix, timeout))
            })?;
            settings.fetch_timeout_secs = Some(parsed);
        }
        if let Some(limit) = self.var("HISTORY_LIMIT") {
            let parsed = limit.parse().map_err(|_| {
                LensError::config_error(format!("invalid {}_HISTORY_LIMIT: {}", self.prefix, limit))
            })?;
            settings.history_limit = Some(parsed);
        }
        settings.model = self.var("MODEL");
        settings.api_base_url = self.var("API_BASE_URL");
        settings.api_key = self.var("API_KEY");
        settings.history_file = self.var("HISTORY_FILE").map(PathBuf::from);
        settings.insight_enabled = self.bool_var("INSIGHT");
        settings.use_colors = self.bool_var("COLORS");
        settings.quiet = self.bool_var("QUIET");
        settings.verbose = self.bool_var("VERBOSE");

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        std::env::vars().any(|(key, _)| key.starts_with(&format!("{}_", self.prefix)))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
