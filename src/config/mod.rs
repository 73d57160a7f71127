//! Configuration management
//!
//! Settings are merged from layered sources with increasing precedence:
//! defaults, the `.repolens.toml` config file, `REPOLENS_*` environment
//! variables, then command line flags.

pub mod file;
pub mod parser;
pub mod settings;

use crate::error::Result;
use crate::models::config::{PartialSettings, Settings};

pub use file::{EnvConfig, FileConfig};
pub use parser::{create_default_config, find_default_config, parse_config_content, parse_config_file};
pub use settings::SettingsValidator;

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "REPOLENS";

/// Trait for configuration sources
pub trait ConfigSource {
    /// Load configuration from this source
    fn load(&self) -> Result<PartialSettings>;

    /// Check if this configuration source is available
    fn is_available(&self) -> bool;

    /// Get the name of this configuration source for logging
    fn name(&self) -> &str;
}

/// Configuration builder for merging multiple sources
pub struct ConfigBuilder {
    partial: PartialSettings,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self {
            partial: PartialSettings::default(),
        }
    }

    /// Merge settings from a partial configuration
    pub fn merge(mut self, partial: PartialSettings) -> Self {
        self.partial.merge_from(partial);
        self
    }

    /// Load and merge settings from a configuration source
    pub fn load_from<S: ConfigSource>(self, source: &S) -> Result<Self> {
        if source.is_available() {
            let partial = source.load()?;
            tracing::debug!(source = source.name(), "configuration source loaded");
            Ok(self.merge(partial))
        } else {
            Ok(self)
        }
    }

    /// Try to load from a source, ignoring failures
    pub fn try_load_from<S: ConfigSource>(self, source: &S) -> Self {
        if source.is_available() {
            match source.load() {
                Ok(partial) => self.merge(partial),
                Err(_) => self,
            }
        } else {
            self
        }
    }

    /// Build the final settings with validation
    pub fn build(self) -> Result<Settings> {
        let settings = self.partial.to_settings();
        SettingsValidator::validate(&settings)?;
        Ok(settings)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Load configuration from all sources with proper precedence handling.
/// `cli_overrides` carries the flag values and wins over every other
/// source; `config_path` selects an explicit config file.
pub fn load_config(
    config_path: Option<&std::path::Path>,
    cli_overrides: PartialSettings,
) -> Result<Settings> {
    let mut builder = ConfigBuilder::new();

    match config_path {
        Some(path) => {
            let file_config = FileConfig::with_path(path);
            builder = builder.load_from(&file_config)?;
        }
        None => {
            if let Ok(Some(default_config)) = parser::find_default_config() {
                builder = builder.merge(default_config);
            }
        }
    }

    let env_config = EnvConfig::new(ENV_PREFIX);
    builder = builder.try_load_from(&env_config);

    builder.merge(cli_overrides).build()
}
