//! Settings validation

use crate::error::{LensError, Result};
use crate::models::config::Settings;

/// Settings validator for ensuring configuration is valid
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return errors if invalid
    pub fn validate(settings: &Settings) -> Result<()> {
        if settings.fetch_timeout_secs == 0 {
            return Err(LensError::config_error("fetch timeout must be at least 1 second"));
        }

        if settings.history_limit == 0 {
            return Err(LensError::config_error("history limit must be at least 1"));
        }

        if settings.model.trim().is_empty() {
            return Err(LensError::config_error("model identifier must not be empty"));
        }

        if settings.api_base_url.trim().is_empty() {
            return Err(LensError::config_error("API base URL must not be empty"));
        }

        // Output directory must exist when writing to a file
        if let Some(path) = &settings.output_file {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(LensError::config_error(format!(
                        "output directory '{}' does not exist",
                        parent.display()
                    )));
                }
            }
        }

        Ok(())
    }
}
