//! JSON-lines history store
//!
//! Append-only persistence for completed profiles: one JSON document per
//! line. `recent` returns the newest profiles first. Unparsable lines
//! are skipped so a damaged history never blocks new analyses.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{LensError, Result};
use crate::models::profile::RepositoryProfile;
use crate::storage::ProfileStore;

/// File-backed profile history
pub struct JsonHistoryStore {
    path: PathBuf,
}

impl JsonHistoryStore {
    /// Create a store backed by the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default history location under the user data directory
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("repolens")
            .join("history.jsonl")
    }

    /// Backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProfileStore for JsonHistoryStore {
    fn save(&self, profile: &RepositoryProfile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|err| LensError::storage_error(format!("cannot create {}: {}", parent.display(), err)))?;
        }

        let line = serde_json::to_string(profile)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|err| LensError::storage_error(format!("cannot open {}: {}", self.path.display(), err)))?;

        writeln!(file, "{}", line)
            .map_err(|err| LensError::storage_error(format!("cannot write {}: {}", self.path.display(), err)))
    }

    fn recent(&self, limit: usize) -> Result<Vec<RepositoryProfile>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(LensError::storage_error(format!(
                    "cannot read {}: {}",
                    self.path.display(),
                    err
                )))
            }
        };

        let mut profiles: Vec<RepositoryProfile> = content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| serde_json::from_str(line).ok())
            .collect();

        profiles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        profiles.truncate(limit);
        Ok(profiles)
    }
}
