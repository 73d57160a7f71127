//! Repository profile structures
//!
//! The immutable result of one analysis run: the file inventory, the
//! aggregated dependency map and the surrounding metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Mapping from relative file path to its ordered import references.
/// Only paths with at least one import are present.
pub type DependencyMap = BTreeMap<String, Vec<String>>;

/// One file in the repository snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    /// Opaque identifier, unique per run
    pub id: Uuid,
    /// Display name (file name without directories)
    pub name: String,
    /// Path relative to the snapshot root
    pub path: String,
    /// File extension including the leading dot, or "file" if none
    #[serde(rename = "type")]
    pub kind: String,
    /// Ordered import references declared by this file
    #[serde(default)]
    pub imports: Vec<String>,
    /// Byte size, 0 if the file could not be stat'ed
    #[serde(default)]
    pub size: u64,
}

/// The complete structured analysis result for one repository
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryProfile {
    pub id: Uuid,
    pub source_url: String,
    pub repo_name: String,
    /// Detected framework label, "Unknown" when nothing matched
    pub framework: String,
    pub entry_points: Vec<String>,
    pub file_structure: Vec<FileEntry>,
    pub dependencies: DependencyMap,
    pub insight: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl RepositoryProfile {
    /// Number of files in the snapshot
    pub fn file_count(&self) -> usize {
        self.file_structure.len()
    }

    /// Derive a repository name from its source URL: the last path
    /// segment with a trailing `.git` removed.
    pub fn repo_name_from_url(url: &str) -> String {
        let trimmed = url.trim_end_matches('/');
        let last = trimmed.rsplit('/').next().unwrap_or(trimmed);
        last.trim_end_matches(".git").to_string()
    }
}
