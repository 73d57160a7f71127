//! Snapshot traversal and dependency aggregation
//!
//! Walks the whole snapshot once, skipping hidden paths and ignorable
//! directories, producing one FileEntry per file and accumulating the
//! dependency map from the per-file import lists. Per-file failures
//! degrade (empty imports, size 0) and never abort the walk.

use std::path::Path;

use uuid::Uuid;
use walkdir::{DirEntry, WalkDir};

use crate::error::Result;
use crate::models::profile::{DependencyMap, FileEntry};
use crate::parsers;

/// Directory names excluded from traversal wherever they appear
pub const IGNORED_DIRS: &[&str] = &["node_modules", "venv", "__pycache__", "dist", "build"];

/// Walker over one repository snapshot
pub struct TreeWalker;

impl TreeWalker {
    /// Build the file inventory and dependency map for a snapshot.
    ///
    /// Entries are produced in traversal order; every path is relative
    /// to `root` and unique. The dependency map only contains paths
    /// whose import list is non-empty.
    pub fn walk(root: &Path) -> Result<(Vec<FileEntry>, DependencyMap)> {
        let mut files = Vec::new();
        let mut dependencies = DependencyMap::new();

        let iter = WalkDir::new(root)
            .into_iter()
            .filter_entry(|entry| keep_entry(entry));

        for entry in iter {
            let entry = match entry {
                Ok(entry) => entry,
                // Unreadable directories are skipped, not fatal
                Err(err) => {
                    tracing::debug!(error = %err, "skipping unreadable path");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let relative = match path.strip_prefix(root) {
                Ok(relative) => relative.to_string_lossy().into_owned(),
                Err(_) => continue,
            };

            let kind = match path.extension() {
                Some(ext) => format!(".{}", ext.to_string_lossy()),
                None => "file".to_string(),
            };

            let size = entry.metadata().map(|meta| meta.len()).unwrap_or(0);

            let imports = if parsers::is_code_file(&kind) {
                parsers::extract_imports(path, &kind)
            } else {
                Vec::new()
            };

            if !imports.is_empty() {
                dependencies.insert(relative.clone(), imports.clone());
            }

            files.push(FileEntry {
                id: Uuid::new_v4(),
                name: entry.file_name().to_string_lossy().into_owned(),
                path: relative,
                kind,
                imports,
                size,
            });
        }

        Ok((files, dependencies))
    }
}

/// Exclusion policy: hidden segments and ignorable directories are
/// pruned wherever they appear in the tree. The walk root itself is
/// always kept.
fn keep_entry(entry: &DirEntry) -> bool {
    if entry.depth() == 0 {
        return true;
    }
    let name = entry.file_name().to_string_lossy();
    !name.starts_with('.') && !IGNORED_DIRS.contains(&name.as_ref())
}
