//! Entry-point discovery
//!
//! Checks a fixed catalog of conventional file names at the snapshot
//! root, then package.json run scripts, then the same catalog one level
//! down inside `src/`. Output order is stable and descriptive, not
//! ranked.

use std::path::Path;

use serde_json::Value;

/// Conventional entry-point file names, in reporting order
const ENTRY_CATALOG: &[&str] = &[
    "index.js",
    "index.ts",
    "index.jsx",
    "index.tsx",
    "main.py",
    "app.py",
    "server.py",
    "manage.py",
    "main.go",
    "main.java",
    "Main.java",
    "index.html",
    "App.js",
    "App.tsx",
];

/// Locator for conventional entry points
pub struct EntryPointLocator;

impl EntryPointLocator {
    /// Collect entry-point descriptors for a snapshot.
    ///
    /// Order: root catalog matches, package.json `start`/`dev` scripts,
    /// then `src/`-nested catalog matches (skipping names already found
    /// at the root).
    pub fn locate(root: &Path) -> Vec<String> {
        let mut entry_points = Vec::new();

        for entry in ENTRY_CATALOG {
            if root.join(entry).exists() {
                entry_points.push((*entry).to_string());
            }
        }

        if let Some(scripts) = read_scripts(root) {
            if let Some(start) = scripts.get("start").and_then(Value::as_str) {
                entry_points.push(format!("npm start: {}", start));
            }
            if let Some(dev) = scripts.get("dev").and_then(Value::as_str) {
                entry_points.push(format!("npm run dev: {}", dev));
            }
        }

        let src_dir = root.join("src");
        if src_dir.is_dir() {
            for entry in ENTRY_CATALOG {
                if src_dir.join(entry).exists() && !entry_points.iter().any(|e| e == entry) {
                    entry_points.push(format!("src/{}", entry));
                }
            }
        }

        entry_points
    }
}

/// Read the scripts table from package.json, if any
fn read_scripts(root: &Path) -> Option<serde_json::Map<String, Value>> {
    let content = std::fs::read_to_string(root.join("package.json")).ok()?;
    let manifest: Value = serde_json::from_str(&content).ok()?;
    match manifest.get("scripts") {
        Some(Value::Object(map)) => Some(map.clone()),
        _ => None,
    }
}
