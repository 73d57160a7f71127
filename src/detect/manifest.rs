//! Framework detection from well-known manifest files
//!
//! Reads a fixed set of manifests once into a snapshot, then evaluates an
//! ordered rule catalog against it. Rules accumulate: a front-end
//! framework and a backend ecosystem can both be reported. Malformed
//! manifest content is treated as no signal, never as an error.

use std::collections::HashSet;
use std::path::Path;

use serde_json::Value;

/// A rule over the merged package.json dependency key set. Fires when any
/// of `any_keys` is declared, unless one of `unless_keys` is also declared
/// (a meta-framework shadowing its base framework).
struct DependencyRule {
    label: &'static str,
    any_keys: &'static [&'static str],
    unless_keys: &'static [&'static str],
}

/// A case-insensitive substring rule over requirements.txt content
struct RequirementsRule {
    label: &'static str,
    needle: &'static str,
}

/// A rule keyed on the presence of a build-tool marker file
struct MarkerRule {
    label: &'static str,
    file: &'static str,
}

/// Ordered: more specific frameworks first so they shadow their base
const NODE_RULES: &[DependencyRule] = &[
    DependencyRule {
        label: "Next.js",
        any_keys: &["next"],
        unless_keys: &[],
    },
    DependencyRule {
        label: "React",
        any_keys: &["react", "react-dom"],
        unless_keys: &["next"],
    },
    DependencyRule {
        label: "Vue",
        any_keys: &["vue"],
        unless_keys: &[],
    },
    DependencyRule {
        label: "Angular",
        any_keys: &["angular", "@angular/core"],
        unless_keys: &[],
    },
    DependencyRule {
        label: "Svelte",
        any_keys: &["svelte"],
        unless_keys: &[],
    },
];

const REQUIREMENTS_RULES: &[RequirementsRule] = &[
    RequirementsRule {
        label: "Django",
        needle: "django",
    },
    RequirementsRule {
        label: "Flask",
        needle: "flask",
    },
    RequirementsRule {
        label: "FastAPI",
        needle: "fastapi",
    },
];

const MARKER_RULES: &[MarkerRule] = &[
    MarkerRule {
        label: "Go",
        file: "go.mod",
    },
    MarkerRule {
        label: "Java/Maven",
        file: "pom.xml",
    },
    MarkerRule {
        label: "Java/Gradle",
        file: "build.gradle",
    },
];

/// Read-only view of the manifests present at the snapshot root
struct ManifestSnapshot {
    /// Merged dependencies + devDependencies keys from package.json
    node_deps: Option<HashSet<String>>,
    /// Lowercased requirements.txt content
    python_requirements: Option<String>,
    markers: Vec<&'static str>,
}

impl ManifestSnapshot {
    fn read(root: &Path) -> Self {
        let node_deps = read_node_dependencies(root);
        let python_requirements = std::fs::read_to_string(root.join("requirements.txt"))
            .ok()
            .map(|content| content.to_lowercase());
        let markers = MARKER_RULES
            .iter()
            .filter(|rule| root.join(rule.file).exists())
            .map(|rule| rule.label)
            .collect();

        Self {
            node_deps,
            python_requirements,
            markers,
        }
    }
}

/// Merge the `dependencies` and `devDependencies` key sets from
/// package.json. Unparsable JSON is no signal.
fn read_node_dependencies(root: &Path) -> Option<HashSet<String>> {
    let content = std::fs::read_to_string(root.join("package.json")).ok()?;
    let manifest: Value = serde_json::from_str(&content).ok()?;

    let mut keys = HashSet::new();
    for section in ["dependencies", "devDependencies"] {
        if let Some(Value::Object(map)) = manifest.get(section) {
            keys.extend(map.keys().cloned());
        }
    }
    Some(keys)
}

/// Scanner over the fixed manifest catalog
pub struct ManifestScanner;

impl ManifestScanner {
    /// Detect declared frameworks from manifest files.
    ///
    /// Returns the comma-joined labels in detection order, or None when
    /// no manifest produced a signal.
    pub fn scan(root: &Path) -> Option<String> {
        let snapshot = ManifestSnapshot::read(root);
        let mut labels: Vec<&str> = Vec::new();

        if let Some(deps) = &snapshot.node_deps {
            for rule in NODE_RULES {
                let matched = rule.any_keys.iter().any(|key| deps.contains(*key));
                let shadowed = rule.unless_keys.iter().any(|key| deps.contains(*key));
                if matched && !shadowed {
                    labels.push(rule.label);
                }
            }
        }

        if let Some(requirements) = &snapshot.python_requirements {
            for rule in REQUIREMENTS_RULES {
                if requirements.contains(rule.needle) {
                    labels.push(rule.label);
                }
            }
        }

        labels.extend(&snapshot.markers);

        if labels.is_empty() {
            None
        } else {
            Some(labels.join(", "))
        }
    }
}
