//! JavaScript/TypeScript import extraction via text patterns
//!
//! Two ordered patterns over the raw file content: ES-module `import ...
//! from "x"` forms first, then `require("x")` calls. The ES-before-require
//! ordering is kept for compatibility with earlier output; it is a
//! tie-break, not a priority.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

static ES_IMPORT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"import\s+.*?from\s+['"]([^'"]+)['"]"#).expect("valid pattern"));

static REQUIRE_CALL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"require\(['"]([^'"]+)['"]\)"#).expect("valid pattern"));

/// Extract import references from a JavaScript/TypeScript source file.
///
/// Read failures degrade to an empty list.
pub fn extract_file(path: &Path) -> Vec<String> {
    match std::fs::read_to_string(path) {
        Ok(source) => extract_source(&source),
        Err(_) => Vec::new(),
    }
}

/// Extract import references from JavaScript/TypeScript source text.
pub fn extract_source(source: &str) -> Vec<String> {
    let mut imports = Vec::new();

    for capture in ES_IMPORT.captures_iter(source) {
        if let Some(specifier) = capture.get(1) {
            imports.push(specifier.as_str().to_string());
        }
    }
    for capture in REQUIRE_CALL.captures_iter(source) {
        if let Some(specifier) = capture.get(1) {
            imports.push(specifier.as_str().to_string());
        }
    }

    imports
}
