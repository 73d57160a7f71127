//! Per-language import extraction
//!
//! Python files get a syntax-tree walk; the JavaScript family gets
//! pattern-based text scanning. Everything else yields no imports.

pub mod javascript;
pub mod python;

use std::path::Path;

/// Extensions (with leading dot) treated as code files during the walk
pub const CODE_EXTENSIONS: &[&str] = &[".py", ".js", ".jsx", ".ts", ".tsx", ".go", ".java"];

/// Check whether a file kind is in the recognized code-type set
pub fn is_code_file(kind: &str) -> bool {
    CODE_EXTENSIONS.contains(&kind)
}

/// Extract the ordered import references declared by a file.
///
/// `kind` is the extension-derived file type (".py", ".ts", ...). Files
/// with no extraction strategy, including recognized types like ".go"
/// that only appear in the inventory, yield an empty list without the
/// file being read. All I/O and parse errors degrade to an empty list.
pub fn extract_imports(path: &Path, kind: &str) -> Vec<String> {
    match kind {
        ".py" => python::extract_file(path),
        ".js" | ".jsx" | ".ts" | ".tsx" => javascript::extract_file(path),
        _ => Vec::new(),
    }
}
