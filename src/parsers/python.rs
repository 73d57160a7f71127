//! Python import extraction using a tree-sitter syntax walk
//!
//! Walks the full syntax tree so imports nested inside functions or
//! conditionals are collected as well. `import a.b` records `a.b`;
//! `import numpy as np` records `numpy`; `from x.y import z` records
//! `x.y`. Parse and read failures yield an empty list.

use std::path::Path;

use tree_sitter::{Language, Node, Parser};

/// Extract import references from a Python source file.
///
/// Any read or parse failure degrades to an empty list; a broken file
/// never aborts the surrounding walk.
pub fn extract_file(path: &Path) -> Vec<String> {
    match std::fs::read_to_string(path) {
        Ok(source) => extract_source(&source),
        Err(_) => Vec::new(),
    }
}

/// Extract import references from Python source text.
pub fn extract_source(source: &str) -> Vec<String> {
    let mut parser = Parser::new();
    let language: Language = tree_sitter_python::LANGUAGE.into();
    if parser.set_language(&language).is_err() {
        return Vec::new();
    }

    let tree = match parser.parse(source, None) {
        Some(tree) => tree,
        None => return Vec::new(),
    };

    let mut imports = Vec::new();
    collect_imports(tree.root_node(), source.as_bytes(), &mut imports);
    imports
}

/// Recursively collect import targets from every import statement node.
fn collect_imports(node: Node, source: &[u8], imports: &mut Vec<String>) {
    match node.kind() {
        "import_statement" => {
            // `import a.b, c as d` carries one `name` field per target
            let mut cursor = node.walk();
            for name in node.children_by_field_name("name", &mut cursor) {
                match name.kind() {
                    "dotted_name" => push_text(name, source, imports),
                    "aliased_import" => {
                        if let Some(target) = name.child_by_field_name("name") {
                            push_text(target, source, imports);
                        }
                    }
                    _ => {}
                }
            }
        }
        "import_from_statement" => {
            if let Some(module) = node.child_by_field_name("module_name") {
                // `from . import x` has no module path worth recording
                if let Ok(text) = module.utf8_text(source) {
                    if !text.chars().all(|c| c == '.') {
                        imports.push(text.to_string());
                    }
                }
            }
        }
        _ => {}
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_imports(child, source, imports);
    }
}

fn push_text(node: Node, source: &[u8], imports: &mut Vec<String>) {
    if let Ok(text) = node.utf8_text(source) {
        imports.push(text.to_string());
    }
}
