use std::fs;
use tempfile::tempdir;

use repolens::parsers::{self, is_code_file};

#[test]
fn python_imports_preserve_declaration_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("main.py");
    fs::write(
        &path,
        "import os\nimport sys\nfrom foo import bar\nimport a.b.c\n",
    )
    .unwrap();

    assert_eq!(
        parsers::extract_imports(&path, ".py"),
        vec!["os", "sys", "foo", "a.b.c"]
    );
}

#[test]
fn javascript_es_imports_come_before_requires() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("app.js");
    fs::write(
        &path,
        "const fs = require('fs');\nimport path from 'path';\nconst os = require(\"os\");\n",
    )
    .unwrap();

    assert_eq!(
        parsers::extract_imports(&path, ".js"),
        vec!["path", "fs", "os"]
    );
}

#[test]
fn typescript_files_use_the_pattern_strategy() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("index.tsx");
    fs::write(&path, "import React from 'react';\nexport const x = 1;\n").unwrap();

    assert_eq!(parsers::extract_imports(&path, ".tsx"), vec!["react"]);
}

#[test]
fn extraction_is_idempotent_on_unchanged_files() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mod.py");
    fs::write(&path, "import json\nfrom collections import OrderedDict\n").unwrap();

    let first = parsers::extract_imports(&path, ".py");
    let second = parsers::extract_imports(&path, ".py");
    assert_eq!(first, second);
    assert_eq!(first, vec!["json", "collections"]);
}

#[test]
fn recognized_types_without_a_strategy_yield_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("main.go");
    fs::write(&path, "package main\n\nimport \"fmt\"\n").unwrap();

    assert!(is_code_file(".go"));
    assert!(parsers::extract_imports(&path, ".go").is_empty());
}

#[test]
fn unrecognized_types_yield_empty_without_reading() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, "import os\n").unwrap();

    assert!(!is_code_file(".txt"));
    assert!(parsers::extract_imports(&path, ".txt").is_empty());
}

#[test]
fn missing_file_degrades_to_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ghost.py");

    assert!(parsers::extract_imports(&path, ".py").is_empty());
}

#[test]
fn non_python_content_in_python_file_yields_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("odd.py");
    fs::write(&path, "{{{{ not python at all ]]]]\n").unwrap();

    assert!(parsers::extract_imports(&path, ".py").is_empty());
}
