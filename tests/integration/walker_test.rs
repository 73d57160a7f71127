use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

use repolens::core::TreeWalker;

fn create_project(base: &Path) {
    fs::create_dir_all(base.join("src")).unwrap();
    fs::write(base.join("main.py"), "import os\nfrom foo import bar\n").unwrap();
    fs::write(base.join("src/app.js"), "import express from 'express';\n").unwrap();
    fs::write(base.join("README.md"), "# demo\n").unwrap();
    fs::write(base.join("Makefile"), "all:\n").unwrap();

    // Paths that must be excluded from the inventory
    fs::create_dir_all(base.join("node_modules/lib")).unwrap();
    fs::write(base.join("node_modules/lib/index.js"), "import hidden from 'hidden';\n").unwrap();
    fs::create_dir_all(base.join("__pycache__")).unwrap();
    fs::write(base.join("__pycache__/main.cpython-311.pyc"), "binary").unwrap();
    fs::create_dir_all(base.join(".git")).unwrap();
    fs::write(base.join(".git/config"), "[core]\n").unwrap();
    fs::write(base.join(".env"), "SECRET=1\n").unwrap();
}

#[test]
fn walk_skips_ignorable_and_hidden_paths() {
    let dir = tempdir().unwrap();
    create_project(dir.path());

    let (files, _) = TreeWalker::walk(dir.path()).unwrap();
    let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();

    assert!(paths.contains(&"main.py"));
    assert!(paths.contains(&"src/app.js"));
    assert!(paths.contains(&"README.md"));
    assert!(!paths.iter().any(|p| p.contains("node_modules")));
    assert!(!paths.iter().any(|p| p.contains("__pycache__")));
    assert!(!paths.iter().any(|p| p.contains(".git")));
    assert!(!paths.contains(&".env"));
}

#[test]
fn walk_produces_unique_relative_paths() {
    let dir = tempdir().unwrap();
    create_project(dir.path());

    let (files, _) = TreeWalker::walk(dir.path()).unwrap();

    let unique: HashSet<&str> = files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(unique.len(), files.len());
    for file in &files {
        assert!(!Path::new(&file.path).is_absolute());
        assert!(!file.path.contains(".."));
    }
}

#[test]
fn dependency_map_keys_are_a_subset_of_file_paths() {
    let dir = tempdir().unwrap();
    create_project(dir.path());

    let (files, dependencies) = TreeWalker::walk(dir.path()).unwrap();
    let paths: HashSet<&str> = files.iter().map(|f| f.path.as_str()).collect();

    for key in dependencies.keys() {
        assert!(paths.contains(key.as_str()), "orphan dependency key {}", key);
    }

    assert_eq!(
        dependencies.get("main.py"),
        Some(&vec!["os".to_string(), "foo".to_string()])
    );
    assert_eq!(
        dependencies.get("src/app.js"),
        Some(&vec!["express".to_string()])
    );
    // Files without imports never enter the map
    assert!(!dependencies.contains_key("README.md"));
}

#[test]
fn file_kinds_and_sizes_are_recorded() {
    let dir = tempdir().unwrap();
    create_project(dir.path());

    let (files, _) = TreeWalker::walk(dir.path()).unwrap();

    let main = files.iter().find(|f| f.path == "main.py").unwrap();
    assert_eq!(main.kind, ".py");
    assert_eq!(main.size, fs::metadata(dir.path().join("main.py")).unwrap().len());

    let makefile = files.iter().find(|f| f.path == "Makefile").unwrap();
    assert_eq!(makefile.kind, "file");
    assert!(makefile.imports.is_empty());
}

#[test]
fn code_file_inside_ignorable_directory_never_appears() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("venv/lib")).unwrap();
    fs::write(dir.path().join("venv/lib/site.py"), "import os\n").unwrap();
    fs::create_dir_all(dir.path().join("dist")).unwrap();
    fs::write(dir.path().join("dist/bundle.js"), "import x from 'x';\n").unwrap();

    let (files, dependencies) = TreeWalker::walk(dir.path()).unwrap();

    assert!(files.is_empty());
    assert!(dependencies.is_empty());
}

#[test]
fn empty_tree_walks_to_empty_results() {
    let dir = tempdir().unwrap();

    let (files, dependencies) = TreeWalker::walk(dir.path()).unwrap();
    assert!(files.is_empty());
    assert!(dependencies.is_empty());
}
