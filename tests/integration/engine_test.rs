use std::fs;
use tempfile::tempdir;

use repolens::core::AnalysisEngine;
use repolens::error::{LensError, Result};
use repolens::insight::TextInsightProvider;
use repolens::models::config::Settings;

/// Provider that returns a canned insight and records the prompt shape
struct StubProvider {
    response: String,
}

impl TextInsightProvider for StubProvider {
    fn request(&self, prompt: &str) -> Result<String> {
        assert!(prompt.contains("Analyze this repository"));
        Ok(self.response.clone())
    }
}

/// Provider that always fails, as when no credentials are configured
struct UnavailableProvider;

impl TextInsightProvider for UnavailableProvider {
    fn request(&self, _prompt: &str) -> Result<String> {
        Err(LensError::insight_unavailable("API key not configured"))
    }
}

#[test]
fn fastapi_fixture_produces_expected_profile() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("requirements.txt"), "fastapi==0.95.0\n").unwrap();
    fs::write(dir.path().join("main.py"), "import os\nfrom foo import bar\n").unwrap();

    let provider = StubProvider {
        response: "Looks like a FastAPI service.".to_string(),
    };
    let engine = AnalysisEngine::new(Settings::default(), &provider);
    let profile = engine
        .profile_snapshot("https://example.com/acme/widgets.git", dir.path())
        .unwrap();

    assert_eq!(profile.repo_name, "widgets");
    assert_eq!(profile.framework, "FastAPI");
    assert!(profile.entry_points.contains(&"main.py".to_string()));
    assert_eq!(profile.file_count(), 2);
    assert_eq!(
        profile.dependencies.get("main.py"),
        Some(&vec!["os".to_string(), "foo".to_string()])
    );
    assert_eq!(profile.insight.as_deref(), Some("Looks like a FastAPI service."));
}

#[test]
fn empty_repository_still_produces_a_profile() {
    let dir = tempdir().unwrap();

    let provider = UnavailableProvider;
    let engine = AnalysisEngine::new(Settings::default(), &provider);
    let profile = engine
        .profile_snapshot("https://example.com/acme/empty", dir.path())
        .unwrap();

    assert_eq!(profile.framework, "Unknown");
    assert!(profile.entry_points.is_empty());
    assert!(profile.file_structure.is_empty());
    assert!(profile.dependencies.is_empty());
    // The insight degrades to a placeholder, never a failure
    assert_eq!(
        profile.insight.as_deref(),
        Some("AI insights unavailable: API key not configured")
    );
}

#[test]
fn insight_can_be_disabled() {
    let dir = tempdir().unwrap();

    let provider = StubProvider {
        response: "should not be requested".to_string(),
    };
    let settings = Settings {
        insight_enabled: false,
        ..Default::default()
    };
    let engine = AnalysisEngine::new(settings, &provider);
    let profile = engine
        .profile_snapshot("https://example.com/acme/quiet", dir.path())
        .unwrap();

    assert!(profile.insight.is_none());
}

#[test]
fn profile_invariants_hold_for_a_mixed_tree() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("src");
    fs::create_dir_all(&src).unwrap();
    fs::write(
        dir.path().join("package.json"),
        r#"{"dependencies": {"react": "18.0.0"}, "scripts": {"start": "node index.js"}}"#,
    )
    .unwrap();
    fs::write(dir.path().join("index.js"), "const react = require('react');\n").unwrap();
    fs::write(src.join("App.js"), "import React from 'react';\n").unwrap();

    let provider = UnavailableProvider;
    let engine = AnalysisEngine::new(Settings::default(), &provider);
    let profile = engine
        .profile_snapshot("https://example.com/acme/mixed.git", dir.path())
        .unwrap();

    assert_eq!(profile.framework, "React");
    assert_eq!(
        profile.entry_points,
        vec!["index.js", "npm start: node index.js", "src/App.js"]
    );

    let paths: Vec<&str> = profile.file_structure.iter().map(|f| f.path.as_str()).collect();
    for key in profile.dependencies.keys() {
        assert!(paths.contains(&key.as_str()));
    }
}
