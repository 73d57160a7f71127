use chrono::Utc;
use uuid::Uuid;

use repolens::models::profile::{DependencyMap, FileEntry, RepositoryProfile};
use repolens::output::{create_formatter, Formatter, JsonFormatter, TextFormatter};

fn sample_profile() -> RepositoryProfile {
    let mut dependencies = DependencyMap::new();
    dependencies.insert("main.py".to_string(), vec!["os".to_string(), "foo".to_string()]);

    RepositoryProfile {
        id: Uuid::new_v4(),
        source_url: "https://github.com/acme/widgets.git".to_string(),
        repo_name: "widgets".to_string(),
        framework: "FastAPI".to_string(),
        entry_points: vec!["main.py".to_string()],
        file_structure: vec![FileEntry {
            id: Uuid::new_v4(),
            name: "main.py".to_string(),
            path: "main.py".to_string(),
            kind: ".py".to_string(),
            imports: vec!["os".to_string(), "foo".to_string()],
            size: 42,
        }],
        dependencies,
        insight: Some("A small FastAPI service.".to_string()),
        created_at: Utc::now(),
    }
}

#[test]
fn text_formatter_includes_profile_fields() {
    let formatter = TextFormatter::new(false, false);
    let output = formatter.format(&sample_profile()).unwrap();

    assert!(output.contains("widgets"));
    assert!(output.contains("Framework: FastAPI"));
    assert!(output.contains("main.py: os, foo"));
    assert!(output.contains("A small FastAPI service."));
}

#[test]
fn text_formatter_handles_empty_profiles() {
    let profile = RepositoryProfile {
        entry_points: Vec::new(),
        file_structure: Vec::new(),
        dependencies: DependencyMap::new(),
        insight: None,
        ..sample_profile()
    };

    let formatter = TextFormatter::new(false, false);
    let output = formatter.format(&profile).unwrap();

    assert!(output.contains("(none found)"));
    assert!(output.contains("(no imports found)"));
}

#[test]
fn json_formatter_round_trips() {
    let profile = sample_profile();
    let output = JsonFormatter.format(&profile).unwrap();

    let parsed: RepositoryProfile = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed.repo_name, profile.repo_name);
    assert_eq!(parsed.dependencies, profile.dependencies);
    assert_eq!(parsed.file_structure.len(), 1);
}

#[test]
fn json_output_uses_type_for_file_kind() {
    let output = JsonFormatter.format(&sample_profile()).unwrap();
    assert!(output.contains("\"type\": \".py\""));
}

#[test]
fn formatter_factory_selects_by_format() {
    use repolens::models::config::OutputFormat;

    let json = create_formatter(&OutputFormat::Json, false, false);
    let parsed: serde_json::Value =
        serde_json::from_str(&json.format(&sample_profile()).unwrap()).unwrap();
    assert_eq!(parsed["repo_name"], "widgets");
}
