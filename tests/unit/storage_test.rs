use std::fs;
use tempfile::tempdir;

use chrono::{Duration, Utc};
use repolens::models::profile::{DependencyMap, RepositoryProfile};
use repolens::storage::{JsonHistoryStore, ProfileStore};
use uuid::Uuid;

fn profile(name: &str, age_minutes: i64) -> RepositoryProfile {
    RepositoryProfile {
        id: Uuid::new_v4(),
        source_url: format!("https://example.com/{}.git", name),
        repo_name: name.to_string(),
        framework: "Unknown".to_string(),
        entry_points: Vec::new(),
        file_structure: Vec::new(),
        dependencies: DependencyMap::new(),
        insight: None,
        created_at: Utc::now() - Duration::minutes(age_minutes),
    }
}

#[test]
fn recent_returns_newest_first() {
    let dir = tempdir().unwrap();
    let store = JsonHistoryStore::new(dir.path().join("history.jsonl"));

    store.save(&profile("oldest", 30)).unwrap();
    store.save(&profile("newest", 1)).unwrap();
    store.save(&profile("middle", 10)).unwrap();

    let recent = store.recent(10).unwrap();
    let names: Vec<&str> = recent.iter().map(|p| p.repo_name.as_str()).collect();
    assert_eq!(names, vec!["newest", "middle", "oldest"]);
}

#[test]
fn recent_respects_the_limit() {
    let dir = tempdir().unwrap();
    let store = JsonHistoryStore::new(dir.path().join("history.jsonl"));

    for i in 0..5 {
        store.save(&profile(&format!("repo{}", i), i)).unwrap();
    }

    assert_eq!(store.recent(2).unwrap().len(), 2);
}

#[test]
fn missing_history_file_is_empty() {
    let dir = tempdir().unwrap();
    let store = JsonHistoryStore::new(dir.path().join("nope.jsonl"));

    assert!(store.recent(10).unwrap().is_empty());
}

#[test]
fn corrupt_lines_are_skipped() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("history.jsonl");
    let store = JsonHistoryStore::new(&path);

    store.save(&profile("good", 1)).unwrap();
    let mut content = fs::read_to_string(&path).unwrap();
    content.push_str("this is not json\n");
    fs::write(&path, content).unwrap();
    store.save(&profile("also-good", 0)).unwrap();

    let recent = store.recent(10).unwrap();
    assert_eq!(recent.len(), 2);
}

#[test]
fn save_creates_parent_directories() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("deep").join("history.jsonl");
    let store = JsonHistoryStore::new(&path);

    store.save(&profile("first", 0)).unwrap();
    assert!(path.exists());
}
