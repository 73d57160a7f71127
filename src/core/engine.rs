//! The analysis engine
//!
//! One sequential pipeline per run: provision the workspace, detect the
//! framework, locate entry points, walk the tree, request an insight,
//! assemble the immutable profile. Only retrieval failures propagate;
//! everything else degrades to partial or placeholder data. The
//! workspace is released when the run ends, whatever the outcome.

use std::path::Path;
use std::time::Duration;

use chrono::Utc;
use uuid::Uuid;

use crate::core::walker::TreeWalker;
use crate::core::workspace::Workspace;
use crate::detect;
use crate::detect::EntryPointLocator;
use crate::error::{LensError, Result};
use crate::insight::{prompt::build_prompt, TextInsightProvider};
use crate::models::config::Settings;
use crate::models::profile::RepositoryProfile;

/// Orchestrates the analysis passes for one repository
pub struct AnalysisEngine<'a> {
    settings: Settings,
    insight: &'a dyn TextInsightProvider,
}

impl<'a> AnalysisEngine<'a> {
    /// Create an engine with the given settings and insight provider.
    /// The provider's lifecycle is owned by the caller.
    pub fn new(settings: Settings, insight: &'a dyn TextInsightProvider) -> Self {
        Self { settings, insight }
    }

    /// Analyze a remote repository and produce its profile.
    ///
    /// Fails only when the remote cannot be fetched; the workspace is
    /// dropped (deleted) before this returns on every path.
    pub fn analyze(&self, source_url: &str) -> Result<RepositoryProfile> {
        let workspace = Workspace::acquire(
            source_url,
            Duration::from_secs(self.settings.fetch_timeout_secs),
        )?;
        self.profile_snapshot(source_url, workspace.root())
    }

    /// Run the extraction passes over an already-provisioned snapshot.
    pub fn profile_snapshot(&self, source_url: &str, root: &Path) -> Result<RepositoryProfile> {
        let repo_name = RepositoryProfile::repo_name_from_url(source_url);

        let framework = detect::detect_framework(root);
        tracing::debug!(repo = %repo_name, framework = %framework, "framework detected");

        let entry_points = EntryPointLocator::locate(root);
        let (file_structure, dependencies) = TreeWalker::walk(root)?;
        tracing::debug!(
            files = file_structure.len(),
            dependency_entries = dependencies.len(),
            "snapshot walked"
        );

        let insight = self.request_insight(
            &repo_name,
            &framework,
            &entry_points,
            file_structure.len(),
            &dependencies,
        );

        Ok(RepositoryProfile {
            id: Uuid::new_v4(),
            source_url: source_url.to_string(),
            repo_name,
            framework,
            entry_points,
            file_structure,
            dependencies,
            insight,
            created_at: Utc::now(),
        })
    }

    /// Best-effort insight request. Failures never abort the pipeline:
    /// they surface as a placeholder string inside the profile.
    fn request_insight(
        &self,
        repo_name: &str,
        framework: &str,
        entry_points: &[String],
        file_count: usize,
        dependencies: &crate::models::profile::DependencyMap,
    ) -> Option<String> {
        if !self.settings.insight_enabled {
            return None;
        }

        let prompt = build_prompt(repo_name, framework, entry_points, file_count, dependencies);
        let text = match self.insight.request(&prompt) {
            Ok(text) => text,
            Err(LensError::InsightUnavailable { reason }) => {
                tracing::warn!(reason = %reason, "insight request failed");
                format!("AI insights unavailable: {}", reason)
            }
            Err(other) => {
                tracing::warn!(error = %other, "insight request failed");
                format!("AI insights unavailable: {}", other)
            }
        };
        Some(text)
    }
}
