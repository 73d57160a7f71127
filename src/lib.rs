//! repolens - a remote repository profiler
//!
//! Fetches a shallow snapshot of a repository and produces a structured
//! profile: detected frameworks, conventional entry points, a per-file
//! import inventory and an aggregated dependency map, optionally
//! enriched with an AI-generated summary.

pub mod cli;
pub mod config;
pub mod core;
pub mod detect;
pub mod error;
pub mod insight;
pub mod models;
pub mod output;
pub mod parsers;
pub mod storage;

// Re-export commonly used types
pub use crate::core::{AnalysisEngine, TreeWalker, Workspace};
pub use error::{ErrorSeverity, LensError, Result};
pub use insight::TextInsightProvider;
pub use models::{
    config::Settings,
    profile::{DependencyMap, FileEntry, RepositoryProfile},
};
pub use storage::ProfileStore;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
