//! Profile persistence
//!
//! The engine itself never touches storage; the driver hands each
//! completed profile to a [`ProfileStore`] and queries it for history.

pub mod history;

use crate::error::Result;
use crate::models::profile::RepositoryProfile;

pub use history::JsonHistoryStore;

/// Persistence collaborator for completed analysis runs
pub trait ProfileStore {
    /// Persist one immutable profile
    fn save(&self, profile: &RepositoryProfile) -> Result<()>;

    /// Return up to `limit` profiles, newest first
    fn recent(&self, limit: usize) -> Result<Vec<RepositoryProfile>>;
}
