//! Error handling for repolens
//!
//! Error types, result alias and context utilities. Only retrieval
//! failures are fatal to an analysis run; per-file read failures and
//! insight failures degrade to partial data.

pub mod context;
pub mod types;

pub use context::{OptionExt, ResultExt};
pub use types::{ErrorSeverity, LensError, Result};
