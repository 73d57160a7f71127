//! Workspace provisioning
//!
//! A Workspace is an ephemeral local snapshot of a remote repository,
//! owned exclusively by one analysis run. The backing temporary
//! directory is deleted when the Workspace is dropped, so release is
//! guaranteed on every exit path including downstream errors.

use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tempfile::TempDir;
use wait_timeout::ChildExt;

use crate::error::{LensError, Result};

/// Ephemeral directory holding one repository snapshot
pub struct Workspace {
    dir: TempDir,
    created_at: DateTime<Utc>,
}

impl Workspace {
    /// Fetch a shallow snapshot of `source_url` into a fresh temporary
    /// directory.
    ///
    /// Only a single-commit-depth checkout is performed; history,
    /// branches and tags are not needed. Fails with
    /// [`LensError::Retrieval`] when the remote cannot be fetched within
    /// `timeout`; the partially created directory is removed either way.
    pub fn acquire(source_url: &str, timeout: Duration) -> Result<Self> {
        if source_url.trim().is_empty() {
            return Err(LensError::retrieval(source_url, "empty repository location"));
        }

        let dir = TempDir::with_prefix("repolens-").map_err(LensError::io_error)?;

        tracing::debug!(url = source_url, dest = %dir.path().display(), "cloning repository");

        let mut child = Command::new("git")
            .args(["clone", "--depth", "1", "--quiet", source_url])
            .arg(dir.path())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|err| LensError::retrieval(source_url, format!("failed to run git: {}", err)))?;

        let status = child
            .wait_timeout(timeout)
            .map_err(|err| LensError::retrieval(source_url, format!("failed to wait for git: {}", err)))?;

        match status {
            Some(status) if status.success() => Ok(Self {
                dir,
                created_at: Utc::now(),
            }),
            Some(status) => {
                let mut stderr = String::new();
                if let Some(mut pipe) = child.stderr.take() {
                    let _ = pipe.read_to_string(&mut stderr);
                }
                let reason = if stderr.trim().is_empty() {
                    format!("git exited with {}", status)
                } else {
                    stderr.trim().to_string()
                };
                Err(LensError::retrieval(source_url, reason))
            }
            None => {
                let _ = child.kill();
                let _ = child.wait();
                Err(LensError::retrieval(
                    source_url,
                    format!("clone timed out after {}s", timeout.as_secs()),
                ))
            }
        }
    }

    /// Root path of the snapshot
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// When this workspace was provisioned
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
