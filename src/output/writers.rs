//! Output writers

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{LensError, Result};

/// Trait for writing formatted output
pub trait OutputWriter {
    /// Write the formatted content to the destination
    fn write(&self, content: &str) -> Result<()>;
}

/// Writer that prints to stdout
pub struct StdoutWriter;

impl OutputWriter for StdoutWriter {
    fn write(&self, content: &str) -> Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(content.as_bytes())
            .and_then(|_| handle.write_all(b"\n"))
            .map_err(|err| LensError::StdoutWrite { source: err })
    }
}

/// Writer that saves to a file
pub struct FileWriter {
    path: PathBuf,
}

impl FileWriter {
    /// Create a writer for the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Destination path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputWriter for FileWriter {
    fn write(&self, content: &str) -> Result<()> {
        std::fs::write(&self.path, content).map_err(|err| LensError::OutputWrite {
            path: self.path.clone(),
            source: err,
        })
    }
}

/// Create a writer for the configured destination
pub fn create_writer(output_file: Option<&PathBuf>) -> Box<dyn OutputWriter> {
    match output_file {
        Some(path) => Box::new(FileWriter::new(path)),
        None => Box::new(StdoutWriter),
    }
}
