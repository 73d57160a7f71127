//! Framework detection by sampling source file content
//!
//! Fallback for when no manifest produced a signal: inspect candidate
//! files under the conventional `src/` directory and look for framework
//! fingerprints in the leading bytes. Reads at most [`SAMPLE_BYTES`] per
//! candidate and stops at the first match.

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// How much of each candidate file is inspected
const SAMPLE_BYTES: usize = 100;

/// Ordered fingerprint table: lowercase needle, framework label
const FINGERPRINTS: &[(&str, &str)] = &[("react", "React")];

/// Sampler over the conventional source subdirectory
pub struct ContentSampler;

impl ContentSampler {
    /// Fingerprint source files under `src/`, returning the first
    /// matching framework label. Unreadable candidates are skipped.
    pub fn sample(root: &Path) -> Option<String> {
        let src_dir = root.join("src");
        if !src_dir.is_dir() {
            return None;
        }

        let pattern = src_dir.join("**").join("*.js*");
        let paths = glob::glob(&pattern.to_string_lossy()).ok()?;

        for candidate in paths.flatten() {
            if !candidate.is_file() {
                continue;
            }
            let Some(prefix) = read_prefix(&candidate) else {
                continue;
            };
            let haystack = prefix.to_lowercase();
            for (needle, label) in FINGERPRINTS {
                if haystack.contains(needle) {
                    return Some((*label).to_string());
                }
            }
        }

        None
    }
}

/// Read the leading bytes of a file as lossy UTF-8
fn read_prefix(path: &Path) -> Option<String> {
    let mut file = File::open(path).ok()?;
    let mut buffer = [0u8; SAMPLE_BYTES];
    let read = file.read(&mut buffer).ok()?;
    Some(String::from_utf8_lossy(&buffer[..read]).into_owned())
}
