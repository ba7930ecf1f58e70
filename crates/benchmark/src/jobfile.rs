//! Job file loading.

use std::path::Path;
use stockcut_core::{Error, Job, Result};

/// Parses a job from JSON, accepting either `target_sizes` form.
pub fn parse_job(json: &str) -> Result<Job> {
    Job::from_json(json)
}

/// Reads and parses a job file.
pub fn load_job(path: impl AsRef<Path>) -> Result<Job> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .map_err(|e| Error::Serialization(format!("{}: {}", path.display(), e)))?;
    parse_job(&json)
}
