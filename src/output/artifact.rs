//! Shared file writing for every output artifact.
//!
//! Content goes to a temporary file beside the target and is renamed over
//! it once complete, so an interrupted write never leaves a truncated file
//! under the final name.

use crate::utils::error::OutputError;
use log::{debug, info};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Write `bytes` to `output_path`
///
/// **Public** - used by the CSV, JSON and chart writers
///
/// # Errors
/// * `OutputError::InvalidPath` - path empty, a directory, or parent not creatable
/// * `OutputError::WriteFailed` - I/O error during write or rename
pub fn write_artifact(bytes: &[u8], output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    validate_output_path(output_path)?;

    let parent = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Create parent directories if needed
    if !parent.exists() {
        debug!("Creating parent directories: {}", parent.display());
        std::fs::create_dir_all(parent).map_err(|e| {
            OutputError::InvalidPath(format!(
                "Cannot create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let mut staging = NamedTempFile::new_in(parent)?;
    staging.write_all(bytes)?;
    staging.flush()?;
    staging
        .persist(output_path)
        .map_err(|e| OutputError::WriteFailed(e.error))?;

    info!(
        "Wrote {} ({} bytes, {:.2} KB)",
        output_path.display(),
        bytes.len(),
        bytes.len() as f64 / 1024.0
    );

    Ok(())
}

/// Validate that output path is writable
///
/// **Public** - also used for early argument validation
pub fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Check if we're trying to overwrite a directory
    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_artifact() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("out.txt");

        write_artifact(b"hello", &path).unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"hello");
    }

    #[test]
    fn test_write_artifact_replaces_existing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("out.txt");

        write_artifact(b"first version", &path).unwrap();
        write_artifact(b"second", &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
        // No staging files left behind
        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/out.csv");

        write_artifact(b"a,b\n", &nested_path).unwrap();

        assert!(nested_path.exists());
    }

    #[test]
    fn test_validate_output_path_empty() {
        assert!(validate_output_path(Path::new("")).is_err());
    }

    #[test]
    fn test_validate_output_path_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(validate_output_path(temp_dir.path()).is_err());
    }
}
