//! Utility functions for the `shotdata` tool.
//!
//! This module provides:
//! - File path validation (presence, extension, existence)
//! - Target path resolution shared by every serializer and exporter
//! - Human-readable artifact sizes for log messages

use crate::error::PathValidationError;
use humansize::{DECIMAL, format_size};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Checks that a file path is usable.
///
/// # Arguments
/// * `path` - The path to check; `None` or an empty path is rejected
/// * `extension` - Required suffix including the dot, e.g. `".json"`
/// * `check_existence` - Also require the file to exist on disk
///
/// # Returns
/// * `Result<(), PathValidationError>` - The first rule the path breaks
pub fn validate_file_path(
    path: Option<&Path>,
    extension: Option<&str>,
    check_existence: bool,
) -> Result<(), PathValidationError> {
    let path = match path {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => return Err(PathValidationError::Missing),
    };

    if let Some(ext) = extension {
        if !path.to_string_lossy().ends_with(ext) {
            return Err(PathValidationError::WrongExtension {
                path: path.to_path_buf(),
                expected: ext.to_string(),
            });
        }
    }

    if check_existence && !path.is_file() {
        return Err(PathValidationError::NotFound(path.to_path_buf()));
    }

    Ok(())
}

/// Picks the path a handler should use and validates it.
///
/// A supplied non-empty path wins over `default`. Validation failures are
/// logged as warnings and turned into `None` so callers can skip the operation.
pub fn resolve_target(
    path: Option<&Path>,
    default: PathBuf,
    extension: &str,
    check_existence: bool,
) -> Option<PathBuf> {
    let target = path
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or(default);
    match validate_file_path(Some(target.as_path()), Some(extension), check_existence) {
        Ok(()) => Some(target),
        Err(e) => {
            warn!("{}", e);
            None
        }
    }
}

/// Formats a byte count the way log messages show artifact sizes.
pub fn display_size(bytes: usize) -> String {
    format_size(bytes as u64, DECIMAL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_target_prefers_supplied_path() {
        let target = resolve_target(
            Some(Path::new("elsewhere/out.json")),
            PathBuf::from("default.json"),
            ".json",
            false,
        );
        assert_eq!(target, Some(PathBuf::from("elsewhere/out.json")));
    }

    #[test]
    fn test_resolve_target_falls_back_to_default() {
        let target = resolve_target(None, PathBuf::from("default.txt"), ".txt", false);
        assert_eq!(target, Some(PathBuf::from("default.txt")));
    }

    #[test]
    fn test_resolve_target_treats_empty_path_as_absent() {
        let target = resolve_target(
            Some(Path::new("")),
            PathBuf::from("default.json"),
            ".json",
            false,
        );
        assert_eq!(target, Some(PathBuf::from("default.json")));
    }

    #[test]
    fn test_resolve_target_rejects_wrong_extension() {
        let target = resolve_target(
            Some(Path::new("out.txt")),
            PathBuf::from("default.json"),
            ".json",
            false,
        );
        assert_eq!(target, None);
    }

    #[test]
    fn test_display_size() {
        assert_eq!(display_size(0), "0 B");
        assert!(display_size(1500).ends_with("kB"));
    }
}
