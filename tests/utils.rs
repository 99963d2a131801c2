use shotdata::PathValidationError;
use shotdata::utils::validate_file_path;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[test]
fn test_validate_file_path_missing() {
    assert_eq!(
        validate_file_path(None, Some(".json"), false),
        Err(PathValidationError::Missing)
    );
    assert_eq!(
        validate_file_path(Some(Path::new("")), None, false),
        Err(PathValidationError::Missing)
    );
}

#[test]
fn test_validate_file_path_extension() {
    assert!(validate_file_path(Some(Path::new("out/data.json")), Some(".json"), false).is_ok());
    assert!(validate_file_path(Some(Path::new("data.json")), None, false).is_ok());

    assert_eq!(
        validate_file_path(Some(Path::new("data.jsonl")), Some(".json"), false),
        Err(PathValidationError::WrongExtension {
            path: PathBuf::from("data.jsonl"),
            expected: ".json".to_string(),
        })
    );
}

#[test]
fn test_validate_file_path_existence() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let present = temp_dir.path().join("shots.csv");
    let absent = temp_dir.path().join("absent.csv");
    fs::write(&present, "a,b\n").expect("Failed to write file");

    assert!(validate_file_path(Some(present.as_path()), Some(".csv"), true).is_ok());
    assert_eq!(
        validate_file_path(Some(absent.as_path()), Some(".csv"), true),
        Err(PathValidationError::NotFound(absent.clone()))
    );

    // A directory is not a file even with the right suffix
    let dir_named_csv = temp_dir.path().join("dir.csv");
    fs::create_dir(&dir_named_csv).expect("Failed to create dir");
    assert!(validate_file_path(Some(dir_named_csv.as_path()), Some(".csv"), true).is_err());
}
