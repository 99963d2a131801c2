#![allow(dead_code)]

use shotdata::{Config, Record, RecordSet};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Sets up a unique temporary output directory for each test to prevent cross-test interference.
///
/// # Returns
/// The `TempDir` handle (keep it alive for the duration of the test) and a
/// `Config` writing into it. The template database points at a file that
/// does not exist yet; use [`write_template`] to create it.
pub fn setup_temp_output_dir() -> std::io::Result<(TempDir, Config)> {
    let dir = tempfile::tempdir()?;
    let config = Config::default()
        .with_output_dir(dir.path())
        .with_template_database(dir.path().join("template.csv"));
    Ok((dir, config))
}

/// Writes `contents` to the configured template database.
pub fn write_template(config: &Config, contents: &str) -> PathBuf {
    fs::write(&config.template_database, contents).expect("Failed to write template");
    config.template_database.clone()
}

/// The shot used throughout the tests, with `frames` as an integer.
pub fn sample_record() -> Record {
    let mut record = Record::new();
    record.insert("sequence", "A20");
    record.insert("shot", "sh500");
    record.insert("frames", 167);
    record.insert("artist", "Josh");
    record
}

pub fn sample_set() -> RecordSet {
    let mut second = Record::new();
    second.insert("sequence", "B10");
    second.insert("shot", "sh020");
    second.insert("frames", 240);
    second.insert("artist", "Marco");
    RecordSet::new(vec![sample_record(), second])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_temp_output_dir() {
        let (dir, config) = setup_temp_output_dir().unwrap();
        assert_eq!(config.output_dir, dir.path());
        assert!(dir.path().exists());
    }

    #[test]
    fn test_multiple_calls_create_different_dirs() {
        let (_dir1, config1) = setup_temp_output_dir().unwrap();
        let (_dir2, config2) = setup_temp_output_dir().unwrap();
        assert_ne!(config1.output_dir, config2.output_dir);
    }
}
