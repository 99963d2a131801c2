//! Shared configuration: where artifacts go and where the template data lives.
//!
//! Resolution order for the output directory:
//! 1. `--output-dir` on the command line
//! 2. The `SHOTDATA_OUTPUT_DIR` environment variable
//! 3. `output_files` under the current directory
//!
//! The template database can be overridden with `SHOTDATA_TEMPLATE`; otherwise
//! the CSV shipped with the crate is used.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub const OUTPUT_DIR_ENV: &str = "SHOTDATA_OUTPUT_DIR";
pub const TEMPLATE_ENV: &str = "SHOTDATA_TEMPLATE";

pub const DEFAULT_OUTPUT_DIR: &str = "output_files";
pub const DEFAULT_TEMPLATE_DATABASE: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/database/default_template_database.csv"
);

/// Basename shared by the serialized artifacts (`serialized_data.json`, ...).
pub const SERIALIZE_FILE_NAME: &str = "serialized_data";
/// Basename shared by the display artifacts (`display_output.html`, ...).
pub const OUTPUT_FILE_NAME: &str = "display_output";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub output_dir: PathBuf,
    pub template_database: PathBuf,
    pub serialize_basename: String,
    pub output_basename: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            template_database: PathBuf::from(DEFAULT_TEMPLATE_DATABASE),
            serialize_basename: SERIALIZE_FILE_NAME.to_string(),
            output_basename: OUTPUT_FILE_NAME.to_string(),
        }
    }
}

impl Config {
    /// Builds a configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(dir) = std::env::var(OUTPUT_DIR_ENV) {
            config.output_dir = PathBuf::from(dir);
        }
        if let Ok(template) = std::env::var(TEMPLATE_ENV) {
            config.template_database = PathBuf::from(template);
        }
        config
    }

    /// Same configuration writing into `dir`.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Same configuration reading template data from `path`.
    pub fn with_template_database(mut self, path: impl Into<PathBuf>) -> Self {
        self.template_database = path.into();
        self
    }

    /// `<output_dir>/<serialize_basename><extension>`
    pub fn serialize_path(&self, extension: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}{}", self.serialize_basename, extension))
    }

    /// `<output_dir>/<output_basename><extension>`
    pub fn output_path(&self, extension: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}{}", self.output_basename, extension))
    }

    /// Creates the output directory if it does not exist yet.
    pub fn ensure_output_dir(&self) -> Result<&Path> {
        std::fs::create_dir_all(&self.output_dir).with_context(|| {
            format!(
                "Failed to create output directory: {}",
                self.output_dir.display()
            )
        })?;
        Ok(&self.output_dir)
    }
}
