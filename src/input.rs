//! Turning command-line input into a [`RecordSet`].
//!
//! [`UserInputs`] validates the shot fields and decides whether records come
//! from those fields or from a CSV file. The decision is returned as an
//! [`InputSource`], which [`build_record_set`] turns into records.

use crate::cli::Args;
use crate::config::Config;
use crate::data::{Record, RecordSet};
use crate::error::{FormatError, RunError};
use crate::utils::validate_file_path;
use std::path::PathBuf;
use tracing::{info, warn};

const CSV_EXTENSION: &str = ".csv";

/// Where the records for a run come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A single record built from the shot fields
    Fields(Record),
    /// Rows of a CSV file
    File(PathBuf),
}

/// The shot fields and file options supplied by the user.
#[derive(Debug, Clone, Default)]
pub struct UserInputs {
    pub sequence: Option<String>,
    pub shot: Option<String>,
    pub frames: Option<i64>,
    pub artist: Option<String>,
    pub external_file: Option<PathBuf>,
    pub use_default_template: bool,
}

impl From<&Args> for UserInputs {
    fn from(args: &Args) -> Self {
        Self {
            sequence: args.sequence.clone(),
            shot: args.shot.clone(),
            frames: Some(args.frames),
            artist: Some(args.artist.clone()),
            external_file: args.external_file.clone(),
            use_default_template: args.use_default_template,
        }
    }
}

pub fn validate_string(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

pub fn validate_int(value: Option<i64>) -> bool {
    value.is_some_and(|v| v >= 0)
}

impl UserInputs {
    /// The shot fields as a record, or `None` if any of them is missing or invalid.
    pub fn field_record(&self) -> Option<Record> {
        let sequence = self.sequence.as_deref().filter(|s| validate_string(Some(*s)))?;
        let shot = self.shot.as_deref().filter(|s| validate_string(Some(*s)))?;
        let frames = self.frames.filter(|f| validate_int(Some(*f)))?;
        let artist = self.artist.as_deref().filter(|s| validate_string(Some(*s)))?;

        let mut record = Record::new();
        record.insert("sequence", sequence);
        record.insert("shot", shot);
        record.insert("frames", frames);
        record.insert("artist", artist);
        Some(record)
    }

    /// Validates the inputs and picks the record source.
    ///
    /// An explicit template or external file wins over the shot fields. When
    /// the fields are incomplete the template database is used as a fallback.
    ///
    /// # Errors
    /// Returns [`RunError::Validation`] when the fields are incomplete and no
    /// usable CSV file is available either.
    pub fn validate(&self, config: &Config) -> Result<InputSource, RunError> {
        info!("Validating inputs...");
        let fields = self.field_record();

        let candidate = if self.use_default_template {
            Some(config.template_database.clone())
        } else if let Some(file) = &self.external_file {
            Some(file.clone())
        } else if fields.is_none() {
            warn!("Values for all fields are not provided. Using external data file if any.");
            Some(config.template_database.clone())
        } else {
            None
        };

        if let Some(file) = candidate {
            match validate_file_path(Some(file.as_path()), Some(CSV_EXTENSION), true) {
                Ok(()) => {
                    info!("Using user data from file at : {}", file.display());
                    return Ok(InputSource::File(file));
                }
                Err(e) => warn!("{}", e),
            }
        }

        fields.map(InputSource::Fields).ok_or_else(|| {
            RunError::Validation(
                "shot fields are incomplete and no readable CSV file was found".to_string(),
            )
        })
    }
}

/// Reads or wraps the records for `source`.
pub fn build_record_set(source: &InputSource) -> Result<RecordSet, FormatError> {
    match source {
        InputSource::Fields(record) => Ok(RecordSet::from_record(record.clone())),
        InputSource::File(path) => RecordSet::from_csv(path),
    }
}
