//! Serializers that encode a [`RecordSet`] to disk and decode it back.
//!
//! # Available Serializers
//!
//! - **JSON** ([`JsonSerializer`]): indented structured text, `.json`
//! - **Pickle** ([`PickleSerializer`]): compact binary object encoding, `.pickle`
//!
//! Every serializer implements [`Serializer`]. Implementors only provide the
//! byte conversion and their naming; path handling, validation and logging
//! live in the provided [`Serializer::encode`] and [`Serializer::decode`].
//!
//! New formats are added by implementing the trait and registering a factory
//! in [`builtin_registry`].

pub mod json;
pub mod pickle;

pub use json::JsonSerializer;
pub use pickle::PickleSerializer;

use crate::data::RecordSet;
use crate::error::FormatError;
use crate::registry::FormatRegistry;
use crate::utils::{display_size, resolve_target};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Encode/decode capability for one on-disk format.
pub trait Serializer {
    /// Registry name, matching the implementing type's name.
    fn name(&self) -> &'static str;

    /// Short label used in log messages, e.g. `"JSON"`.
    fn format_label(&self) -> &'static str;

    /// Canonical extension including the dot, e.g. `".json"`.
    fn extension(&self) -> &'static str;

    /// Where [`Serializer::encode`] writes when no path is supplied.
    fn default_path(&self) -> PathBuf;

    fn to_bytes(&self, records: &RecordSet) -> Result<Vec<u8>, FormatError>;

    fn from_bytes(&self, bytes: &[u8]) -> Result<RecordSet, FormatError>;

    /// Writes `records` to `path` (or [`Serializer::default_path`]).
    ///
    /// # Returns
    /// * `Ok(Some(path))` - The file that was written
    /// * `Ok(None)` - The path failed validation; a warning was logged and nothing was written
    ///
    /// # Errors
    /// Encoding and write failures are returned as [`FormatError`].
    fn encode(
        &self,
        records: &RecordSet,
        path: Option<&Path>,
    ) -> Result<Option<PathBuf>, FormatError> {
        let Some(target) = resolve_target(path, self.default_path(), self.extension(), false) else {
            return Ok(None);
        };

        let bytes = self.to_bytes(records)?;
        std::fs::write(&target, &bytes)?;

        info!(
            "Serialization done in {} format ({}). Serialized data saved here : {}",
            self.format_label(),
            display_size(bytes.len()),
            target.display()
        );
        Ok(Some(target))
    }

    /// Reads a record set back from `path` (or [`Serializer::default_path`]).
    ///
    /// # Returns
    /// * `Ok(Some(records))` - The decoded records
    /// * `Ok(None)` - The path has the wrong extension or does not exist
    ///
    /// # Errors
    /// Read and decoding failures are returned as [`FormatError`].
    fn decode(&self, path: Option<&Path>) -> Result<Option<RecordSet>, FormatError> {
        let Some(source) = resolve_target(path, self.default_path(), self.extension(), true) else {
            return Ok(None);
        };

        let bytes = std::fs::read(&source)?;
        let records = self.from_bytes(&bytes)?;
        debug!(
            "Decoded {} record(s) from {} file {}",
            records.len(),
            self.format_label(),
            source.display()
        );
        Ok(Some(records))
    }
}

/// Builds the serializer registry with every built-in format.
pub fn builtin_registry() -> FormatRegistry<dyn Serializer> {
    let mut registry = FormatRegistry::new();
    registry.register(JsonSerializer::NAME, JsonSerializer::boxed);
    registry.register(PickleSerializer::NAME, PickleSerializer::boxed);
    registry
}
