//! Modular output system for the `shotdata` application.
//!
//! This module provides a pluggable output system with different exporters
//! for displaying a [`RecordSet`] in human-readable formats. The modular
//! design allows for easy extension with new output formats.
//!
//! # Available Exporters
//!
//! - **HTML** ([`HtmlExporter`]): a single page with one table row per record
//! - **Text** ([`TextExporter`]): a plain-text listing of `key = value` lines
//!
//! # Usage
//!
//! Each exporter renders a record set to a `String` and writes it to its
//! canonical path or a caller-supplied one. Renderers are stateless, which
//! makes them easy to test and extend.

pub mod html;
pub mod text;

pub use html::HtmlExporter;
pub use text::TextExporter;

use crate::data::RecordSet;
use crate::error::FormatError;
use crate::registry::FormatRegistry;
use crate::utils::{display_size, resolve_target};
use std::path::{Path, PathBuf};
use tracing::info;

// Re-export the main render functions for convenience

/// HTML render function.
///
/// See [`html::render`] for full documentation.
pub use html::render as render_html;

/// Text render function.
///
/// See [`text::render`] for full documentation.
pub use text::render as render_text;

/// Render/export capability for one display format.
pub trait Exporter {
    /// Registry name, matching the implementing type's name.
    fn name(&self) -> &'static str;

    /// Short label used in log messages, e.g. `"HTML"`.
    fn format_label(&self) -> &'static str;

    /// Canonical extension including the dot, e.g. `".html"`.
    fn extension(&self) -> &'static str;

    fn default_path(&self) -> PathBuf;

    fn render(&self, records: &RecordSet) -> String;

    /// Renders `records` and writes them to `path` (or [`Exporter::default_path`]).
    ///
    /// # Returns
    /// * `Ok(Some(path))` - The file that was written
    /// * `Ok(None)` - The path failed validation; a warning was logged and nothing was written
    ///
    /// # Errors
    /// Write failures are returned as [`FormatError::Io`].
    fn export(
        &self,
        records: &RecordSet,
        path: Option<&Path>,
    ) -> Result<Option<PathBuf>, FormatError> {
        let Some(target) = resolve_target(path, self.default_path(), self.extension(), false) else {
            return Ok(None);
        };

        let rendered = self.render(records);
        std::fs::write(&target, &rendered)?;

        info!(
            "Display output has been created in {} format ({}). Output saved here : {}",
            self.format_label(),
            display_size(rendered.len()),
            target.display()
        );
        Ok(Some(target))
    }
}

/// Builds the exporter registry with every built-in format.
pub fn builtin_registry() -> FormatRegistry<dyn Exporter> {
    let mut registry = FormatRegistry::new();
    registry.register(HtmlExporter::NAME, HtmlExporter::boxed);
    registry.register(TextExporter::NAME, TextExporter::boxed);
    registry
}
