//! Library crate for shotdata
//!
//! This exposes the modules needed for testing and potential library usage.
//!
//! # Features
//!
//! - **Record Model**: Ordered shot records built from CLI fields or CSV files
//! - **Serializers**: JSON and binary encode/decode with exact round-trips
//! - **Exporters**: HTML and plain-text display output
//! - **Format Registries**: Name-to-handler tables listing every supported format
//!
//! # Modules
//!
//! - [`data`]: Core data structures (`FieldValue`, `Record`, `RecordSet`)
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Output locations and template database
//! - [`input`]: Input validation and record source selection
//! - [`serializer`]: Serializer trait and the JSON / pickle handlers
//! - [`output`]: Exporter trait and the HTML / text handlers
//! - [`registry`]: Format registries for both handler kinds
//! - [`app`]: The end-to-end driver used by the binary
//! - [`utils`]: Path validation helpers

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;
pub mod registry;
pub mod serializer;
pub mod utils;

pub use app::{RunReport, SerializerApp};
pub use cli::Args;
pub use config::Config;
pub use data::{FieldValue, Record, RecordSet};
pub use error::{FormatError, PathValidationError, RunError};
pub use output::Exporter;
pub use serializer::Serializer;
