//! CLI interface definitions for the `shotdata` application.
//!
//! This module defines command-line arguments using [`clap`] and exposes
//! [`Args`], the struct parsed from CLI inputs. It is consumed by
//! [`crate::input::UserInputs`] to decide where records come from and by
//! [`crate::app::SerializerApp`] to decide which formats to produce.
//!
//! # Example
//!
//! ```bash
//! shotdata --sequence 010 --shot 200 --frames 78 --artist Josh
//! shotdata --external-file shots.csv --format JsonSerializer --verify
//! shotdata --list-formats
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the `shotdata` serializer.
///
/// When any of the shot fields is missing the run falls back to a CSV file:
/// `--external-file` if given, the bundled template database otherwise.
#[derive(Parser, Debug, Clone)]
#[command(name = "shotdata", author = "Sam Green", version, about)]
pub struct Args {
    /// Sequence name
    #[arg(long, alias = "seq")]
    pub sequence: Option<String>,

    /// Shot name
    #[arg(long)]
    pub shot: Option<String>,

    /// Frame count
    #[arg(long, alias = "frame", default_value_t = 1, allow_negative_numbers = true)]
    pub frames: i64,

    /// Artist name
    #[arg(long, default_value = "Unassigned")]
    pub artist: String,

    /// Read records from this CSV file instead of the shot fields
    #[arg(long, value_name = "FILE")]
    pub external_file: Option<PathBuf>,

    /// Read records from the bundled template database
    #[arg(short = 't', long, default_value_t = false)]
    pub use_default_template: bool,

    /// Directory for generated files (default: $SHOTDATA_OUTPUT_DIR or ./output_files)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Only produce these formats (registry names, e.g. JsonSerializer); repeatable
    #[arg(long = "format", value_name = "NAME", action = clap::ArgAction::Append)]
    pub formats: Vec<String>,

    /// Decode every serialized file and check it matches the input
    #[arg(long, default_value_t = false)]
    pub verify: bool,

    /// List supported serializer and exporter formats, then exit
    #[arg(long, default_value_t = false)]
    pub list_formats: bool,

    /// Enable debug logging (or set SHOTDATA_LOG)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
