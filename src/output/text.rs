//! Plain-text exporter.
//!
//! Produces a banner, the total record count and then one block per record:
//! a `key = value` line for each field followed by a separator line.

use super::Exporter;
use crate::config::Config;
use crate::data::RecordSet;
use std::path::PathBuf;

const BANNER: &str = "**********  Output in TEXT Format  ************* ";
const SEPARATOR: &str = "------------------------------------------------";

#[derive(Debug, Clone)]
pub struct TextExporter {
    target: PathBuf,
}

impl TextExporter {
    pub const NAME: &'static str = "TextExporter";
    pub const EXTENSION: &'static str = ".txt";

    pub fn new(config: &Config) -> Self {
        Self {
            target: config.output_path(Self::EXTENSION),
        }
    }

    /// Registry factory.
    pub fn boxed(config: &Config) -> Box<dyn Exporter> {
        Box::new(Self::new(config))
    }
}

impl Exporter for TextExporter {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn format_label(&self) -> &'static str {
        "TEXT"
    }

    fn extension(&self) -> &'static str {
        Self::EXTENSION
    }

    fn default_path(&self) -> PathBuf {
        self.target.clone()
    }

    fn render(&self, records: &RecordSet) -> String {
        render(records)
    }
}

/// Renders a record set as plain text.
pub fn render(records: &RecordSet) -> String {
    let mut text = format!(
        "{}\n\nTotal inputs received :  {} \n{}\n",
        BANNER,
        records.len(),
        SEPARATOR
    );

    for record in records {
        for (key, value) in record.iter() {
            text.push_str(&format!("\t{}\t\t=\t{} \n", key, value));
        }
        text.push('\n');
        text.push_str(SEPARATOR);
        text.push('\n');
    }
    text
}
