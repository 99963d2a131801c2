//! JSON serializer.
//!
//! Writes the record set as an array of objects with 4-space indentation.
//! Field order is preserved and integers stay JSON numbers, so decoding
//! reproduces the original records exactly.

use super::Serializer;
use crate::config::Config;
use crate::data::RecordSet;
use crate::error::FormatError;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::path::PathBuf;

const INDENT: &[u8] = b"    ";

#[derive(Debug, Clone)]
pub struct JsonSerializer {
    target: PathBuf,
}

impl JsonSerializer {
    pub const NAME: &'static str = "JsonSerializer";
    pub const EXTENSION: &'static str = ".json";

    pub fn new(config: &Config) -> Self {
        Self {
            target: config.serialize_path(Self::EXTENSION),
        }
    }

    /// Registry factory.
    pub fn boxed(config: &Config) -> Box<dyn Serializer> {
        Box::new(Self::new(config))
    }
}

impl Serializer for JsonSerializer {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn format_label(&self) -> &'static str {
        "JSON"
    }

    fn extension(&self) -> &'static str {
        Self::EXTENSION
    }

    fn default_path(&self) -> PathBuf {
        self.target.clone()
    }

    fn to_bytes(&self, records: &RecordSet) -> Result<Vec<u8>, FormatError> {
        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        records.serialize(&mut ser)?;
        Ok(buf)
    }

    fn from_bytes(&self, bytes: &[u8]) -> Result<RecordSet, FormatError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Record;

    fn sample() -> RecordSet {
        let mut record = Record::new();
        record.insert("sequence", "A20");
        record.insert("frames", 167);
        RecordSet::from_record(record)
    }

    #[test]
    fn test_four_space_indent() {
        let serializer = JsonSerializer::new(&Config::default());
        let text = String::from_utf8(serializer.to_bytes(&sample()).unwrap()).unwrap();

        let expected = "[\n    {\n        \"sequence\": \"A20\",\n        \"frames\": 167\n    }\n]";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_round_trip_in_memory() {
        let serializer = JsonSerializer::new(&Config::default());
        let bytes = serializer.to_bytes(&sample()).unwrap();
        assert_eq!(serializer.from_bytes(&bytes).unwrap(), sample());
    }

    #[test]
    fn test_default_path() {
        let config = Config::default().with_output_dir("out");
        assert_eq!(
            JsonSerializer::new(&config).default_path(),
            PathBuf::from("out/serialized_data.json")
        );
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        let serializer = JsonSerializer::new(&Config::default());
        assert!(matches!(
            serializer.from_bytes(b"not json"),
            Err(FormatError::Json(_))
        ));
    }
}
