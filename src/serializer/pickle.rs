//! Binary object serializer.
//!
//! Uses bincode for a compact native encoding of the record set. The file
//! keeps the historical `.pickle` extension so existing output layouts stay
//! the same; it is not compatible with Python's pickle module.

use super::Serializer;
use crate::config::Config;
use crate::data::RecordSet;
use crate::error::FormatError;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct PickleSerializer {
    target: PathBuf,
}

impl PickleSerializer {
    pub const NAME: &'static str = "PickleSerializer";
    pub const EXTENSION: &'static str = ".pickle";

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

impl Serializer for PickleSerializer {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn format_label(&self) -> &'static str {
        "PICKLE"
    }

    fn extension(&self) -> &'static str {
        Self::EXTENSION
    }

    fn default_path(&self) -> PathBuf {
        self.target.clone()
    }

    fn to_bytes(&self, records: &RecordSet) -> Result<Vec<u8>, FormatError> {
        Ok(bincode::serialize(records)?)
    }

    fn from_bytes(&self, bytes: &[u8]) -> Result<RecordSet, FormatError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
