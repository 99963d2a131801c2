//! Data structures for representing shot records.
//!
//! This module defines the core data structures used throughout the `shotdata`
//! application: a [`FieldValue`] scalar, an insertion-ordered [`Record`] and the
//! [`RecordSet`] handed to every serializer and exporter.
//!
//! Field order matters because the exporters render columns in the order the
//! fields were inserted, so [`Record`] is backed by a `Vec` rather than a hash map.

use crate::error::FormatError;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fs::File;
use std::path::Path;

/// A single scalar field value.
///
/// # Variants
/// * `Text` - Free-form text, e.g. a sequence or artist name
/// * `Integer` - A whole number, e.g. a frame count
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(v) => f.write_str(v),
            FieldValue::Integer(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(value.into())
    }
}

// Human-readable formats (JSON) get the bare scalar. Binary formats cannot
// infer the type from the bytes, so they carry an explicit variant tag.
impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            match self {
                FieldValue::Text(v) => serializer.serialize_str(v),
                FieldValue::Integer(v) => serializer.serialize_i64(*v),
            }
        } else {
            match self {
                FieldValue::Text(v) => {
                    serializer.serialize_newtype_variant("FieldValue", 0, "Text", v)
                }
                FieldValue::Integer(v) => {
                    serializer.serialize_newtype_variant("FieldValue", 1, "Integer", v)
                }
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(rename = "FieldValue")]
enum TaggedValue {
    Text(String),
    Integer(i64),
}

struct ScalarVisitor;

impl<'de> Visitor<'de> for ScalarVisitor {
    type Value = FieldValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or an integer")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<FieldValue, E> {
        Ok(FieldValue::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<FieldValue, E> {
        Ok(FieldValue::Text(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<FieldValue, E> {
        Ok(FieldValue::Integer(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<FieldValue, E> {
        i64::try_from(v)
            .map(FieldValue::Integer)
            .map_err(|_| E::custom(format!("integer {} does not fit in i64", v)))
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            deserializer.deserialize_any(ScalarVisitor)
        } else {
            Ok(match TaggedValue::deserialize(deserializer)? {
                TaggedValue::Text(v) => FieldValue::Text(v),
                TaggedValue::Integer(v) => FieldValue::Integer(v),
            })
        }
    }
}

/// One shot entry: an ordered set of named fields.
///
/// Keys are unique; inserting an existing key replaces its value without
/// moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a field, returning the previous value if the key already existed.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.fields.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = Record;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of field names to values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Record, A::Error> {
        let mut record = Record::new();
        while let Some((key, value)) = access.next_entry::<String, FieldValue>()? {
            record.insert(key, value);
        }
        Ok(record)
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RecordVisitor)
    }
}

/// An ordered collection of records.
///
/// Records in a set are expected to share the same keys, but nothing enforces it;
/// see the HTML exporter for what happens when they do not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordSet {
    records: Vec<Record>,
}

impl RecordSet {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Wraps a single record as a one-element set.
    pub fn from_record(record: Record) -> Self {
        Self {
            records: vec![record],
        }
    }

    /// Builds a record set from a CSV file.
    ///
    /// The first row holds the field names and every following row becomes one
    /// record, zipped against those names (extra cells or names are dropped).
    /// Blank lines are skipped by the reader. Fields are read as text. An empty
    /// file yields an empty set.
    ///
    /// # Errors
    /// Returns [`FormatError::Io`] if the file cannot be opened and
    /// [`FormatError::Csv`] if a row cannot be parsed.
    pub fn from_csv(path: &Path) -> Result<Self, FormatError> {
        let file = File::open(path)?;
        Self::from_csv_reader(file)
    }

    /// Same as [`RecordSet::from_csv`] for any reader.
    pub fn from_csv_reader<R: std::io::Read>(reader: R) -> Result<Self, FormatError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .delimiter(b',')
            .quote(b'|')
            .flexible(true)
            .from_reader(reader);

        let mut rows = reader.records();
        let headers = match rows.next() {
            Some(row) => row?,
            None => return Ok(Self::default()),
        };

        let records = rows
            .map(|row| {
                let row = row?;
                Ok(headers.iter().zip(row.iter()).collect())
            })
            .collect::<Result<Vec<Record>, FormatError>>()?;
        Ok(Self { records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<Record> for RecordSet {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shot() -> Record {
        let mut record = Record::new();
        record.insert("sequence", "A20");
        record.insert("shot", "sh500");
        record.insert("frames", 167);
        record.insert("artist", "Josh");
        record
    }

    #[test]
    fn test_record_preserves_insertion_order() {
        let record = shot();
        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, vec!["sequence", "shot", "frames", "artist"]);
    }

    #[test]
    fn test_record_insert_overwrites_in_place() {
        let mut record = shot();
        let previous = record.insert("shot", "sh510");

        assert_eq!(previous, Some(FieldValue::from("sh500")));
        assert_eq!(record.len(), 4);
        assert_eq!(record.keys().nth(1), Some("shot"));
        assert_eq!(record.get("shot"), Some(&FieldValue::from("sh510")));
    }

    #[test]
    fn test_field_value_display() {
        assert_eq!(FieldValue::from("sh500").to_string(), "sh500");
        assert_eq!(FieldValue::from(167).to_string(), "167");
    }

    #[test]
    fn test_json_keeps_bare_scalars_and_order() {
        let json = serde_json::to_string(&shot()).unwrap();
        assert_eq!(
            json,
            r#"{"sequence":"A20","shot":"sh500","frames":167,"artist":"Josh"}"#
        );
    }

    #[test]
    fn test_json_rejects_floats() {
        let result: Result<Record, _> = serde_json::from_str(r#"{"frames": 1.5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_bincode_keeps_integer_and_text_apart() {
        let mut record = Record::new();
        record.insert("frames", 167);
        record.insert("label", "167");

        let bytes = bincode::serialize(&record).unwrap();
        let decoded: Record = bincode::deserialize(&bytes).unwrap();

        assert_eq!(decoded.get("frames"), Some(&FieldValue::Integer(167)));
        assert_eq!(decoded.get("label"), Some(&FieldValue::from("167")));
    }

    #[test]
    fn test_from_csv_reader_zips_header() {
        let input = "sequence,shot,frames,artist\nA20,sh500,167,Josh\n";
        let set = RecordSet::from_csv_reader(input.as_bytes()).unwrap();

        assert_eq!(set.len(), 1);
        let expected: Record = [
            ("sequence", "A20"),
            ("shot", "sh500"),
            ("frames", "167"),
            ("artist", "Josh"),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.records()[0], expected);
    }

    #[test]
    fn test_from_csv_reader_truncates_ragged_rows() {
        let input = "a,b,c\n1,2\n1,2,3,4\n";
        let set = RecordSet::from_csv_reader(input.as_bytes()).unwrap();

        assert_eq!(set.records()[0].len(), 2);
        assert_eq!(set.records()[1].len(), 3);
    }

    #[test]
    fn test_from_csv_reader_skips_blank_lines() {
        let input = "sequence,shot\n\nA20,sh500\n\n\nB10,sh020\n";
        let set = RecordSet::from_csv_reader(input.as_bytes()).unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.records()[1].get("sequence"), Some(&FieldValue::from("B10")));
    }

    #[test]
    fn test_from_csv_reader_pipe_quoting() {
        let input = "name,note\n|Doe, Jane|,ok\n";
        let set = RecordSet::from_csv_reader(input.as_bytes()).unwrap();

        assert_eq!(
            set.records()[0].get("name"),
            Some(&FieldValue::from("Doe, Jane"))
        );
    }

    #[test]
    fn test_from_csv_reader_empty_and_header_only() {
        assert!(RecordSet::from_csv_reader("".as_bytes()).unwrap().is_empty());
        assert!(
            RecordSet::from_csv_reader("a,b\n".as_bytes())
                .unwrap()
                .is_empty()
        );
    }
}
