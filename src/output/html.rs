//! HTML exporter.
//!
//! Produces a standalone page holding one table: a header row, one row per
//! record and a caption with the total record count.
//!
//! The header is taken from the first record's keys only. Later records that
//! carry different keys still get one cell per field, in their own order, so
//! their cells may not line up with the header. Record sets built by this
//! crate always share keys; the behavior is kept as-is and covered by tests.

use super::Exporter;
use crate::config::Config;
use crate::data::RecordSet;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct HtmlExporter {
    target: PathBuf,
}

impl HtmlExporter {
    pub const NAME: &'static str = "HtmlExporter";
    pub const EXTENSION: &'static str = ".html";

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

impl Exporter for HtmlExporter {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn format_label(&self) -> &'static str {
        "HTML"
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

/// Escapes text for use inside an HTML element or attribute.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders a record set as an HTML document.
///
/// # Arguments
/// * `records` - The records to render; an empty set yields a header-less table with a zero count
///
/// # Returns
/// * `String` - The complete document
pub fn render(records: &RecordSet) -> String {
    let mut head = String::new();
    if let Some(first) = records.records().first() {
        for key in first.keys() {
            head.push_str(&format!("<th> {} </th>\n\t\t", escape_html(key)));
        }
    }

    let mut rows = String::new();
    for record in records {
        rows.push_str("\t\t<tr>\n\t\t\t");
        for (_, value) in record.iter() {
            rows.push_str(&format!(
                "<td align='center'> {} </td>\n\t\t\t",
                escape_html(&value.to_string())
            ));
        }
        rows.push_str("\n\t\t</tr>\n");
    }

    let mut html = String::with_capacity(512 + head.len() + rows.len());
    html.push_str(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="UTF-8">
<title>Serialized data in HTML display</title>
</head>
<body>
<table border="1" style="width:60%" align="center">
"#,
    );
    html.push_str(&format!(
        "<caption style=\"color:red\"><b>Output in HTML Format - Total Entries : {}</b></caption>\n",
        records.len()
    ));
    html.push_str("    <tr>\n        ");
    html.push_str(&head);
    html.push_str("\n    </tr>\n");
    html.push_str(&rows);
    html.push_str("</table>\n</body>\n</html>\n");
    html
}
