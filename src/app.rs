//! Application driver: validate input, serialize, export.
//!
//! [`SerializerApp::run`] performs one full pass:
//! 1. Optionally report the supported formats and stop (`--list-formats`)
//! 2. Resolve `--format` selections against both registries
//! 3. Validate the user input and build the [`RecordSet`]
//! 4. Encode with each selected serializer, decoding again under `--verify`
//! 5. Export with each selected exporter
//!
//! Handlers that reject their target path are skipped with a warning; any
//! other failure aborts the run with a [`RunError`].

use crate::cli::Args;
use crate::config::Config;
use crate::data::RecordSet;
use crate::error::RunError;
use crate::input::{UserInputs, build_record_set};
use crate::output::Exporter;
use crate::registry::{self, FormatRegistry};
use crate::serializer::Serializer;
use std::path::PathBuf;
use tracing::{debug, info};

/// What a run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub record_count: usize,
    /// Serialized files as `(format name, path)`
    pub serialized: Vec<(&'static str, PathBuf)>,
    /// Display files as `(format name, path)`
    pub exported: Vec<(&'static str, PathBuf)>,
}

impl RunReport {
    /// Every file written, serialized first.
    pub fn paths(&self) -> impl Iterator<Item = &PathBuf> {
        self.serialized
            .iter()
            .chain(self.exported.iter())
            .map(|(_, path)| path)
    }
}

pub struct SerializerApp {
    config: Config,
}

impl SerializerApp {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn run(&self, args: &Args) -> Result<RunReport, RunError> {
        let serializers = registry::serializers();
        let exporters = registry::exporters();

        if args.list_formats {
            serializers.report_supported("serializer");
            exporters.report_supported("output");
            return Ok(RunReport::default());
        }

        let (serializer_names, exporter_names) =
            select_formats(&args.formats, serializers, exporters)?;

        let source = UserInputs::from(args).validate(&self.config)?;
        info!("Validation done. All okay. Proceeding ahead.");

        let records = build_record_set(&source)?;
        info!("Collected {} record(s)", records.len());

        let mut report = RunReport {
            record_count: records.len(),
            ..Default::default()
        };

        for name in serializer_names {
            let Some(serializer) = serializers.create(name, &self.config) else {
                continue;
            };
            if let Some(path) = self.serialize(serializer.as_ref(), &records, args.verify)? {
                report.serialized.push((name, path));
            }
        }

        for name in exporter_names {
            let Some(exporter) = exporters.create(name, &self.config) else {
                continue;
            };
            if let Some(path) = exporter.export(&records, None)? {
                report.exported.push((name, path));
            }
        }

        info!("Process complete...!!!");
        Ok(report)
    }

    fn serialize(
        &self,
        serializer: &dyn Serializer,
        records: &RecordSet,
        verify: bool,
    ) -> Result<Option<PathBuf>, RunError> {
        let Some(path) = serializer.encode(records, None)? else {
            return Ok(None);
        };

        if verify {
            let decoded = serializer.decode(Some(path.as_path()))?;
            if decoded.as_ref() != Some(records) {
                return Err(RunError::RoundTripMismatch {
                    format: serializer.format_label(),
                    path,
                });
            }
            debug!("{} round-trip verified", serializer.name());
        }
        Ok(Some(path))
    }
}

/// Splits `--format` names between the two registries.
///
/// No names selects every registered format. Otherwise only the named formats
/// run, which may leave one of the two lists empty.
pub fn select_formats(
    requested: &[String],
    serializers: &FormatRegistry<dyn Serializer>,
    exporters: &FormatRegistry<dyn Exporter>,
) -> Result<(Vec<&'static str>, Vec<&'static str>), RunError> {
    if requested.is_empty() {
        return Ok((serializers.names(), exporters.names()));
    }

    let mut selected_serializers = Vec::new();
    let mut selected_exporters = Vec::new();
    for name in requested {
        if let Some(entry) = serializers.list().iter().find(|e| e.name == name.as_str()) {
            if !selected_serializers.contains(&entry.name) {
                selected_serializers.push(entry.name);
            }
        } else if let Some(entry) = exporters.list().iter().find(|e| e.name == name.as_str()) {
            if !selected_exporters.contains(&entry.name) {
                selected_exporters.push(entry.name);
            }
        } else {
            let supported: Vec<&str> = serializers
                .names()
                .into_iter()
                .chain(exporters.names())
                .collect();
            return Err(RunError::UnknownFormat {
                name: name.clone(),
                supported: supported.join(", "),
            });
        }
    }
    Ok((selected_serializers, selected_exporters))
}
