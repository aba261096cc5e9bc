use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::ERRORS_LOG_FILE;
use crate::emitter::{ArtifactKind, RowDiagnostic, emit};
use crate::utils::{get_utc_iso_datetime, write_document, write_error_to_log};
use crate::workbook::read_rows;

/// One generation job: a design workbook and the declaration file built from it
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub input: PathBuf,
    pub output: PathBuf,
    error_log: PathBuf,
}

/// Outcome of a successful [`Artifact::generate`] run
#[derive(Debug)]
pub struct GenerationReport {
    pub kind: ArtifactKind,
    pub output: PathBuf,
    pub emitted: usize,
    pub diagnostics: Vec<RowDiagnostic>,
}

impl Artifact {
    pub fn new(kind: ArtifactKind, input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Artifact {
            kind,
            input: input.into(),
            output: output.into(),
            error_log: PathBuf::from(ERRORS_LOG_FILE),
        }
    }

    /// Resolve the asset layout used by the game project:
    /// `<root>/Designs/<Workbook>.xlsx` → `<root>/Scripts/Contents/<Container>.cs`
    pub fn conventional(kind: ArtifactKind, root: &Path) -> Self {
        let workbook = match kind {
            ArtifactKind::ConstantList => "Constants.xlsx",
            ArtifactKind::GroupedEnum => "Enums.xlsx",
            ArtifactKind::StringConstantList => "StringConst.xlsx",
        };
        let input = root.join("Designs").join(workbook);
        let output = root
            .join("Scripts")
            .join("Contents")
            .join(format!("{}.cs", kind.container_name()));
        Artifact::new(kind, input, output)
    }

    /// Append malformed-row reports to `path` instead of `errors.log`
    pub fn with_error_log(mut self, path: impl Into<PathBuf>) -> Self {
        self.error_log = path.into();
        self
    }

    pub fn error_log(&self) -> &Path {
        &self.error_log
    }

    /// Read the workbook, render the document and overwrite the output file
    ///
    /// Malformed rows are reported through `tracing` and, once the document
    /// is written, the error log; they do not fail the run. A missing
    /// workbook or unwritable output does.
    pub fn generate(&self, sheet_name: Option<&str>) -> Result<GenerationReport> {
        tracing::debug!(kind = %self.kind, input = %self.input.display(), "generating");

        let rows = read_rows(&self.input, sheet_name)
            .with_context(|| format!("Failed to read {} workbook", self.kind))?;
        let emission = emit(self.kind, &rows);

        for diagnostic in &emission.diagnostics {
            tracing::warn!(
                line = diagnostic.line(),
                error = %diagnostic.error,
                "skipping row {}",
                diagnostic.row.describe()
            );
        }

        write_document(&self.output, &emission.document)?;
        if !emission.diagnostics.is_empty() {
            let report = self.format_diagnostics_report(&emission.diagnostics);
            write_error_to_log(&self.error_log, "Malformed Row Report", &report);
        }
        tracing::info!(
            output = %self.output.display(),
            declarations = emission.emitted,
            skipped = emission.diagnostics.len(),
            "wrote {}",
            self.kind.container_name()
        );

        Ok(GenerationReport {
            kind: self.kind,
            output: self.output.clone(),
            emitted: emission.emitted,
            diagnostics: emission.diagnostics,
        })
    }

    /// Format skipped rows into a structured string for logging
    fn format_diagnostics_report(&self, diagnostics: &[RowDiagnostic]) -> String {
        let mut report = String::new();

        report.push_str("=============================\n");
        report.push_str(&format!("Generated at: {}\n", get_utc_iso_datetime()));
        report.push_str(&format!(
            "Workbook: {} ({})\n\n",
            self.input.display(),
            self.kind
        ));
        report.push_str(&format!(
            "Total malformed rows: {}\n\n",
            diagnostics.len()
        ));

        for diagnostic in diagnostics {
            report.push_str(&format!(
                "Row {}: {}\n",
                diagnostic.line(),
                diagnostic.error
            ));

            match serde_json::to_string(&diagnostic.row.cells) {
                Ok(json_data) => {
                    report.push_str(&format!("Row data: {}\n", json_data));
                }
                Err(_) => {
                    report.push_str("Row data: [Error serializing data]\n");
                }
            }
            report.push('\n');
        }

        report
    }
}
