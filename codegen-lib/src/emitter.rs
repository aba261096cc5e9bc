use std::fmt;
use std::io::Write;

use crate::cell::{CellValue, compare_keys};
use crate::row::{ConstantRow, EnumRow, RowError, RowRecord, SourceRow, StringConstRow};

/// The three declaration documents generated from design sheets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// `public const <Type> <Name> = <Value>;` per row
    ConstantList,
    /// one `public enum <Category>` block per category
    GroupedEnum,
    /// `public const string <Name> = "<Content>";` per row
    StringConstantList,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 3] = [
        ArtifactKind::ConstantList,
        ArtifactKind::GroupedEnum,
        ArtifactKind::StringConstantList,
    ];

    /// Name of the outer `public static class`
    pub fn container_name(&self) -> &'static str {
        match self {
            ArtifactKind::ConstantList => "Consts",
            ArtifactKind::GroupedEnum => "Enums",
            ArtifactKind::StringConstantList => "StringConst",
        }
    }

    /// Column the rows are stable-sorted by before rendering
    pub fn sort_column(&self) -> usize {
        match self {
            ArtifactKind::ConstantList | ArtifactKind::StringConstantList => 0,
            ArtifactKind::GroupedEnum => 1,
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ArtifactKind::ConstantList => "constants",
            ArtifactKind::GroupedEnum => "enums",
            ArtifactKind::StringConstantList => "string constants",
        };
        f.write_str(label)
    }
}

/// A row that could not be destructured and was left out of the document
#[derive(Debug, Clone, PartialEq)]
pub struct RowDiagnostic {
    /// 1-based line in sorted order, counting the header as line 1
    pub position: usize,
    pub row: SourceRow,
    pub error: RowError,
}

impl RowDiagnostic {
    /// Line reported to the user; `row.line` keeps the spreadsheet row
    pub fn line(&self) -> usize {
        self.position
    }
}

impl fmt::Display for RowDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unable to process row {} on line {}: {}",
            self.row.describe(),
            self.position,
            self.error
        )
    }
}

/// Result of rendering one declaration document
#[derive(Debug, Clone, PartialEq)]
pub struct Emission {
    pub document: String,
    pub diagnostics: Vec<RowDiagnostic>,
    /// Number of rows rendered as declarations
    pub emitted: usize,
}

/// Sort, destructure and render `rows` into the document for `kind`
///
/// Malformed rows never abort the run: each one becomes a single
/// [`RowDiagnostic`] and is excluded from the output.
pub fn emit(kind: ArtifactKind, rows: &[SourceRow]) -> Emission {
    let column = kind.sort_column();
    let mut sorted: Vec<&SourceRow> = rows.iter().collect();
    // `sort_by` is stable, rows with equal keys keep their input order
    sorted.sort_by(|a, b| compare_keys(a.cell(column), b.cell(column)));

    let mut diagnostics = Vec::new();
    let (body, emitted) = match kind {
        ArtifactKind::ConstantList => {
            let records: Vec<ConstantRow> = parse_rows(&sorted, &mut diagnostics);
            (render_constants(&records), records.len())
        }
        ArtifactKind::GroupedEnum => {
            let records: Vec<EnumRow> = parse_rows(&sorted, &mut diagnostics);
            (render_enums(&records), records.len())
        }
        ArtifactKind::StringConstantList => {
            let records: Vec<StringConstRow> = parse_rows(&sorted, &mut diagnostics);
            (render_string_constants(&records), records.len())
        }
    };

    let mut document = String::new();
    document.push_str(&format!("public static class {}\n", kind.container_name()));
    document.push_str("{\n");
    document.push_str(&body);
    document.push_str("}\n");

    Emission {
        document,
        diagnostics,
        emitted,
    }
}

/// Render the `Consts` document into `sink`
pub fn emit_constants<W: Write>(
    rows: &[SourceRow],
    sink: &mut W,
) -> std::io::Result<Vec<RowDiagnostic>> {
    emit_into(ArtifactKind::ConstantList, rows, sink)
}

/// Render the `Enums` document into `sink`
pub fn emit_enums<W: Write>(
    rows: &[SourceRow],
    sink: &mut W,
) -> std::io::Result<Vec<RowDiagnostic>> {
    emit_into(ArtifactKind::GroupedEnum, rows, sink)
}

/// Render the `StringConst` document into `sink`
pub fn emit_string_constants<W: Write>(
    rows: &[SourceRow],
    sink: &mut W,
) -> std::io::Result<Vec<RowDiagnostic>> {
    emit_into(ArtifactKind::StringConstantList, rows, sink)
}

fn emit_into<W: Write>(
    kind: ArtifactKind,
    rows: &[SourceRow],
    sink: &mut W,
) -> std::io::Result<Vec<RowDiagnostic>> {
    let emission = emit(kind, rows);
    sink.write_all(emission.document.as_bytes())?;
    return Ok(emission.diagnostics);
}

fn parse_rows<R: RowRecord>(rows: &[&SourceRow], diagnostics: &mut Vec<RowDiagnostic>) -> Vec<R> {
    let mut records = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        match R::parse(row) {
            Ok(record) => records.push(record),
            Err(error) => diagnostics.push(RowDiagnostic {
                position: index + 2,
                row: (*row).clone(),
                error,
            }),
        }
    }
    records
}

fn render_constants(records: &[ConstantRow]) -> String {
    let mut body = String::new();
    for record in records {
        body.push_str(&format!(
            "    public const {} {} = {};  // {}: {}\n",
            record.type_name,
            record.name,
            record.value.to_literal(),
            record.category,
            record.description
        ));
    }
    body
}

fn render_enums(records: &[EnumRow]) -> String {
    let mut body = String::new();
    let mut current_category: Option<&CellValue> = None;

    for record in records {
        if current_category != Some(&record.category) {
            if current_category.is_some() {
                // Close the previous enum
                body.push_str("    }\n\n");
            }
            current_category = Some(&record.category);
            body.push_str(&format!("    public enum {}\n", record.category));
            body.push_str("    {\n");
        }

        body.push_str(&format!(
            "        {},  // {}\n",
            record.name, record.description
        ));
    }

    // Close the last enum, if any was opened
    if current_category.is_some() {
        body.push_str("    }\n");
    }
    body
}

fn render_string_constants(records: &[StringConstRow]) -> String {
    let mut body = String::new();
    for record in records {
        // Only single quotes are escaped even though the literal is double-quoted
        body.push_str(&format!(
            "    public const string {} = \"{}\";  // {}\n",
            record.name,
            record.content.to_literal(),
            record.description
        ));
    }
    body
}
