use std::cmp::Ordering;
use std::fmt;

use calamine::{Data, ExcelDateTime};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Format used when a spreadsheet date cell ends up in a declaration
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A typed spreadsheet cell value.
///
/// Only `Text` is ever escaped when rendered into a declaration. Numbers and
/// booleans are substituted verbatim as literals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// Convert a calamine cell into a value, `None` for empty or error cells
    pub fn from_cell(cell: &Data) -> Option<CellValue> {
        match cell {
            Data::Empty | Data::Error(_) => None,
            Data::String(s) => {
                if s.trim().is_empty() {
                    None
                } else {
                    Some(CellValue::Text(s.clone()))
                }
            }
            Data::Float(f) => Some(CellValue::Number(*f)),
            Data::Int(i) => Some(CellValue::Number(*i as f64)),
            Data::Bool(b) => Some(CellValue::Bool(*b)),
            Data::DateTime(dt) => Some(match excel_datetime_to_chrono(dt) {
                Some(naive) => CellValue::Text(naive.format(DATETIME_FORMAT).to_string()),
                None => CellValue::Number(dt.as_f64()),
            }),
            Data::DateTimeIso(s) | Data::DurationIso(s) => Some(CellValue::Text(s.clone())),
        }
    }

    /// Render the value as a literal for substitution into a declaration
    ///
    /// Textual values get their single quotes backslash-escaped; everything
    /// else is inserted exactly as `Display` renders it.
    pub fn to_literal(&self) -> String {
        match self {
            CellValue::Text(s) => escape_single_quotes(s),
            other => other.to_string(),
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            CellValue::Number(_) => 0,
            CellValue::Bool(_) => 1,
            CellValue::Text(_) => 2,
        }
    }

    /// Total order over cell values used for sort keys
    pub fn sort_cmp(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Number(a), CellValue::Number(b)) => a.total_cmp(b),
            (CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b),
            (CellValue::Text(a), CellValue::Text(b)) => a.cmp(b),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => f.write_str(&format_number(*n)),
            CellValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

/// Prefix every single quote with a backslash
pub fn escape_single_quotes(value: &str) -> String {
    return value.replace('\'', "\\'");
}

/// Compare two optional sort keys; a missing key sorts after any present one
pub(crate) fn compare_keys(a: Option<&CellValue>, b: Option<&CellValue>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.sort_cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn format_number(n: f64) -> String {
    // Spreadsheets store every number as a float; integral ones are written as integers
    if n.is_finite()
        && n.fract().abs() < f64::EPSILON
        && n >= i64::MIN as f64
        && n < i64::MAX as f64
    {
        (n as i64).to_string()
    } else {
        n.to_string()
    }
}

fn excel_datetime_to_chrono(dt: &ExcelDateTime) -> Option<NaiveDateTime> {
    let excel_base = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let value = dt.as_f64();
    let days = value.trunc() as i64;
    let seconds = ((value - days as f64) * 86400.0).round() as i64;
    excel_base
        .checked_add_signed(Duration::try_days(days)?)?
        .checked_add_signed(Duration::try_seconds(seconds)?)
}
