use thiserror::Error;

use crate::cell::CellValue;

/// One data row read from the sheet, header excluded
#[derive(Debug, Clone, PartialEq)]
pub struct SourceRow {
    /// 1-based spreadsheet row; the header is row 1
    pub line: usize,
    pub cells: Vec<Option<CellValue>>,
}

impl SourceRow {
    pub fn new(line: usize, cells: Vec<Option<CellValue>>) -> Self {
        SourceRow { line, cells }
    }

    pub fn cell(&self, column: usize) -> Option<&CellValue> {
        self.cells.get(column).and_then(|cell| cell.as_ref())
    }

    /// Number of columns up to and including the last non-empty cell
    pub fn width(&self) -> usize {
        self.cells
            .iter()
            .rposition(|cell| cell.is_some())
            .map_or(0, |index| index + 1)
    }

    pub fn is_blank(&self) -> bool {
        self.width() == 0
    }

    /// Row contents as a tuple-like string for diagnostics, e.g. `('MaxHP', 100, None)`
    pub fn describe(&self) -> String {
        let cells = self
            .cells
            .iter()
            .map(|cell| match cell {
                Some(CellValue::Text(s)) => format!("'{s}'"),
                Some(other) => other.to_string(),
                None => "None".to_string(),
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!("({cells})")
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RowError {
    #[error("expected {expected} columns, found {found}")]
    MissingColumns { expected: usize, found: usize },

    #[error("expected {expected} columns, found {found} (extra columns)")]
    ExtraColumns { expected: usize, found: usize },

    #[error("required field '{field}' is empty")]
    MissingField { field: &'static str },
}

/// A fixed-arity record destructured from a [`SourceRow`]
pub trait RowRecord: Sized {
    /// Field names in column order
    const FIELDS: &'static [&'static str];

    const ARITY: usize = Self::FIELDS.len();

    fn from_fields(fields: Vec<CellValue>) -> Self;

    /// Validate the row's width and fields, then build the record
    fn parse(row: &SourceRow) -> Result<Self, RowError> {
        let found = row.width();
        if found < Self::ARITY {
            return Err(RowError::MissingColumns {
                expected: Self::ARITY,
                found,
            });
        }
        if found > Self::ARITY {
            return Err(RowError::ExtraColumns {
                expected: Self::ARITY,
                found,
            });
        }

        let fields = Self::FIELDS
            .iter()
            .enumerate()
            .map(|(column, &field)| {
                row.cell(column)
                    .cloned()
                    .ok_or(RowError::MissingField { field })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_fields(fields))
    }
}

/// `(name, type, value, category, description)`
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantRow {
    pub name: CellValue,
    pub type_name: CellValue,
    pub value: CellValue,
    pub category: CellValue,
    pub description: CellValue,
}

impl RowRecord for ConstantRow {
    const FIELDS: &'static [&'static str] = &["name", "type", "value", "category", "description"];

    fn from_fields(fields: Vec<CellValue>) -> Self {
        let [name, type_name, value, category, description] = take_fields(fields);
        ConstantRow {
            name,
            type_name,
            value,
            category,
            description,
        }
    }
}

/// `(name, category, description)`
#[derive(Debug, Clone, PartialEq)]
pub struct EnumRow {
    pub name: CellValue,
    pub category: CellValue,
    pub description: CellValue,
}

impl RowRecord for EnumRow {
    const FIELDS: &'static [&'static str] = &["name", "category", "description"];

    fn from_fields(fields: Vec<CellValue>) -> Self {
        let [name, category, description] = take_fields(fields);
        EnumRow {
            name,
            category,
            description,
        }
    }
}

/// `(name, content, description)`
#[derive(Debug, Clone, PartialEq)]
pub struct StringConstRow {
    pub name: CellValue,
    pub content: CellValue,
    pub description: CellValue,
}

impl RowRecord for StringConstRow {
    const FIELDS: &'static [&'static str] = &["name", "content", "description"];

    fn from_fields(fields: Vec<CellValue>) -> Self {
        let [name, content, description] = take_fields(fields);
        StringConstRow {
            name,
            content,
            description,
        }
    }
}

// `parse` only calls `from_fields` with exactly `ARITY` values
fn take_fields<const N: usize>(fields: Vec<CellValue>) -> [CellValue; N] {
    let mut fields = fields.into_iter();
    std::array::from_fn(|_| {
        fields
            .next()
            .unwrap_or_else(|| CellValue::Text(String::new()))
    })
}
