// Test utilities available to both unit and integration tests
// Only compiled when testing

use crate::cell::CellValue;
use crate::row::SourceRow;

/// Build a row where every cell is text
#[allow(dead_code)]
pub fn text_row(line: usize, cells: &[&str]) -> SourceRow {
    SourceRow::new(
        line,
        cells.iter().map(|cell| Some(CellValue::from(*cell))).collect(),
    )
}

/// Build a row with a numeric cell between two runs of text cells,
/// e.g. `(name, type)`, `value`, `(category, description)` for constants
#[allow(dead_code)]
pub fn data_row(line: usize, before: &[&str], number: f64, after: &[&str]) -> SourceRow {
    let mut cells: Vec<Option<CellValue>> = before
        .iter()
        .map(|cell| Some(CellValue::from(*cell)))
        .collect();
    cells.push(Some(CellValue::Number(number)));
    cells.extend(after.iter().map(|cell| Some(CellValue::from(*cell))));
    SourceRow::new(line, cells)
}

/// Number rows sequentially from line 2, as they would be read below a header
#[allow(dead_code)]
pub fn number_rows(rows: Vec<Vec<Option<CellValue>>>) -> Vec<SourceRow> {
    rows.into_iter()
        .enumerate()
        .map(|(index, cells)| SourceRow::new(index + 2, cells))
        .collect()
}
