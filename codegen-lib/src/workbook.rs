use std::path::{Path, PathBuf};

use calamine::{Reader, open_workbook_auto};
use thiserror::Error;

use crate::cell::CellValue;
use crate::row::SourceRow;

#[derive(Error, Debug)]
pub enum WorkbookError {
    #[error("Unable to open workbook {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("Workbook {} has no sheets", path.display())]
    NoSheets { path: PathBuf },

    #[error("Error reading sheet '{sheet}': {source}")]
    Sheet {
        sheet: String,
        #[source]
        source: calamine::Error,
    },
}

/// Read every data row of a sheet, skipping the header row
///
/// Without `sheet_name` the first sheet of the workbook is used. Rows keep
/// their spreadsheet line numbers (the header is line 1) and cells are
/// positioned from column A. Completely empty rows are dropped.
pub fn read_rows(path: &Path, sheet_name: Option<&str>) -> Result<Vec<SourceRow>, WorkbookError> {
    let mut workbook = open_workbook_auto(path).map_err(|source| WorkbookError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let sheet = match sheet_name {
        Some(name) => name.to_string(),
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| WorkbookError::NoSheets {
                path: path.to_path_buf(),
            })?,
    };

    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|source| WorkbookError::Sheet {
            sheet: sheet.clone(),
            source,
        })?;

    // The used range may start below row 1 or right of column A
    let (start_row, start_column) = range.start().unwrap_or((0, 0));
    let leading_columns = start_column as usize;

    let mut rows = Vec::new();
    for (index, cells) in range.rows().enumerate() {
        let absolute_row = start_row as usize + index;
        if absolute_row == 0 {
            // First sheet row is the header
            continue;
        }

        let mut values: Vec<Option<CellValue>> = vec![None; leading_columns];
        values.extend(cells.iter().map(CellValue::from_cell));

        let row = SourceRow::new(absolute_row + 1, values);
        if row.is_blank() {
            continue;
        }
        rows.push(row);
    }

    tracing::debug!(
        path = %path.display(),
        sheet = %sheet,
        rows = rows.len(),
        "read data rows"
    );
    Ok(rows)
}
