//! Shared fixtures for the codegen-lib integration tests

use std::path::{Path, PathBuf};

use rust_xlsxwriter::Workbook;

// Re-export shared test utilities from src/test_utils.rs
#[allow(unused_imports)]
pub use codegen_lib::test_utils::{data_row, number_rows, text_row};

/// A cell to place in a fixture workbook
#[allow(dead_code)]
pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
    Bool(bool),
    Blank,
}

/// Write a single-sheet workbook where `rows[0]` is the header row
#[allow(dead_code)]
pub fn write_workbook(path: &Path, rows: &[Vec<Cell>]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (row_index, row) in rows.iter().enumerate() {
        for (column_index, cell) in row.iter().enumerate() {
            let (row_index, column_index) = (row_index as u32, column_index as u16);
            match cell {
                Cell::Text(value) => {
                    worksheet.write_string(row_index, column_index, *value).unwrap();
                }
                Cell::Number(value) => {
                    worksheet.write_number(row_index, column_index, *value).unwrap();
                }
                Cell::Bool(value) => {
                    worksheet.write_boolean(row_index, column_index, *value).unwrap();
                }
                Cell::Blank => {}
            }
        }
    }

    workbook.save(path).unwrap();
}

/// Create `<root>/Designs/<name>` from `rows` and return its path
#[allow(dead_code)]
pub fn write_design_workbook(root: &Path, name: &str, rows: &[Vec<Cell>]) -> PathBuf {
    let designs = root.join("Designs");
    std::fs::create_dir_all(&designs).unwrap();
    let path = designs.join(name);
    write_workbook(&path, rows);
    path
}
