//! Common test utilities for the sheet-codegen CLI tests

use std::path::Path;

use rust_xlsxwriter::Workbook;

/// Write a single-sheet workbook of text cells; `rows[0]` is the header row
#[allow(dead_code)]
pub fn write_text_workbook(path: &Path, rows: &[&[&str]]) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (row_index, row) in rows.iter().enumerate() {
        for (column_index, value) in row.iter().enumerate() {
            worksheet
                .write_string(row_index as u32, column_index as u16, *value)
                .unwrap();
        }
    }

    workbook.save(path).unwrap();
}

/// Populate `<root>/Designs` with one small workbook per artifact
#[allow(dead_code)]
pub fn write_design_tree(root: &Path) {
    let designs = root.join("Designs");
    write_text_workbook(
        &designs.join("Constants.xlsx"),
        &[
            &["Name", "Type", "Value", "Category", "Description"],
            &["PlayerName", "string", "\"O'Brien\"", "Player", "default name"],
            &["Bad", "int"],
        ],
    );
    write_text_workbook(
        &designs.join("Enums.xlsx"),
        &[
            &["Name", "Category", "Description"],
            &["Ally", "Faction", "friendly"],
            &["Enemy", "Faction", "hostile"],
        ],
    );
    write_text_workbook(
        &designs.join("StringConst.xlsx"),
        &[
            &["Name", "Content", "Description"],
            &["Title", "Flash Back", "window title"],
        ],
    );
}
