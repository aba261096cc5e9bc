//! Properties of the declaration emitter over generated row sets

use std::collections::BTreeSet;

use codegen_lib::{ArtifactKind, CellValue, SourceRow, emit};
use proptest::prelude::*;

mod common;

fn name_strategy() -> impl Strategy<Value = String> {
    "[A-C][a-z]{0,2}"
}

fn string_const_rows() -> impl Strategy<Value = Vec<SourceRow>> {
    prop::collection::vec((name_strategy(), any::<bool>()), 0..24).prop_map(|specs| {
        common::number_rows(
            specs
                .into_iter()
                .enumerate()
                .map(|(index, (name, well_formed))| {
                    let mut cells = vec![
                        Some(CellValue::from(name)),
                        Some(CellValue::from(format!("content{index}"))),
                    ];
                    if well_formed {
                        cells.push(Some(CellValue::from("d")));
                    }
                    cells
                })
                .collect(),
        )
    })
}

fn enum_rows() -> impl Strategy<Value = Vec<SourceRow>> {
    prop::collection::vec("(Alpha|Beta|Gamma)", 0..24).prop_map(|categories| {
        common::number_rows(
            categories
                .into_iter()
                .enumerate()
                .map(|(index, category)| {
                    vec![
                        Some(CellValue::from(format!("Item{index}"))),
                        Some(CellValue::from(category)),
                        Some(CellValue::from("-")),
                    ]
                })
                .collect(),
        )
    })
}

proptest! {
    #[test]
    fn test_line_count_matches_well_formed_rows(rows in string_const_rows()) {
        let emission = emit(ArtifactKind::StringConstantList, &rows);
        let well_formed = rows.iter().filter(|row| row.width() == 3).count();

        let declarations = emission
            .document
            .lines()
            .filter(|line| line.starts_with("    public const string "))
            .count();
        prop_assert_eq!(declarations, well_formed);
        prop_assert_eq!(emission.emitted, well_formed);
        prop_assert_eq!(emission.diagnostics.len(), rows.len() - well_formed);
    }

    #[test]
    fn test_sort_is_stable_for_equal_names(rows in string_const_rows()) {
        let emission = emit(ArtifactKind::StringConstantList, &rows);

        // Expected order: by name, input order within a name
        let mut expected: Vec<(String, usize)> = rows
            .iter()
            .filter(|row| row.width() == 3)
            .map(|row| (row.cell(0).unwrap().to_string(), row.line))
            .collect();
        expected.sort_by(|a, b| a.0.cmp(&b.0));

        let rendered: Vec<String> = emission
            .document
            .lines()
            .filter_map(|line| line.strip_prefix("    public const string "))
            .map(|line| line.to_string())
            .collect();
        let expected_lines: Vec<String> = expected
            .iter()
            .map(|(name, line)| format!("{name} = \"content{}\";  // d", line - 2))
            .collect();
        prop_assert_eq!(rendered, expected_lines);
    }

    #[test]
    fn test_one_enum_block_per_category(rows in enum_rows()) {
        let emission = emit(ArtifactKind::GroupedEnum, &rows);
        let categories: BTreeSet<String> = rows
            .iter()
            .map(|row| row.cell(1).unwrap().to_string())
            .collect();

        let blocks: Vec<&str> = emission
            .document
            .lines()
            .filter_map(|line| line.strip_prefix("    public enum "))
            .collect();
        let expected: Vec<&str> = categories.iter().map(String::as_str).collect();
        prop_assert_eq!(blocks, expected);
    }

    #[test]
    fn test_emission_is_deterministic(rows in enum_rows()) {
        let first = emit(ArtifactKind::GroupedEnum, &rows);
        let second = emit(ArtifactKind::GroupedEnum, &rows);
        prop_assert_eq!(first.document, second.document);
    }
}
