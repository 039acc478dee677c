//! Table model tests: editing operations and their invariants.

use crate::helpers::TestTableBuilder;
use chartboard::{DataRow, DataTable};

#[test]
fn test_editing_round_trip_resets_columns() {
    // Add a series column, remove every row, add a row: the table is back
    // to the single-series default shape.
    let mut table = TestTableBuilder::new()
        .with_row("Jan", &["100"])
        .with_row("Feb", &["200"])
        .build();

    table.add_series_column();
    assert_eq!(table.series_keys(), vec!["y1", "y2"]);

    table.remove_row(1);
    table.remove_row(0);
    assert!(table.is_empty());

    table.add_row();
    assert_eq!(
        table.rows(),
        &[DataRow::from_pairs([("x", ""), ("y1", "")])]
    );
}

#[test]
fn test_key_set_stays_uniform_across_edits() {
    let mut table = TestTableBuilder::new()
        .with_depth_row("A", &["1"], "9")
        .build();

    table.add_row();
    table.add_series_column();

    let expected: Vec<Vec<&str>> = vec![
        vec!["x", "y1", "z", "y2"],
        vec!["x", "y1", "z", "y2"],
    ];
    let actual: Vec<Vec<&str>> = table
        .rows()
        .iter()
        .map(|row| row.keys().collect())
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_add_series_column_on_empty_table() {
    let mut table = DataTable::new();
    let key = table.add_series_column();
    assert_eq!(key, "y1");
    assert_eq!(table.rows(), &[DataTable::default_row()]);
}

#[test]
fn test_replace_rows_is_wholesale() {
    let mut table = TestTableBuilder::new().with_row("Jan", &["1", "2"]).build();
    table.replace_rows(vec![DataRow::from_pairs([("x", "Q1"), ("y1", "7")])]);
    assert_eq!(table.series_keys(), vec!["y1"]);
    assert_eq!(table.categories(), vec!["Q1"]);
}
