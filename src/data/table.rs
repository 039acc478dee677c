//! The row-oriented table model.
//!
//! A table is an ordered sequence of rows, each an ordered mapping from
//! column key to raw cell text. Exactly one key is the category key (`x`);
//! the series keys are `y1..yN` in creation order; 3D charts may add a
//! dedicated `z` key. All rows share the same key set; every editing
//! operation preserves that invariant, backfilling with empty strings.
//!
//! Cells stay raw text here. Numeric coercion happens in the trace builder,
//! which reads the table and never mutates it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Column key holding each row's category label.
pub const CATEGORY_KEY: &str = "x";

/// Optional column key holding the depth coordinate for 3D charts.
pub const DEPTH_KEY: &str = "z";

/// A single row: column key to raw cell value, in column creation order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataRow {
    cells: IndexMap<String, String>,
}

impl DataRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row from `(key, value)` pairs, preserving their order.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            cells: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.cells.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.cells.insert(key.into(), value.into());
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.cells.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }
}

/// The table the editing surface mutates and the trace builder reads.
///
/// The empty table is valid and renders nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataTable {
    rows: Vec<DataRow>,
}

impl DataTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<DataRow>) -> Self {
        Self { rows }
    }

    /// The default shape of a table that has just gained its first row.
    pub fn default_row() -> DataRow {
        DataRow::from_pairs([(CATEGORY_KEY, ""), ("y1", "")])
    }

    pub fn rows(&self) -> &[DataRow] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Series keys in creation order: every key starting with `y`.
    ///
    /// Empty when the table has no rows.
    pub fn series_keys(&self) -> Vec<String> {
        match self.rows.first() {
            Some(row) => row
                .keys()
                .filter(|k| k.starts_with('y'))
                .map(str::to_string)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Category (`x`) values, verbatim, one per row.
    pub fn categories(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.get(CATEGORY_KEY).unwrap_or("").to_string())
            .collect()
    }

    /// Raw cell values for one column key, one per row, missing cells empty.
    pub fn column_values<'a>(&'a self, key: &str) -> Vec<&'a str> {
        self.rows
            .iter()
            .map(|row| row.get(key).unwrap_or(""))
            .collect()
    }

    /// Whether the table carries the given column key.
    pub fn has_key(&self, key: &str) -> bool {
        self.rows.first().is_some_and(|row| row.contains_key(key))
    }

    pub fn cell(&self, row: usize, key: &str) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(key))
    }

    // ------------------------------------------------------------------
    // Editing operations (the editing collaborator's contract)
    // ------------------------------------------------------------------

    /// Append an all-empty row mirroring the existing key set, or the
    /// default `{x: "", y1: ""}` row if the table is empty.
    pub fn add_row(&mut self) {
        let row = match self.rows.first() {
            Some(first) => DataRow::from_pairs(first.keys().map(|k| (k, ""))),
            None => Self::default_row(),
        };
        self.rows.push(row);
    }

    /// Remove the row at `index`; out-of-range indices are ignored.
    pub fn remove_row(&mut self, index: usize) {
        if index < self.rows.len() {
            self.rows.remove(index);
        } else {
            tracing::debug!(index, rows = self.rows.len(), "remove_row out of range");
        }
    }

    /// Append the next `yN` series column to every row, empty on existing
    /// rows. On an empty table this creates the default single row.
    ///
    /// Returns the key of the new column.
    pub fn add_series_column(&mut self) -> String {
        if self.rows.is_empty() {
            self.rows.push(Self::default_row());
            return "y1".to_string();
        }
        let key = format!("y{}", self.series_keys().len() + 1);
        for row in &mut self.rows {
            row.insert(key.clone(), "");
        }
        key
    }

    /// Set one cell's raw value. Edits to unknown keys or out-of-range rows
    /// are ignored; column structure only changes through
    /// [`DataTable::add_series_column`].
    pub fn set_cell(&mut self, row: usize, key: &str, value: impl Into<String>) {
        match self.rows.get_mut(row) {
            Some(r) if r.contains_key(key) => r.insert(key, value.into()),
            _ => tracing::debug!(row, key, "ignoring edit to unknown cell"),
        }
    }

    /// Replace the whole row set (the ingestion path).
    pub fn replace_rows(&mut self, rows: Vec<DataRow>) {
        self.rows = rows;
    }
}
