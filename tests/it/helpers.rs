//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestTableBuilder` - Builder pattern for creating tables row by row
//! - Common fixtures like `month_table()`

use chartboard::{DataRow, DataTable};

// ============================================================================
// TestTableBuilder - Builder pattern for creating test tables
// ============================================================================

/// Builder for creating test tables with series columns keyed `y1..yN`.
///
/// # Example
/// ```ignore
/// let table = TestTableBuilder::new()
///     .with_row("Jan", &["100", "40"])
///     .with_row("Feb", &["200", "80"])
///     .build();
/// ```
pub struct TestTableBuilder {
    rows: Vec<DataRow>,
}

impl Default for TestTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTableBuilder {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Append a row with a category value and series cells in order.
    pub fn with_row(mut self, x: &str, series: &[&str]) -> Self {
        self.rows.push(row(x, series, None));
        self
    }

    /// Append a row that also carries a depth (`z`) cell.
    pub fn with_depth_row(mut self, x: &str, series: &[&str], z: &str) -> Self {
        self.rows.push(row(x, series, Some(z)));
        self
    }

    pub fn build(self) -> DataTable {
        DataTable::from_rows(self.rows)
    }
}

fn row(x: &str, series: &[&str], z: Option<&str>) -> DataRow {
    let mut pairs: Vec<(String, String)> = vec![("x".to_string(), x.to_string())];
    for (i, value) in series.iter().enumerate() {
        pairs.push((format!("y{}", i + 1), value.to_string()));
    }
    if let Some(z) = z {
        pairs.push(("z".to_string(), z.to_string()));
    }
    DataRow::from_pairs(pairs)
}

/// The canonical two-month, one-series fixture.
pub fn month_table() -> DataTable {
    TestTableBuilder::new()
        .with_row("Jan", &["100"])
        .with_row("Feb", &["200"])
        .build()
}
