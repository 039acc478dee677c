//! Spreadsheet ingestion.
//!
//! Parses CSV/TSV payloads into the table model. The first row of the
//! payload is treated as headers and discarded (its width fixes the column
//! count); column 0 becomes the trimmed category key `x` and columns 1..N
//! become `y1..yN`, values passed through uncoerced. An empty payload
//! yields the default single-row table rather than an error.
//!
//! ## Memory Limits
//!
//! To prevent unbounded memory growth:
//! - Files larger than [`MAX_SHEET_SIZE_MB`]MB are rejected
//! - Payloads with more than [`MAX_SHEET_ROWS`] rows are rejected

use crate::constants::{MAX_SHEET_ROWS, MAX_SHEET_SIZE_MB};
use crate::data::error::{DataError, DataResult};
use crate::data::table::{CATEGORY_KEY, DataRow, DataTable};
use std::path::Path;

/// Parse a CSV or TSV file into a table.
///
/// Detects the delimiter from the file extension (`.tsv` uses tab) or from
/// content analysis (whichever delimiter appears more frequently).
///
/// # Memory Limits
/// - Files larger than [`MAX_SHEET_SIZE_MB`]MB return [`DataError::TooLarge`]
/// - Files with more than [`MAX_SHEET_ROWS`] rows return [`DataError::TooManyRows`]
pub fn parse_sheet_file(path: &Path) -> DataResult<DataTable> {
    // Check file size before reading
    let metadata = std::fs::metadata(path)?;
    let size_mb = metadata.len() / (1024 * 1024);
    if size_mb > MAX_SHEET_SIZE_MB as u64 {
        return Err(DataError::TooLarge {
            size_mb,
            max_mb: MAX_SHEET_SIZE_MB,
        });
    }

    let content = std::fs::read_to_string(path)?;
    let delimiter = detect_delimiter(Some(path), &content);
    parse_sheet_content(&content, delimiter)
}

/// Parse an uploaded spreadsheet payload (bytes, lossily decoded as UTF-8)
/// with content-based delimiter detection.
pub fn parse_sheet_payload(bytes: &[u8]) -> DataResult<DataTable> {
    let content = String::from_utf8_lossy(bytes);
    let delimiter = detect_delimiter(None, &content);
    parse_sheet_content(&content, delimiter)
}

/// Parse CSV/TSV content from a string with an explicit delimiter.
pub fn parse_sheet_content(content: &str, delimiter: char) -> DataResult<DataTable> {
    if content.trim().is_empty() {
        return Ok(DataTable::from_rows(vec![DataTable::default_row()]));
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .flexible(true)
        .from_reader(content.as_bytes());

    // Header row is consumed for its width only; the labels are discarded.
    let column_count = reader.headers()?.len();

    let mut rows: Vec<DataRow> = Vec::new();
    for record in reader.records() {
        let record = record?;
        if rows.len() >= MAX_SHEET_ROWS {
            return Err(DataError::TooManyRows {
                rows: rows.len() + 1, // +1 for the row that exceeded the limit
                max_rows: MAX_SHEET_ROWS,
            });
        }

        let mut row = DataRow::new();
        row.insert(CATEGORY_KEY, record.get(0).unwrap_or("").trim());
        for i in 1..column_count {
            row.insert(format!("y{i}"), record.get(i).unwrap_or(""));
        }
        rows.push(row);
    }

    if rows.is_empty() {
        rows.push(DataTable::default_row());
    }

    tracing::debug!(
        rows = rows.len(),
        columns = column_count,
        "parsed spreadsheet payload"
    );
    Ok(DataTable::from_rows(rows))
}

/// Detect the delimiter to use for parsing
fn detect_delimiter(path: Option<&Path>, content: &str) -> char {
    // Check file extension first
    if let Some(ext) = path.and_then(|p| p.extension()).and_then(|e| e.to_str()) {
        if ext.eq_ignore_ascii_case("tsv") {
            return '\t';
        }
    }

    // Count delimiters in the first few lines to determine the most likely
    let first_lines: String = content.lines().take(5).collect::<Vec<_>>().join("\n");

    let comma_count = first_lines.matches(',').count();
    let tab_count = first_lines.matches('\t').count();
    let semicolon_count = first_lines.matches(';').count();

    if tab_count > comma_count && tab_count > semicolon_count {
        '\t'
    } else if semicolon_count > comma_count {
        ';'
    } else {
        ','
    }
}
