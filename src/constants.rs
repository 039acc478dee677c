//! Crate-wide constants.
//!
//! Centralizes magic numbers and layout values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Series Styling
// ============================================================================

/// Fixed palette cycled by series index (wrap-around, deterministic).
pub const SERIES_PALETTE: [&str; 6] = [
    "#3b82f6", // Blue
    "#ef4444", // Red
    "#10b981", // Green
    "#f59e0b", // Amber
    "#8b5cf6", // Violet
    "#ec4899", // Pink
];

/// Minimum visible bubble marker size; smaller values are clamped up.
pub const BUBBLE_MIN_SIZE: f64 = 10.0;

/// Hole fraction that turns a pie into a donut.
pub const DONUT_HOLE: f64 = 0.5;

/// Point jitter for box plots showing all points.
pub const BOX_JITTER: f64 = 0.5;

/// Colorscale for matrix-valued charts (heatmap, contour).
pub const MATRIX_COLORSCALE: &str = "Viridis";

// ============================================================================
// Layout
// ============================================================================

/// Chart title font size in points.
pub const TITLE_FONT_SIZE: u32 = 18;

/// Source annotation font size in points.
pub const ANNOTATION_FONT_SIZE: u32 = 12;

/// Distance between an axis title and its tick labels.
pub const AXIS_TITLE_STANDOFF: u32 = 10;

/// Plot margins: top, right, bottom, left.
pub const MARGIN: (u32, u32, u32, u32) = (60, 20, 80, 70);

/// Vertical paper position of the horizontal legend (below the plot).
pub const LEGEND_Y: f64 = -0.3;

/// Paper position of the source citation annotation (bottom-right).
pub const SOURCE_ANNOTATION_POS: (f64, f64) = (1.0, -0.2);

// ============================================================================
// Ingestion Limits
// ============================================================================

/// Maximum spreadsheet payload size for eager loading, in megabytes.
pub const MAX_SHEET_SIZE_MB: usize = 100;

/// Maximum number of data rows accepted from one spreadsheet payload.
pub const MAX_SHEET_ROWS: usize = 100_000;
