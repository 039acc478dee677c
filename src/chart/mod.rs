//! The trace builder.
//!
//! Pure transformation from `(table, chart type, settings)` to a list of
//! drawable [`Trace`]s plus one [`Layout`]. Stateless: every call recomputes
//! from scratch, reads the table without mutating it, and is idempotent for
//! identical inputs.
//!
//! Dispatch goes through a registry mapping each chart type to one of five
//! shape strategies (categorical, share-of-whole, depth, matrix,
//! financial); chart types without a registry entry fall back to the
//! categorical strategy's plain bar shape.

mod categorical;
mod depth;
mod financial;
mod layout;
mod matrix;
mod share_of_whole;
mod trace;

pub use layout::{
    Annotation, Axis, AxisTitle, BarMode, Font, Layout, Legend, Margin, Title, bar_mode,
};
pub use trace::{
    AxisValues, BoxPoints, Fill, Line, LineShape, Marker, Orientation, TextInfo, Trace, TraceMode,
    ViolinBox,
};

use crate::constants::SERIES_PALETTE;
use crate::data::DataTable;
use crate::types::{ChartSettings, ChartType};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// One chart family's trace-shape rules.
///
/// Strategies are stateless; per-type styling differences inside a family
/// are resolved from the `chart_type` argument.
pub trait TraceStrategy: Send + Sync {
    fn build_traces(
        &self,
        table: &DataTable,
        chart_type: ChartType,
        settings: &ChartSettings,
    ) -> Vec<Trace>;
}

static CATEGORICAL: categorical::Categorical = categorical::Categorical;
static SHARE_OF_WHOLE: share_of_whole::ShareOfWhole = share_of_whole::ShareOfWhole;
static DEPTH: depth::Depth = depth::Depth;
static MATRIX: matrix::Matrix = matrix::Matrix;
static FINANCIAL: financial::Financial = financial::Financial;

/// Chart type to shape strategy, built once.
static STRATEGIES: Lazy<HashMap<ChartType, &'static dyn TraceStrategy>> = Lazy::new(|| {
    ChartType::all()
        .iter()
        .map(|&chart_type| {
            let strategy: &'static dyn TraceStrategy = match chart_type {
                ChartType::Pie | ChartType::Donut => &SHARE_OF_WHOLE,
                ChartType::Scatter3d => &DEPTH,
                ChartType::Surface | ChartType::Heatmap | ChartType::Contour => &MATRIX,
                ChartType::Candlestick | ChartType::Ohlc => &FINANCIAL,
                _ => &CATEGORICAL,
            };
            (chart_type, strategy)
        })
        .collect()
});

fn strategy_for(chart_type: ChartType) -> &'static dyn TraceStrategy {
    STRATEGIES
        .get(&chart_type)
        .copied()
        .unwrap_or(&CATEGORICAL)
}

/// Build the traces and layout for one render.
///
/// An empty table, or a table with no series columns, yields an empty trace
/// list; the caller is expected to clear any previously drawn chart. The
/// layout is produced unconditionally.
pub fn build_chart(
    table: &DataTable,
    chart_type: ChartType,
    settings: &ChartSettings,
) -> (Vec<Trace>, Layout) {
    let layout = Layout::assemble(chart_type, settings);

    if table.is_empty() || table.series_keys().is_empty() {
        tracing::debug!(chart_type = chart_type.id(), "no data, no traces");
        return (Vec::new(), layout);
    }

    let traces = strategy_for(chart_type).build_traces(table, chart_type, settings);
    tracing::debug!(
        chart_type = chart_type.id(),
        traces = traces.len(),
        rows = table.row_count(),
        "built chart"
    );
    (traces, layout)
}

/// Coerce one raw series cell to a number.
///
/// Strips thousands separators, trims whitespace, parses as decimal.
/// Anything that does not parse to a finite number (empty cells, prose,
/// missing keys) is 0.0. Category (`x`) values are never coerced.
pub fn coerce_number(raw: &str) -> f64 {
    let cleaned = raw.replace(',', "");
    match cleaned.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

/// One series column, coerced, one value per row.
pub(crate) fn coerced_column(table: &DataTable, key: &str) -> Vec<f64> {
    table
        .column_values(key)
        .into_iter()
        .map(coerce_number)
        .collect()
}

/// Deterministic series color: palette index wraps around.
pub(crate) fn series_color(index: usize) -> &'static str {
    SERIES_PALETTE[index % SERIES_PALETTE.len()]
}
