//! chartboard: the data-to-visualization transformation engine behind a
//! chart-builder application.
//!
//! A row-oriented table (one `x` category column plus `y1..yN` series
//! columns), a chart type from a fixed ~25-member enumeration, and a
//! settings record go in; an ordered list of drawable traces and one
//! layout description come out, in the wire shape the rendering
//! collaborator consumes.
//!
//! ```rust,ignore
//! use chartboard::{ChartSettings, ChartType, ChartView, DataTable, JsonSurface, build_chart};
//!
//! let table = chartboard::data::parse_sheet_payload(b"Month,Revenue\nJan,100\nFeb,200")?;
//! let (traces, layout) = build_chart(&table, ChartType::Bar, &ChartSettings::default());
//!
//! // Or let a view drive a renderer with destroy-then-recreate semantics:
//! let mut view = ChartView::new(JsonSurface::new());
//! view.render(&table, ChartType::Bar, &ChartSettings::default());
//! ```
//!
//! The engine is pure and synchronous: it never mutates the table, retains
//! no state between calls, and degrades on malformed input (non-numeric
//! cells coerce to 0, unknown chart types fall back to bars, missing
//! settings omit their decoration) instead of erroring.

pub mod chart;
pub mod constants;
pub mod data;
pub mod logging;
pub mod types;
pub mod view;

pub use chart::{Layout, Trace, build_chart, coerce_number};
pub use data::{DataRow, DataTable};
pub use types::{ChartSettings, ChartType, FontWeight};
pub use view::{ChartView, JsonSurface, RenderSurface, render_payload};
