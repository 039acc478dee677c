//! Renderer integration.
//!
//! The rendering collaborator owns pixels, resize handling and
//! interaction; this module owns the integration contract: the previous
//! chart is torn down before a new one is drawn ("destroy-then-recreate",
//! never incremental patching), and an empty table leaves the surface
//! cleared rather than stale.

use crate::chart::{Layout, Trace, build_chart};
use crate::data::DataTable;
use crate::types::{ChartSettings, ChartType};

/// A drawing surface the renderer exposes to the engine.
pub trait RenderSurface {
    /// Draw a fresh chart. Always preceded by a [`RenderSurface::clear`].
    fn draw(&mut self, traces: &[Trace], layout: &Layout);

    /// Tear down whatever is currently drawn. Must be safe to call when
    /// nothing is drawn.
    fn clear(&mut self);
}

/// Scoped owner of one drawing surface.
///
/// Call [`ChartView::render`] on every observed change to the table, chart
/// type or settings; the surface is released unconditionally before each
/// new render and on teardown.
pub struct ChartView<S: RenderSurface> {
    surface: S,
}

impl<S: RenderSurface> ChartView<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Recompute and redraw from the current inputs.
    ///
    /// An empty table, or one without series columns, clears the previous
    /// chart and draws nothing.
    pub fn render(&mut self, table: &DataTable, chart_type: ChartType, settings: &ChartSettings) {
        self.surface.clear();

        if table.is_empty() || table.series_keys().is_empty() {
            tracing::debug!(chart_type = chart_type.id(), "no data, chart cleared");
            return;
        }

        let (traces, layout) = build_chart(table, chart_type, settings);
        self.surface.draw(&traces, &layout);
    }
}

impl<S: RenderSurface> Drop for ChartView<S> {
    fn drop(&mut self) {
        self.surface.clear();
    }
}

/// Bundle traces and layout into the single JSON payload that bridge-style
/// surfaces post to the renderer.
pub fn render_payload(traces: &[Trace], layout: &Layout) -> serde_json::Value {
    serde_json::json!({
        "data": traces,
        "layout": layout,
    })
}

/// A surface that keeps the last drawn chart as its JSON payload.
///
/// Backs webview-style renderers that accept the payload wholesale, and
/// doubles as a test probe for the destroy-then-recreate contract.
#[derive(Debug, Default)]
pub struct JsonSurface {
    payload: Option<serde_json::Value>,
}

impl JsonSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last drawn payload, if a chart is currently drawn.
    pub fn payload(&self) -> Option<&serde_json::Value> {
        self.payload.as_ref()
    }
}

impl RenderSurface for JsonSurface {
    fn draw(&mut self, traces: &[Trace], layout: &Layout) {
        self.payload = Some(render_payload(traces, layout));
    }

    fn clear(&mut self) {
        self.payload = None;
    }
}
