//! Core types for the chartboard engine.
//!
//! This module defines the chart-type enumeration shared by the settings
//! panel and the trace builder, and the per-render settings record supplied
//! by the configuration collaborator.

use serde::{Deserialize, Serialize};

// ============================================================================
// Chart Types
// ============================================================================

/// Types of charts available.
///
/// Each member carries a stable string identifier used by the settings panel
/// and by the rendering collaborator. The set is closed; identifiers that do
/// not match any member resolve to [`ChartType::Bar`].
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartType {
    #[default]
    Bar,
    HBar,
    StackedBar,
    StackedHBar,
    GroupedBar,
    Line,
    LineSmooth,
    Area,
    AreaMarker,
    Scatter,
    Bubble,
    Histogram,
    Box,
    Violin,
    Polar,
    Funnel,
    Waterfall,
    Pie,
    Donut,
    Scatter3d,
    Surface,
    Heatmap,
    Contour,
    Candlestick,
    Ohlc,
}

impl ChartType {
    /// Stable identifier, as the settings panel and renderer know it.
    pub fn id(&self) -> &'static str {
        match self {
            ChartType::Bar => "bar",
            ChartType::HBar => "hbar",
            ChartType::StackedBar => "stacked-bar",
            ChartType::StackedHBar => "stacked-hbar",
            ChartType::GroupedBar => "grouped-bar",
            ChartType::Line => "line",
            ChartType::LineSmooth => "line-smooth",
            ChartType::Area => "area",
            ChartType::AreaMarker => "area+marker",
            ChartType::Scatter => "scatter",
            ChartType::Bubble => "bubble",
            ChartType::Histogram => "histogram",
            ChartType::Box => "box",
            ChartType::Violin => "violin",
            ChartType::Polar => "polar",
            ChartType::Funnel => "funnel",
            ChartType::Waterfall => "waterfall",
            ChartType::Pie => "pie",
            ChartType::Donut => "donut",
            ChartType::Scatter3d => "scatter3d",
            ChartType::Surface => "surface",
            ChartType::Heatmap => "heatmap",
            ChartType::Contour => "contour",
            ChartType::Candlestick => "candlestick",
            ChartType::Ohlc => "ohlc",
        }
    }

    /// Human-readable name for pickers.
    pub fn label(&self) -> &'static str {
        match self {
            ChartType::Bar => "Bar",
            ChartType::HBar => "Horizontal Bar",
            ChartType::StackedBar => "Stacked Bar",
            ChartType::StackedHBar => "Stacked Horizontal Bar",
            ChartType::GroupedBar => "Grouped Bar",
            ChartType::Line => "Line",
            ChartType::LineSmooth => "Smooth Line",
            ChartType::Area => "Area",
            ChartType::AreaMarker => "Area + Markers",
            ChartType::Scatter => "Scatter",
            ChartType::Bubble => "Bubble",
            ChartType::Histogram => "Histogram",
            ChartType::Box => "Box",
            ChartType::Violin => "Violin",
            ChartType::Polar => "Polar",
            ChartType::Funnel => "Funnel",
            ChartType::Waterfall => "Waterfall",
            ChartType::Pie => "Pie",
            ChartType::Donut => "Donut",
            ChartType::Scatter3d => "3D Scatter",
            ChartType::Surface => "Surface",
            ChartType::Heatmap => "Heatmap",
            ChartType::Contour => "Contour",
            ChartType::Candlestick => "Candlestick",
            ChartType::Ohlc => "OHLC",
        }
    }

    /// Resolve an identifier from the settings panel.
    ///
    /// Unrecognized identifiers fall back to the plain bar shape so the UI
    /// never renders nothing over a typo.
    pub fn from_id(id: &str) -> Self {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.id() == id)
            .unwrap_or_else(|| {
                tracing::warn!(id, "unknown chart type, falling back to bar");
                ChartType::Bar
            })
    }

    /// Default chart title when the settings supply none.
    pub fn default_title(&self) -> String {
        format!("{} Chart", self.id().to_uppercase())
    }

    pub fn all() -> &'static [ChartType] {
        &[
            ChartType::Bar,
            ChartType::HBar,
            ChartType::StackedBar,
            ChartType::StackedHBar,
            ChartType::GroupedBar,
            ChartType::Line,
            ChartType::LineSmooth,
            ChartType::Area,
            ChartType::AreaMarker,
            ChartType::Scatter,
            ChartType::Bubble,
            ChartType::Histogram,
            ChartType::Box,
            ChartType::Violin,
            ChartType::Polar,
            ChartType::Funnel,
            ChartType::Waterfall,
            ChartType::Pie,
            ChartType::Donut,
            ChartType::Scatter3d,
            ChartType::Surface,
            ChartType::Heatmap,
            ChartType::Contour,
            ChartType::Candlestick,
            ChartType::Ohlc,
        ]
    }
}

// ============================================================================
// Chart Settings
// ============================================================================

/// Font weight options exposed by the settings panel.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        }
    }
}

/// Per-render chart settings supplied by the configuration collaborator.
///
/// Every field is optional; a missing (or empty) value omits the
/// corresponding visual decoration rather than erroring. Key names follow
/// the settings panel's wire format (`xLabel`, `minY`, ...).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartSettings {
    /// Chart title; empty or missing uses the type-derived default.
    pub title: Option<String>,
    /// X axis title.
    pub x_label: Option<String>,
    /// Y axis title.
    pub y_label: Option<String>,
    /// Source citation, rendered as a bottom-right annotation.
    pub source: Option<String>,
    /// Explicit X axis range; applied only when both bounds are present.
    pub min_x: Option<f64>,
    pub max_x: Option<f64>,
    /// Explicit Y axis range; applied only when both bounds are present.
    pub min_y: Option<f64>,
    pub max_y: Option<f64>,
    /// Unit decoration, applied as a trailing tick suffix on the value axis.
    pub prefix: Option<String>,
    /// Title font weight.
    pub title_font: FontWeight,
    /// Axis label font weight.
    pub label_font: FontWeight,
}

impl ChartSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_axis_labels(
        mut self,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        self.x_label = Some(x_label.into());
        self.y_label = Some(y_label.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_x_range(mut self, min: f64, max: f64) -> Self {
        self.min_x = Some(min);
        self.max_x = Some(max);
        self
    }

    pub fn with_y_range(mut self, min: f64, max: f64) -> Self {
        self.min_y = Some(min);
        self.max_y = Some(max);
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_fonts(mut self, title_font: FontWeight, label_font: FontWeight) -> Self {
        self.title_font = title_font;
        self.label_font = label_font;
        self
    }

    /// The configured title, treating the empty string as absent.
    pub fn title_text(&self) -> Option<&str> {
        non_empty(&self.title)
    }

    /// The configured source citation, treating the empty string as absent.
    pub fn source_text(&self) -> Option<&str> {
        non_empty(&self.source)
    }

    /// The configured unit suffix, or the empty string.
    pub fn unit_suffix(&self) -> &str {
        non_empty(&self.prefix).unwrap_or("")
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
