//! Drawable series specifications.
//!
//! A [`Trace`] is one series as the rendering collaborator consumes it. The
//! enum is internally tagged so the serialized form carries the renderer's
//! `type` string, and optional styling fields are skipped when absent. The
//! wire shape is exactly what the renderer expects, field for field.

use serde::Serialize;

/// Values along one cartesian axis: category labels or numbers.
///
/// Horizontal variants swap which axis carries the categories.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AxisValues {
    Categories(Vec<String>),
    Numbers(Vec<f64>),
}

/// How points of a scatter-family trace are drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TraceMode {
    #[serde(rename = "lines")]
    Lines,
    #[serde(rename = "markers")]
    Markers,
    #[serde(rename = "lines+markers")]
    LinesMarkers,
}

/// Bar orientation; vertical is the renderer default and stays unset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Orientation {
    #[serde(rename = "h")]
    Horizontal,
}

/// Area fill mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Fill {
    #[serde(rename = "tozeroy")]
    ToZeroY,
}

/// Curve interpolation for line traces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineShape {
    Spline,
}

/// Which points a box trace shows alongside the box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BoxPoints {
    All,
}

/// Slice text content for share-of-whole traces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TextInfo {
    #[serde(rename = "label+value")]
    LabelValue,
}

/// Marker styling for a series.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Per-point marker sizes (bubble charts).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Vec<f64>>,
}

impl Marker {
    pub fn color(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            size: None,
        }
    }

    pub fn sized(color: impl Into<String>, size: Vec<f64>) -> Self {
        Self {
            color: Some(color.into()),
            size: Some(size),
        }
    }
}

/// Line styling for a series.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Line {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<LineShape>,
}

impl Line {
    pub fn color(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            shape: None,
        }
    }

    pub fn spline(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            shape: Some(LineShape::Spline),
        }
    }
}

/// Inner-box visibility for violin traces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ViolinBox {
    pub visible: bool,
}

/// One drawable series specification.
///
/// Each variant carries only the fields its chart family needs; the tag is
/// the renderer's trace `type` string.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Bar {
        x: AxisValues,
        y: AxisValues,
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        orientation: Option<Orientation>,
        marker: Marker,
    },
    Scatter {
        x: Vec<String>,
        y: Vec<f64>,
        mode: TraceMode,
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        fill: Option<Fill>,
        #[serde(skip_serializing_if = "Option::is_none")]
        line: Option<Line>,
        #[serde(skip_serializing_if = "Option::is_none")]
        marker: Option<Marker>,
    },
    Histogram {
        x: Vec<f64>,
        name: String,
        marker: Marker,
    },
    Box {
        y: Vec<f64>,
        boxpoints: BoxPoints,
        jitter: f64,
        name: String,
        marker: Marker,
    },
    Violin {
        y: Vec<f64>,
        #[serde(rename = "box")]
        box_options: ViolinBox,
        line: Line,
        name: String,
    },
    Scatterpolar {
        r: Vec<f64>,
        theta: Vec<String>,
        mode: TraceMode,
        name: String,
    },
    Funnel {
        x: Vec<f64>,
        y: Vec<String>,
        name: String,
    },
    Waterfall {
        x: Vec<String>,
        y: Vec<f64>,
        name: String,
    },
    Pie {
        labels: Vec<String>,
        values: Vec<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        hole: Option<f64>,
        name: String,
        textinfo: TextInfo,
        texttemplate: String,
    },
    Scatter3d {
        x: Vec<String>,
        y: Vec<f64>,
        z: Vec<f64>,
        mode: TraceMode,
        marker: Marker,
        name: String,
    },
    Surface {
        x: Vec<String>,
        y: Vec<String>,
        z: Vec<Vec<f64>>,
    },
    Heatmap {
        x: Vec<String>,
        y: Vec<String>,
        z: Vec<Vec<f64>>,
        colorscale: String,
    },
    Contour {
        x: Vec<String>,
        y: Vec<String>,
        z: Vec<Vec<f64>>,
        colorscale: String,
    },
    Candlestick {
        x: Vec<String>,
        open: Vec<f64>,
        high: Vec<f64>,
        low: Vec<f64>,
        close: Vec<f64>,
        name: String,
    },
    Ohlc {
        x: Vec<String>,
        open: Vec<f64>,
        high: Vec<f64>,
        low: Vec<f64>,
        close: Vec<f64>,
        name: String,
    },
}
