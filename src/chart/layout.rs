//! Layout assembly.
//!
//! Exactly one [`Layout`] is produced per render, regardless of trace
//! count: title, axis titles/ranges/suffixes, the optional source citation
//! annotation, legend placement, and the bar-stacking mode.

use crate::constants::{
    ANNOTATION_FONT_SIZE, AXIS_TITLE_STANDOFF, LEGEND_Y, MARGIN, SOURCE_ANNOTATION_POS,
    TITLE_FONT_SIZE,
};
use crate::types::{ChartSettings, ChartType, FontWeight};
use serde::Serialize;

/// Bar overlay behavior; unset leaves the renderer's default overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BarMode {
    Stack,
    Group,
}

/// Font styling; absent fields defer to the renderer.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Font {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<FontWeight>,
}

impl Font {
    fn title(weight: FontWeight) -> Self {
        Self {
            size: Some(TITLE_FONT_SIZE),
            family: Some("Arial, sans-serif".to_string()),
            weight: Some(weight),
        }
    }

    fn axis(weight: FontWeight) -> Self {
        Self {
            size: None,
            family: Some("Arial".to_string()),
            weight: Some(weight),
        }
    }

    fn annotation() -> Self {
        Self {
            size: Some(ANNOTATION_FONT_SIZE),
            family: None,
            weight: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
    pub font: Font,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AxisTitle {
    pub text: String,
    pub standoff: u32,
    pub font: Font,
}

/// One axis of the plot. The axis always renders; absent decorations are
/// simply empty.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Axis {
    pub title: AxisTitle,
    pub automargin: bool,
    pub ticksuffix: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
}

impl Axis {
    fn new(label: Option<&str>, weight: FontWeight, suffix: &str, range: Option<[f64; 2]>) -> Self {
        Self {
            title: AxisTitle {
                text: label.unwrap_or("").to_string(),
                standoff: AXIS_TITLE_STANDOFF,
                font: Font::axis(weight),
            },
            automargin: true,
            ticksuffix: suffix.to_string(),
            range,
        }
    }
}

/// Paper-anchored text annotation (the source citation).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Annotation {
    pub xref: &'static str,
    pub yref: &'static str,
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub showarrow: bool,
    pub xanchor: &'static str,
    pub yanchor: &'static str,
    pub font: Font,
}

impl Annotation {
    /// The source citation, anchored bottom-right of the plotting area.
    fn source(source: &str) -> Self {
        let (x, y) = SOURCE_ANNOTATION_POS;
        Self {
            xref: "paper",
            yref: "paper",
            x,
            y,
            text: format!("Source: {source}"),
            showarrow: false,
            xanchor: "right",
            yanchor: "top",
            font: Font::annotation(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Legend {
    pub orientation: &'static str,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Margin {
    pub t: u32,
    pub r: u32,
    pub b: u32,
    pub l: u32,
}

/// The non-data visual configuration for one rendered chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    pub xaxis: Axis,
    pub yaxis: Axis,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    pub autosize: bool,
    pub margin: Margin,
    pub legend: Legend,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barmode: Option<BarMode>,
}

impl Layout {
    /// Build the layout for one render.
    pub fn assemble(chart_type: ChartType, settings: &ChartSettings) -> Self {
        let (t, r, b, l) = MARGIN;
        Self {
            title: Title {
                text: settings
                    .title_text()
                    .map(str::to_string)
                    .unwrap_or_else(|| chart_type.default_title()),
                font: Font::title(settings.title_font),
            },
            // The category axis never carries the unit suffix.
            xaxis: Axis::new(
                settings.x_label.as_deref(),
                settings.label_font,
                "",
                axis_range(settings.min_x, settings.max_x),
            ),
            yaxis: Axis::new(
                settings.y_label.as_deref(),
                settings.label_font,
                settings.unit_suffix(),
                axis_range(settings.min_y, settings.max_y),
            ),
            annotations: settings
                .source_text()
                .map(|s| vec![Annotation::source(s)])
                .unwrap_or_default(),
            autosize: true,
            margin: Margin { t, r, b, l },
            legend: Legend {
                orientation: "h",
                y: LEGEND_Y,
            },
            barmode: bar_mode(chart_type),
        }
    }

    /// The rendered title text.
    pub fn title_text(&self) -> &str {
        &self.title.text
    }
}

/// Stacking mode forced by the chart type, if any.
pub fn bar_mode(chart_type: ChartType) -> Option<BarMode> {
    match chart_type {
        ChartType::StackedBar | ChartType::StackedHBar => Some(BarMode::Stack),
        ChartType::GroupedBar => Some(BarMode::Group),
        _ => None,
    }
}

/// An explicit axis range applies only when both bounds are present.
fn axis_range(min: Option<f64>, max: Option<f64>) -> Option<[f64; 2]> {
    match (min, max) {
        (Some(min), Some(max)) => Some([min, max]),
        _ => None,
    }
}
