//! Categorical single- and multi-series charts.
//!
//! The widest family: bars (plain, horizontal, stacked, grouped), lines,
//! areas, scatter, bubble, histogram, box, violin, polar, funnel and
//! waterfall. One trace per series key; the category values label one
//! axis and each series takes the next palette color.

use crate::chart::trace::{
    AxisValues, BoxPoints, Fill, Line, Marker, Orientation, Trace, TraceMode, ViolinBox,
};
use crate::chart::{TraceStrategy, coerced_column, series_color};
use crate::constants::{BOX_JITTER, BUBBLE_MIN_SIZE};
use crate::data::DataTable;
use crate::types::{ChartSettings, ChartType};

pub(crate) struct Categorical;

impl TraceStrategy for Categorical {
    fn build_traces(
        &self,
        table: &DataTable,
        chart_type: ChartType,
        _settings: &ChartSettings,
    ) -> Vec<Trace> {
        let categories = table.categories();
        table
            .series_keys()
            .into_iter()
            .enumerate()
            .map(|(index, key)| {
                let values = coerced_column(table, &key);
                build_one(chart_type, categories.clone(), values, key, series_color(index))
            })
            .collect()
    }
}

fn build_one(
    chart_type: ChartType,
    categories: Vec<String>,
    values: Vec<f64>,
    name: String,
    color: &str,
) -> Trace {
    match chart_type {
        ChartType::HBar | ChartType::StackedHBar => Trace::Bar {
            x: AxisValues::Numbers(values),
            y: AxisValues::Categories(categories),
            name,
            orientation: Some(Orientation::Horizontal),
            marker: Marker::color(color),
        },
        ChartType::Line => Trace::Scatter {
            x: categories,
            y: values,
            mode: TraceMode::LinesMarkers,
            name,
            fill: None,
            line: Some(Line::color(color)),
            marker: None,
        },
        ChartType::LineSmooth => Trace::Scatter {
            x: categories,
            y: values,
            mode: TraceMode::LinesMarkers,
            name,
            fill: None,
            line: Some(Line::spline(color)),
            marker: None,
        },
        ChartType::Area => Trace::Scatter {
            x: categories,
            y: values,
            mode: TraceMode::Lines,
            name,
            fill: Some(Fill::ToZeroY),
            line: Some(Line::color(color)),
            marker: None,
        },
        ChartType::AreaMarker => Trace::Scatter {
            x: categories,
            y: values,
            mode: TraceMode::LinesMarkers,
            name,
            fill: Some(Fill::ToZeroY),
            line: Some(Line::color(color)),
            marker: None,
        },
        ChartType::Scatter => Trace::Scatter {
            x: categories,
            y: values,
            mode: TraceMode::Markers,
            name,
            fill: None,
            line: None,
            marker: Some(Marker::color(color)),
        },
        ChartType::Bubble => {
            // Marker size floor keeps small values visible.
            let sizes = values.iter().map(|v| v.max(BUBBLE_MIN_SIZE)).collect();
            Trace::Scatter {
                x: categories,
                y: values,
                mode: TraceMode::Markers,
                name,
                fill: None,
                line: None,
                marker: Some(Marker::sized(color, sizes)),
            }
        }
        ChartType::Histogram => Trace::Histogram {
            x: values,
            name,
            marker: Marker::color(color),
        },
        ChartType::Box => Trace::Box {
            y: values,
            boxpoints: BoxPoints::All,
            jitter: BOX_JITTER,
            name,
            marker: Marker::color(color),
        },
        ChartType::Violin => Trace::Violin {
            y: values,
            box_options: ViolinBox { visible: true },
            line: Line::color(color),
            name,
        },
        ChartType::Polar => Trace::Scatterpolar {
            r: values,
            theta: categories,
            mode: TraceMode::LinesMarkers,
            name,
        },
        ChartType::Funnel => Trace::Funnel {
            x: values,
            y: categories,
            name,
        },
        ChartType::Waterfall => Trace::Waterfall {
            x: categories,
            y: values,
            name,
        },
        // bar, stacked-bar, grouped-bar, and everything that fell back here
        _ => Trace::Bar {
            x: AxisValues::Categories(categories),
            y: AxisValues::Numbers(values),
            name,
            orientation: None,
            marker: Marker::color(color),
        },
    }
}
