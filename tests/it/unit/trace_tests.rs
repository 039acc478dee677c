//! Trace builder tests across the whole chart-type enumeration.

use crate::helpers::TestTableBuilder;
use chartboard::{ChartSettings, ChartType, DataTable, build_chart};

fn three_series_table() -> DataTable {
    TestTableBuilder::new()
        .with_row("Jan", &["3", "25", "7"])
        .with_row("Feb", &["8", "40", "9"])
        .with_row("Mar", &["5", "30", "11"])
        .build()
}

/// Renderer `type` tag expected for each chart type.
fn expected_tag(chart_type: ChartType) -> &'static str {
    match chart_type {
        ChartType::Bar
        | ChartType::HBar
        | ChartType::StackedBar
        | ChartType::StackedHBar
        | ChartType::GroupedBar => "bar",
        ChartType::Line
        | ChartType::LineSmooth
        | ChartType::Area
        | ChartType::AreaMarker
        | ChartType::Scatter
        | ChartType::Bubble => "scatter",
        ChartType::Histogram => "histogram",
        ChartType::Box => "box",
        ChartType::Violin => "violin",
        ChartType::Polar => "scatterpolar",
        ChartType::Funnel => "funnel",
        ChartType::Waterfall => "waterfall",
        ChartType::Pie | ChartType::Donut => "pie",
        ChartType::Scatter3d => "scatter3d",
        ChartType::Surface => "surface",
        ChartType::Heatmap => "heatmap",
        ChartType::Contour => "contour",
        ChartType::Candlestick => "candlestick",
        ChartType::Ohlc => "ohlc",
    }
}

#[test]
fn test_every_type_builds_with_its_renderer_tag() {
    let table = three_series_table();
    for &chart_type in ChartType::all() {
        let (traces, layout) = build_chart(&table, chart_type, &ChartSettings::default());
        assert!(!traces.is_empty(), "no traces for {}", chart_type.id());
        assert!(!layout.title_text().is_empty());

        let value = serde_json::to_value(&traces).unwrap();
        for trace in value.as_array().unwrap() {
            assert_eq!(
                trace["type"],
                expected_tag(chart_type),
                "wrong tag for {}",
                chart_type.id()
            );
        }
    }
}

#[test]
fn test_trace_count_per_family() {
    let table = three_series_table();
    for &chart_type in ChartType::all() {
        let (traces, _) = build_chart(&table, chart_type, &ChartSettings::default());
        let expected = match chart_type {
            // One trace regardless of series count.
            ChartType::Pie
            | ChartType::Donut
            | ChartType::Surface
            | ChartType::Heatmap
            | ChartType::Contour
            | ChartType::Candlestick
            | ChartType::Ohlc => 1,
            // One trace per series key.
            _ => 3,
        };
        assert_eq!(
            traces.len(),
            expected,
            "trace count for {}",
            chart_type.id()
        );
    }
}

#[test]
fn test_unknown_identifier_renders_bars() {
    let table = three_series_table();
    let chart_type = ChartType::from_id("definitely-not-a-chart");
    let (traces, layout) = build_chart(&table, chart_type, &ChartSettings::default());

    assert_eq!(traces.len(), 3);
    assert_eq!(serde_json::to_value(&traces).unwrap()[0]["type"], "bar");
    assert_eq!(layout.title_text(), "BAR Chart");
}

#[test]
fn test_series_beyond_first_ignored_by_pie() {
    let (traces, _) = build_chart(&three_series_table(), ChartType::Pie, &ChartSettings::default());
    let value = serde_json::to_value(&traces).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 1);
    assert_eq!(value[0]["values"], serde_json::json!([3.0, 8.0, 5.0]));
    assert_eq!(value[0]["name"], "y1");
}

#[test]
fn test_matrix_dimensions() {
    let (traces, _) =
        build_chart(&three_series_table(), ChartType::Heatmap, &ChartSettings::default());
    let value = serde_json::to_value(&traces).unwrap();
    let z = value[0]["z"].as_array().unwrap();
    assert_eq!(z.len(), 3, "one matrix row per table row");
    assert_eq!(z[0].as_array().unwrap().len(), 3, "one column per series");
    assert_eq!(value[0]["x"], serde_json::json!(["y1", "y2", "y3"]));
    assert_eq!(value[0]["y"], serde_json::json!(["Jan", "Feb", "Mar"]));
}

#[test]
fn test_depth_column_feeds_scatter3d() {
    let table = TestTableBuilder::new()
        .with_depth_row("A", &["1"], "4")
        .with_depth_row("B", &["2"], "5")
        .build();
    let (traces, _) = build_chart(&table, ChartType::Scatter3d, &ChartSettings::default());
    let value = serde_json::to_value(&traces).unwrap();
    assert_eq!(value[0]["z"], serde_json::json!([4.0, 5.0]));
}
