//! Layout assembly tests through the public build entry point.

use crate::helpers::month_table;
use chartboard::{ChartSettings, ChartType, build_chart};
use serde_json::json;

#[test]
fn test_stacking_modes() {
    let table = month_table();
    let cases = [
        (ChartType::StackedBar, Some("stack")),
        (ChartType::StackedHBar, Some("stack")),
        (ChartType::GroupedBar, Some("group")),
        (ChartType::Bar, None),
        (ChartType::HBar, None),
    ];

    for (chart_type, expected) in cases {
        let (_, layout) = build_chart(&table, chart_type, &ChartSettings::default());
        let value = serde_json::to_value(&layout).unwrap();
        match expected {
            Some(mode) => assert_eq!(value["barmode"], mode, "for {}", chart_type.id()),
            None => assert!(
                value.get("barmode").is_none(),
                "unexpected barmode for {}",
                chart_type.id()
            ),
        }
    }
}

#[test]
fn test_axis_range_requires_both_bounds() {
    let table = month_table();

    let settings: ChartSettings = serde_json::from_value(json!({"minY": 0})).unwrap();
    let (_, layout) = build_chart(&table, ChartType::Bar, &settings);
    assert!(serde_json::to_value(&layout).unwrap()["yaxis"]
        .get("range")
        .is_none());

    let settings: ChartSettings = serde_json::from_value(json!({"minY": 0, "maxY": 100})).unwrap();
    let (_, layout) = build_chart(&table, ChartType::Bar, &settings);
    assert_eq!(
        serde_json::to_value(&layout).unwrap()["yaxis"]["range"],
        json!([0.0, 100.0])
    );
}

#[test]
fn test_layout_wire_decorations() {
    let settings = ChartSettings::new()
        .with_title("Spending")
        .with_axis_labels("Month", "EUR")
        .with_source("Eurostat")
        .with_prefix("€");
    let (_, layout) = build_chart(&month_table(), ChartType::Line, &settings);
    let value = serde_json::to_value(&layout).unwrap();

    assert_eq!(value["title"]["text"], "Spending");
    assert_eq!(value["xaxis"]["title"]["text"], "Month");
    assert_eq!(value["yaxis"]["title"]["text"], "EUR");
    assert_eq!(value["yaxis"]["ticksuffix"], "€");
    assert_eq!(value["xaxis"]["ticksuffix"], "");
    assert_eq!(value["annotations"][0]["text"], "Source: Eurostat");
    assert_eq!(value["legend"]["orientation"], "h");
}

#[test]
fn test_bare_settings_omit_decorations() {
    let (_, layout) = build_chart(&month_table(), ChartType::Line, &ChartSettings::default());
    let value = serde_json::to_value(&layout).unwrap();

    assert_eq!(value["title"]["text"], "LINE Chart");
    assert_eq!(value["xaxis"]["title"]["text"], "");
    assert!(value.get("annotations").is_none());
    assert!(value["xaxis"].get("range").is_none());
    assert!(value["yaxis"].get("range").is_none());
}
