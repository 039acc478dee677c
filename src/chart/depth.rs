//! Depth-augmented charts (3D scatter).
//!
//! One trace per series key, with a `z` coordinate sourced from the
//! dedicated `z` column when the table carries one; every row's depth
//! defaults to 0 otherwise.

use crate::chart::trace::{Marker, Trace, TraceMode};
use crate::chart::{TraceStrategy, coerced_column, series_color};
use crate::data::{DEPTH_KEY, DataTable};
use crate::types::{ChartSettings, ChartType};

pub(crate) struct Depth;

impl TraceStrategy for Depth {
    fn build_traces(
        &self,
        table: &DataTable,
        _chart_type: ChartType,
        _settings: &ChartSettings,
    ) -> Vec<Trace> {
        let categories = table.categories();
        // Missing cells coerce to 0, so an absent z column is a flat plane.
        let z = coerced_column(table, DEPTH_KEY);

        table
            .series_keys()
            .into_iter()
            .enumerate()
            .map(|(index, key)| Trace::Scatter3d {
                x: categories.clone(),
                y: coerced_column(table, &key),
                z: z.clone(),
                mode: TraceMode::Markers,
                marker: Marker::color(series_color(index)),
                name: key,
            })
            .collect()
    }
}
