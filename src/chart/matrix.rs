//! Matrix-valued charts (surface, heatmap, contour).
//!
//! Exactly one trace: a 2-D numeric matrix with one row per table row and
//! one column per series key, in order. The series keys label the x axis
//! ticks and the category values label the y axis ticks.

use crate::chart::trace::Trace;
use crate::chart::{TraceStrategy, coerce_number};
use crate::constants::MATRIX_COLORSCALE;
use crate::data::DataTable;
use crate::types::{ChartSettings, ChartType};

pub(crate) struct Matrix;

impl TraceStrategy for Matrix {
    fn build_traces(
        &self,
        table: &DataTable,
        chart_type: ChartType,
        _settings: &ChartSettings,
    ) -> Vec<Trace> {
        let keys = table.series_keys();
        let z: Vec<Vec<f64>> = table
            .rows()
            .iter()
            .map(|row| {
                keys.iter()
                    .map(|key| coerce_number(row.get(key).unwrap_or("")))
                    .collect()
            })
            .collect();
        let x = keys;
        let y = table.categories();

        vec![match chart_type {
            ChartType::Surface => Trace::Surface { x, y, z },
            ChartType::Contour => Trace::Contour {
                x,
                y,
                z,
                colorscale: MATRIX_COLORSCALE.to_string(),
            },
            _ => Trace::Heatmap {
                x,
                y,
                z,
                colorscale: MATRIX_COLORSCALE.to_string(),
            },
        }]
    }
}
