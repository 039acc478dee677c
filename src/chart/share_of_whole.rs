//! Share-of-whole charts (pie, donut).
//!
//! Exactly one trace, built from the first series key only. Additional
//! series are ignored, not errored.

use crate::chart::trace::{TextInfo, Trace};
use crate::chart::{TraceStrategy, coerced_column};
use crate::constants::DONUT_HOLE;
use crate::data::DataTable;
use crate::types::{ChartSettings, ChartType};

pub(crate) struct ShareOfWhole;

impl TraceStrategy for ShareOfWhole {
    fn build_traces(
        &self,
        table: &DataTable,
        chart_type: ChartType,
        settings: &ChartSettings,
    ) -> Vec<Trace> {
        let keys = table.series_keys();
        let Some(first) = keys.first() else {
            return Vec::new();
        };
        if keys.len() > 1 {
            tracing::debug!(
                ignored = keys.len() - 1,
                "share-of-whole charts render only the first series"
            );
        }

        let hole = match chart_type {
            ChartType::Donut => Some(DONUT_HOLE),
            _ => None,
        };

        vec![Trace::Pie {
            labels: table.categories(),
            values: coerced_column(table, first),
            hole,
            name: first.clone(),
            textinfo: TextInfo::LabelValue,
            texttemplate: format!("%{{label}}: %{{value}}{}", settings.unit_suffix()),
        }]
    }
}
