//! Financial charts (candlestick, OHLC).
//!
//! Exactly one trace. The first four series keys are read positionally as
//! open, high, low, close, whatever their displayed labels say. A missing
//! positional key contributes a zero column.

use crate::chart::trace::Trace;
use crate::chart::{TraceStrategy, coerced_column};
use crate::data::DataTable;
use crate::types::{ChartSettings, ChartType};

pub(crate) struct Financial;

impl TraceStrategy for Financial {
    fn build_traces(
        &self,
        table: &DataTable,
        chart_type: ChartType,
        _settings: &ChartSettings,
    ) -> Vec<Trace> {
        let keys = table.series_keys();
        let column = |position: usize| -> Vec<f64> {
            match keys.get(position) {
                Some(key) => coerced_column(table, key),
                None => vec![0.0; table.row_count()],
            }
        };

        let x = table.categories();
        let open = column(0);
        let high = column(1);
        let low = column(2);
        let close = column(3);
        let name = keys.first().cloned().unwrap_or_default();

        vec![match chart_type {
            ChartType::Ohlc => Trace::Ohlc {
                x,
                open,
                high,
                low,
                close,
                name,
            },
            _ => Trace::Candlestick {
                x,
                open,
                high,
                low,
                close,
                name,
            },
        }]
    }
}
