use crate::charts::figure::{
    Axis, BinSpec, ChartDescription, ChartLayout, HistogramTrace, Marker, MarkerLine, Title, Trace,
};
use crate::constants::{columns, plot};
use crate::data::RecordTable;
use crate::data::stats::histogram_bins;
use crate::error::{DashboardError, Result};

/// Frequency chart of one allow-listed numeric column in 30 equal bins
///
/// Columns without any numeric value give an empty chart.
pub fn build(table: &RecordTable, column: &str) -> Result<ChartDescription> {
    if !columns::HISTOGRAM.contains(&column) {
        return Err(DashboardError::ColumnNotAllowed {
            column: column.to_string(),
            chart: "histogram",
        });
    }

    let values = table.numeric_values(column)?;
    let xbins = histogram_bins(&values, plot::HISTOGRAM_BINS).map(|bins| BinSpec {
        start: bins.start,
        end: bins.end,
        size: bins.size,
    });

    let trace = HistogramTrace {
        x: values.into_iter().flatten().collect(),
        nbinsx: plot::HISTOGRAM_BINS,
        xbins,
        marker: Marker {
            color: plot::HISTOGRAM_COLOR.to_string(),
            opacity: Some(plot::HISTOGRAM_OPACITY),
            line: Some(MarkerLine {
                color: "black",
                width: 1.0,
            }),
        },
    };

    Ok(ChartDescription {
        data: vec![Trace::Histogram(trace)],
        layout: ChartLayout {
            title: Some(Title::new(format!("Histogram of {}", column))),
            xaxis: Some(Axis::titled(column)),
            yaxis: Some(Axis::titled("Frequency")),
            height: Some(plot::HISTOGRAM_HEIGHT),
            bargap: Some(plot::HISTOGRAM_BARGAP),
            plot_bgcolor: Some("white"),
            paper_bgcolor: Some("white"),
            ..Default::default()
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures;

    fn histogram_trace(chart: &ChartDescription) -> &HistogramTrace {
        match &chart.data[..] {
            [Trace::Histogram(trace)] => trace,
            other => panic!("expected a single histogram trace, got {:?}", other),
        }
    }

    #[test]
    fn test_every_allowed_column_has_thirty_bins() {
        let table = fixtures::sample_table();
        for column in columns::HISTOGRAM {
            let chart = build(&table, column).unwrap();
            let trace = histogram_trace(&chart);

            assert_eq!(trace.nbinsx, 30);
            assert_eq!(trace.xbins.as_ref().unwrap().count(), 30);
            assert_eq!(trace.x.len(), 5);
            let title = &chart.layout.title.as_ref().unwrap().text;
            assert!(title.contains(column), "{} missing from {}", column, title);
        }
    }

    #[test]
    fn test_bins_span_value_range() {
        let table = fixtures::sample_table();
        let chart = build(&table, "loan_amount").unwrap();
        let xbins = histogram_trace(&chart).xbins.clone().unwrap();

        assert_eq!(xbins.start, 5000.0);
        assert!((xbins.size - 500.0).abs() < 1e-3);
        assert_eq!(xbins.count(), 30);
    }

    #[test]
    fn test_largest_value_inside_last_bin() {
        let table = fixtures::sample_table();
        for column in columns::HISTOGRAM {
            let chart = build(&table, column).unwrap();
            let trace = histogram_trace(&chart);
            let xbins = trace.xbins.as_ref().unwrap();
            let max = trace.x.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

            assert!(max < xbins.end, "{}: {} not below {}", column, max, xbins.end);
            assert!(xbins.start + 30.0 * xbins.size >= max);
            let last = ((max - xbins.start) / xbins.size).floor() as usize;
            assert_eq!(last, 29, "{}", column);
        }
    }

    #[test]
    fn test_column_without_numbers_gives_empty_chart() {
        let table = fixtures::table_with_gaps();
        let chart = build(&table, "loan_interest_rate").unwrap();
        let trace = histogram_trace(&chart);

        assert!(trace.x.is_empty());
        assert!(trace.xbins.is_none());
        assert_eq!(trace.nbinsx, 30);
    }

    #[test]
    fn test_missing_values_are_dropped() {
        let table = fixtures::table_with_gaps();
        let chart = build(&table, "age").unwrap();
        assert_eq!(histogram_trace(&chart).x, vec![25.0, 30.0, 40.0, 45.0]);
    }

    #[test]
    fn test_column_outside_allow_list() {
        let table = fixtures::sample_table();
        for column in ["credit_length", "gender", "nope"] {
            let err = build(&table, column).unwrap_err();
            assert!(matches!(err, DashboardError::ColumnNotAllowed { .. }));
        }
    }

    #[test]
    fn test_build_is_idempotent() {
        let table = fixtures::sample_table();
        assert_eq!(build(&table, "age").unwrap(), build(&table, "age").unwrap());
    }
}
