use crate::charts::figure::{ChartDescription, ChartLayout, PieTrace, Title, Trace};
use crate::constants::{columns, plot};
use crate::data::RecordTable;
use crate::data::stats::value_counts;
use crate::error::{DashboardError, Result};

/// Ring chart of the distinct values of one categorical column
pub fn build(table: &RecordTable, column: &str) -> Result<ChartDescription> {
    if !columns::PIE.contains(&column) {
        return Err(DashboardError::ColumnNotAllowed {
            column: column.to_string(),
            chart: "pie chart",
        });
    }

    let (labels, values): (Vec<String>, Vec<usize>) = value_counts(&table.category_values(column)?)?
        .into_iter()
        .unzip();

    Ok(ChartDescription {
        data: vec![Trace::Pie(PieTrace {
            labels,
            values,
            hole: plot::PIE_HOLE,
        })],
        layout: ChartLayout {
            title: Some(Title::new(format!("Distribution of {}", column))),
            ..Default::default()
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures;
    use std::collections::HashSet;

    fn pie_trace(chart: &ChartDescription) -> &PieTrace {
        match &chart.data[..] {
            [Trace::Pie(trace)] => trace,
            other => panic!("expected a single pie trace, got {:?}", other),
        }
    }

    #[test]
    fn test_proportions_sum_to_one() {
        let table = fixtures::sample_table();
        for column in columns::PIE {
            let chart = build(&table, column).unwrap();
            let trace = pie_trace(&chart);

            let total: f64 = trace.proportions().iter().sum();
            assert!((total - 1.0).abs() < 1e-9, "{} sums to {}", column, total);
            assert_eq!(trace.hole, 0.4);
        }
    }

    #[test]
    fn test_one_slice_per_distinct_value() {
        for table in [fixtures::sample_table(), fixtures::table_with_gaps()] {
            for column in columns::PIE {
                let distinct: HashSet<String> = table
                    .category_column(column)
                    .unwrap()
                    .into_iter()
                    .flatten()
                    .collect();
                let chart = build(&table, column).unwrap();
                assert_eq!(pie_trace(&chart).labels.len(), distinct.len(), "{}", column);
            }
        }
    }

    #[test]
    fn test_slices_ordered_by_count() {
        let table = fixtures::sample_table();
        let chart = build(&table, "home_status").unwrap();
        let trace = pie_trace(&chart);

        assert_eq!(trace.labels, vec!["OWN", "RENT", "MORTGAGE"]);
        assert_eq!(trace.values, vec![2, 2, 1]);
        assert_eq!(
            chart.layout.title.as_ref().unwrap().text,
            "Distribution of home_status"
        );
    }

    #[test]
    fn test_missing_values_are_not_a_slice() {
        let table = fixtures::table_with_gaps();
        let chart = build(&table, "gender").unwrap();
        let trace = pie_trace(&chart);

        assert_eq!(trace.values.iter().sum::<usize>(), 4);
    }

    #[test]
    fn test_numeric_column_rejected() {
        let table = fixtures::sample_table();
        let err = build(&table, "age").unwrap_err();
        assert!(matches!(err, DashboardError::ColumnNotAllowed { .. }));
    }

    #[test]
    fn test_build_is_idempotent() {
        let table = fixtures::sample_table();
        assert_eq!(
            build(&table, "education_level").unwrap(),
            build(&table, "education_level").unwrap()
        );
    }
}
