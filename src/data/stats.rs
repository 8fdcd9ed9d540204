use polars::prelude::cov::pearson_corr;
use polars::prelude::*;

use crate::constants::numeric::BIN_WIDTH_PAD;
use crate::error::Result;

/// Equal-width bin edges covering a set of values
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBins {
    pub start: f64,
    pub end: f64,
    pub size: f64,
}

/// Split the non-null values into `bins` equal-width bins from min to max
///
/// Bins are half-open, so the width is padded by a hair to keep the maximum
/// inside the last one. A single distinct value gets a unit wide range
/// centered on it. Returns `None` for no values or zero bins.
pub fn histogram_bins(values: &Float64Chunked, bins: usize) -> Option<HistogramBins> {
    if bins == 0 {
        return None;
    }

    let (min, max) = (values.min()?, values.max()?);
    let (start, span) = if max > min {
        (min, max - min)
    } else {
        (min - 0.5, 1.0)
    };

    let size = span / bins as f64 * (1.0 + BIN_WIDTH_PAD);
    Some(HistogramBins {
        start,
        end: start + size * bins as f64,
        size,
    })
}

/// Count distinct non-null values, most frequent first (ties by label)
pub fn value_counts(values: &Series) -> Result<Vec<(String, usize)>> {
    let values = values.drop_nulls().with_name("value".into());
    let counts = values.value_counts(false, false, "count".into(), false)?;

    let labels = counts
        .column("value")?
        .as_materialized_series()
        .cast(&DataType::String)?;
    let tallies = counts
        .column("count")?
        .as_materialized_series()
        .cast(&DataType::UInt64)?;

    let mut counts: Vec<(String, usize)> = labels
        .str()?
        .into_iter()
        .zip(tallies.u64()?)
        .filter_map(|(label, count)| Some((label?.to_string(), count? as usize)))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    Ok(counts)
}

/// Pearson correlation over rows where both values are present
///
/// `None` when fewer than two complete pairs exist or either side is
/// constant.
pub fn pearson(x: &Float64Chunked, y: &Float64Chunked) -> Option<f64> {
    let complete = x.is_not_null() & y.is_not_null();
    let x = x.filter(&complete).ok()?;
    let y = y.filter(&complete).ok()?;
    if x.len() < 2 || is_constant(&x) || is_constant(&y) {
        return None;
    }

    pearson_corr(&x, &y)
        .filter(|r| r.is_finite())
        .map(|r| r.clamp(-1.0, 1.0))
}

fn is_constant(values: &Float64Chunked) -> bool {
    values.min() == values.max()
}

/// Symmetric pairwise correlation matrix
///
/// Only the upper triangle is computed; the lower triangle mirrors it so
/// `m[i][j] == m[j][i]` holds bit for bit. Diagonal cells are exactly 1.0
/// for columns with variance.
pub fn correlation_matrix(columns: &[Float64Chunked]) -> Vec<Vec<Option<f64>>> {
    let n = columns.len();
    let mut matrix = vec![vec![None; n]; n];

    for i in 0..n {
        matrix[i][i] = pearson(&columns[i], &columns[i]).map(|_| 1.0);
        for j in (i + 1)..n {
            let r = pearson(&columns[i], &columns[j]);
            matrix[i][j] = r;
            matrix[j][i] = r;
        }
    }
    matrix
}
