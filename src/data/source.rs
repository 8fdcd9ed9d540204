use polars::prelude::*;
use std::path::{Path, PathBuf};

use crate::constants::columns;
use crate::error::{DashboardError, Result};

/// Read-only loan record table backed by a materialized Polars DataFrame
///
/// Built once at startup and shared by reference with every chart builder.
/// Nothing in the crate mutates it after construction.
pub struct RecordTable {
    frame: DataFrame,
    /// Original file path
    source_path: Option<PathBuf>,
}

impl RecordTable {
    /// Load a delimited file with a header row
    pub fn load(path: &Path, separator: u8) -> Result<Self> {
        if !path.is_file() {
            return Err(DashboardError::DataFileMissing {
                path: path.to_path_buf(),
            });
        }

        let frame = LazyCsvReader::new(path)
            .with_has_header(true)
            .with_separator(separator)
            .with_infer_schema_length(None)
            .finish()?
            .collect()?;

        let mut table = Self::from_dataframe(frame)?;
        table.source_path = Some(path.to_path_buf());
        Ok(table)
    }

    /// Wrap an already-built DataFrame, checking the required schema
    pub fn from_dataframe(frame: DataFrame) -> Result<Self> {
        validate_schema(&frame)?;
        Ok(Self {
            frame,
            source_path: None,
        })
    }

    /// Path the table was loaded from, if any
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Get all column names in file order
    pub fn column_names(&self) -> Vec<String> {
        self.frame
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Names of every numeric-typed column, in file order
    pub fn numeric_column_names(&self) -> Vec<String> {
        self.frame
            .get_columns()
            .iter()
            .filter(|c| is_numeric(c.dtype()))
            .map(|c| c.name().to_string())
            .collect()
    }

    /// Get the number of rows
    pub fn height(&self) -> usize {
        self.frame.height()
    }

    /// Get the number of columns
    pub fn width(&self) -> usize {
        self.frame.width()
    }

    fn series(&self, name: &str) -> Result<Series> {
        self.frame
            .column(name)
            .map(|c| c.as_materialized_series().clone())
            .map_err(|_| DashboardError::ColumnNotFound {
                column: name.to_string(),
            })
    }

    /// Column values as a float array; nulls and NaN become null
    pub fn numeric_values(&self, name: &str) -> Result<Float64Chunked> {
        let series = self.series(name)?;
        if !is_numeric(series.dtype()) && series.null_count() != series.len() {
            return Err(DashboardError::SchemaMismatch {
                column: name.to_string(),
                dtype: series.dtype().to_string(),
            });
        }

        let series_f64 = series.cast(&DataType::Float64)?;
        let values: Float64Chunked = series_f64
            .f64()?
            .into_iter()
            .map(|opt| opt.filter(|v| !v.is_nan()))
            .collect();
        Ok(values.with_name(name.into()))
    }

    /// Column values as floats; nulls and NaN become `None`
    pub fn numeric_column(&self, name: &str) -> Result<Vec<Option<f64>>> {
        Ok(self.numeric_values(name)?.into_iter().collect())
    }

    /// Column cast to strings, nulls kept
    pub fn category_values(&self, name: &str) -> Result<Series> {
        Ok(self.series(name)?.cast(&DataType::String)?)
    }

    /// Column values rendered as strings; nulls become `None`
    pub fn category_column(&self, name: &str) -> Result<Vec<Option<String>>> {
        let series_str = self.category_values(name)?;
        Ok(series_str
            .str()?
            .into_iter()
            .map(|opt| opt.map(str::to_string))
            .collect())
    }
}

fn is_numeric(dtype: &DataType) -> bool {
    dtype.is_integer() || dtype.is_float()
}

fn validate_schema(frame: &DataFrame) -> Result<()> {
    let missing: Vec<String> = columns::NUMERIC
        .iter()
        .chain(columns::CATEGORICAL.iter())
        .filter(|name| frame.column(name).is_err())
        .map(|name| name.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(DashboardError::MissingColumns { columns: missing });
    }

    for name in columns::NUMERIC {
        let column = frame.column(name)?;
        let all_null = column.null_count() == column.len();
        if !is_numeric(column.dtype()) && !all_null {
            return Err(DashboardError::SchemaMismatch {
                column: name.to_string(),
                dtype: column.dtype().to_string(),
            });
        }
    }
    Ok(())
}
