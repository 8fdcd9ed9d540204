//! Error types for the loan dashboard
//!
//! Startup failures (configuration, data file, schema) and per-request
//! failures (unknown selections, unknown event sources) share one enum so
//! both the entry point and the HTTP layer can report them.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for dashboard operations
#[derive(Error, Debug)]
pub enum DashboardError {
    /// File I/O error
    #[error("Failed to access file: {0}")]
    FileIo(#[from] std::io::Error),

    /// The configured data file does not exist
    #[error("Data file not found: {}", path.display())]
    DataFileMissing { path: PathBuf },

    /// Polars data processing error
    #[error("Data processing error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file could not be parsed
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Required columns absent from the loaded table
    #[error("Dataset is missing required columns: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    /// A required numeric column was parsed with a non-numeric type
    #[error("Column '{column}' must be numeric, found {dtype}")]
    SchemaMismatch { column: String, dtype: String },

    /// Column not found in data
    #[error("Column '{column}' not found in dataset")]
    ColumnNotFound { column: String },

    /// Column exists but is not offered by the given chart
    #[error("Column '{column}' is not available for the {chart}")]
    ColumnNotAllowed { column: String, chart: &'static str },

    /// Scatter selection key outside the fixed mapping
    #[error("Unknown scatter selection '{key}'")]
    UnknownSelection { key: String },

    /// Request body could not be decoded
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Event source id with no registered binding
    #[error("No binding registered for event source '{source_id}'")]
    UnknownEventSource { source_id: String },

    /// Logging could not be initialized
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;

impl DashboardError {
    /// Get a user-friendly error message suitable for the page or the console
    pub fn user_message(&self) -> String {
        match self {
            DashboardError::FileIo(e) => format!("File error: {}", e),
            DashboardError::DataFileMissing { path } => {
                format!("Data file '{}' does not exist", path.display())
            }
            DashboardError::Polars(e) => format!("Data error: {}", e),
            DashboardError::Config(msg) => format!("Config error: {}", msg),
            DashboardError::ConfigParse(e) => format!("Config error: {}", e),
            DashboardError::MissingColumns { columns } => {
                format!("Missing columns: {}", columns.join(", "))
            }
            DashboardError::SchemaMismatch { column, dtype } => {
                format!("Column '{}' has type {}, expected a number", column, dtype)
            }
            DashboardError::ColumnNotFound { column } => {
                format!("Column '{}' not found", column)
            }
            DashboardError::ColumnNotAllowed { column, chart } => {
                format!("'{}' cannot be shown in the {}", column, chart)
            }
            DashboardError::UnknownSelection { key } => {
                format!("Unknown scatter plot '{}'", key)
            }
            DashboardError::InvalidRequest(msg) => format!("Invalid request: {}", msg),
            DashboardError::UnknownEventSource { source_id } => {
                format!("Unknown control '{}'", source_id)
            }
            DashboardError::Logging(msg) => format!("Logging error: {}", msg),
        }
    }

    /// Get a short title for the error
    pub fn title(&self) -> &'static str {
        match self {
            DashboardError::FileIo(_) => "File Error",
            DashboardError::DataFileMissing { .. } => "Data File Missing",
            DashboardError::Polars(_) => "Data Error",
            DashboardError::Config(_) | DashboardError::ConfigParse(_) => "Configuration Error",
            DashboardError::MissingColumns { .. } => "Missing Columns",
            DashboardError::SchemaMismatch { .. } => "Schema Mismatch",
            DashboardError::ColumnNotFound { .. } => "Column Not Found",
            DashboardError::ColumnNotAllowed { .. } => "Column Not Allowed",
            DashboardError::UnknownSelection { .. } => "Unknown Selection",
            DashboardError::InvalidRequest(_) => "Invalid Request",
            DashboardError::UnknownEventSource { .. } => "Unknown Event Source",
            DashboardError::Logging(_) => "Logging Error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DashboardError::ColumnNotAllowed {
            column: "gender".to_string(),
            chart: "histogram",
        };
        assert_eq!(err.user_message(), "'gender' cannot be shown in the histogram");
        assert_eq!(err.title(), "Column Not Allowed");

        let err = DashboardError::MissingColumns {
            columns: vec!["age".to_string(), "gender".to_string()],
        };
        assert_eq!(err.to_string(), "Dataset is missing required columns: age, gender");
    }

    #[test]
    fn test_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DashboardError = io_err.into();
        assert!(matches!(err, DashboardError::FileIo(_)));
    }
}
