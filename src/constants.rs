//! Application-wide constants and default values
//!
//! Column names, chart styling, element ids and defaults live here so the
//! builders, the layout and the bindings agree on them.

/// Record table column names
pub mod columns {
    /// Numeric columns every loaded table must carry
    pub const NUMERIC: [&str; 5] = [
        "age",
        "experience_years",
        "loan_amount",
        "loan_interest_rate",
        "credit_length",
    ];

    /// Categorical columns every loaded table must carry
    pub const CATEGORICAL: [&str; 4] = ["gender", "education_level", "previous_loan", "home_status"];

    /// Columns selectable in the histogram dropdown
    pub const HISTOGRAM: [&str; 4] = ["age", "experience_years", "loan_amount", "loan_interest_rate"];

    /// Columns selectable in the pie chart dropdown
    pub const PIE: [&str; 4] = CATEGORICAL;

    /// Column used to color scatter points
    pub const SCATTER_COLOR: &str = "gender";
}

/// Chart styling defaults
pub mod plot {
    /// Fixed histogram bin count
    pub const HISTOGRAM_BINS: usize = 30;

    pub const HISTOGRAM_HEIGHT: u32 = 400;
    pub const HISTOGRAM_BARGAP: f64 = 0.2;
    pub const HISTOGRAM_COLOR: &str = "teal";
    pub const HISTOGRAM_OPACITY: f64 = 0.7;

    /// Pie rendered as a ring with this hole fraction
    pub const PIE_HOLE: f64 = 0.4;

    pub const SCATTER_HEIGHT: u32 = 400;

    pub const CORRELATION_HEIGHT: u32 = 455;
    pub const CORRELATION_COLORSCALE: &str = "RdBu";

    /// Plotly's default qualitative palette, used for scatter color groups
    pub const PALETTE: [&str; 10] = [
        "#636efa", "#EF553B", "#00cc96", "#ab63fa", "#FFA15A", "#19d3f3", "#FF6692", "#B6E880",
        "#FF97FF", "#FECB52",
    ];

    /// Label for rows whose color column is missing
    pub const MISSING_GROUP: &str = "unknown";
}

/// Element ids shared by the page layout and the bindings
pub mod ids {
    pub const HIST_DROPDOWN: &str = "hist-dropdown";
    pub const SCATTER_DROPDOWN: &str = "scatter-dropdown";
    pub const PIE_DROPDOWN: &str = "pie-dropdown";

    pub const HISTOGRAM: &str = "histogram";
    pub const SCATTER_PLOT: &str = "scatter-plot";
    pub const PIE_CHART: &str = "pie-chart";
    pub const CORRELATION_MATRIX: &str = "correlation-matrix";
}

/// Server defaults
pub mod server {
    pub const DEFAULT_HOST: &str = "127.0.0.1";
    pub const DEFAULT_PORT: u16 = 8050;
}

/// Numeric precision constants
pub mod numeric {
    /// Relative widening of histogram bins so the maximum stays inside the last one
    pub const BIN_WIDTH_PAD: f64 = 1e-9;
}

/// Configuration file paths
pub mod config {
    /// Configuration file name, looked up in the working directory
    pub const CONFIG_FILE: &str = "loan-dashboard.toml";

    /// Data file used when no configuration file is present
    pub const DEFAULT_DATA_FILE: &str = "cleaned_df.csv";
}
