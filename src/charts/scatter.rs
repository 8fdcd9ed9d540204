use crate::charts::figure::{
    Axis, ChartDescription, ChartLayout, Legend, Marker, ScatterTrace, Title, Trace,
};
use crate::constants::{columns, plot};
use crate::data::RecordTable;
use crate::error::{DashboardError, Result};

/// The fixed set of scatter plots the dropdown offers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScatterSelection {
    AgeExperienceYears,
    AgeCreditLength,
}

impl ScatterSelection {
    pub const ALL: [ScatterSelection; 2] = [
        ScatterSelection::AgeExperienceYears,
        ScatterSelection::AgeCreditLength,
    ];

    /// Resolve a dropdown value
    pub fn from_key(key: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.key() == key)
            .ok_or_else(|| DashboardError::UnknownSelection {
                key: key.to_string(),
            })
    }

    pub fn key(self) -> &'static str {
        match self {
            ScatterSelection::AgeExperienceYears => "age_experience_years",
            ScatterSelection::AgeCreditLength => "age_credit_length",
        }
    }

    /// (x column, y column)
    pub fn columns(self) -> (&'static str, &'static str) {
        match self {
            ScatterSelection::AgeExperienceYears => ("age", "experience_years"),
            ScatterSelection::AgeCreditLength => ("age", "credit_length"),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ScatterSelection::AgeExperienceYears => "Age vs Experience Years",
            ScatterSelection::AgeCreditLength => "Age vs Credit Length",
        }
    }
}

/// Scatter of the selected column pair, one trace per gender value
///
/// Rows missing either coordinate are skipped. Groups keep the order in
/// which their value first appears in the table.
pub fn build(table: &RecordTable, key: &str) -> Result<ChartDescription> {
    let selection = ScatterSelection::from_key(key)?;
    let (x_col, y_col) = selection.columns();

    let xs = table.numeric_column(x_col)?;
    let ys = table.numeric_column(y_col)?;
    let groups = table.category_column(columns::SCATTER_COLOR)?;

    let mut traces: Vec<ScatterTrace> = Vec::new();
    for ((x, y), group) in xs.into_iter().zip(ys).zip(groups) {
        let (Some(x), Some(y)) = (x, y) else {
            continue;
        };
        let name = group.unwrap_or_else(|| plot::MISSING_GROUP.to_string());

        let idx = match traces.iter().position(|t| t.name == name) {
            Some(idx) => idx,
            None => {
                let color = plot::PALETTE[traces.len() % plot::PALETTE.len()];
                traces.push(ScatterTrace {
                    legendgroup: name.clone(),
                    name,
                    mode: "markers",
                    x: Vec::new(),
                    y: Vec::new(),
                    marker: Marker {
                        color: color.to_string(),
                        opacity: None,
                        line: None,
                    },
                });
                traces.len() - 1
            }
        };
        traces[idx].x.push(x);
        traces[idx].y.push(y);
    }

    Ok(ChartDescription {
        data: traces.into_iter().map(Trace::Scatter).collect(),
        layout: ChartLayout {
            title: Some(Title::new(selection.title())),
            xaxis: Some(Axis::titled(x_col)),
            yaxis: Some(Axis::titled(y_col)),
            legend: Some(Legend {
                title: Title::new(columns::SCATTER_COLOR),
            }),
            height: Some(plot::SCATTER_HEIGHT),
            ..Default::default()
        },
    })
}
