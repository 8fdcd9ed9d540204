//! Static page structure
//!
//! Title plus two rows of two panels. Each panel holds at most one dropdown
//! and exactly one chart placeholder. The server renders this to HTML and
//! also serves it as JSON.

use serde::Serialize;

use crate::charts::scatter::ScatterSelection;
use crate::constants::{columns, ids};

#[derive(Debug, Clone, Serialize)]
pub struct PageLayout {
    pub title: String,
    pub rows: Vec<PanelRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PanelRow {
    pub panels: Vec<Panel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Panel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropdown: Option<Dropdown>,
    pub graph_id: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dropdown {
    pub id: &'static str,
    pub label: String,
    pub options: Vec<DropdownOption>,
    pub default: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

impl DropdownOption {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

impl PageLayout {
    /// The loan data dashboard page
    pub fn loan_dashboard() -> Self {
        let histogram = Panel {
            heading: None,
            dropdown: Some(Dropdown {
                id: ids::HIST_DROPDOWN,
                label: "Select Feature for Histogram:".to_string(),
                options: columns::HISTOGRAM
                    .iter()
                    .map(|c| DropdownOption::new(*c, *c))
                    .collect(),
                default: columns::HISTOGRAM[0].to_string(),
            }),
            graph_id: ids::HISTOGRAM,
        };

        let scatter = Panel {
            heading: None,
            dropdown: Some(Dropdown {
                id: ids::SCATTER_DROPDOWN,
                label: "Select Scatter Plot:".to_string(),
                options: ScatterSelection::ALL
                    .iter()
                    .map(|s| DropdownOption::new(s.title(), s.key()))
                    .collect(),
                default: ScatterSelection::AgeExperienceYears.key().to_string(),
            }),
            graph_id: ids::SCATTER_PLOT,
        };

        let pie = Panel {
            heading: None,
            dropdown: Some(Dropdown {
                id: ids::PIE_DROPDOWN,
                label: "Select Feature for Pie Chart:".to_string(),
                options: vec![
                    DropdownOption::new("Gender", "gender"),
                    DropdownOption::new("Education Level", "education_level"),
                    DropdownOption::new("Previous Loan", "previous_loan"),
                    DropdownOption::new("Home Status", "home_status"),
                ],
                default: "gender".to_string(),
            }),
            graph_id: ids::PIE_CHART,
        };

        let correlation = Panel {
            heading: Some("Correlation Matrix:".to_string()),
            dropdown: None,
            graph_id: ids::CORRELATION_MATRIX,
        };

        Self {
            title: "Loan Data Dashboard".to_string(),
            rows: vec![
                PanelRow {
                    panels: vec![histogram, scatter],
                },
                PanelRow {
                    panels: vec![pie, correlation],
                },
            ],
        }
    }

    /// Every dropdown on the page, top-left to bottom-right
    pub fn dropdowns(&self) -> impl Iterator<Item = &Dropdown> {
        self.rows
            .iter()
            .flat_map(|row| row.panels.iter())
            .filter_map(|panel| panel.dropdown.as_ref())
    }

    /// Every chart placeholder id on the page
    pub fn graph_ids(&self) -> Vec<&'static str> {
        self.rows
            .iter()
            .flat_map(|row| row.panels.iter())
            .map(|panel| panel.graph_id)
            .collect()
    }
}
