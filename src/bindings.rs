//! Event source to chart wiring
//!
//! Each binding maps one dropdown id to a builder and the chart placeholder
//! that receives its output. Bindings share nothing but the read-only table,
//! so a dropdown event only re-renders the charts registered for it.

use serde::Serialize;

use crate::charts::{ChartDescription, correlation, histogram, pie, scatter};
use crate::constants::ids;
use crate::data::RecordTable;
use crate::error::{DashboardError, Result};
use crate::layout::PageLayout;
use crate::timed;

/// Builds a chart from the table and the dropdown's current value
pub type Handler = fn(&RecordTable, &str) -> Result<ChartDescription>;

#[derive(Debug, Clone, Copy)]
pub struct Binding {
    pub source: &'static str,
    pub output: &'static str,
    pub handler: Handler,
}

/// A re-rendered chart addressed to its placeholder
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartUpdate {
    pub output: &'static str,
    pub figure: ChartDescription,
}

#[derive(Debug, Clone, Default)]
pub struct BindingTable {
    bindings: Vec<Binding>,
}

impl BindingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The four dashboard bindings
    ///
    /// The correlation matrix takes no input; it listens to the histogram
    /// dropdown only so it renders alongside it.
    pub fn loan_dashboard() -> Self {
        let mut bindings = Self::new();
        bindings.register(ids::HIST_DROPDOWN, ids::HISTOGRAM, histogram::build);
        bindings.register(ids::SCATTER_DROPDOWN, ids::SCATTER_PLOT, scatter::build);
        bindings.register(ids::PIE_DROPDOWN, ids::PIE_CHART, pie::build);
        bindings.register(ids::HIST_DROPDOWN, ids::CORRELATION_MATRIX, |table, _| {
            correlation::build(table)
        });
        bindings
    }

    pub fn register(&mut self, source: &'static str, output: &'static str, handler: Handler) {
        self.bindings.push(Binding {
            source,
            output,
            handler,
        });
    }

    /// Run every binding registered for `source`, in registration order
    pub fn dispatch(
        &self,
        table: &RecordTable,
        source: &str,
        value: &str,
    ) -> Result<Vec<ChartUpdate>> {
        let matching: Vec<&Binding> = self.bindings.iter().filter(|b| b.source == source).collect();
        if matching.is_empty() {
            return Err(DashboardError::UnknownEventSource {
                source_id: source.to_string(),
            });
        }

        matching
            .into_iter()
            .map(|binding| {
                let figure = timed!(binding.output, (binding.handler)(table, value))?;
                Ok(ChartUpdate {
                    output: binding.output,
                    figure,
                })
            })
            .collect()
    }

    /// Render every chart once from the dropdown defaults
    pub fn initial_render(&self, table: &RecordTable, layout: &PageLayout) -> Result<Vec<ChartUpdate>> {
        let mut updates = Vec::new();
        for dropdown in layout.dropdowns() {
            updates.extend(self.dispatch(table, dropdown.id, &dropdown.default)?);
        }
        Ok(updates)
    }
}
