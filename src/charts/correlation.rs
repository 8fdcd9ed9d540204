use crate::charts::figure::{
    Axis, ChartDescription, ChartLayout, ColorBar, HeatmapTrace, Title, Trace,
};
use crate::constants::plot;
use crate::data::RecordTable;
use crate::data::stats::correlation_matrix;
use crate::error::Result;

/// Heatmap of pairwise Pearson coefficients over every numeric column
pub fn build(table: &RecordTable) -> Result<ChartDescription> {
    let names = table.numeric_column_names();
    let columns = names
        .iter()
        .map(|name| table.numeric_values(name))
        .collect::<Result<Vec<_>>>()?;

    let z = correlation_matrix(&columns);
    let text: Vec<Vec<String>> = z
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.map(|r| format!("{:.2}", r)).unwrap_or_default())
                .collect::<Vec<_>>()
        })
        .collect();

    let trace = HeatmapTrace {
        z,
        x: names.clone(),
        y: names,
        text,
        texttemplate: "%{text}",
        colorscale: plot::CORRELATION_COLORSCALE,
        zmid: 0.0,
        showscale: true,
        colorbar: ColorBar {
            title: Title::new("Correlation"),
        },
    };

    Ok(ChartDescription {
        data: vec![Trace::Heatmap(trace)],
        layout: ChartLayout {
            xaxis: Some(Axis::titled("Features")),
            yaxis: Some(Axis::titled("Features")),
            autosize: Some(true),
            height: Some(plot::CORRELATION_HEIGHT),
            ..Default::default()
        },
    })
}
