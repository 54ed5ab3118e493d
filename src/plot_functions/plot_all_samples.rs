// src/plot_functions/plot_all_samples.rs

use std::error::Error;
use std::path::Path;

use crate::constants::{LINE_WIDTH_PLOT, SAMPLE_COLOR_CYCLE};
use crate::data_analysis::sample_processing::ProcessedSample;
use crate::plot_framework::{data_ranges, draw_chart, PlotConfig, PlotSeries};
use crate::plot_functions::plot_force_displacement::{X_LABEL, Y_LABEL};

/// Generates one overlay plot with every sample's force vs displacement curve.
pub fn plot_all_samples(samples: &[ProcessedSample], output_file: &Path) -> Result<(), Box<dyn Error>> {
    let series: Vec<PlotSeries> = samples
        .iter()
        .enumerate()
        .map(|(i, sample)| PlotSeries {
            data: sample.curve_points(),
            label: sample.sample_id.clone(),
            color: SAMPLE_COLOR_CYCLE[i % SAMPLE_COLOR_CYCLE.len()],
            stroke_width: LINE_WIDTH_PLOT,
        })
        .collect();
    let (x_range, y_range) = data_ranges(&series).ok_or("No finite points to plot")?;

    let plot_config = PlotConfig {
        title: format!("Fork Stiction: {} samples", samples.len()),
        x_range,
        y_range,
        series,
        x_label: X_LABEL.to_string(),
        y_label: Y_LABEL.to_string(),
        annotations: Vec::new(),
    };
    draw_chart(output_file, "All Samples", &plot_config)
}

// src/plot_functions/plot_all_samples.rs
