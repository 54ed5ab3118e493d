// src/plot_functions/plot_force_displacement.rs

use std::error::Error;
use std::path::Path;

use crate::constants::{
    COLOR_SAMPLE_CURVE, DYNAMIC_LABEL_AXES_POS, LINE_WIDTH_PLOT, STATIC_LABEL_AXES_POS,
};
use crate::data_analysis::sample_processing::ProcessedSample;
use crate::plot_framework::{data_ranges, draw_chart, Annotation, Connector, PlotConfig, PlotSeries};

pub const X_LABEL: &str = "Displacement (mm)";
pub const Y_LABEL: &str = "Force (N)";

/// Static peak and dynamic average callouts for one sample.
///
/// The dynamic average points at the middle-threshold displacement, which is a
/// label anchor and not where the mean force occurs.
pub fn friction_annotations(sample: &ProcessedSample) -> Vec<Annotation> {
    let metrics = &sample.metrics;
    vec![
        Annotation {
            text: format!("static peak: {} N", metrics.peak_static_force),
            target: (metrics.peak_static_position, metrics.peak_static_force),
            text_axes_pos: STATIC_LABEL_AXES_POS,
            connector: Connector::Arrow,
        },
        Annotation {
            text: format!("avg dynamic: {} N", metrics.average_dynamic_force),
            target: (metrics.annotation_anchor, metrics.average_dynamic_force),
            text_axes_pos: DYNAMIC_LABEL_AXES_POS,
            connector: Connector::Line,
        },
    ]
}

/// Generates the annotated force vs displacement plot for one sample.
pub fn plot_force_displacement(sample: &ProcessedSample, output_file: &Path) -> Result<(), Box<dyn Error>> {
    let series = vec![PlotSeries {
        data: sample.curve_points(),
        label: sample.sample_id.clone(),
        color: *COLOR_SAMPLE_CURVE,
        stroke_width: LINE_WIDTH_PLOT,
    }];
    let (x_range, y_range) = data_ranges(&series)
        .ok_or_else(|| format!("Sample '{}' has no finite points to plot", sample.sample_id))?;

    let plot_config = PlotConfig {
        title: format!("Fork Stiction: {}", sample.sample_id),
        x_range,
        y_range,
        series,
        x_label: X_LABEL.to_string(),
        y_label: Y_LABEL.to_string(),
        annotations: friction_annotations(sample),
    };
    draw_chart(output_file, &sample.sample_id, &plot_config)
}


// src/plot_functions/plot_force_displacement.rs
