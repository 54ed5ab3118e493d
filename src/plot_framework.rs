// src/plot_framework.rs

use plotters::backend::BitMapBackend;
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{PathElement, Text};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, WHITE};
use plotters::style::{Color, IntoFont, RGBColor};

use std::error::Error;
use std::ops::Range;
use std::path::Path;

use log::info;

use crate::constants::{
    ARROW_HEAD_HALF_ANGLE_RAD, ARROW_HEAD_LENGTH_PX, COLOR_ANNOTATION, LINE_WIDTH_ANNOTATION,
    LINE_WIDTH_LEGEND, PLOT_HEIGHT, PLOT_WIDTH,
};
use crate::font_config::{
    FONT_TUPLE_ANNOTATION, FONT_TUPLE_AXIS_LABEL, FONT_TUPLE_CHART_TITLE, FONT_TUPLE_LEGEND,
    FONT_TUPLE_MAIN_TITLE,
};

/// Calculate plot range with padding.
/// Adds 5% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.05 };
    (min - padding, max + padding)
}

/// Padded x and y ranges covering every point of every series.
pub fn data_ranges(series: &[PlotSeries]) -> Option<(Range<f64>, Range<f64>)> {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for &(x, y) in series.iter().flat_map(|s| s.data.iter()) {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    if !x_min.is_finite() || !y_min.is_finite() {
        return None;
    }
    let (x0, x1) = calculate_range(x_min, x_max);
    let (y0, y1) = calculate_range(y_min, y_max);
    Some((x0..x1, y0..y1))
}

#[derive(Clone)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
}

/// How an annotation label connects to its target point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    /// Line with an arrow head at the target.
    Arrow,
    /// Plain line.
    Line,
}

/// A text label placed in axes fractions, pointing at a data coordinate.
#[derive(Debug, Clone)]
pub struct Annotation {
    pub text: String,
    pub target: (f64, f64),
    pub text_axes_pos: (f64, f64),
    pub connector: Connector,
}

#[derive(Clone)]
pub struct PlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub x_label: String,
    pub y_label: String,
    pub annotations: Vec<Annotation>,
}

/// Maps an axes fraction (0,0 bottom left; 1,1 top right) to data coordinates.
pub fn axes_fraction_to_data(
    x_range: &Range<f64>,
    y_range: &Range<f64>,
    fraction: (f64, f64),
) -> (f64, f64) {
    (
        x_range.start + fraction.0 * (x_range.end - x_range.start),
        y_range.start + fraction.1 * (y_range.end - y_range.start),
    )
}

/// The two barb endpoints of an arrow head drawn at `tip`, pointing away from `tail`.
pub fn arrow_head(tail: (i32, i32), tip: (i32, i32)) -> [(i32, i32); 2] {
    let dx = (tip.0 - tail.0) as f64;
    let dy = (tip.1 - tail.1) as f64;
    let length = dx.hypot(dy);
    if length < 1e-9 {
        return [tip, tip];
    }
    let back_angle = dy.atan2(dx) + std::f64::consts::PI;
    let barb = |angle: f64| {
        (
            tip.0 + (ARROW_HEAD_LENGTH_PX * angle.cos()).round() as i32,
            tip.1 + (ARROW_HEAD_LENGTH_PX * angle.sin()).round() as i32,
        )
    };
    [
        barb(back_angle + ARROW_HEAD_HALF_ANGLE_RAD),
        barb(back_angle - ARROW_HEAD_HALF_ANGLE_RAD),
    ]
}

/// Draws a single line chart with legend and annotations onto `area`.
fn draw_single_chart_with_config(
    area: &DrawingArea<BitMapBackend, Shift>,
    plot_config: &PlotConfig,
) -> Result<(), Box<dyn Error>> {
    let mut chart = ChartBuilder::on(area)
        .caption(&plot_config.title, FONT_TUPLE_CHART_TITLE)
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(plot_config.x_range.clone(), plot_config.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(&plot_config.x_label)
        .y_desc(&plot_config.y_label)
        .x_labels(10)
        .y_labels(10)
        .light_line_style(WHITE.mix(0.7))
        .label_style(FONT_TUPLE_AXIS_LABEL)
        .draw()?;

    let mut legend_series_count = 0;
    for s in &plot_config.series {
        if s.data.is_empty() {
            continue;
        }
        let series = chart.draw_series(LineSeries::new(
            s.data.iter().cloned(),
            s.color.stroke_width(s.stroke_width),
        ))?;
        if !s.label.is_empty() {
            series.label(&s.label).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], s.color.stroke_width(LINE_WIDTH_LEGEND))
            });
            legend_series_count += 1;
        }
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::LowerRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(FONT_TUPLE_LEGEND)
            .draw()?;
    }

    // Annotations are drawn in pixel space so arrow heads keep their shape.
    let area_offset = area.get_base_pixel();
    let to_area_px = |point: (f64, f64)| {
        let (px, py) = chart.backend_coord(&point);
        (px - area_offset.0, py - area_offset.1)
    };
    let connector_style = COLOR_ANNOTATION.stroke_width(LINE_WIDTH_ANNOTATION);
    for annotation in &plot_config.annotations {
        let text_data = axes_fraction_to_data(
            &plot_config.x_range,
            &plot_config.y_range,
            annotation.text_axes_pos,
        );
        let text_px = to_area_px(text_data);
        let target_px = to_area_px(annotation.target);

        area.draw(&PathElement::new(vec![text_px, target_px], connector_style))?;
        if annotation.connector == Connector::Arrow {
            for barb in arrow_head(text_px, target_px) {
                area.draw(&PathElement::new(vec![target_px, barb], connector_style))?;
            }
        }
        area.draw(&Text::new(
            annotation.text.as_str(),
            text_px,
            FONT_TUPLE_ANNOTATION.into_font().color(&BLACK),
        ))?;
    }

    Ok(())
}

/// Renders one chart to a PNG file, headed by `root_name`.
pub fn draw_chart(
    output_file: &Path,
    root_name: &str,
    plot_config: &PlotConfig,
) -> Result<(), Box<dyn Error>> {
    let root_area = BitMapBackend::new(output_file, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;
    root_area.draw(&Text::new(
        root_name,
        (10, 10),
        FONT_TUPLE_MAIN_TITLE.into_font().color(&BLACK),
    ))?;
    let margined_root_area = root_area.margin(40, 5, 5, 5);

    let valid_ranges = plot_config.x_range.end > plot_config.x_range.start
        && plot_config.y_range.end > plot_config.y_range.start;
    if !valid_ranges {
        return Err(format!("Invalid plot ranges for '{}'", output_file.display()).into());
    }
    draw_single_chart_with_config(&margined_root_area, plot_config)?;

    root_area.present()?;
    info!("  Plot saved as '{}'.", output_file.display());
    Ok(())
}


// src/plot_framework.rs
