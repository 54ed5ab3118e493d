// src/data_analysis/sample_processing.rs

use log::info;
use ndarray::Array1;

use crate::config::AnalysisConfig;
use crate::data_analysis::friction_metrics::{extract_friction_metrics, FrictionMetrics};
use crate::data_analysis::smoothing::centered_moving_average;
use crate::data_analysis::trim::{find_trim_point, truncate_series, TrimPoint};
use crate::data_analysis::unit_conversion::{position_to_displacement, voltage_to_force};
use crate::data_analysis::zeroing::zero_displacement;
use crate::data_input::log_data::RawSample;
use crate::error::Result;
use crate::series_names::{SeriesKind, SERIES_KINDS};

/// One cleaned channel of one sample. Index is the acquisition index.
#[derive(Debug, Clone)]
pub struct NamedSeries {
    pub kind: SeriesKind,
    pub values: Array1<f64>,
}

/// A fully analysed stiction test. All series share the trimmed length.
#[derive(Debug, Clone)]
pub struct ProcessedSample {
    pub sample_id: String,
    pub trim_point: TrimPoint,
    pub series: Vec<NamedSeries>,
    pub metrics: FrictionMetrics,
}

impl ProcessedSample {
    pub fn len(&self) -> usize {
        self.series.first().map_or(0, |s| s.values.len())
    }

    pub fn get(&self, kind: SeriesKind) -> Option<&Array1<f64>> {
        self.series.iter().find(|s| s.kind == kind).map(|s| &s.values)
    }

    /// (offset displacement, smoothed force) points for plotting, NaN positions skipped.
    pub fn curve_points(&self) -> Vec<(f64, f64)> {
        let (Some(x), Some(y)) = (
            self.get(SeriesKind::DisplacementMovingAverageOffset),
            self.get(SeriesKind::LoadMovingAverage),
        ) else {
            return Vec::new();
        };
        x.iter()
            .zip(y.iter())
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .map(|(&x, &y)| (x, y))
            .collect()
    }
}

/// Runs convert -> trim -> smooth -> zero -> metrics on one raw sample.
pub fn process_sample(raw: &RawSample, config: &AnalysisConfig) -> Result<ProcessedSample> {
    let force = voltage_to_force(&raw.load_voltage, &config.calibration);
    let displacement = position_to_displacement(&raw.position_voltage, &config.calibration);

    let trim_point = find_trim_point(&force, &config.trim);
    let end_point = trim_point.end(force.len());
    match trim_point {
        TrimPoint::LoadDrop(index) => {
            info!("Sample '{}': forward stroke ends at index {}", raw.sample_id, index)
        }
        TrimPoint::NotFound => info!(
            "Sample '{}': load never drops to {} N after index {}; keeping all {} points",
            raw.sample_id,
            config.trim.load_threshold,
            config.trim.min_offset,
            force.len()
        ),
    }
    let load = truncate_series(&force, end_point);
    let displacement = truncate_series(&displacement, end_point);

    let load_ma = centered_moving_average(&load, &config.smoothing);
    let displacement_ma = centered_moving_average(&displacement, &config.smoothing);
    let displacement_offset = zero_displacement(&displacement_ma)?;

    let metrics = extract_friction_metrics(
        &raw.sample_id,
        &load_ma,
        &displacement_offset,
        &config.thresholds,
    )?;
    info!(
        "Sample '{}': peak static {:.2} N at {:.2} mm, avg dynamic {:.2} N (dynamic peak {:.2} N at {:.2} mm)",
        raw.sample_id,
        metrics.peak_static_force,
        metrics.peak_static_position,
        metrics.average_dynamic_force,
        metrics.dynamic_peak_force,
        metrics.dynamic_peak_position
    );

    let values = [load, displacement, load_ma, displacement_ma, displacement_offset];
    let series = SERIES_KINDS
        .iter()
        .zip(values)
        .map(|(&kind, values)| NamedSeries { kind, values })
        .collect();

    Ok(ProcessedSample {
        sample_id: raw.sample_id.clone(),
        trim_point,
        series,
        metrics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// 1000 rows: -0.05 V load (about 19.2 N) with a breakaway spike, dropping to
    /// zero at `drop_at`; the potentiometer travels 1 inch over 800 rows.
    fn synthetic(drop_at: usize) -> RawSample {
        let load = Array1::from_shape_fn(1000, |i| match i {
            i if i >= drop_at => 0.0,
            8..=12 => -0.12,
            _ => -0.05,
        });
        let position = Array1::from_shape_fn(1000, |i| -(i.min(800) as f64) / 800.0);
        RawSample {
            sample_id: "S1".to_string(),
            source: PathBuf::from("S1.csv"),
            load_voltage: load,
            position_voltage: position,
        }
    }

    #[test]
    fn test_process_sample_trims_and_aligns_series() {
        let config = AnalysisConfig::for_directory(".");
        let sample = process_sample(&synthetic(800), &config).unwrap();

        assert_eq!(sample.trim_point, TrimPoint::LoadDrop(800));
        assert_eq!(sample.len(), 800);
        assert!(sample.series.iter().all(|s| s.values.len() == 800));
        assert_eq!(sample.series.len(), SERIES_KINDS.len());
    }

    #[test]
    fn test_process_sample_metrics() {
        let config = AnalysisConfig::for_directory(".");
        let sample = process_sample(&synthetic(800), &config).unwrap();
        let plateau = 0.05 * 86.289 * 4.44822;

        assert!(sample.metrics.peak_static_force > plateau + 1.0);
        assert!((sample.metrics.average_dynamic_force - plateau).abs() < 0.05);
        assert!(sample.metrics.bounds.static_end < sample.metrics.bounds.middle);
        assert!(sample.metrics.bounds.middle < sample.metrics.bounds.dynamic_end);
    }

    #[test]
    fn test_offset_minimum_is_zero() {
        let config = AnalysisConfig::for_directory(".");
        let sample = process_sample(&synthetic(800), &config).unwrap();
        let offset = sample.get(SeriesKind::DisplacementMovingAverageOffset).unwrap();
        let min = offset.iter().cloned().fold(f64::INFINITY, f64::min);
        assert!(min.abs() < 1e-12);
    }

    #[test]
    fn test_untrimmed_sample_keeps_every_point() {
        let config = AnalysisConfig::for_directory(".");
        let sample = process_sample(&synthetic(usize::MAX), &config).unwrap();
        assert_eq!(sample.trim_point, TrimPoint::NotFound);
        assert_eq!(sample.len(), 1000);
    }

    #[test]
    fn test_curve_points_pairs_offset_with_smoothed_load() {
        let config = AnalysisConfig::for_directory(".");
        let sample = process_sample(&synthetic(800), &config).unwrap();
        let points = sample.curve_points();
        assert_eq!(points.len(), 800);
        assert_eq!(points[0].1, sample.get(SeriesKind::LoadMovingAverage).unwrap()[0]);
    }
}
