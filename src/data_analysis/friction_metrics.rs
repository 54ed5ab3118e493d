// src/data_analysis/friction_metrics.rs

use log::warn;
use ndarray::{s, Array1};
use ndarray_stats::QuantileExt;

use crate::config::PhaseThresholds;
use crate::constants::METRIC_DECIMALS;
use crate::error::{Result, StictionError};

/// Index boundaries of the friction phases on the offset displacement series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseBounds {
    /// First index past the static phase; the static phase is `[0, static_end)`.
    pub static_end: usize,
    /// End of the dynamic phase (exclusive); the phase starts at `static_end`.
    pub dynamic_end: usize,
    /// Annotation anchor for the dynamic average label.
    pub middle: usize,
}

/// Summary forces of one stiction test.
#[derive(Debug, Clone, PartialEq)]
pub struct FrictionMetrics {
    pub peak_static_force: f64,    // N, rounded
    pub peak_static_position: f64, // mm
    pub dynamic_peak_force: f64,   // N, rounded
    pub dynamic_peak_position: f64,
    pub average_dynamic_force: f64, // N, rounded
    /// Displacement of the middle threshold crossing. The dynamic average is labelled
    /// here, not at any position where the mean force actually occurs.
    pub annotation_anchor: f64,
    pub bounds: PhaseBounds,
}

/// First index whose value strictly exceeds `threshold`.
pub fn first_index_exceeding(series: &Array1<f64>, threshold: f64) -> Option<usize> {
    series.iter().position(|&v| v > threshold)
}

/// Rounds to `decimals` places, ties to even (0.125 -> 0.12, 0.375 -> 0.38).
pub fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

/// Locates the phase boundaries. A threshold that is never crossed falls back to
/// the end of the series (the last index for the middle anchor).
pub fn find_phase_bounds(
    sample_id: &str,
    offset_displacement: &Array1<f64>,
    thresholds: &PhaseThresholds,
) -> PhaseBounds {
    let len = offset_displacement.len();
    let boundary = |threshold: f64, phase: &str| {
        first_index_exceeding(offset_displacement, threshold).unwrap_or_else(|| {
            warn!(
                "Sample '{}': displacement never exceeds {} mm ({} phase); using end of series",
                sample_id, threshold, phase
            );
            len
        })
    };
    let static_end = boundary(thresholds.static_end, "static");
    let dynamic_end = boundary(thresholds.dynamic_end, "dynamic").max(static_end);
    let middle = first_index_exceeding(offset_displacement, thresholds.middle_anchor)
        .unwrap_or(len.saturating_sub(1));

    PhaseBounds { static_end, dynamic_end, middle }
}

/// Peak static force, dynamic peak and average dynamic force from the smoothed
/// force and zeroed displacement series (equal lengths).
pub fn extract_friction_metrics(
    sample_id: &str,
    load_ma: &Array1<f64>,
    offset_displacement: &Array1<f64>,
    thresholds: &PhaseThresholds,
) -> Result<FrictionMetrics> {
    let len = load_ma.len().min(offset_displacement.len());
    let bounds = find_phase_bounds(sample_id, offset_displacement, thresholds);
    let empty = |phase: &'static str| StictionError::EmptyPhase {
        sample: sample_id.to_string(),
        phase,
    };

    // Static phase: [0, static_end)
    let static_stop = bounds.static_end.min(len);
    if static_stop == 0 {
        return Err(empty("static"));
    }
    let load_static = load_ma.slice(s![..static_stop]);
    let max1_pos = load_static.argmax()?;
    let peak_static_force = round_to_decimals(load_static[max1_pos], METRIC_DECIMALS);
    let peak_static_position = offset_displacement[max1_pos];

    // Dynamic phase: [static_end, dynamic_end)
    let dynamic_start = bounds.static_end.min(len);
    let dynamic_stop = bounds.dynamic_end.min(len);
    if dynamic_stop <= dynamic_start {
        return Err(empty("dynamic"));
    }
    let load_dynamic = load_ma.slice(s![dynamic_start..dynamic_stop]);
    let max2_pos = dynamic_start + load_dynamic.argmax()?;
    let dynamic_peak_force = round_to_decimals(load_ma[max2_pos], METRIC_DECIMALS);
    let dynamic_peak_position = offset_displacement[max2_pos];
    let average_dynamic_force = load_dynamic
        .mean()
        .map(|mean| round_to_decimals(mean, METRIC_DECIMALS))
        .ok_or_else(|| empty("dynamic"))?;

    let annotation_anchor = offset_displacement[bounds.middle.min(len - 1)];

    Ok(FrictionMetrics {
        peak_static_force,
        peak_static_position,
        dynamic_peak_force,
        dynamic_peak_position,
        average_dynamic_force,
        annotation_anchor,
        bounds,
    })
}
