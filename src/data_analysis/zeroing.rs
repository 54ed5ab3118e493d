// src/data_analysis/zeroing.rs

use ndarray::Array1;
use ndarray_stats::QuantileExt;

use crate::error::Result;

/// Shifts a smoothed displacement series so its minimum is exactly zero.
///
/// Start positions vary between runs; this lines every sample up on a common origin.
/// Fails on an empty series or one containing NaN.
pub fn zero_displacement(smoothed_displacement: &Array1<f64>) -> Result<Array1<f64>> {
    let min_displacement = *smoothed_displacement.min()?;
    Ok(smoothed_displacement.mapv(|d| d - min_displacement))
}
