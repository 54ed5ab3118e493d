// src/data_analysis/smoothing.rs

use ndarray::Array1;

use crate::config::SmoothingSettings;

/// Centered moving average with a minimum-periods floor.
///
/// The window for index `i` spans `[i - w/2, i + (w-1)/2]` (for even `w`, one more
/// sample behind than ahead), clipped at the series bounds. Non-finite inputs are
/// skipped. A position whose window holds fewer than `min_periods` finite samples
/// is NaN. Output length always equals input length.
pub fn centered_moving_average(data: &Array1<f64>, settings: &SmoothingSettings) -> Array1<f64> {
    let n = data.len();
    let window = settings.window.max(1);
    let min_periods = settings.min_periods.clamp(1, window);
    let ahead = (window - 1) / 2;
    let behind = window - 1 - ahead;

    // Prefix sums of finite values and their counts.
    let mut prefix_sum = vec![0.0f64; n + 1];
    let mut prefix_count = vec![0usize; n + 1];
    for (i, &val) in data.iter().enumerate() {
        let finite = val.is_finite();
        prefix_sum[i + 1] = prefix_sum[i] + if finite { val } else { 0.0 };
        prefix_count[i + 1] = prefix_count[i] + usize::from(finite);
    }

    Array1::from_shape_fn(n, |i| {
        let start = i.saturating_sub(behind);
        let end = (i + ahead + 1).min(n);
        let count = prefix_count[end] - prefix_count[start];
        if count >= min_periods {
            (prefix_sum[end] - prefix_sum[start]) / count as f64
        } else {
            f64::NAN
        }
    })
}
