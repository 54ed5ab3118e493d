// src/data_analysis/trim.rs

use ndarray::{s, Array1};

use crate::config::TrimSettings;

/// Where the forward stroke ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrimPoint {
    /// Load first dropped to the threshold at this index; keep `[0, index)`.
    LoadDrop(usize),
    /// Load never dropped after the minimum offset; keep the full series.
    NotFound,
}

impl TrimPoint {
    /// Number of samples kept for a series of `len` samples.
    pub fn end(self, len: usize) -> usize {
        match self {
            TrimPoint::LoadDrop(index) => index.min(len),
            TrimPoint::NotFound => len,
        }
    }
}

/// Finds the first index past `min_offset` where force is at or below the threshold.
pub fn find_trim_point(force: &Array1<f64>, settings: &TrimSettings) -> TrimPoint {
    force
        .iter()
        .enumerate()
        .skip(settings.min_offset + 1)
        .find(|&(_, &f)| f <= settings.load_threshold)
        .map_or(TrimPoint::NotFound, |(i, _)| TrimPoint::LoadDrop(i))
}

/// Keeps the prefix `[0, end)` of a series. Never reorders or drops interior points.
pub fn truncate_series(series: &Array1<f64>, end: usize) -> Array1<f64> {
    let end = end.min(series.len());
    series.slice(s![..end]).to_owned()
}
