/// Centralized naming for the per-sample output channels.
///
/// Provides consistent column labels for the compiled export and plot legends.

/// The five cleaned channels kept for every sample, in export order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Load,
    Displacement,
    LoadMovingAverage,
    DisplacementMovingAverage,
    DisplacementMovingAverageOffset,
}

/// Number of channels exported per sample
pub const SERIES_COUNT: usize = 5;

pub const SERIES_KINDS: [SeriesKind; SERIES_COUNT] = [
    SeriesKind::Load,
    SeriesKind::Displacement,
    SeriesKind::LoadMovingAverage,
    SeriesKind::DisplacementMovingAverage,
    SeriesKind::DisplacementMovingAverageOffset,
];

impl SeriesKind {
    /// Column label prefix, matching the historical compiled.csv headers.
    pub fn label(self) -> &'static str {
        match self {
            SeriesKind::Load => "Load (N)",
            SeriesKind::Displacement => "Displacement(mm)",
            SeriesKind::LoadMovingAverage => "Load MA",
            SeriesKind::DisplacementMovingAverage => "Displacement MA",
            SeriesKind::DisplacementMovingAverageOffset => "Displacement MA Offset",
        }
    }

    /// Column name disambiguated by sample ID, e.g. `"Load MA S3"`.
    pub fn column_name(self, sample_id: &str) -> String {
        format!("{} {}", self.label(), sample_id)
    }
}
