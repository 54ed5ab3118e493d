// src/output/aggregate.rs

use log::{info, warn};
use ndarray::{s, Array1};
use serde::{Deserialize, Serialize};

use crate::data_analysis::sample_processing::ProcessedSample;
use crate::error::{Result, StictionError};

/// Rectangular table of every sample's cleaned series, one column per (channel, sample).
#[derive(Debug, Clone)]
pub struct AggregateTable {
    pub columns: Vec<(String, Array1<f64>)>,
    pub row_count: usize,
}

impl AggregateTable {
    /// Merges the samples column by column, truncated to the shortest column.
    pub fn from_samples(samples: &[ProcessedSample]) -> Result<Self> {
        let row_count = samples
            .iter()
            .flat_map(|sample| sample.series.iter().map(|s| s.values.len()))
            .min()
            .ok_or(StictionError::NoValidSamples)?;

        let mut columns = Vec::with_capacity(samples.len() * 5);
        for sample in samples {
            if sample.series.iter().any(|s| s.values.len() != sample.len()) {
                warn!("Sample '{}' has series of unequal length", sample.sample_id);
            }
            for named in &sample.series {
                columns.push((
                    named.kind.column_name(&sample.sample_id),
                    named.values.slice(s![..row_count]).to_owned(),
                ));
            }
        }

        info!(
            "Aggregated {} columns from {} samples, truncated to {} rows",
            columns.len(),
            samples.len(),
            row_count
        );
        Ok(Self { columns, row_count })
    }
}

/// One row of the friction summary export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForceSummaryRow {
    #[serde(rename = "Sample ID")]
    pub sample_id: String,
    #[serde(rename = "Peak Static Friction (N)")]
    pub peak_static_friction: f64,
    #[serde(rename = "Avg Dynamic Friction (N)")]
    pub avg_dynamic_friction: f64,
}

impl From<&ProcessedSample> for ForceSummaryRow {
    fn from(sample: &ProcessedSample) -> Self {
        Self {
            sample_id: sample.sample_id.clone(),
            peak_static_friction: sample.metrics.peak_static_force,
            avg_dynamic_friction: sample.metrics.average_dynamic_force,
        }
    }
}

pub fn summary_rows(samples: &[ProcessedSample]) -> Vec<ForceSummaryRow> {
    samples.iter().map(ForceSummaryRow::from).collect()
}
