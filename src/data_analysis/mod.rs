// src/data_analysis/mod.rs

pub mod friction_metrics;
pub mod sample_processing;
pub mod smoothing;
pub mod trim;
pub mod unit_conversion;
pub mod zeroing;

// src/data_analysis/mod.rs
