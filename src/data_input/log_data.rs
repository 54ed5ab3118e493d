// src/data_input/log_data.rs

use std::path::PathBuf;

use ndarray::Array1;

/// Raw channels of one stiction test, in acquisition order.
#[derive(Debug, Clone)]
pub struct RawSample {
    pub sample_id: String,
    pub source: PathBuf,
    pub load_voltage: Array1<f64>,     // Load cell output (V).
    pub position_voltage: Array1<f64>, // String potentiometer output, read as inches.
}

impl RawSample {
    pub fn len(&self) -> usize {
        self.load_voltage.len()
    }
}

// src/data_input/log_data.rs
