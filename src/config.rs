// src/config.rs

use std::path::{Path, PathBuf};

use crate::constants::*;

/// Voltage and position calibration for one rig.
#[derive(Debug, Clone, PartialEq)]
pub struct Calibration {
    pub voltage_load_scale: f64, // lbf/V
    pub lbf_to_newtons: f64,
    pub inches_to_mm: f64,
    pub force_sign: f64,
    pub displacement_sign: f64,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            voltage_load_scale: VOLTAGE_LOAD_SCALE,
            lbf_to_newtons: LBF_TO_NEWTONS,
            inches_to_mm: INCHES_TO_MM,
            force_sign: FORCE_SIGN,
            displacement_sign: DISPLACEMENT_SIGN,
        }
    }
}

impl Calibration {
    /// Newtons per raw load cell volt, sign included.
    pub fn newtons_per_volt(&self) -> f64 {
        self.voltage_load_scale * self.lbf_to_newtons * self.force_sign
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrimSettings {
    pub min_offset: usize,
    pub load_threshold: f64,
}

impl Default for TrimSettings {
    fn default() -> Self {
        Self {
            min_offset: MIN_TRIM_OFFSET,
            load_threshold: TRIM_LOAD_THRESHOLD_N,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SmoothingSettings {
    pub window: usize,
    pub min_periods: usize,
}

impl Default for SmoothingSettings {
    fn default() -> Self {
        Self {
            window: MOVING_AVERAGE_WINDOW,
            min_periods: MOVING_AVERAGE_MIN_PERIODS,
        }
    }
}

/// Offset displacement thresholds (mm) splitting a stroke into friction phases.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseThresholds {
    pub static_end: f64,
    pub dynamic_end: f64,
    pub middle_anchor: f64,
}

impl Default for PhaseThresholds {
    fn default() -> Self {
        Self {
            static_end: STATIC_PHASE_END_MM,
            dynamic_end: DYNAMIC_PHASE_END_MM,
            middle_anchor: MIDDLE_ANCHOR_MM,
        }
    }
}

/// Everything one analysis run needs. Built once at startup and passed down explicitly.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub data_dir: PathBuf,
    pub input_extension: String,
    pub preamble_lines: usize,
    pub load_channel: String,
    pub displacement_channel: String,
    pub sample_id_marker: String,
    pub calibration: Calibration,
    pub trim: TrimSettings,
    pub smoothing: SmoothingSettings,
    pub thresholds: PhaseThresholds,
    pub compiled_output: PathBuf,
    pub forces_output: PathBuf,
    pub render_plots: bool,
}

impl AnalysisConfig {
    /// Default rig configuration reading from, and writing into, `data_dir`.
    pub fn for_directory(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref().to_path_buf();
        Self {
            compiled_output: data_dir.join(COMPILED_OUTPUT_FILE),
            forces_output: data_dir.join(FORCES_OUTPUT_FILE),
            data_dir,
            input_extension: INPUT_EXTENSION.to_string(),
            preamble_lines: PREAMBLE_LINES,
            load_channel: LOAD_CHANNEL.to_string(),
            displacement_channel: DISPLACEMENT_CHANNEL.to_string(),
            sample_id_marker: SAMPLE_ID_MARKER.to_string(),
            calibration: Calibration::default(),
            trim: TrimSettings::default(),
            smoothing: SmoothingSettings::default(),
            thresholds: PhaseThresholds::default(),
            render_plots: true,
        }
    }

    /// Where the per-sample figure for `sample_id` is saved.
    pub fn sample_plot_path(&self, sample_id: &str) -> PathBuf {
        self.data_dir.join(format!("{sample_id}.png"))
    }

    pub fn combined_plot_path(&self) -> PathBuf {
        self.data_dir.join(COMBINED_PLOT_FILE)
    }

    /// Smallest raw row count a sample may have.
    pub fn min_sample_rows(&self) -> usize {
        self.trim.min_offset + 1
    }
}
