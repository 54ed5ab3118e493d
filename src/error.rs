// src/error.rs

use std::path::PathBuf;

use ndarray_stats::errors::MinMaxError;

/// Errors raised while discovering, loading, analysing or exporting stiction samples.
#[derive(Debug, thiserror::Error)]
pub enum StictionError {
    /// I/O error reading or writing a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing or writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Min/max lookup on an empty or unordered series
    #[error("Statistics error: {0}")]
    Stats(#[from] MinMaxError),

    #[error("Data directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("No '*.{extension}' sample files found in {}", .dir.display())]
    NoSampleFiles { dir: PathBuf, extension: String },

    #[error("{}: missing expected column '{column}'", .file.display())]
    MissingColumn { file: PathBuf, column: String },

    #[error("{}: invalid value '{value}' in column '{column}' at data row {row}", .file.display())]
    MalformedValue {
        file: PathBuf,
        row: usize,
        column: String,
        value: String,
    },

    #[error("{}: {rows} data rows, need more than {required}", .file.display())]
    InsufficientData {
        file: PathBuf,
        rows: usize,
        required: usize,
    },

    /// A friction phase window ended up with no points
    #[error("Sample '{sample}': {phase} phase is empty")]
    EmptyPhase { sample: String, phase: &'static str },

    #[error("Every sample file was rejected; nothing to aggregate")]
    NoValidSamples,

    #[error("Plot rendering failed: {0}")]
    Plot(String),
}

pub type Result<T> = std::result::Result<T, StictionError>;
