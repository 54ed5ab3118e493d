// src/constants.rs

use plotters::style::colors::full_palette::{
    BLUE, BROWN, CYAN, GREEN, GREY_700, ORANGE, PINK, PURPLE, RED, TEAL,
};
use plotters::style::RGBColor;

// --- Input layout ---
pub const PREAMBLE_LINES: usize = 7; // DAQ metadata lines ahead of the CSV header row
pub const LOAD_CHANNEL: &str = "CHANNEL0"; // Raw load cell voltage
pub const DISPLACEMENT_CHANNEL: &str = "CHANNEL1"; // Raw string potentiometer reading
pub const INPUT_EXTENSION: &str = "csv";
pub const SAMPLE_ID_MARKER: &str = "_069A_"; // Experiment tag; the sample ID follows it in the file stem

// --- Calibration ---
pub const VOLTAGE_LOAD_SCALE: f64 = 86.289; // lbf/V
pub const LBF_TO_NEWTONS: f64 = 4.44822; // N/lbf
pub const INCHES_TO_MM: f64 = 25.4; // mm/in
pub const FORCE_SIGN: f64 = -1.0; // Load cell polarity is inverted
pub const DISPLACEMENT_SIGN: f64 = -1.0; // Potentiometer counts down along the travel of interest

// --- Forward travel trimming ---
pub const MIN_TRIM_OFFSET: usize = 500; // Samples skipped before looking for the load drop
pub const TRIM_LOAD_THRESHOLD_N: f64 = 1.0; // Load at or below this ends the forward stroke

// --- Smoothing ---
pub const MOVING_AVERAGE_WINDOW: usize = 20;
pub const MOVING_AVERAGE_MIN_PERIODS: usize = 5;

// --- Friction phase thresholds (offset displacement, mm) ---
pub const STATIC_PHASE_END_MM: f64 = 0.5;
pub const DYNAMIC_PHASE_END_MM: f64 = 17.0;
pub const MIDDLE_ANCHOR_MM: f64 = 9.5; // Annotation anchor only
pub const METRIC_DECIMALS: i32 = 2;

// --- Outputs ---
pub const COMPILED_OUTPUT_FILE: &str = "compiled.csv";
pub const FORCES_OUTPUT_FILE: &str = "forces.csv";
pub const COMBINED_PLOT_FILE: &str = "all_samples.png";

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 1280;
pub const PLOT_HEIGHT: u32 = 960;

// Annotation text positions in axes fractions (0,0 is bottom left).
pub const STATIC_LABEL_AXES_POS: (f64, f64) = (0.2, 0.4);
pub const DYNAMIC_LABEL_AXES_POS: (f64, f64) = (0.4, 0.7);
pub const ARROW_HEAD_LENGTH_PX: f64 = 12.0;
pub const ARROW_HEAD_HALF_ANGLE_RAD: f64 = 0.4;

// --- Plot Color Assignments ---
pub const COLOR_SAMPLE_CURVE: &RGBColor = &BLUE;
pub const COLOR_ANNOTATION: &RGBColor = &GREY_700;
pub const SAMPLE_COLOR_CYCLE: [RGBColor; 10] = [
    BLUE, ORANGE, GREEN, RED, PURPLE, BROWN, PINK, GREY_700, TEAL, CYAN,
];

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 2;
pub const LINE_WIDTH_LEGEND: u32 = 2;
pub const LINE_WIDTH_ANNOTATION: u32 = 1;

// Font sizes
pub const FONT_SIZE_MAIN_TITLE: i32 = 24;
pub const FONT_SIZE_CHART_TITLE: i32 = 20;
pub const FONT_SIZE_AXIS_LABEL: i32 = 16;
pub const FONT_SIZE_LEGEND: i32 = 14;
pub const FONT_SIZE_ANNOTATION: i32 = 16;

// src/constants.rs
