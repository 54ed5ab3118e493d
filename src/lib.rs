// src/lib.rs - Library interface for the stiction analysis pipeline

pub mod config;
pub mod constants;
pub mod data_analysis;
pub mod data_input;
pub mod error;
pub mod font_config;
pub mod output;
pub mod pipeline;
pub mod plot_framework;
pub mod plot_functions;
pub mod series_names;

pub fn crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
