// src/plot_functions/mod.rs

pub mod plot_all_samples;
pub mod plot_force_displacement;

// src/plot_functions/mod.rs
