// src/output/mod.rs

pub mod aggregate;
pub mod csv_export;

// src/output/mod.rs
