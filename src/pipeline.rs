// src/pipeline.rs

use log::{info, warn};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::config::AnalysisConfig;
use crate::data_analysis::sample_processing::{process_sample, ProcessedSample};
use crate::data_input::file_discovery::discover_sample_files;
use crate::data_input::log_parser::parse_sample_file;
use crate::error::{Result, StictionError};
use crate::output::aggregate::{summary_rows, AggregateTable, ForceSummaryRow};
use crate::output::csv_export::{write_compiled_csv, write_force_summary};
use crate::plot_functions::plot_all_samples::plot_all_samples;
use crate::plot_functions::plot_force_displacement::plot_force_displacement;

/// What a run produced.
#[derive(Debug)]
pub struct AnalysisReport {
    pub samples: Vec<ProcessedSample>,
    pub skipped: Vec<(PathBuf, String)>,
    /// Sample IDs seen in more than one file; their columns and plots collide.
    pub duplicate_ids: Vec<String>,
    pub summary: Vec<ForceSummaryRow>,
    pub compiled_rows: usize,
}

/// Loads and analyses one file.
pub fn analyse_file(path: &Path, config: &AnalysisConfig) -> Result<ProcessedSample> {
    let raw = parse_sample_file(path, config)?;
    process_sample(&raw, config)
}

/// Runs the whole batch: discover, analyse each file, plot, aggregate and export.
///
/// A file that fails to load or analyse is skipped with a warning; the run only
/// fails when the directory is unusable or no sample survives.
pub fn run_analysis(config: &AnalysisConfig) -> Result<AnalysisReport> {
    let files = discover_sample_files(&config.data_dir, &config.input_extension)?;
    // Outputs from an earlier run live in the same directory.
    let files: Vec<PathBuf> = files
        .into_iter()
        .filter(|f| *f != config.compiled_output && *f != config.forces_output)
        .collect();
    if files.is_empty() {
        return Err(StictionError::NoSampleFiles {
            dir: config.data_dir.clone(),
            extension: config.input_extension.clone(),
        });
    }

    let mut samples = Vec::with_capacity(files.len());
    let mut skipped = Vec::new();
    let mut seen_ids = HashSet::new();
    let mut duplicate_ids = Vec::new();
    for path in &files {
        info!("\n--- Processing {} ---", path.display());
        match analyse_file(path, config) {
            Ok(sample) => {
                if !seen_ids.insert(sample.sample_id.clone()) {
                    warn!(
                        "Duplicate sample ID '{}' in {}; its columns repeat and its plot is overwritten",
                        sample.sample_id,
                        path.display()
                    );
                    duplicate_ids.push(sample.sample_id.clone());
                }
                if config.render_plots {
                    let plot_path = config.sample_plot_path(&sample.sample_id);
                    plot_force_displacement(&sample, &plot_path)
                        .map_err(|e| StictionError::Plot(e.to_string()))?;
                }
                samples.push(sample);
            }
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                skipped.push((path.clone(), e.to_string()));
            }
        }
    }

    if samples.is_empty() {
        return Err(StictionError::NoValidSamples);
    }

    if config.render_plots {
        plot_all_samples(&samples, &config.combined_plot_path())
            .map_err(|e| StictionError::Plot(e.to_string()))?;
    }

    let table = AggregateTable::from_samples(&samples)?;
    write_compiled_csv(&table, &config.compiled_output)?;
    let summary = summary_rows(&samples);
    write_force_summary(&summary, &config.forces_output)?;

    info!(
        "Analysed {} samples ({} skipped); compiled table has {} rows",
        samples.len(),
        skipped.len(),
        table.row_count
    );

    Ok(AnalysisReport {
        samples,
        skipped,
        duplicate_ids,
        summary,
        compiled_rows: table.row_count,
    })
}

// src/pipeline.rs
