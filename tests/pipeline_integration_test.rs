// tests/pipeline_integration_test.rs

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use fork_stiction_render::config::AnalysisConfig;
use fork_stiction_render::error::StictionError;
use fork_stiction_render::output::csv_export::read_force_summary;
use fork_stiction_render::pipeline::run_analysis;

/// Writes a DAQ export: 7 preamble lines, a header and 1000 rows. The load holds
/// -0.05 V (about 19.2 N) with a breakaway spike, then drops to zero at `drop_at`;
/// the potentiometer moves 1 inch over 800 rows.
fn write_daq_log(dir: &Path, name: &str, drop_at: usize, channels: (&str, &str)) {
    let mut body = String::new();
    writeln!(body, "Device,DAQ-8").unwrap();
    writeln!(body, "Date,2021-10-22").unwrap();
    for i in 0..5 {
        writeln!(body, "Setting{i},{i}").unwrap();
    }
    writeln!(body, "Sample,{},{}", channels.0, channels.1).unwrap();
    for i in 0..1000 {
        let load = match i {
            i if i >= drop_at => 0.0,
            8..=12 => -0.12,
            _ => -0.05,
        };
        let position = 1.25 - (i.min(800) as f64) / 800.0;
        writeln!(body, "{i},{load},{position}").unwrap();
    }
    fs::write(dir.join(name), body).unwrap();
}

fn headless_config(dir: &Path) -> AnalysisConfig {
    let mut config = AnalysisConfig::for_directory(dir);
    config.render_plots = false;
    config
}

#[test]
fn test_two_samples_aggregate_to_shorter_length() {
    let dir = tempfile::tempdir().unwrap();
    write_daq_log(dir.path(), "2021-10-22_069A_S1.csv", 800, ("CHANNEL0", "CHANNEL1"));
    write_daq_log(dir.path(), "2021-10-22_069A_S2.csv", 700, ("CHANNEL0", "CHANNEL1"));

    let config = headless_config(dir.path());
    let report = run_analysis(&config).unwrap();

    assert_eq!(report.samples.len(), 2);
    assert!(report.skipped.is_empty());
    assert!(report.duplicate_ids.is_empty());
    assert_eq!(report.compiled_rows, 700);

    let compiled = fs::read_to_string(&config.compiled_output).unwrap();
    let mut lines = compiled.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with(",Load (N) S1,Displacement(mm) S1,Load MA S1"));
    assert!(header.ends_with("Displacement MA Offset S2"));
    assert_eq!(lines.count(), 700);
}

#[test]
fn test_plots_written_per_sample_and_combined() {
    let dir = tempfile::tempdir().unwrap();
    write_daq_log(dir.path(), "2021-10-22_069A_S1.csv", 800, ("CHANNEL0", "CHANNEL1"));

    let config = AnalysisConfig::for_directory(dir.path());
    assert!(config.render_plots);
    run_analysis(&config).unwrap();

    for png in [dir.path().join("S1.png"), dir.path().join("all_samples.png")] {
        let size = fs::metadata(&png).unwrap().len();
        assert!(size > 0, "{} is empty", png.display());
    }
}

#[test]
fn test_duplicate_sample_ids_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    write_daq_log(dir.path(), "a_069A_S1.csv", 800, ("CHANNEL0", "CHANNEL1"));
    write_daq_log(dir.path(), "b_069A_S1.csv", 750, ("CHANNEL0", "CHANNEL1"));

    let config = headless_config(dir.path());
    let report = run_analysis(&config).unwrap();
    assert_eq!(report.samples.len(), 2);
    assert_eq!(report.duplicate_ids, vec!["S1".to_string()]);

    let compiled = fs::read_to_string(&config.compiled_output).unwrap();
    let header = compiled.lines().next().unwrap();
    assert_eq!(header.matches("Load (N) S1").count(), 2);
}

#[test]
fn test_forces_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    write_daq_log(dir.path(), "2021-10-22_069A_S1.csv", 800, ("CHANNEL0", "CHANNEL1"));
    write_daq_log(dir.path(), "2021-10-22_069A_S2.csv", 750, ("CHANNEL0", "CHANNEL1"));

    let config = headless_config(dir.path());
    let report = run_analysis(&config).unwrap();
    let read_back = read_force_summary(&config.forces_output).unwrap();

    assert_eq!(read_back, report.summary);
    let plateau = 0.05 * 86.289 * 4.44822;
    for row in &read_back {
        assert!(row.peak_static_friction > row.avg_dynamic_friction);
        assert!((row.avg_dynamic_friction - plateau).abs() < 0.05);
        assert_eq!(row.avg_dynamic_friction, (row.avg_dynamic_friction * 100.0).round() / 100.0);
    }
}

#[test]
fn test_bad_file_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    write_daq_log(dir.path(), "2021-10-22_069A_S1.csv", 800, ("CHANNEL0", "CHANNEL1"));
    write_daq_log(dir.path(), "2021-10-22_069A_S3.csv", 800, ("CHANNEL0", "CHANNEL7"));

    let report = run_analysis(&headless_config(dir.path())).unwrap();
    assert_eq!(report.samples.len(), 1);
    assert_eq!(report.samples[0].sample_id, "S1");
    assert_eq!(report.skipped.len(), 1);
    assert!(report.skipped[0].1.contains("CHANNEL1"));
}

#[test]
fn test_rerun_ignores_previous_outputs() {
    let dir = tempfile::tempdir().unwrap();
    write_daq_log(dir.path(), "2021-10-22_069A_S1.csv", 800, ("CHANNEL0", "CHANNEL1"));
    let config = headless_config(dir.path());

    let first = run_analysis(&config).unwrap();
    let second = run_analysis(&config).unwrap();
    assert!(second.skipped.is_empty());
    assert_eq!(first.summary, second.summary);
    assert_eq!(read_force_summary(&config.forces_output).unwrap().len(), 1);
}

#[test]
fn test_empty_directory_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let err = run_analysis(&headless_config(dir.path())).unwrap_err();
    assert!(matches!(err, StictionError::NoSampleFiles { .. }));
}

#[test]
fn test_all_files_rejected_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write_daq_log(dir.path(), "2021-10-22_069A_S5.csv", 800, ("LOAD", "POS"));
    let err = run_analysis(&headless_config(dir.path())).unwrap_err();
    assert!(matches!(err, StictionError::NoValidSamples));
}
