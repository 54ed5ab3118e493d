// src/data_input/log_parser.rs

use csv::ReaderBuilder;
use log::{debug, info};
use ndarray::Array1;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config::AnalysisConfig;
use crate::data_input::log_data::RawSample;
use crate::error::{Result, StictionError};

/// Derives the sample ID from a file name: the stem text after `marker`,
/// or the whole stem when the marker is absent.
pub fn sample_id_from_path(path: &Path, marker: &str) -> String {
    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    match stem.split_once(marker) {
        Some((_, id)) if !id.is_empty() => id.to_string(),
        _ => stem.into_owned(),
    }
}

/// Parses one DAQ export: skips the metadata preamble, maps the load and
/// displacement channels by header name and reads every data row.
///
/// Every data row must carry parseable values for both channels; rows are
/// never dropped, so acquisition order and indices are preserved.
pub fn parse_sample_file(input_file_path: &Path, config: &AnalysisConfig) -> Result<RawSample> {
    let sample_id = sample_id_from_path(input_file_path, &config.sample_id_marker);

    // --- Preamble ---
    let mut csv_lines: Vec<String> = Vec::new();
    {
        let reader = BufReader::new(File::open(input_file_path)?);
        for (line_index, line_result) in reader.lines().enumerate() {
            let line = line_result?;
            if line_index < config.preamble_lines {
                debug!("  preamble: {}", line.trim());
                continue;
            }
            if line.trim().is_empty() {
                continue;
            }
            csv_lines.push(line);
        }
    }
    let csv_content = csv_lines.join("\n");

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(csv_content.as_bytes());

    // --- Header Mapping ---
    let header_record = reader.headers()?.clone();
    debug!("Headers found in {}: {:?}", input_file_path.display(), header_record);

    let find_column = |name: &str| -> Result<usize> {
        header_record
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| StictionError::MissingColumn {
                file: input_file_path.to_path_buf(),
                column: name.to_string(),
            })
    };
    let load_idx = find_column(&config.load_channel)?;
    let position_idx = find_column(&config.displacement_channel)?;
    debug!(
        "  '{}' -> column {}, '{}' -> column {}",
        config.load_channel, load_idx, config.displacement_channel, position_idx
    );

    // --- Data Rows ---
    let mut load_voltage = Vec::new();
    let mut position_voltage = Vec::new();
    for (row_index, result) in reader.records().enumerate() {
        let record = result?;
        let parse_column = |csv_idx: usize, column: &str| -> Result<f64> {
            let raw = record.get(csv_idx).unwrap_or("");
            raw.parse::<f64>().map_err(|_| StictionError::MalformedValue {
                file: input_file_path.to_path_buf(),
                row: row_index + 1,
                column: column.to_string(),
                value: raw.to_string(),
            })
        };
        load_voltage.push(parse_column(load_idx, &config.load_channel)?);
        position_voltage.push(parse_column(position_idx, &config.displacement_channel)?);
    }

    let required = config.trim.min_offset;
    if load_voltage.len() <= required {
        return Err(StictionError::InsufficientData {
            file: input_file_path.to_path_buf(),
            rows: load_voltage.len(),
            required,
        });
    }

    let sample = RawSample {
        sample_id,
        source: input_file_path.to_path_buf(),
        load_voltage: Array1::from(load_voltage),
        position_voltage: Array1::from(position_voltage),
    };
    info!("Sample '{}': read {} data rows from {}", sample.sample_id, sample.len(), input_file_path.display());
    Ok(sample)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Write as _;
    use std::fs;

    fn write_log(dir: &Path, name: &str, header: &str, rows: usize) -> std::path::PathBuf {
        let mut body = String::new();
        for i in 0..7 {
            writeln!(body, "Meta{i},value{i}").unwrap();
        }
        writeln!(body, "{header}").unwrap();
        for i in 0..rows {
            writeln!(body, "{},{},{}", i, -0.05, -(i as f64) / 1000.0).unwrap();
        }
        let path = dir.join(name);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_sample_id_from_path() {
        let marker = "_069A_";
        assert_eq!(sample_id_from_path(Path::new("/d/2021-10-22_069A_S4.csv"), marker), "S4");
        assert_eq!(sample_id_from_path(Path::new("/d/run7.csv"), marker), "run7");
    }

    #[test]
    fn test_parse_skips_preamble() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_log(dir.path(), "x_069A_A1.csv", "Sample, CHANNEL0, CHANNEL1", 600);
        let config = AnalysisConfig::for_directory(dir.path());

        let sample = parse_sample_file(&path, &config).unwrap();
        assert_eq!(sample.sample_id, "A1");
        assert_eq!(sample.len(), 600);
        assert_eq!(sample.load_voltage[0], -0.05);
        assert_eq!(sample.position_voltage[10], -0.01);
    }

    #[test]
    fn test_missing_channel_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_log(dir.path(), "x_069A_A2.csv", "Sample,CHANNEL0,CHANNEL9", 600);
        let config = AnalysisConfig::for_directory(dir.path());

        match parse_sample_file(&path, &config) {
            Err(StictionError::MissingColumn { column, .. }) => assert_eq!(column, "CHANNEL1"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_short_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_log(dir.path(), "x_069A_A3.csv", "Sample,CHANNEL0,CHANNEL1", 500);
        let config = AnalysisConfig::for_directory(dir.path());

        assert!(matches!(
            parse_sample_file(&path, &config),
            Err(StictionError::InsufficientData { rows: 500, required: 500, .. })
        ));
    }

    #[test]
    fn test_malformed_value_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_log(dir.path(), "x_069A_A4.csv", "Sample,CHANNEL0,CHANNEL1", 600);
        let mut body = fs::read_to_string(&path).unwrap();
        body.push_str("600,oops,0.1\n");
        fs::write(&path, body).unwrap();
        let config = AnalysisConfig::for_directory(dir.path());

        match parse_sample_file(&path, &config) {
            Err(StictionError::MalformedValue { row, value, .. }) => {
                assert_eq!(row, 601);
                assert_eq!(value, "oops");
            }
            other => panic!("expected MalformedValue, got {other:?}"),
        }
    }
}

// src/data_input/log_parser.rs
