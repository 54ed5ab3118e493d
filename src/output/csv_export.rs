// src/output/csv_export.rs

use csv::{ReaderBuilder, WriterBuilder};
use log::info;
use std::path::Path;

use crate::error::Result;
use crate::output::aggregate::{AggregateTable, ForceSummaryRow};

fn format_value(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else {
        value.to_string()
    }
}

/// Writes the compiled table with a leading unnamed row-index column.
/// NaN cells are written empty. Overwrites any existing file.
pub fn write_compiled_csv(table: &AggregateTable, output_file: &Path) -> Result<()> {
    let mut writer = WriterBuilder::new().from_path(output_file)?;

    let mut header = vec![String::new()];
    header.extend(table.columns.iter().map(|(name, _)| name.clone()));
    writer.write_record(&header)?;

    for row in 0..table.row_count {
        let mut record = Vec::with_capacity(table.columns.len() + 1);
        record.push(row.to_string());
        record.extend(table.columns.iter().map(|(_, values)| format_value(values[row])));
        writer.write_record(&record)?;
    }
    writer.flush()?;

    info!("Wrote {} rows x {} columns to '{}'", table.row_count, table.columns.len(), output_file.display());
    Ok(())
}

/// Writes one row per sample: Sample ID, peak static and average dynamic friction.
pub fn write_force_summary(rows: &[ForceSummaryRow], output_file: &Path) -> Result<()> {
    let mut writer = WriterBuilder::new().from_path(output_file)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    info!("Wrote {} sample summaries to '{}'", rows.len(), output_file.display());
    Ok(())
}

/// Reads a summary written by [`write_force_summary`].
pub fn read_force_summary(input_file: &Path) -> Result<Vec<ForceSummaryRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(input_file)?;
    let mut rows = Vec::new();
    for result in reader.deserialize::<ForceSummaryRow>() {
        rows.push(result?);
    }
    Ok(rows)
}
