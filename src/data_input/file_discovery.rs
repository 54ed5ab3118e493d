// src/data_input/file_discovery.rs

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::{Result, StictionError};

/// Lists the sample files in `dir` with the given extension (case-insensitive).
///
/// Order carries no meaning; paths are sorted only so runs are reproducible.
pub fn discover_sample_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(StictionError::DirectoryNotFound(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
        if matches {
            debug!("Found sample file {}", path.display());
            files.push(path);
        }
    }
    files.sort();

    info!("Discovered {} '*.{}' files in {}", files.len(), extension, dir.display());
    Ok(files)
}
