//! File size reporting.

use std::fs;
use std::path::Path;

use crate::error::{ClikitError, Result};

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Size of the file at `path` in bytes.
pub fn file_size(path: impl AsRef<Path>) -> Result<u64> {
    let path = path.as_ref();
    fs::metadata(path)
        .map(|m| m.len())
        .map_err(|source| ClikitError::Read {
            path: path.to_path_buf(),
            source,
        })
}

/// Size of the file at `path`, formatted with [`format_size`].
pub fn file_size_human(path: impl AsRef<Path>) -> Result<String> {
    file_size(path).map(format_size)
}

/// Format a byte count with two decimals and a 1024-based unit.
///
/// Anything of 1024 TB or more is shown in PB.
pub fn format_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    for unit in UNITS {
        if size < 1024.0 {
            return format!("{:.2} {}", size, unit);
        }
        size /= 1024.0;
    }
    format!("{:.2} PB", size)
}
