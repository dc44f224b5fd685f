//! File helpers for command-line programs.
//!
//! - [`structured`] - JSON and YAML documents
//! - [`find`] - Recursive glob search
//! - [`size`] - File sizes, raw or human readable
//!
//! Read operations return their error untouched. Write and copy operations
//! also print a diagnostic line to stderr before returning the error, so a
//! caller that only checks `is_ok()` still leaves a trace for the user.

pub mod find;
pub mod size;
pub mod structured;

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{ClikitError, Result};
use crate::output::print_error;

pub use find::{find_files, GlobPattern};
pub use size::{file_size, file_size_human, format_size};
pub use structured::{
    read_json, read_structured, read_yaml, write_json, write_json_with_indent, write_structured,
    write_yaml, Format, DEFAULT_JSON_INDENT,
};

/// Read a whole file as UTF-8 text.
pub fn read_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    debug!("reading {}", path.display());
    fs::read_to_string(path).map_err(|source| ClikitError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `content` to `path`, creating parent directories first.
pub fn write_text(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();
    write_bytes(path, content.as_bytes()).inspect_err(|e| {
        print_error(&format!("Error writing file: {}", e));
    })
}

/// Create `path` and any missing parents. Returns the directory path.
pub fn ensure_dir(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    fs::create_dir_all(path).map_err(|source| ClikitError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(path.to_path_buf())
}

/// Recursively copy `src` into `dst`.
///
/// An existing destination is merged into: files already there are kept
/// unless the source has a file of the same name, which overwrites them.
/// Returns the number of files copied.
pub fn copy_directory(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<usize> {
    let (src, dst) = (src.as_ref(), dst.as_ref());
    copy_tree(src, dst).inspect_err(|e| {
        print_error(&format!("Error copying directory: {}", e));
    })
}

pub(crate) fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    let write_err = |source| ClikitError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    debug!("writing {} bytes to {}", bytes.len(), path.display());
    fs::write(path, bytes).map_err(write_err)
}

fn copy_tree(src: &Path, dst: &Path) -> Result<usize> {
    let copy_err = |source| ClikitError::Copy {
        src: src.to_path_buf(),
        dst: dst.to_path_buf(),
        source,
    };

    if !src.is_dir() {
        return Err(copy_err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "source is not a directory",
        )));
    }
    fs::create_dir_all(dst).map_err(copy_err)?;

    let mut copied = 0;
    for entry in fs::read_dir(src).map_err(copy_err)? {
        let entry = entry.map_err(copy_err)?;
        let from = entry.path();
        let to = dst.join(entry.file_name());
        let file_type = entry.file_type().map_err(copy_err)?;
        // a link to a directory is copied as the directory's contents
        let is_dir = file_type.is_dir()
            || (file_type.is_symlink() && fs::metadata(&from).is_ok_and(|m| m.is_dir()));
        if is_dir {
            copied += copy_tree(&from, &to)?;
        } else {
            fs::copy(&from, &to).map_err(|source| ClikitError::Copy {
                src: from.clone(),
                dst: to.clone(),
                source,
            })?;
            copied += 1;
        }
    }
    debug!("copied {} files from {} to {}", copied, src.display(), dst.display());
    Ok(copied)
}
