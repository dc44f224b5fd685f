//! File command handlers: `size`, `find`, `copy` and `convert`.

use std::path::Path;

use crate::config::Config;
use crate::error::{ClikitError, Result};
use crate::files::{
    copy_directory, file_size, find_files, format_size, read_structured, write_json_with_indent,
    write_yaml, Format,
};
use crate::output::{print_info, print_success, BOLD, RESET};

/// Print the size of `path`, raw or human readable.
pub fn size_command(path: &Path, human: bool) -> Result<()> {
    let bytes = file_size(path)?;
    if human {
        println!("{}", format_size(bytes));
    } else {
        println!("{}", bytes);
    }
    Ok(())
}

/// Print every entry under `dir` matching `pattern`, one per line.
pub fn find_command(dir: &Path, pattern: &str) -> Result<()> {
    let found = find_files(dir, pattern)?;
    for path in &found {
        println!("{}", path.display());
    }
    if found.is_empty() {
        print_info(&format!("No entries match {BOLD}{}{RESET}", pattern));
    }
    Ok(())
}

/// Copy `src` into `dst`, merging with existing content.
pub fn copy_command(src: &Path, dst: &Path) -> Result<()> {
    let copied = copy_directory(src, dst)?;
    print_success(&format!(
        "Copied {} file{} to {}",
        copied,
        if copied == 1 { "" } else { "s" },
        dst.display()
    ));
    Ok(())
}

/// Convert a JSON or YAML document to the format of `output`.
pub fn convert_command(config: &Config, input: &Path, output: &Path) -> Result<()> {
    let from = detect_format(input)?;
    let to = detect_format(output)?;
    let document: serde_json::Value = read_structured(input, from)?;
    match to {
        Format::Json => write_json_with_indent(output, &document, config.files.json_indent)?,
        Format::Yaml => write_yaml(output, &document)?,
    }
    print_success(&format!(
        "Converted {} ({}) to {} ({})",
        input.display(),
        from,
        output.display(),
        to
    ));
    Ok(())
}

fn detect_format(path: &Path) -> Result<Format> {
    Format::from_path(path).ok_or_else(|| ClikitError::UnknownFormat(path.to_path_buf()))
}
