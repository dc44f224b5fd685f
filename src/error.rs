use std::path::PathBuf;
use thiserror::Error;

use crate::files::Format;

#[derive(Error, Debug)]
pub enum ClikitError {
    #[error("Choice list is empty")]
    EmptyChoices,

    #[error("Default choice {index} is out of range for {len} choices")]
    DefaultOutOfRange { index: usize, len: usize },

    #[error("Progress total must be a positive number")]
    InvalidTotal,

    #[error("Progress width must be a positive number")]
    InvalidWidth,

    #[error("Input closed before a valid choice was entered")]
    InputClosed,

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy {} to {}: {source}", .src.display(), .dst.display())]
    Copy {
        src: PathBuf,
        dst: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid {format} in {}: {message}", .path.display())]
    Parse {
        path: PathBuf,
        format: Format,
        message: String,
    },

    #[error("Unrecognized document format for {}: expected .json, .yaml or .yml", .0.display())]
    UnknownFormat(PathBuf),

    #[error("Failed to serialize {format}: {message}")]
    Serialize { format: Format, message: String },

    #[error("Invalid glob pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Shell completion error: {0}")]
    ShellCompletion(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ClikitError>;
