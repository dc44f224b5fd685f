pub mod cli;
pub mod commands;
pub mod completion;
pub mod config;
pub mod error;
pub mod files;
pub mod logging;
pub mod output;
pub mod prompt;

pub use config::Config;
pub use error::{ClikitError, Result};
pub use output::{colorize, Color, ProgressIndicator, ProgressOptions, StatusPrinter};
pub use prompt::{confirm, prompt, select, Prompter};
