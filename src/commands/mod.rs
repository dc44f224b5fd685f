//! CLI command handlers for clikit.
//!
//! - [`demo`] - Interactive walkthrough of prompts and progress
//! - [`files`] - `size`, `find`, `copy` and `convert`
//! - [`config`] - Show the effective configuration

mod config;
mod demo;
mod files;

pub use config::config_command;
pub use demo::{demo_command, demo_with};
pub use files::{convert_command, copy_command, find_command, size_command};
