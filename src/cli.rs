//! Command-line definition for the `clikit` binary.
//!
//! Kept in the library so completion scripts can be generated from the same
//! definition the binary parses.

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "clikit")]
#[command(
    version,
    about = "Terminal prompts, progress bars and file helpers",
    after_help = "EXAMPLES:
    clikit demo                       # Try the prompts and the progress bar
    clikit size Cargo.toml --human    # Print a file size as 1.23 KB
    clikit find src '*.rs'            # Recursive glob search
    clikit convert data.json data.yaml"
)]
pub struct Cli {
    /// Print debug diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Walk through the interactive prompts and a progress run
    Demo {
        /// Number of steps in the progress run
        #[arg(long, default_value_t = 20)]
        steps: u64,

        /// Milliseconds between progress steps
        #[arg(long, default_value_t = 50)]
        delay_ms: u64,
    },

    /// Print the size of a file
    Size {
        path: PathBuf,

        /// Format as B/KB/MB/GB/TB/PB
        #[arg(short = 'H', long)]
        human: bool,
    },

    /// Find entries under a directory matching a glob pattern
    Find {
        dir: PathBuf,

        #[arg(default_value = "*")]
        pattern: String,
    },

    /// Copy a directory recursively, merging into the destination
    Copy { src: PathBuf, dst: PathBuf },

    /// Convert between JSON and YAML based on file extensions
    Convert { input: PathBuf, output: PathBuf },

    /// Show the effective configuration
    Config,

    /// Print a shell completion script (bash, zsh, fish)
    Completions { shell: String },
}

/// The clap command, for completion generation.
pub fn build_cli() -> clap::Command {
    Cli::command()
}
