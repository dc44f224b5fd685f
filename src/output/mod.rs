//! Terminal output formatting for clikit.
//!
//! This module provides consistent, colored terminal output. Functions are
//! organized by concern:
//!
//! - [`color`] - Symbolic colors and `colorize`
//! - [`messages`] - Success, error, warning, info and header lines
//! - [`progress`] - The single-line progress indicator

pub mod color;
pub mod messages;
pub mod progress;

/// ANSI color codes for terminal output.
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";

    pub const BLACK: &str = "\x1b[30m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
    pub const WHITE: &str = "\x1b[37m";

    pub const BRIGHT_BLACK: &str = "\x1b[90m";
    pub const BRIGHT_RED: &str = "\x1b[91m";
    pub const BRIGHT_GREEN: &str = "\x1b[92m";
    pub const BRIGHT_YELLOW: &str = "\x1b[93m";
    pub const BRIGHT_BLUE: &str = "\x1b[94m";
    pub const BRIGHT_MAGENTA: &str = "\x1b[95m";
    pub const BRIGHT_CYAN: &str = "\x1b[96m";
    pub const BRIGHT_WHITE: &str = "\x1b[97m";
}

// Re-export colors at module level for convenience
pub use colors::*;

pub use color::{colorize, Color};
pub use messages::{
    print_error, print_header, print_info, print_success, print_warning, StatusPrinter,
};
pub use progress::{render_bar, ProgressIndicator, ProgressOptions, ProgressState};
