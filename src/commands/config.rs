//! Config command handler.

use crate::config::{config_path, generate_config_with_comments, Config};
use crate::error::Result;
use crate::output::{print_header, BRIGHT_BLACK, RESET};

/// Display the effective configuration and where it was loaded from.
pub fn config_command(config: &Config) -> Result<()> {
    let path = config_path()?;
    print_header("Configuration", '-');
    println!("{BRIGHT_BLACK}{}{RESET}", path.display());
    println!();
    print!("{}", generate_config_with_comments(config));
    Ok(())
}
