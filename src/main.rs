//! clikit CLI entry point.
//!
//! Parses command-line arguments and dispatches to the appropriate command handler.

use clap::Parser;
use clikit::cli::{Cli, Commands};
use clikit::commands::{
    config_command, convert_command, copy_command, demo_command, find_command, size_command,
};
use clikit::completion::{print_completion_script, ShellType, SUPPORTED_SHELLS};
use clikit::config::load_config;
use clikit::logging;
use clikit::output::print_error;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match &cli.command {
        Commands::Demo { steps, delay_ms } => {
            load_config().and_then(|config| demo_command(&config, *steps, *delay_ms))
        }
        Commands::Size { path, human } => size_command(path, *human),
        Commands::Find { dir, pattern } => find_command(dir, pattern),
        Commands::Copy { src, dst } => copy_command(src, dst),
        Commands::Convert { input, output } => {
            load_config().and_then(|config| convert_command(&config, input, output))
        }
        Commands::Config => load_config().and_then(|config| config_command(&config)),
        Commands::Completions { shell } => match ShellType::from_name(shell) {
            Ok(shell_type) => {
                print_completion_script(shell_type);
                Ok(())
            }
            Err(e) => {
                print_error(&format!(
                    "{}\nSupported shells: {}",
                    e,
                    SUPPORTED_SHELLS.join(", ")
                ));
                std::process::exit(1);
            }
        },
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
