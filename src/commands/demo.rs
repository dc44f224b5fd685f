//! Demo command handler.
//!
//! Asks a few questions and then runs a progress bar, so the output
//! components can be tried from a terminal.

use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use crate::config::Config;
use crate::error::Result;
use crate::output::{Color, ProgressIndicator};
use crate::prompt::Prompter;

static FLAVORS: [&str; 3] = ["vanilla", "chocolate", "strawberry"];

/// Run the demo on the terminal.
pub fn demo_command(config: &Config, steps: u64, delay_ms: u64) -> Result<()> {
    let progress = ProgressIndicator::new(steps, config.progress.to_options())?;
    demo_with(
        &mut Prompter::stdio(),
        progress,
        Duration::from_millis(delay_ms),
    )
}

/// Run the demo against arbitrary streams.
pub fn demo_with<R, W, E, P>(
    prompter: &mut Prompter<R, W, E>,
    mut progress: ProgressIndicator<P>,
    delay: Duration,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
    P: Write,
{
    prompter.printer().header("clikit demo", '=')?;

    let name = prompter.prompt("What is your name?", Some("friend"))?;
    let flavor = prompter.select("Pick a flavor", &FLAVORS, Some(0))?;
    let steps = progress.state().total;
    if !prompter.confirm(&format!("Start a {}-step run?", steps), true)? {
        prompter.printer().warning("Skipped the progress run.")?;
        return Ok(());
    }

    for _ in 0..steps {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        progress.tick()?;
    }

    prompter.printer().success(&format!(
        "All done, {}! Enjoy the {}.",
        name,
        Color::Magenta.paint(flavor)
    ))?;
    Ok(())
}
