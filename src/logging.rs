//! Diagnostic logging for the clikit binary.
//!
//! The library only emits `log` records; installing a logger is left to the
//! program. `RUST_LOG` overrides the level chosen here, e.g.
//!
//! ```bash
//! RUST_LOG=clikit::files=debug clikit find . '*.rs'
//! ```

use env_logger::{Builder, Env, Target};

/// Default filter when `RUST_LOG` is not set.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Install an stderr logger. Only the first call has an effect.
pub fn init(verbose: bool) {
    let env = Env::default().default_filter_or(default_filter(verbose));
    let _ = Builder::from_env(env)
        .target(Target::Stderr)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
