//! Logging bootstrap.
//!
//! Log records go to stderr through `env_logger` so they never interleave
//! with REPL output on stdout. The filter comes from `DESKMATE_LOG`
//! (`env_logger` syntax, e.g. `deskmate=debug`); without it only warnings
//! are shown, or debug output with `--verbose`.

use env_logger::{Builder, Env};

pub const LOG_ENV: &str = "DESKMATE_LOG";

/// Initializes the global logger. Safe to call more than once; later calls
/// are ignored.
pub fn init(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let _ = Builder::from_env(Env::default().filter_or(LOG_ENV, default_filter))
        .format_timestamp(None)
        .format_target(verbose)
        .try_init();
}
