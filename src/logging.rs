//! Diagnostic logging to stderr.

use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Directives are read from this variable, e.g. `PASSGEN_LOG=passgen=trace`.
const ENV_VAR: &str = "PASSGEN_LOG";

/// Init tracing at `WARN`, or `DEBUG` when verbose.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    init_with_default_level(level);
}

fn init_with_default_level(level: LevelFilter) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .with_env_var(ENV_VAR)
        .from_env_lossy();

    // stdout is reserved for passwords
    let _ = tracing_subscriber::fmt()
        .compact()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}
