// File: crates/chart-cli/src/logging.rs
// Summary: Logging init: stderr writer with an `EnvFilter` (`RUST_LOG` wins when set).

use tracing_subscriber::EnvFilter;

fn default_filter(verbose: bool) -> EnvFilter {
    // `cyclist` prefix-matches every crate in the workspace.
    EnvFilter::new(if verbose { "info,cyclist=debug" } else { "warn,cyclist=info" })
}

/// Initialize logging to stderr. Safe to call more than once; later calls are no-ops.
pub fn init_logging_stderr(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
