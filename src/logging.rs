use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `BROADSIDE_LOG=debug`.
pub const LOG_ENV: &str = "BROADSIDE_LOG";

/// Initialize logging with a filter taken from the `BROADSIDE_LOG` environment variable.
/// Defaults to `info` if the variable is not set or invalid. Logs go to stderr so
/// stdout stays free for game output. Safe to call more than once.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
