//! Log output for the command line tool.

use tracing::level_filters::LevelFilter;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive that overrides the log level.
pub const LOG_ENV_VAR: &str = "SKIN_WEIGHT_LOG";

/// Installs the global subscriber: warnings and errors to stderr, everything else to stdout.
///
/// Logs `debug` and up when `verbose`, `warn` and up otherwise.
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));
    let writer = std::io::stderr
        .with_max_level(Level::WARN)
        .or_else(std::io::stdout);

    // Only fails if a subscriber is already installed, in which case that one wins.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(false)
        .without_time()
        .try_init();
}
