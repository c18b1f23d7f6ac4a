//! Logging setup
//!
//! Diagnostics go to stderr so stdout stays reserved for the report.
//! `RUST_LOG` overrides the verbosity flag when it is set.

use tracing_subscriber::EnvFilter;

pub type LoggingResult = Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>;

/// Filter directive for a `-v` count.
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "wsl_backup=warn",
        1 => "wsl_backup=info",
        _ => "wsl_backup=debug",
    }
}

pub fn init_logging(verbose: u8) -> LoggingResult {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(verbose > 1)
        .try_init()
}
