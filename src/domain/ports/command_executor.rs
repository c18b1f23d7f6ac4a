//! Command execution port
//!
//! The dispatcher hands every invocation to a `CommandExecutor`. The
//! process-backed implementation lives in `infrastructure::process`.

use thiserror::Error;

/// Failure of one external command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The program could not be started
    #[error("command failed: {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The program ran and exited unsuccessfully
    #[error("command failed: {status}: {output}")]
    Failed {
        program: String,
        status: String,
        /// Trimmed combined stdout and stderr
        output: String,
    },
}

/// Runs an external program to completion.
///
/// Implementations must be shareable across threads: the dispatcher calls
/// `run` from one thread per invocation. Any timeout belongs here, not in
/// the dispatcher.
pub trait CommandExecutor: Send + Sync {
    /// Run `executable` with `args`, returning trimmed combined output.
    fn run(&self, executable: &str, args: &[String]) -> Result<String, CommandError>;
}
