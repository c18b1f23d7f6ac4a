//! Process-backed command executor

use std::process::{Command, Stdio};

use crate::domain::ports::{CommandError, CommandExecutor};

/// Runs commands as child processes and captures their output.
///
/// The child inherits the parent environment, so engine credentials such
/// as `RESTIC_PASSWORD` or `RESTIC_PASSWORD_FILE` pass straight through.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemExecutor;

impl CommandExecutor for SystemExecutor {
    fn run(&self, executable: &str, args: &[String]) -> Result<String, CommandError> {
        let output = Command::new(executable)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| CommandError::Spawn {
                program: executable.to_string(),
                source,
            })?;

        let combined = combine_output(&output.stdout, &output.stderr);
        if !output.status.success() {
            return Err(CommandError::Failed {
                program: executable.to_string(),
                status: output.status.to_string(),
                output: combined,
            });
        }
        Ok(combined)
    }
}

/// stdout followed by stderr, trimmed.
fn combine_output(stdout: &[u8], stderr: &[u8]) -> String {
    let stdout = String::from_utf8_lossy(stdout);
    let stderr = String::from_utf8_lossy(stderr);
    let stdout = stdout.trim();
    let stderr = stderr.trim();
    match (stdout.is_empty(), stderr.is_empty()) {
        (true, _) => stderr.to_string(),
        (false, true) => stdout.to_string(),
        (false, false) => format!("{}\n{}", stdout, stderr),
    }
}
