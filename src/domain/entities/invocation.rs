//! External engine invocations and their results

use serde::Serialize;

/// One fully-built engine command line for one target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    pub target: String,
    pub executable: String,
    pub args: Vec<String>,
}

impl Invocation {
    /// Render as a shell-like line for logs.
    pub fn command_line(&self) -> String {
        let mut line = self.executable.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// Output of a successful invocation, keyed by its target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionResult {
    pub target: String,
    pub output: String,
}
