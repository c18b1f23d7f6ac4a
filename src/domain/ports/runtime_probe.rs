//! Runtime probe port
//!
//! Plan building and the backup service take the probe as a parameter
//! instead of consulting a global detector.

use crate::domain::value_objects::Runtime;

/// Answers "where am I running?" for the current command invocation.
pub trait RuntimeProbe {
    /// Classify the execution environment.
    fn runtime(&self) -> Runtime;

    /// True when the session is a dev container rather than a WSL window.
    fn in_dev_container(&self) -> bool;
}

/// Probe with a fixed answer.
#[derive(Debug, Clone, Copy)]
pub struct FixedRuntime {
    pub runtime: Runtime,
    pub dev_container: bool,
}

impl FixedRuntime {
    pub fn new(runtime: Runtime) -> Self {
        Self {
            runtime,
            dev_container: false,
        }
    }

    pub fn in_container(mut self) -> Self {
        self.dev_container = true;
        self
    }
}

impl RuntimeProbe for FixedRuntime {
    fn runtime(&self) -> Runtime {
        self.runtime
    }

    fn in_dev_container(&self) -> bool {
        self.dev_container
    }
}
