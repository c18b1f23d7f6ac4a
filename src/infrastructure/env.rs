//! Environment port implementations
//!
//! - `ProcessEnvironment` - the real process environment
//! - `StaticEnvironment` - a fixed snapshot, for tests and tooling

use std::collections::HashMap;
use std::path::PathBuf;

use crate::domain::ports::Environment;

use super::fs::backup_home_dir;

/// Kernel identification file inspected for WSL signatures
pub const SYSTEM_IDENTITY_FILE: &str = "/proc/version";

/// Reads the live process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        backup_home_dir()
    }

    fn system_identity(&self) -> Option<String> {
        std::fs::read_to_string(SYSTEM_IDENTITY_FILE).ok()
    }
}

/// Fixed set of variables, home directory, and identity string.
#[derive(Debug, Clone, Default)]
pub struct StaticEnvironment {
    vars: HashMap<String, String>,
    home: Option<PathBuf>,
    identity: Option<String>,
}

impl StaticEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    pub fn with_identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = Some(identity.into());
        self
    }
}

impl Environment for StaticEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home.clone()
    }

    fn system_identity(&self) -> Option<String> {
        self.identity.clone()
    }
}
