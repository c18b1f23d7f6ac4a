//! Environment port - read-only view of process environment signals
//!
//! Runtime classification and config path resolution read everything they
//! need through this trait, so tests never touch the real process
//! environment.

use std::path::PathBuf;

/// Read-only access to environment variables and host identification.
pub trait Environment {
    /// Raw value of an environment variable, `None` when unset.
    fn var(&self, key: &str) -> Option<String>;

    /// The user's home directory, if one can be determined.
    fn home_dir(&self) -> Option<PathBuf>;

    /// Contents of the kernel identification file (`/proc/version`).
    fn system_identity(&self) -> Option<String>;

    /// Value of `key` when set to something other than the empty string.
    fn non_empty_var(&self, key: &str) -> Option<String> {
        self.var(key).filter(|value| !value.is_empty())
    }
}
