//! Home directory resolution with test isolation support.
//!
//! On Windows, `dirs::home_dir()` uses the Windows system API (`SHGetKnownFolderPath`)
//! rather than environment variables, so setting `HOME` or `USERPROFILE` in a
//! child process has no effect there.
//!
//! `backup_home_dir()` checks `BACKUP_TEST_HOME` first and falls back to
//! `dirs::home_dir()`. Config path resolution goes through this function.

use std::path::PathBuf;

/// Environment variable for test isolation of the home directory.
pub const BACKUP_TEST_HOME_VAR: &str = "BACKUP_TEST_HOME";

/// Get the home directory used for the default config location.
///
/// # Returns
///
/// - `Some(PathBuf)` - The home directory path
/// - `None` - If neither `BACKUP_TEST_HOME` is set nor system home can be resolved
pub fn backup_home_dir() -> Option<PathBuf> {
    std::env::var(BACKUP_TEST_HOME_VAR)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}
