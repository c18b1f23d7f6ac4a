//! wsl-backup - restic backups for a WSL distribution and its Windows host
//!
//! A run plans one backup per platform profile (`wsl`, `windows`), loads
//! per-cadence include/exclude rules from YAML, refuses include sets that
//! cover the same files from both sides, and runs the engine for both
//! profiles concurrently.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{BackupUseCase, PruneReport, RestoreReport, RunOptions, RunReport};
pub use config::{load_config, AppConfig, CadencePaths, ProfileConfig};
pub use domain::value_objects::{Cadence, Runtime};
pub use error::{BackupError, BackupResult, ErrorKind};
