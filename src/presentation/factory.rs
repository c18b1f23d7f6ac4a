//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::BackupUseCase;
use crate::infrastructure::{ProcessEnvironment, SystemExecutor, SystemRuntimeProbe};

/// Type alias for the concrete BackupUseCase with all dependencies
pub type ConcreteBackupUseCase =
    BackupUseCase<SystemRuntimeProbe, ProcessEnvironment, SystemExecutor>;

/// Create a backup use case backed by the real environment and processes.
pub fn create_backup_use_case() -> ConcreteBackupUseCase {
    BackupUseCase::new(
        SystemRuntimeProbe::new(),
        ProcessEnvironment,
        SystemExecutor,
    )
}
