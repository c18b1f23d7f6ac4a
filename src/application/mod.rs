//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `BackupUseCase` - Orchestrates backup runs and restores
//!
//! ## Services
//!
//! - `execute_invocations` - Concurrent dispatch with first-by-index failure

pub mod backup;
pub mod dispatch;

pub use backup::{BackupUseCase, PruneReport, RestoreReport, RunOptions, RunReport};
pub use dispatch::execute_invocations;
