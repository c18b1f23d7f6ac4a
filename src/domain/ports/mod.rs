//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod command_executor;
pub mod environment;
pub mod runtime_probe;

pub use command_executor::{CommandError, CommandExecutor};
pub use environment::Environment;
pub use runtime_probe::{FixedRuntime, RuntimeProbe};
