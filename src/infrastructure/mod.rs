//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `env` - Environment readers (process, static)
//! - `fs/` - Home directory resolution
//! - `process` - Child-process command executor
//! - `runtime` - Runtime classification and the system probe

pub mod env;
pub mod fs;
pub mod process;
pub mod runtime;

// Re-export for convenience
pub use env::{ProcessEnvironment, StaticEnvironment};
pub use process::SystemExecutor;
pub use runtime::{classify_runtime, detect_dev_container, SystemRuntimeProbe};
