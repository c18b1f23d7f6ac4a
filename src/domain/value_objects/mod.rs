//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod cadence;
mod platform;
mod runtime;

pub use cadence::Cadence;
pub use platform::{engine_executable_for, ENGINE_EXECUTABLE, NATIVE_TARGET, SANDBOX_TARGET};
pub use runtime::Runtime;
