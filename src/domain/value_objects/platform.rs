//! Platform target names
//!
//! A run always acts on both profiles: the sandbox side first, then the
//! native host it lives on.

/// Profile name for the WSL side
pub const SANDBOX_TARGET: &str = "wsl";

/// Profile name for the Windows host
pub const NATIVE_TARGET: &str = "windows";

/// Base name of the external backup engine
pub const ENGINE_EXECUTABLE: &str = "restic";

/// Executable name used to reach the engine for `target`.
///
/// The Windows profile is driven through WSL interop, which needs the
/// `.exe` suffix to resolve the host binary.
pub fn engine_executable_for(target: &str) -> String {
    if target == NATIVE_TARGET {
        format!("{}.exe", ENGINE_EXECUTABLE)
    } else {
        ENGINE_EXECUTABLE.to_string()
    }
}
