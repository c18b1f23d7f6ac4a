//! Runtime value object - where the current process is executing

/// Classification of the execution environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Runtime {
    /// Linux sandbox on a Windows host (WSL)
    Sandboxed,
    /// Native Windows
    NativeHost,
    /// Any other POSIX system
    OtherPosix,
}

impl Runtime {
    pub fn is_sandboxed(&self) -> bool {
        matches!(self, Runtime::Sandboxed)
    }

    pub fn is_native_host(&self) -> bool {
        matches!(self, Runtime::NativeHost)
    }

    /// Short platform label used in logs
    pub fn label(&self) -> &'static str {
        match self {
            Runtime::Sandboxed => "wsl",
            Runtime::NativeHost => "windows",
            Runtime::OtherPosix => "linux",
        }
    }
}

impl std::fmt::Display for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
