//! Runtime classification from environment signals

use crate::domain::ports::{Environment, RuntimeProbe};
use crate::domain::value_objects::Runtime;

use super::env::ProcessEnvironment;

/// Set by WSL in every distro session
pub const WSL_DISTRO_VAR: &str = "WSL_DISTRO_NAME";
/// `Windows_NT` on native Windows
pub const OS_VAR: &str = "OS";

const DEV_CONTAINER_VARS: [&str; 3] = [
    "REMOTE_CONTAINERS",
    "VSCODE_REMOTE_CONTAINERS_SESSION",
    "DEVCONTAINER",
];
const CONTAINER_VAR: &str = "container";

/// Classify the environment. First match wins:
/// `WSL_DISTRO_NAME`, then `OS=Windows_NT`, then a Microsoft/WSL kernel
/// signature in `/proc/version`.
pub fn classify_runtime(env: &dyn Environment) -> Runtime {
    if env.non_empty_var(WSL_DISTRO_VAR).is_some() {
        return Runtime::Sandboxed;
    }
    if env.var(OS_VAR).as_deref() == Some("Windows_NT") {
        return Runtime::NativeHost;
    }
    if let Some(identity) = env.system_identity() {
        let identity = identity.to_lowercase();
        if identity.contains("microsoft") || identity.contains("wsl") {
            return Runtime::Sandboxed;
        }
    }
    Runtime::OtherPosix
}

/// True inside a VS Code / devcontainer / docker / podman session.
pub fn detect_dev_container(env: &dyn Environment) -> bool {
    if DEV_CONTAINER_VARS
        .iter()
        .any(|key| env.non_empty_var(key).is_some())
    {
        return true;
    }
    matches!(
        env.var(CONTAINER_VAR)
            .map(|value| value.trim().to_lowercase())
            .as_deref(),
        Some("docker") | Some("podman")
    )
}

/// Probe backed by an [`Environment`]; the process environment by default.
#[derive(Debug, Clone, Default)]
pub struct SystemRuntimeProbe<E = ProcessEnvironment> {
    env: E,
}

impl SystemRuntimeProbe {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: Environment> SystemRuntimeProbe<E> {
    pub fn with_environment(env: E) -> Self {
        Self { env }
    }
}

impl<E: Environment> RuntimeProbe for SystemRuntimeProbe<E> {
    fn runtime(&self) -> Runtime {
        classify_runtime(&self.env)
    }

    fn in_dev_container(&self) -> bool {
        detect_dev_container(&self.env)
    }
}
