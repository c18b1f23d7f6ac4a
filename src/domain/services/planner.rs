//! Plan building
//!
//! The tool only runs inside a WSL window. From there a run acts on both
//! profiles: the WSL side and the Windows host it lives on.

use crate::domain::entities::{PrunePlan, RestorePlan, RunPlan};
use crate::domain::ports::RuntimeProbe;
use crate::domain::value_objects::{Runtime, NATIVE_TARGET, SANDBOX_TARGET};
use crate::error::{BackupError, BackupResult};

const REQUIRES_WSL: &str = "backup CLI must run inside WSL";

/// Refuse sessions the tool does not support, with a reason per case.
pub fn ensure_supported_session(probe: &dyn RuntimeProbe) -> BackupResult<Runtime> {
    if probe.in_dev_container() {
        return Err(BackupError::environment(
            "backup CLI must run from a WSL window, not from a Dev Container",
        ));
    }

    match probe.runtime() {
        Runtime::Sandboxed => Ok(Runtime::Sandboxed),
        Runtime::NativeHost => Err(BackupError::environment(
            "backup CLI must run from a WSL window, not from native Windows",
        )),
        Runtime::OtherPosix => Err(BackupError::environment(REQUIRES_WSL)),
    }
}

/// Plan a backup run for `cadence`.
pub fn build_run_plan(cadence: &str, runtime: Runtime) -> BackupResult<RunPlan> {
    if cadence.is_empty() {
        return Err(BackupError::MissingCadence);
    }
    require_sandbox(runtime)?;

    Ok(RunPlan {
        cadence: cadence.to_string(),
        targets: vec![SANDBOX_TARGET.to_string(), NATIVE_TARGET.to_string()],
    })
}

/// Plan a retention pass over both profiles.
pub fn build_prune_plan(runtime: Runtime) -> BackupResult<PrunePlan> {
    require_sandbox(runtime)?;

    Ok(PrunePlan {
        targets: vec![SANDBOX_TARGET.to_string(), NATIVE_TARGET.to_string()],
    })
}

/// Plan a restore of the WSL profile into `destination`.
pub fn build_restore_plan(runtime: Runtime, destination: &str) -> BackupResult<RestorePlan> {
    if destination.trim().is_empty() {
        return Err(BackupError::MissingRestoreTarget);
    }
    require_sandbox(runtime)?;

    Ok(RestorePlan {
        target: SANDBOX_TARGET.to_string(),
        restore_destination: destination.to_string(),
    })
}

fn require_sandbox(runtime: Runtime) -> BackupResult<()> {
    if runtime.is_sandboxed() {
        Ok(())
    } else {
        Err(BackupError::environment(REQUIRES_WSL))
    }
}
