//! Backup Use Case
//!
//! Orchestrates a backup run:
//! 1. Refuse unsupported sessions
//! 2. Plan the run (targets for the cadence)
//! 3. Load and validate configuration
//! 4. Check platform include overlap
//! 5. Build one engine invocation per target
//! 6. Dispatch them concurrently
//!
//! plus a retention pass (`forget --prune`) over both profiles and a
//! restore of the WSL profile's latest snapshot. All business logic
//! lives in domain services; this is wiring.

use std::path::PathBuf;

use serde::Serialize;

use crate::config::{load_config, validate_plan_config};
use crate::domain::entities::{ExecutionResult, Invocation};
use crate::domain::ports::{CommandExecutor, Environment, RuntimeProbe};
use crate::domain::services::{
    build_backup_invocations, build_prune_invocations, build_prune_plan, build_restore_invocation,
    build_restore_plan, build_run_plan, ensure_supported_session,
    find_platform_include_overlap_warnings,
};
use crate::error::{BackupError, BackupResult};

use super::dispatch::execute_invocations;

/// Options for a backup run
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    /// Treat platform include overlap as fatal
    pub strict_overlap: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            strict_overlap: true,
        }
    }
}

/// Outcome of a backup run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub cadence: String,
    pub targets: Vec<String>,
    pub config_path: PathBuf,
    /// False when built-in defaults were planned but not dispatched
    pub executed: bool,
    pub invocations: Vec<Invocation>,
    pub results: Vec<ExecutionResult>,
    pub warnings: Vec<String>,
}

impl RunReport {
    /// One line per concern: the run summary, then any overlap warnings.
    pub fn summary_lines(&self) -> Vec<String> {
        let headline = if self.executed {
            format!(
                "{} backup run executed for platforms={} (steps={}).",
                self.cadence,
                self.targets.join(","),
                self.results.len()
            )
        } else {
            format!(
                "{} backup run planned for platforms={} (no config file at {}; built-in defaults are not executed).",
                self.cadence,
                self.targets.join(","),
                self.config_path.display()
            )
        };

        let mut lines = Vec::with_capacity(1 + self.warnings.len());
        lines.push(headline);
        lines.extend(self.warnings.iter().cloned());
        lines
    }

    pub fn summary(&self) -> String {
        self.summary_lines().join("\n")
    }
}

/// Outcome of a retention pass
#[derive(Debug, Clone, Serialize)]
pub struct PruneReport {
    pub targets: Vec<String>,
    pub config_path: PathBuf,
    pub invocations: Vec<Invocation>,
    pub results: Vec<ExecutionResult>,
}

impl PruneReport {
    pub fn summary(&self) -> String {
        format!(
            "forget/prune executed for platforms={} (steps={}).",
            self.targets.join(","),
            self.results.len()
        )
    }
}

/// Outcome of a restore
#[derive(Debug, Clone, Serialize)]
pub struct RestoreReport {
    pub target: String,
    pub destination: String,
    pub config_path: PathBuf,
    pub invocation: Invocation,
    pub results: Vec<ExecutionResult>,
}

impl RestoreReport {
    pub fn summary(&self) -> String {
        format!(
            "restore executed for target={} (steps={}).",
            self.target,
            self.results.len()
        )
    }
}

/// Backup use case - parameterized by its ports
pub struct BackupUseCase<P, E, X>
where
    P: RuntimeProbe,
    E: Environment,
    X: CommandExecutor,
{
    probe: P,
    env: E,
    executor: X,
}

impl<P, E, X> BackupUseCase<P, E, X>
where
    P: RuntimeProbe,
    E: Environment,
    X: CommandExecutor,
{
    pub fn new(probe: P, env: E, executor: X) -> Self {
        Self {
            probe,
            env,
            executor,
        }
    }

    /// Back up every platform profile for `cadence`.
    pub fn run(&self, cadence: &str, options: &RunOptions) -> BackupResult<RunReport> {
        let runtime = ensure_supported_session(&self.probe)?;
        let plan = build_run_plan(cadence, runtime)?;
        let config = load_config(runtime, &self.env)?;
        validate_plan_config(&plan, &config)?;

        let warnings = find_platform_include_overlap_warnings(&plan, &config);
        for warning in &warnings {
            tracing::warn!("{}", warning);
        }
        if !warnings.is_empty() && options.strict_overlap {
            return Err(BackupError::OverlapStrict { warnings });
        }

        let invocations = build_backup_invocations(&plan, &config)?;

        let (executed, results) = if config.exists {
            (true, execute_invocations(&invocations, &self.executor)?)
        } else {
            tracing::warn!(
                path = %config.path.display(),
                "no config file; built-in defaults are not dispatched"
            );
            (false, Vec::new())
        };

        Ok(RunReport {
            cadence: plan.cadence,
            targets: plan.targets,
            config_path: config.path,
            executed,
            invocations,
            results,
            warnings,
        })
    }

    /// Apply each profile's retention policy to its repository.
    pub fn prune(&self) -> BackupResult<PruneReport> {
        let runtime = ensure_supported_session(&self.probe)?;
        let plan = build_prune_plan(runtime)?;
        let config = load_config(runtime, &self.env)?;
        if !config.exists {
            return Err(BackupError::ConfigRequired {
                operation: "prune",
                path: config.path,
            });
        }

        let invocations = build_prune_invocations(&plan, &config)?;
        let results = execute_invocations(&invocations, &self.executor)?;

        Ok(PruneReport {
            targets: plan.targets,
            config_path: config.path,
            invocations,
            results,
        })
    }

    /// Restore the latest WSL snapshot into `destination`.
    pub fn restore(&self, destination: &str) -> BackupResult<RestoreReport> {
        let runtime = ensure_supported_session(&self.probe)?;
        let plan = build_restore_plan(runtime, destination)?;
        let config = load_config(runtime, &self.env)?;
        if !config.exists {
            return Err(BackupError::ConfigRequired {
                operation: "restore",
                path: config.path,
            });
        }

        let invocation = build_restore_invocation(&plan, &config)?;
        let results = execute_invocations(std::slice::from_ref(&invocation), &self.executor)?;

        Ok(RestoreReport {
            target: plan.target,
            destination: plan.restore_destination,
            config_path: config.path,
            invocation,
            results,
        })
    }
}
