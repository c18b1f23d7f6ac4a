//! Engine command-line construction
//!
//! Argument order is fixed and matches what restic expects:
//! `-r <repo> backup [--use-fs-snapshot] (--exclude <path>)* <include>...`
//! `-r <repo> forget --prune --keep-daily <n> --keep-weekly <n> --keep-monthly <n>`

use crate::config::{AppConfig, ProfileConfig};
use crate::domain::entities::{Invocation, PrunePlan, RestorePlan, RunPlan};
use crate::domain::value_objects::engine_executable_for;
use crate::error::{BackupError, BackupResult};

const REPOSITORY_FLAG: &str = "-r";
const SNAPSHOT_FLAG: &str = "--use-fs-snapshot";
const EXCLUDE_FLAG: &str = "--exclude";
const RESTORE_TARGET_FLAG: &str = "--target";

/// One backup invocation per plan target, in plan order.
pub fn build_backup_invocations(plan: &RunPlan, config: &AppConfig) -> BackupResult<Vec<Invocation>> {
    let mut invocations = Vec::with_capacity(plan.targets.len());

    for target in &plan.targets {
        let profile = require_profile(config, target)?;

        let includes = profile.include_paths(&plan.cadence);
        if includes.is_empty() {
            return Err(BackupError::MissingIncludePaths {
                target: target.clone(),
            });
        }
        let repository = require_repository(profile, target)?;

        let excludes = profile.exclude_paths(&plan.cadence);
        let mut args = Vec::with_capacity(3 + excludes.len() * 2 + includes.len() + 1);
        args.push(REPOSITORY_FLAG.to_string());
        args.push(repository.to_string());
        args.push("backup".to_string());
        if profile.use_fs_snapshot {
            args.push(SNAPSHOT_FLAG.to_string());
        }
        for exclude in excludes {
            args.push(EXCLUDE_FLAG.to_string());
            args.push(exclude.clone());
        }
        args.extend(includes.iter().cloned());

        invocations.push(Invocation {
            target: target.clone(),
            executable: engine_executable_for(target),
            args,
        });
    }

    Ok(invocations)
}

/// One retention invocation per plan target, in plan order.
pub fn build_prune_invocations(plan: &PrunePlan, config: &AppConfig) -> BackupResult<Vec<Invocation>> {
    plan.targets
        .iter()
        .map(|target| {
            let profile = require_profile(config, target)?;
            let repository = require_repository(profile, target)?;
            let retention = profile.retention;

            Ok(Invocation {
                target: target.clone(),
                executable: engine_executable_for(target),
                args: vec![
                    REPOSITORY_FLAG.to_string(),
                    repository.to_string(),
                    "forget".to_string(),
                    "--prune".to_string(),
                    "--keep-daily".to_string(),
                    retention.keep_daily.to_string(),
                    "--keep-weekly".to_string(),
                    retention.keep_weekly.to_string(),
                    "--keep-monthly".to_string(),
                    retention.keep_monthly.to_string(),
                ],
            })
        })
        .collect()
}

/// Restore the latest snapshot of the plan's target into its destination.
pub fn build_restore_invocation(plan: &RestorePlan, config: &AppConfig) -> BackupResult<Invocation> {
    let profile = require_profile(config, &plan.target)?;
    let repository = require_repository(profile, &plan.target)?;

    Ok(Invocation {
        target: plan.target.clone(),
        executable: engine_executable_for(&plan.target),
        args: vec![
            REPOSITORY_FLAG.to_string(),
            repository.to_string(),
            "restore".to_string(),
            "latest".to_string(),
            RESTORE_TARGET_FLAG.to_string(),
            plan.restore_destination.clone(),
        ],
    })
}

fn require_profile<'a>(config: &'a AppConfig, target: &str) -> BackupResult<&'a ProfileConfig> {
    config
        .profile(target)
        .ok_or_else(|| BackupError::MissingProfile {
            target: target.to_string(),
        })
}

fn require_repository<'a>(profile: &'a ProfileConfig, target: &str) -> BackupResult<&'a str> {
    if profile.repository.is_empty() {
        return Err(BackupError::MissingRepository {
            target: target.to_string(),
        });
    }
    Ok(&profile.repository)
}
