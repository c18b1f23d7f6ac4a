//! Configuration path resolution and loading

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::entities::RunPlan;
use crate::domain::ports::Environment;
use crate::domain::value_objects::{Cadence, Runtime};
use crate::error::{BackupError, BackupResult};

use super::types::{
    AppConfig, CadencePathFiles, CadencePaths, FileAppConfig, ProfileConfig, RuleDirection,
};

/// Explicit config file location
pub const CONFIG_OVERRIDE_VAR: &str = "BACKUP_CONFIG";
/// Windows per-user application data directory
pub const APP_DATA_VAR: &str = "APPDATA";
/// XDG base directory for user configuration
pub const XDG_CONFIG_VAR: &str = "XDG_CONFIG_HOME";

pub(crate) const RULES_DIR_NAME: &str = "rules";
const CONFIG_DIR_NAME: &str = "backup";
const CONFIG_FILE_NAME: &str = "config.yaml";

/// Where the config file for `runtime` lives.
///
/// `BACKUP_CONFIG` wins. Native Windows then uses `%APPDATA%`; everything
/// else (and Windows without `APPDATA`) uses `$XDG_CONFIG_HOME` or
/// `~/.config`.
pub fn resolve_config_path(runtime: Runtime, env: &dyn Environment) -> BackupResult<PathBuf> {
    if let Some(explicit) = env.non_empty_var(CONFIG_OVERRIDE_VAR) {
        return Ok(PathBuf::from(explicit));
    }

    if runtime.is_native_host() {
        if let Some(app_data) = env.non_empty_var(APP_DATA_VAR) {
            return Ok(PathBuf::from(app_data)
                .join(CONFIG_DIR_NAME)
                .join(CONFIG_FILE_NAME));
        }
    }

    if let Some(xdg) = env.non_empty_var(XDG_CONFIG_VAR) {
        return Ok(PathBuf::from(xdg).join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME));
    }

    let home = env.home_dir().ok_or(BackupError::HomeResolution)?;
    Ok(home
        .join(".config")
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME))
}

/// Resolve the config path for `runtime` and load it.
pub fn load_config(runtime: Runtime, env: &dyn Environment) -> BackupResult<AppConfig> {
    let path = resolve_config_path(runtime, env)?;
    tracing::debug!(path = %path.display(), %runtime, "resolved config path");
    load_config_from(&path)
}

/// Load the config file at `path`, or built-in defaults when it is absent.
///
/// Any read or parse failure aborts the load; a partially decoded file is
/// never returned.
pub fn load_config_from(path: &Path) -> BackupResult<AppConfig> {
    match fs::metadata(path) {
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "no config file, using built-in defaults");
            return Ok(AppConfig::defaults(path.to_path_buf()));
        }
        Err(source) => {
            return Err(BackupError::ConfigRead {
                path: path.to_path_buf(),
                source,
            })
        }
    }

    let content = fs::read_to_string(path).map_err(|source| BackupError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    let (parsed, unknown_keys) = parse_document(&content).map_err(|source| {
        BackupError::ConfigParse {
            path: path.to_path_buf(),
            source,
        }
    })?;

    for key in &unknown_keys {
        tracing::warn!(key = %key, file = %path.display(), "unknown config key ignored");
    }

    let config_dir = path.parent().unwrap_or_else(|| Path::new(""));
    let mut profiles = BTreeMap::new();
    for (name, profile) in parsed.profiles {
        let include_from_files =
            load_rule_files(&name, RuleDirection::Include, &profile.include_files, config_dir)?;
        let exclude_from_files =
            load_rule_files(&name, RuleDirection::Exclude, &profile.exclude_files, config_dir)?;

        let resolved = ProfileConfig {
            retention: profile.retention(),
            include_by_cadence: profile.include.concat(&include_from_files),
            exclude_by_cadence: profile.exclude.concat(&exclude_from_files),
            use_fs_snapshot: profile.use_fs_snapshot,
            repository: profile.repository,
        };
        profiles.insert(name, resolved);
    }

    Ok(AppConfig {
        path: path.to_path_buf(),
        exists: true,
        profiles,
        unknown_keys,
    })
}

/// Decode the YAML document, collecting keys that the schema ignores.
fn parse_document(content: &str) -> Result<(FileAppConfig, Vec<String>), serde_yaml_ng::Error> {
    if content.trim().is_empty() {
        return Ok((FileAppConfig::default(), Vec::new()));
    }

    let mut unknown_keys = Vec::new();
    let deserializer = serde_yaml_ng::Deserializer::from_str(content);
    let parsed: FileAppConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_keys.push(p.to_string());
    })?;
    Ok((parsed, unknown_keys))
}

fn load_rule_files(
    profile: &str,
    direction: RuleDirection,
    files: &CadencePathFiles,
    config_dir: &Path,
) -> BackupResult<CadencePaths> {
    let mut paths = CadencePaths::default();
    for cadence in Cadence::ALL {
        let reference = files.resolve(profile, direction, cadence);
        let resolved = if reference.is_absolute() {
            reference
        } else {
            config_dir.join(reference)
        };

        let entries = read_path_list(&resolved).map_err(|source| BackupError::RuleFile {
            profile: profile.to_string(),
            direction: direction.as_str(),
            path: resolved.clone(),
            source,
        })?;
        if !entries.is_empty() {
            tracing::debug!(
                profile,
                direction = direction.as_str(),
                cadence = cadence.as_str(),
                count = entries.len(),
                file = %resolved.display(),
                "loaded rule file"
            );
        }
        paths.set(cadence, entries);
    }
    Ok(paths)
}

/// One path per line; blank lines and `#` comments are skipped.
/// A file that does not exist is an empty list.
pub fn read_path_list(path: &Path) -> io::Result<Vec<String>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

/// Every target of `plan` must have a profile.
pub fn validate_plan_config(plan: &RunPlan, config: &AppConfig) -> BackupResult<()> {
    for target in &plan.targets {
        if config.profile(target).is_none() {
            return Err(BackupError::MissingProfile {
                target: target.clone(),
            });
        }
    }
    Ok(())
}
