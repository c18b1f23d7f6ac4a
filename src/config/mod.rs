//! Configuration module
//!
//! Resolution order for the config file:
//! 1. `BACKUP_CONFIG` (explicit path)
//! 2. `%APPDATA%\backup\config.yaml` (native Windows only)
//! 3. `$XDG_CONFIG_HOME/backup/config.yaml`
//! 4. `~/.config/backup/config.yaml`
//!
//! A missing file means built-in defaults. Per-profile include/exclude
//! lists are the inline YAML values followed by the contents of the
//! profile's rule-list files.

mod loader;
mod types;

pub use loader::{
    load_config, load_config_from, read_path_list, resolve_config_path, validate_plan_config,
    APP_DATA_VAR, CONFIG_OVERRIDE_VAR, XDG_CONFIG_VAR,
};
pub use types::{
    default_rule_file, AppConfig, CadencePathFiles, CadencePaths, ProfileConfig, RetentionPolicy,
    RuleDirection, DEFAULT_REPOSITORY_HINT,
};
