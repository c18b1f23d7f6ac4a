//! Error types for wsl-backup
//!
//! Library code returns [`BackupError`]; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::CommandError;

/// Result type alias for wsl-backup operations
pub type BackupResult<T> = Result<T, BackupError>;

/// Coarse classification of a [`BackupError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The process is not running in a supported environment
    Environment,
    /// Configuration is missing, malformed, or incomplete
    Config,
    /// Platform include sets overlap and strict mode is on
    OverlapStrict,
    /// The external engine failed
    Execution,
}

/// Main error type for wsl-backup operations
#[derive(Error, Debug)]
pub enum BackupError {
    /// Runtime or session precondition unmet
    #[error("{message}")]
    Environment { message: String },

    /// No override, XDG value, or home directory to place the config under
    #[error("resolve home dir: no home directory could be determined")]
    HomeResolution,

    /// Run requested without a cadence
    #[error("missing cadence")]
    MissingCadence,

    /// Restore requested without a destination
    #[error("missing target")]
    MissingRestoreTarget,

    /// Config file exists but could not be read
    #[error("read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid YAML for the schema
    #[error("parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// A referenced rule-list file exists but could not be read
    #[error("load {direction} files for profile {profile}: read path list file {path}: {source}")]
    RuleFile {
        profile: String,
        direction: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("missing profile config: {target}")]
    MissingProfile { target: String },

    #[error("missing include paths for target: {target}")]
    MissingIncludePaths { target: String },

    #[error("missing repository for target: {target}")]
    MissingRepository { target: String },

    /// The operation refuses to act on built-in defaults
    #[error("{operation} requires config file at: {}", .path.display())]
    ConfigRequired {
        operation: &'static str,
        path: PathBuf,
    },

    /// Include overlap detected while strict mode was requested
    #[error("platform include overlap detected in strict mode\n{}", .warnings.join("\n"))]
    OverlapStrict { warnings: Vec<String> },

    /// The external engine failed for one target
    #[error("{target} invocation failed: {source}")]
    Execution {
        target: String,
        #[source]
        source: CommandError,
    },
}

impl BackupError {
    /// Build an environment precondition error.
    pub fn environment(message: impl Into<String>) -> Self {
        Self::Environment {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Environment { .. } => ErrorKind::Environment,
            Self::OverlapStrict { .. } => ErrorKind::OverlapStrict,
            Self::Execution { .. } => ErrorKind::Execution,
            Self::HomeResolution
            | Self::MissingCadence
            | Self::MissingRestoreTarget
            | Self::ConfigRead { .. }
            | Self::ConfigParse { .. }
            | Self::RuleFile { .. }
            | Self::MissingProfile { .. }
            | Self::MissingIncludePaths { .. }
            | Self::MissingRepository { .. }
            | Self::ConfigRequired { .. } => ErrorKind::Config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_missing_profile() {
        let err = BackupError::MissingProfile {
            target: "windows".to_string(),
        };
        assert_eq!(err.to_string(), "missing profile config: windows");
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn test_error_display_overlap_strict_lists_warnings() {
        let err = BackupError::OverlapStrict {
            warnings: vec!["warning: a".to_string(), "warning: b".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "platform include overlap detected in strict mode\nwarning: a\nwarning: b"
        );
        assert_eq!(err.kind(), ErrorKind::OverlapStrict);
    }

    #[test]
    fn test_error_display_execution_names_target() {
        let err = BackupError::Execution {
            target: "wsl".to_string(),
            source: CommandError::Failed {
                program: "restic".to_string(),
                status: "exit status: 1".to_string(),
                output: "repository not found".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "wsl invocation failed: command failed: exit status: 1: repository not found"
        );
        assert_eq!(err.kind(), ErrorKind::Execution);
    }

    #[test]
    fn test_environment_error_is_classified() {
        let err = BackupError::environment("backup CLI must run inside WSL");
        assert_eq!(err.to_string(), "backup CLI must run inside WSL");
        assert_eq!(err.kind(), ErrorKind::Environment);
    }
}
