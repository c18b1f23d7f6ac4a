//! Common test utilities for wsl-backup CLI tests.
//!
//! `TestEnv` owns a temp directory holding the config file, rule files,
//! and optional fake engine binaries, and runs the real binary with a
//! controlled environment.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Variables that would change runtime classification on the test host.
const AMBIENT_VARS: [&str; 8] = [
    "WSL_DISTRO_NAME",
    "OS",
    "REMOTE_CONTAINERS",
    "VSCODE_REMOTE_CONTAINERS_SESSION",
    "DEVCONTAINER",
    "container",
    "BACKUP_CONFIG",
    "RUST_LOG",
];

/// Result of running the wsl-backup binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Isolated environment for one CLI test.
pub struct TestEnv {
    pub root: TempDir,
    vars: Vec<(String, String)>,
}

impl TestEnv {
    /// A WSL session with no config file yet.
    pub fn wsl() -> Self {
        Self::bare().with_var("WSL_DISTRO_NAME", "Ubuntu")
    }

    /// No runtime markers at all.
    pub fn bare() -> Self {
        let root = TempDir::new().unwrap();
        let home = root.path().join("home");
        fs::create_dir_all(&home).unwrap();
        let env = Self {
            root,
            vars: Vec::new(),
        };
        let config = env.config_path();
        env.with_var("BACKUP_CONFIG", config.to_string_lossy())
            .with_var("BACKUP_TEST_HOME", home.to_string_lossy())
            .with_var("RUST_LOG", "off")
    }

    pub fn with_var(mut self, key: &str, value: impl Into<String>) -> Self {
        self.vars.retain(|(k, _)| k != key);
        self.vars.push((key.to_string(), value.into()));
        self
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.path().join("config").join("config.yaml")
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn write_config(&self, yaml: &str) {
        self.write_file(&self.config_path(), yaml);
    }

    pub fn write_rule_file(&self, name: &str, content: &str) {
        let path = self.config_path().with_file_name("rules").join(name);
        self.write_file(&path, content);
    }

    fn write_file(&self, path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    /// Put `restic` and `restic.exe` stand-ins that echo their arguments
    /// first on PATH. Any argument equal to `fail` makes them exit 3.
    #[cfg(unix)]
    pub fn with_fake_engine(self) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let bin = self.path("bin");
        fs::create_dir_all(&bin).unwrap();
        let script = "#!/bin/sh\nfor arg in \"$@\"; do\n  if [ \"$arg\" = fail ]; then\n    echo \"Fatal: repository fail does not exist\" >&2\n    exit 3\n  fi\ndone\nprintf '%s\\n' \"engine $*\"\n";
        for name in ["restic", "restic.exe"] {
            let path = bin.join(name);
            fs::write(&path, script).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        }
        let path = bin.to_string_lossy().to_string();
        self.with_var("PATH", path)
    }

    /// An empty PATH directory, so the engine cannot be found.
    pub fn without_engine(self) -> Self {
        let empty = self.path("empty-bin");
        fs::create_dir_all(&empty).unwrap();
        let path = empty.to_string_lossy().to_string();
        self.with_var("PATH", path)
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_wsl-backup"));
        cmd.args(args).current_dir(self.root.path());
        for key in AMBIENT_VARS {
            cmd.env_remove(key);
        }
        for (key, value) in &self.vars {
            cmd.env(key, value);
        }

        let output = cmd.output().unwrap();
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// Profiles whose include sets never touch the same files.
pub const DISJOINT_CONFIG: &str = r#"
profiles:
  wsl:
    repository: /mnt/backup/wsl
    include: [/home/me]
    exclude:
      daily: [/home/me/.cache]
  windows:
    repository: 'D:\restic'
    use_fs_snapshot: true
    include: ['C:\Users\me\Documents']
"#;

/// The same Windows folder under both spellings.
pub const OVERLAPPING_CONFIG: &str = r#"
profiles:
  wsl:
    repository: /mnt/backup/wsl
    include: [/mnt/c/Users/me]
  windows:
    repository: 'D:\restic'
    include: ['C:\Users\me\Documents']
"#;
