//! File system helpers

mod home;

pub use home::{backup_home_dir, BACKUP_TEST_HOME_VAR};
