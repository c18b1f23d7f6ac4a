//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - clap definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Report rendering

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, Commands};
pub use factory::create_backup_use_case;
pub use output::{render_prune, render_restore, render_run, OutputFormat};
