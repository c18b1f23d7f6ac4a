//! CLI Argument Parsing
//!
//! Global flags (`--json`, `--verbose`) are inherited by all subcommands.

use clap::{Parser, Subcommand};

use crate::domain::value_objects::Cadence;

/// wsl-backup - plan and run restic backups for WSL and its Windows host
#[derive(Parser, Debug)]
#[command(name = "wsl-backup")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Run from a WSL window. A run backs up both the wsl and windows profiles in parallel.\nPlatform include overlap is fatal unless --allow-overlap is given."
)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Back up the wsl and windows profiles for a cadence
    Run {
        /// Which rule set to apply
        #[arg(value_enum)]
        cadence: Cadence,

        /// Report platform include overlap as warnings instead of failing
        #[arg(long)]
        allow_overlap: bool,
    },

    /// Apply the retention policy (forget --prune) to every profile
    Prune,

    /// Restore the latest wsl snapshot into a directory
    Restore {
        /// Destination directory for restored files
        destination: String,
    },
}
