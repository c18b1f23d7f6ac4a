//! wsl-backup CLI - restic backups for WSL and its Windows host
//!
//! Usage: wsl-backup [--json] [-v...] <COMMAND>
//!
//! Commands:
//!   run      Back up the wsl and windows profiles for a cadence
//!   prune    Apply the retention policy to every profile
//!   restore  Restore the latest wsl snapshot into a directory

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use wsl_backup::application::RunOptions;
use wsl_backup::logging::init_logging;
use wsl_backup::presentation::{
    create_backup_use_case, render_prune, render_restore, render_run, Cli, Commands,
    OutputFormat,
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("warning: logging disabled: {}", e);
    }

    match run(cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String> {
    let format = OutputFormat::from_json_flag(cli.json);
    let use_case = create_backup_use_case();

    match cli.command {
        Commands::Run {
            cadence,
            allow_overlap,
        } => {
            let options = RunOptions {
                strict_overlap: !allow_overlap,
            };
            let report = use_case.run(cadence.as_str(), &options)?;
            render_run(&report, format).context("render run report")
        }
        Commands::Prune => {
            let report = use_case.prune()?;
            render_prune(&report, format).context("render prune report")
        }
        Commands::Restore { destination } => {
            let report = use_case.restore(&destination)?;
            render_restore(&report, format).context("render restore report")
        }
    }
}
