//! Output Rendering
//!
//! Reports render either as summary lines or as a JSON document.

use serde::Serialize;

use crate::application::{PruneReport, RestoreReport, RunReport};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

#[derive(Serialize)]
struct JsonRun<'a> {
    command: &'static str,
    summary: Vec<String>,
    #[serde(flatten)]
    report: &'a RunReport,
}

#[derive(Serialize)]
struct JsonPrune<'a> {
    command: &'static str,
    summary: String,
    #[serde(flatten)]
    report: &'a PruneReport,
}

#[derive(Serialize)]
struct JsonRestore<'a> {
    command: &'static str,
    summary: String,
    #[serde(flatten)]
    report: &'a RestoreReport,
}

pub fn render_run(report: &RunReport, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(report.summary()),
        OutputFormat::Json => serde_json::to_string_pretty(&JsonRun {
            command: "run",
            summary: report.summary_lines(),
            report,
        }),
    }
}

pub fn render_prune(report: &PruneReport, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(report.summary()),
        OutputFormat::Json => serde_json::to_string_pretty(&JsonPrune {
            command: "prune",
            summary: report.summary(),
            report,
        }),
    }
}

pub fn render_restore(report: &RestoreReport, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(report.summary()),
        OutputFormat::Json => serde_json::to_string_pretty(&JsonRestore {
            command: "restore",
            summary: report.summary(),
            report,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ExecutionResult, Invocation};
    use std::path::PathBuf;

    fn report() -> RunReport {
        RunReport {
            cadence: "daily".to_string(),
            targets: vec!["wsl".to_string(), "windows".to_string()],
            config_path: PathBuf::from("/cfg/config.yaml"),
            executed: true,
            invocations: vec![Invocation {
                target: "wsl".to_string(),
                executable: "restic".to_string(),
                args: vec!["-r".to_string(), "/repo".to_string(), "backup".to_string()],
            }],
            results: vec![
                ExecutionResult {
                    target: "wsl".to_string(),
                    output: "ok".to_string(),
                },
                ExecutionResult {
                    target: "windows".to_string(),
                    output: "ok".to_string(),
                },
            ],
            warnings: vec![],
        }
    }

    #[test]
    fn text_output_is_summary() {
        let text = render_run(&report(), OutputFormat::Text).unwrap();
        insta::assert_snapshot!(text, @"daily backup run executed for platforms=wsl,windows (steps=2).");
    }

    #[test]
    fn json_output_carries_command_and_report() {
        let json = render_run(&report(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["command"], "run");
        assert_eq!(value["cadence"], "daily");
        assert_eq!(value["executed"], true);
        assert_eq!(value["results"][1]["target"], "windows");
        assert_eq!(
            value["summary"][0],
            "daily backup run executed for platforms=wsl,windows (steps=2)."
        );
    }

    #[test]
    fn prune_json_lists_invocations() {
        let run = report();
        let prune = PruneReport {
            targets: run.targets.clone(),
            config_path: run.config_path.clone(),
            invocations: run.invocations.clone(),
            results: run.results.clone(),
        };
        insta::assert_snapshot!(
            render_prune(&prune, OutputFormat::Text).unwrap(),
            @"forget/prune executed for platforms=wsl,windows (steps=2)."
        );

        let json = render_prune(&prune, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["command"], "prune");
        assert_eq!(value["invocations"][0]["executable"], "restic");
        assert_eq!(value["config_path"], "/cfg/config.yaml");
    }

    #[test]
    fn format_from_flag() {
        assert_eq!(OutputFormat::from_json_flag(true), OutputFormat::Json);
        assert_eq!(OutputFormat::from_json_flag(false), OutputFormat::Text);
    }
}
