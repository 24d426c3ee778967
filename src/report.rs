//! Output formatting for batch translation results.
//!
//! Supports two output formats:
//! - Pretty: colored terminal output for human readability
//! - JSON: structured output for programmatic consumption

use colored::*;
use serde::{Deserialize, Serialize};

use crate::runner::{FileOutcome, FileStatus};

/// JSON report structure.
#[derive(Serialize, Deserialize)]
pub struct JsonReport {
    pub version: String,
    pub path: String,
    pub translated: usize,
    pub skipped: usize,
    pub failed: usize,
    pub files: Vec<JsonFile>,
}

/// Per-file entry in the JSON report.
#[derive(Serialize, Deserialize)]
pub struct JsonFile {
    pub input: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    pub status: FileStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated: Option<String>,
}

/// Counts by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub translated: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl Summary {
    pub fn from_outcomes(outcomes: &[FileOutcome]) -> Self {
        let mut summary = Summary::default();
        for outcome in outcomes {
            match outcome.status {
                FileStatus::Translated => summary.translated += 1,
                FileStatus::Skipped => summary.skipped += 1,
                FileStatus::Failed => summary.failed += 1,
            }
        }
        summary
    }

    pub fn passed(&self) -> bool {
        self.failed == 0
    }
}

/// Build the JSON report.
pub fn build_json(path: &str, outcomes: &[FileOutcome]) -> JsonReport {
    let summary = Summary::from_outcomes(outcomes);
    JsonReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        path: path.to_string(),
        translated: summary.translated,
        skipped: summary.skipped,
        failed: summary.failed,
        files: outcomes.iter().map(outcome_to_json).collect(),
    }
}

/// Write results in JSON format.
pub fn write_json(path: &str, outcomes: &[FileOutcome]) -> anyhow::Result<()> {
    let report = build_json(path, outcomes);
    let json = serde_json::to_string_pretty(&report)?;
    println!("{}", json);
    Ok(())
}

fn outcome_to_json(o: &FileOutcome) -> JsonFile {
    JsonFile {
        input: o.input.to_string_lossy().to_string(),
        output: o.output.as_ref().map(|p| p.to_string_lossy().to_string()),
        status: o.status,
        message: o.message.clone(),
        generated: o.generated.clone(),
    }
}

/// Write results in pretty format.
///
/// Generated text kept for stdout is printed first, then the status lines
/// go to stderr so the Go text can be piped.
pub fn write_pretty(path: &str, outcomes: &[FileOutcome]) {
    for outcome in outcomes {
        if let Some(generated) = &outcome.generated {
            print!("{}", generated);
        }
    }

    eprintln!();
    eprintln!("  {} {}", "java2go".bold(), path.dimmed());
    eprintln!();

    for outcome in outcomes {
        write_status_line(outcome);
    }

    let summary = Summary::from_outcomes(outcomes);
    eprintln!();
    write_summary(&summary);
    eprintln!();
}

fn write_status_line(outcome: &FileOutcome) {
    let input = outcome.input.to_string_lossy();
    match outcome.status {
        FileStatus::Translated => {
            eprint!("    {} {}", "✓".green(), input.blue());
            if let Some(output) = &outcome.output {
                eprint!(" {} {}", "→".dimmed(), output.to_string_lossy());
            }
            eprintln!();
        }
        FileStatus::Skipped => {
            eprintln!("    {} {}", "-".yellow(), input.blue());
        }
        FileStatus::Failed => {
            eprintln!("    {} {}", "✗".red(), input.blue());
        }
    }
    if let Some(message) = &outcome.message {
        eprintln!("      {}", message.dimmed());
    }
}

fn write_summary(summary: &Summary) {
    if summary.passed() {
        eprint!("  {}", "Translation complete".green());
    } else {
        eprint!("  {}", "Translation error".red());
    }
    eprint!("  {} translated", summary.translated.to_string().bold());
    if summary.skipped > 0 {
        eprint!(", {} skipped", summary.skipped.to_string().yellow());
    }
    if summary.failed > 0 {
        eprint!(", {} failed", summary.failed.to_string().red());
    }
    eprintln!();
}
