//! Shared output formatting for analysis reports.

use anyhow::Result;
use std::fmt::Write as _;
use std::io::IsTerminal;
use tulip_lint_core::{AnalysisReport, Status};

use crate::OutputFormat;

/// Print a report in the specified format.
pub fn print(report: &AnalysisReport, format: OutputFormat) -> Result<()> {
    let color = std::io::stdout().is_terminal();
    print!("{}", render(report, format, color)?);
    Ok(())
}

/// Render a report in the specified format.
///
/// `color` only affects text output.
pub fn render(report: &AnalysisReport, format: OutputFormat, color: bool) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => render_text(report, color),
        OutputFormat::Json => render_json(report)?,
        OutputFormat::Compact => render_compact(report),
    })
}

fn render_text(report: &AnalysisReport, color: bool) -> String {
    let mut out = String::new();

    for result in &report.results {
        let status = match (color, result.status) {
            (false, status) => status.to_string(),
            (true, Status::Pass) => "\x1b[32mPass\x1b[0m".to_string(),
            (true, Status::Fail) => "\x1b[31mFail\x1b[0m".to_string(),
        };

        let _ = writeln!(out, "{}: {status}", result.name);
        for detail in &result.details {
            let _ = writeln!(out, "  {detail}");
        }
        out.push('\n');
    }

    let (passed, failed) = report.count_by_status();
    let summary = format!(
        "{passed} passed, {failed} failed ({} triggers resolved, {} steps)",
        report.triggers_resolved, report.steps_checked
    );
    let summary_color = if failed > 0 { "\x1b[31m" } else { "\x1b[32m" };

    if color {
        let _ = writeln!(out, "{summary_color}{summary}\x1b[0m");
    } else {
        let _ = writeln!(out, "{summary}");
    }

    out
}

fn render_json(report: &AnalysisReport) -> Result<String> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}

fn render_compact(report: &AnalysisReport) -> String {
    let mut out = String::new();
    for result in &report.results {
        for detail in &result.details {
            let _ = writeln!(out, "{} {}: {detail}", result.code, result.status);
        }
    }
    out
}
