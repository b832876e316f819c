//! Rendering of analysis reports

use markdown_inspector::Report;

use super::terminal::Colorize;

/// Output format for analysis reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Status line followed by `- ` prefixed messages
    #[default]
    Text,
    /// Pretty-printed JSON object with `success` and `messages`
    Json,
}

/// Renders a report for printing to stdout.
///
/// Text output lists the messages only when `verbose` is set or the analysis
/// failed. `color` styles the status line.
pub fn render(
    report: &Report,
    format: OutputFormat,
    verbose: bool,
    color: bool,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report, verbose, color)),
        OutputFormat::Json => serde_json::to_string_pretty(report),
    }
}

fn render_text(report: &Report, verbose: bool, color: bool) -> String {
    let status = match (report.success(), color) {
        (true, true) => "Analysis succeeded".success(),
        (true, false) => "Analysis succeeded".to_string(),
        (false, true) => "Analysis failed".warning(),
        (false, false) => "Analysis failed".to_string(),
    };

    let mut lines = vec![status];
    if verbose || !report.success() {
        lines.extend(report.messages().iter().map(|message| format!("- {message}")));
    }

    lines.join("\n")
}
