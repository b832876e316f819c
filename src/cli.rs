use std::path::PathBuf;

mod output;
mod terminal;

use anyhow::Context;
use clap::ArgAction;
use markdown_inspector::Analyzer;
use output::OutputFormat;
use tracing::instrument;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Path to the outline specification (JSON, YAML or TOML)
    #[arg(long, value_name = "PATH")]
    config: PathBuf,

    /// Path to the markdown file to analyze
    #[arg(long, value_name = "PATH")]
    target: PathBuf,

    /// Show all messages, even on success (-vv, -vvv also enable logging)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Format for the output
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    output_format: OutputFormat,
}

impl Cli {
    /// Runs the analysis and prints the report.
    ///
    /// Returns whether the document satisfied the outline.
    pub fn run(self) -> anyhow::Result<bool> {
        Self::setup_logging(self.verbose);
        self.analyze()
    }

    #[instrument(
        level = "debug",
        skip(self),
        fields(config = %self.config.display(), target = %self.target.display())
    )]
    fn analyze(self) -> anyhow::Result<bool> {
        let analyzer = Analyzer::from_path(&self.config).with_context(|| {
            format!(
                "failed to load outline specification {}",
                self.config.display()
            )
        })?;

        let report = analyzer
            .analyze_file(&self.target)
            .with_context(|| format!("failed to read {}", self.target.display()))?;

        let color = self.output_format == OutputFormat::Text && terminal::supports_color();
        let rendered = output::render(&report, self.output_format, self.verbose > 0, color)?;
        println!("{rendered}");

        Ok(report.success())
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        // A single -v only affects which messages are printed.
        let level = match verbosity {
            0 | 1 => tracing::Level::WARN,
            2 => tracing::Level::INFO,
            3 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}
