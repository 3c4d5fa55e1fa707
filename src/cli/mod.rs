//! Command-line interface for chunkmill
//!
//! Running `chunkmill` with no arguments processes the configured input file
//! into the configured output file. Flags only adjust logging and where the
//! configuration comes from.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod output;

pub use output::Output;

use crate::config::ChunkmillConfig;
use crate::pipeline::{self, PipelineError};

/// chunkmill - uppercase a text file in parallel chunks
#[derive(Parser)]
#[command(
    name = "chunkmill",
    version = env!("CARGO_PKG_VERSION"),
    about = "Split a text file into chunks, transform them on isolated worker threads, and reassemble the output in order",
    long_about = None
)]
pub struct Cli {
    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Use custom configuration file
    #[arg(long, value_name = "FILE", env = "CHUNKMILL_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);

        let output = Output::new(self.quiet);
        let config = ChunkmillConfig::load_with_custom_config(self.config.as_deref())?;

        match pipeline::process_file(&config.io.input, &config.io.output).await {
            Ok(summary) => {
                tracing::info!(
                    "Processed {} chunks ({} -> {} bytes)",
                    summary.chunks,
                    summary.input_bytes,
                    summary.output_bytes
                );
                output.success(&format!(
                    "File processed successfully! Output saved to: {}",
                    summary.output.display()
                ));
            }
            Err(err) => report_failure(&output, &err),
        }

        // Failures are reported, never escalated to a crash
        Ok(())
    }
}

fn report_failure(output: &Output, err: &PipelineError) {
    if err.is_not_found() {
        output.error(&format!("Error: {err}"));
    } else {
        output.error(&format!("Unexpected error: {err}"));
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    // stdout is reserved for user-facing messages
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
