//! # disadv-cli
//!
//! CLI for compiling shipment records into EDIFACT DISADV messages.
//!
//! This binary is the external collaborator around the compiler core: it
//! acquires the input record from a JSON file, runs compilation, and
//! writes the resulting message text to disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use disadv_compiler::{DisadvCompiler, TracingObserver};
use disadv_model::ShipmentRecord;

#[derive(Parser)]
#[command(name = "disadv")]
#[command(about = "EDIFACT DISADV dispatch advice compiler")]
#[command(version)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
enum Commands {
    /// Compile a shipment record into a DISADV message file
    Generate {
        /// Shipment record JSON file
        input: PathBuf,

        /// Output file path (defaults to disadv.edi)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a shipment record without generating output
    Validate {
        /// Shipment record JSON file
        input: PathBuf,
    },
}

fn read_record(path: &Path) -> anyhow::Result<ShipmentRecord> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read record from {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("failed to parse shipment record from {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { input, output } => {
            let record = read_record(&input)?;
            let compiled = DisadvCompiler::new()
                .compile(&record, &TracingObserver)
                .context("compilation failed")?;

            let output = output.unwrap_or_else(|| PathBuf::from("disadv.edi"));
            fs::write(&output, &compiled.text)
                .with_context(|| format!("failed to write message to {}", output.display()))?;

            tracing::info!(
                "DISADV message saved to {} ({} segments, total weight {:.2} kg)",
                output.display(),
                compiled.segment_count,
                compiled.total_weight
            );
            if !compiled.report.is_clean() {
                tracing::warn!(
                    "{} entr(ies) skipped, {} warning(s); see report for details",
                    compiled.report.skipped_entries(),
                    compiled.report.warnings.len()
                );
            }
            Ok(())
        }
        Commands::Validate { input } => {
            let record = read_record(&input)?;
            disadv_compiler::validate(&record, &TracingObserver)
                .context("record failed validation")?;
            tracing::info!("{} is a valid shipment record", input.display());
            Ok(())
        }
    }
}
