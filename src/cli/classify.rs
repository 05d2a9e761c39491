//! Classify command - score unknown sequences against two training sets.
//!
//! Classification lines go to standard output; every diagnostic goes to the
//! error stream, so stdout stays machine-parseable even when many records
//! are rejected or many hexamers are unknown to the training tables.

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::cli::OutputFormat;
use crate::core::types::Classification;
use crate::parsing::fasta;
use crate::profile::HexamerTable;
use crate::scoring::{classify, ClassificationResult};

/// Arguments for the classify command
#[derive(Args)]
pub struct ClassifyArgs {
    /// Intronic reference sequences (FASTA, optionally gzip compressed)
    #[arg(required = true)]
    pub intronic: PathBuf,

    /// Coding reference sequences (FASTA, optionally gzip compressed)
    #[arg(required = true)]
    pub coding: PathBuf,

    /// Unknown sequences to classify (FASTA, optionally gzip compressed)
    #[arg(required = true)]
    pub unknown: PathBuf,
}

/// Execute the classify command
///
/// # Errors
///
/// Returns an error if any of the three input files cannot be read; record
/// and hexamer level problems are diagnosed and recovered instead.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ClassifyArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    info!("starting hexamer analysis");

    let intronic_set = fasta::read_records(&args.intronic)?;
    let coding_set = fasta::read_records(&args.coding)?;
    let unknown_set = fasta::read_records(&args.unknown)?;

    let intronic_table = HexamerTable::build(&intronic_set);
    let coding_table = HexamerTable::build(&coding_set);

    if verbose {
        eprintln!(
            "Training tables: {} coding hexamers ({} windows), {} intronic hexamers ({} windows)",
            coding_table.len(),
            coding_table.total_windows(),
            intronic_table.len(),
            intronic_table.total_windows(),
        );
    }

    let results = classify(&unknown_set, &coding_table, &intronic_table);

    match format {
        OutputFormat::Text => print_text_results(&results),
        OutputFormat::Json => print_json_results(&results)?,
        OutputFormat::Tsv => print_tsv_results(&results),
    }

    info!("hexamer analysis complete");
    Ok(())
}

/// One line per classified record; Error results are never printed to
/// stdout, they are already diagnosed on the error stream during scoring.
fn print_text_results(results: &[ClassificationResult]) {
    for result in results {
        match result.label {
            Classification::Coding => println!("Coding {}", result.id),
            Classification::Intronic => println!("Intronic {}", result.id),
            Classification::Undetermined => {
                println!("Unable to decide if {} is or not a coding sequence", result.id);
            }
            Classification::Error => {}
        }
    }
}

fn print_json_results(results: &[ClassificationResult]) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "classifications": results,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(results: &[ClassificationResult]) {
    println!("id\tlabel\tscore");
    for result in results {
        match result.score {
            Some(score) => println!("{}\t{}\t{score:.6}", result.id, result.label),
            None => println!("{}\t{}\t", result.id, result.label),
        }
    }
}
