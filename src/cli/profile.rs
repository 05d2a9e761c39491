//! Profile command - build and print a hexamer frequency table.
//!
//! Useful for inspecting what a training set actually teaches the
//! classifier before running a classification.

use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::parsing::fasta;
use crate::profile::HexamerTable;

/// Arguments for the profile command
#[derive(Args)]
pub struct ProfileArgs {
    /// Training sequences to profile (FASTA, optionally gzip compressed)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Print at most this many hexamers (all by default)
    #[arg(short = 'n', long)]
    pub top: Option<usize>,
}

/// Execute the profile command
///
/// # Errors
///
/// Returns an error if the input file cannot be read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ProfileArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let collection = fasta::read_records(&args.input)?;
    let table = HexamerTable::build(&collection);

    if verbose {
        eprintln!(
            "Profiled {} records: {} distinct hexamers over {} windows",
            collection.len(),
            table.len(),
            table.total_windows(),
        );
    }

    let limit = args.top.unwrap_or(usize::MAX);
    let entries: Vec<(&str, f64)> = table.sorted_entries().into_iter().take(limit).collect();

    match format {
        OutputFormat::Text => {
            println!(
                "{} distinct hexamers, {} windows",
                table.len(),
                table.total_windows()
            );
            for (hexamer, freq) in &entries {
                println!("   {hexamer}  {freq:.6}");
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "input": args.input.display().to_string(),
                "total_windows": table.total_windows(),
                "distinct_hexamers": table.len(),
                "frequencies": entries
                    .iter()
                    .map(|(hexamer, freq)| serde_json::json!({ "hexamer": hexamer, "frequency": freq }))
                    .collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("hexamer\tfrequency");
            for (hexamer, freq) in &entries {
                println!("{hexamer}\t{freq:.6}");
            }
        }
    }

    Ok(())
}
