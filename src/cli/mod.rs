//! Command-line interface for hexascan.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **classify**: Label unknown sequences as coding or intronic using two
//!   training sets
//! - **profile**: Build and print the hexamer frequency table of one
//!   training set
//!
//! ## Usage
//!
//! ```text
//! # Classify unknowns against intronic and coding references
//! hexascan classify introns.fa exons.fa unknowns.fa
//!
//! # JSON output for scripting
//! hexascan classify introns.fa exons.fa unknowns.fa --format json
//!
//! # Inspect a training set's hexamer frequencies
//! hexascan profile exons.fa --format tsv
//! ```

use clap::{Parser, Subcommand};

pub mod classify;
pub mod profile;

#[derive(Parser)]
#[command(name = "hexascan")]
#[command(version)]
#[command(about = "Classify nucleotide sequences as coding or intronic using hexamer log-odds")]
#[command(
    long_about = "hexascan compares the in-frame hexamers of unknown nucleotide sequences against two empirically trained frequency models.\n\nEach unknown sequence is scored with the mean log2 ratio of coding to intronic hexamer frequency; a positive score labels it Coding, a negative score Intronic, and an exactly zero score is reported as undecidable."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify unknown sequences against coding and intronic references
    Classify(classify::ClassifyArgs),

    /// Print the hexamer frequency table of a training set
    Profile(profile::ProfileArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
