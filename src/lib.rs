//! # hexascan
//!
//! A library for classifying nucleotide sequences as coding or non-coding
//! (intronic) using hexamer log-odds.
//!
//! Protein-coding regions have a characteristic 6-base ("hexamer")
//! composition that intronic sequence lacks. `hexascan` trains two frequency
//! models from labeled reference sets, then scores each unknown sequence by
//! the mean `log2(coding_freq / intronic_freq)` over its in-frame hexamer
//! windows: positive means coding, negative means intronic, exactly zero is
//! reported as undecidable.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use hexascan::parsing::fasta::read_records;
//! use hexascan::{classify, HexamerTable};
//!
//! // Train the two frequency models from labeled reference sets
//! let coding = HexamerTable::build(&read_records(Path::new("exons.fa")).unwrap());
//! let intronic = HexamerTable::build(&read_records(Path::new("introns.fa")).unwrap());
//!
//! // Score the unknowns
//! let unknown = read_records(Path::new("unknowns.fa")).unwrap();
//! for result in classify(&unknown, &coding, &intronic) {
//!     println!("{}: {:?}", result.id, result.label);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Core data types for sequence records and classifications
//! - [`parsing`]: Validated FASTA record reading
//! - [`profile`]: Hexamer frequency table construction
//! - [`scoring`]: Log-odds scoring and classification
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod parsing;
pub mod profile;
pub mod scoring;
pub mod utils;

// Re-export commonly used types for convenience
pub use core::record::{SequenceCollection, SequenceRecord};
pub use core::types::Classification;
pub use profile::HexamerTable;
pub use scoring::{classify, ClassificationResult};
