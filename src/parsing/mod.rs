//! Parsers for sequence-collection files.

pub mod fasta;

use thiserror::Error;

use crate::utils::validation::MAX_RECORDS;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Too many records: {0} exceeds maximum allowed ({max})", max = MAX_RECORDS)]
    TooManyRecords(usize),
}
