//! Reader for FASTA sequence-collection files using noodles.
//!
//! Records are delimited by a leading `>` marker; anything before the first
//! marker is discarded. Each record keeps its full header as the collection
//! key and the first whitespace-delimited token as the compact identifier
//! used in diagnostics.
//!
//! Per-record validation rejects sequences with characters outside the
//! IUPAC DNA alphabet and sequences shorter than one hexamer; rejected
//! records are diagnosed and dropped without aborting the read. Both plain
//! and gzip/bgzip compressed files are supported.

use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;
use noodles::fasta;
use tracing::{info, warn};

use crate::core::record::{SequenceCollection, SequenceRecord};
use crate::parsing::ParseError;
use crate::utils::validation::{check_record_limit, find_invalid_base, MIN_SEQUENCE_LEN};

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Read and validate every record of a sequence-collection file.
///
/// The whole file is loaded before validation; the full training and query
/// sets are held in memory for the duration of a run.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened or read,
/// `ParseError::Noodles` if record parsing fails, or
/// `ParseError::TooManyRecords` if the record limit is exceeded. Records
/// that fail validation are dropped with a diagnostic, not surfaced as
/// errors.
pub fn read_records(path: &Path) -> Result<SequenceCollection, ParseError> {
    info!(path = %path.display(), "reading sequence records");

    let file = std::fs::File::open(path)?;

    let mut text = String::new();
    if is_gzipped(path) {
        GzDecoder::new(file).read_to_string(&mut text)?;
    } else {
        std::io::BufReader::new(file).read_to_string(&mut text)?;
    }

    // The pre-marker chunk of the file carries no record and is discarded
    let start = text.find('>').unwrap_or(text.len());
    let collection = read_records_from_text(&text[start..])?;

    info!(
        path = %path.display(),
        accepted = collection.len(),
        "finished reading sequence records"
    );

    Ok(collection)
}

/// Parse records from FASTA text that starts at the first record marker
fn read_records_from_text(text: &str) -> Result<SequenceCollection, ParseError> {
    let mut reader = fasta::io::Reader::new(text.as_bytes());
    let mut collection = SequenceCollection::new();

    for result in reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        if check_record_limit(collection.len()).is_some() {
            return Err(ParseError::TooManyRecords(collection.len()));
        }

        let name = String::from_utf8_lossy(record.name());
        let header = match record.description() {
            Some(description) => {
                format!("{name} {}", String::from_utf8_lossy(description))
            }
            None => name.to_string(),
        };

        let body = String::from_utf8_lossy(record.sequence().as_ref()).to_string();
        let parsed = SequenceRecord::new(header, body);

        if let Some(invalid) = find_invalid_base(&parsed.sequence) {
            warn!(
                id = %parsed.compact_id,
                invalid = %invalid,
                "sequence contains a non-IUPAC character, record rejected"
            );
            continue;
        }

        if parsed.sequence.len() < MIN_SEQUENCE_LEN {
            warn!(
                id = %parsed.compact_id,
                length = parsed.sequence.len(),
                "sequence is shorter than one hexamer, record rejected"
            );
            continue;
        }

        info!(
            id = %parsed.compact_id,
            length = parsed.sequence.len(),
            "record accepted"
        );

        let compact_id = parsed.compact_id.clone();
        if collection.insert(parsed) {
            warn!(
                id = %compact_id,
                "duplicate identifier, previous record overwritten"
            );
        }
    }

    Ok(collection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_fasta(content: &[u8]) -> NamedTempFile {
        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(content).unwrap();
        temp.flush().unwrap();
        temp
    }

    #[test]
    fn test_read_records() {
        let temp = write_fasta(b">seq1 first record\nACGTAC\nGTACGT\n>seq2\nTTTTTT\n");

        let collection = read_records(temp.path()).unwrap();
        assert_eq!(collection.len(), 2);

        let first = collection.get("seq1 first record").unwrap();
        assert_eq!(first.compact_id, "seq1");
        assert_eq!(first.sequence, "ACGTACGTACGT");

        let second = collection.get("seq2").unwrap();
        assert_eq!(second.sequence, "TTTTTT");
    }

    #[test]
    fn test_read_records_uppercases() {
        let temp = write_fasta(b">seq1\nacgtrn.\n");

        let collection = read_records(temp.path()).unwrap();
        assert_eq!(
            collection.get("seq1").map(|r| r.sequence.as_str()),
            Some("ACGTRN.")
        );
    }

    #[test]
    fn test_read_records_rejects_invalid_alphabet() {
        let temp = write_fasta(b">bad\nACGXAC\n>good\nACGTAC\n");

        let collection = read_records(temp.path()).unwrap();
        assert_eq!(collection.len(), 1);
        assert!(collection.get("bad").is_none());
        assert!(collection.get("good").is_some());
    }

    #[test]
    fn test_read_records_rejects_short_sequence() {
        let temp = write_fasta(b">short\nACGTA\n>long\nACGTACGT\n");

        let collection = read_records(temp.path()).unwrap();
        assert_eq!(collection.len(), 1);
        assert!(collection.get("short").is_none());
    }

    #[test]
    fn test_read_records_discards_pre_marker_chunk() {
        let temp = write_fasta(b"; stray comment lines\nbefore the first marker\n>seq1\nACGTAC\n");

        let collection = read_records(temp.path()).unwrap();
        assert_eq!(collection.len(), 1);
        assert!(collection.get("seq1").is_some());
    }

    #[test]
    fn test_read_records_empty_file() {
        let temp = write_fasta(b"");
        let collection = read_records(temp.path()).unwrap();
        assert!(collection.is_empty());
    }

    #[test]
    fn test_read_records_marker_only_preamble() {
        // Only non-record text, no markers at all
        let temp = write_fasta(b"no records here\n");
        let collection = read_records(temp.path()).unwrap();
        assert!(collection.is_empty());
    }

    #[test]
    fn test_read_records_duplicate_id_last_wins() {
        let temp = write_fasta(b">dup\nAAAAAA\n>dup\nTTTTTT\n");

        let collection = read_records(temp.path()).unwrap();
        assert_eq!(collection.len(), 1);
        assert_eq!(
            collection.get("dup").map(|r| r.sequence.as_str()),
            Some("TTTTTT")
        );
    }

    #[test]
    fn test_read_records_gzipped() {
        use flate2::write::GzEncoder;
        use flate2::Compression;

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b">seq1\nACGTAC\n").unwrap();
        let compressed = encoder.finish().unwrap();

        let mut temp = NamedTempFile::with_suffix(".fa.gz").unwrap();
        temp.write_all(&compressed).unwrap();
        temp.flush().unwrap();

        let collection = read_records(temp.path()).unwrap();
        assert_eq!(collection.len(), 1);
        assert_eq!(
            collection.get("seq1").map(|r| r.sequence.as_str()),
            Some("ACGTAC")
        );
    }

    #[test]
    fn test_read_records_missing_file() {
        let result = read_records(Path::new("/nonexistent/input.fa"));
        assert!(matches!(result, Err(ParseError::Io(_))));
    }
}
