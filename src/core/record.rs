use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A validated nucleotide sequence record parsed from a reference or query file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceRecord {
    /// Full header text with the record marker stripped
    pub id: String,

    /// First whitespace-delimited token of the header, used for display
    /// and diagnostics
    pub compact_id: String,

    /// Nucleotide sequence, uppercased on construction
    pub sequence: String,
}

impl SequenceRecord {
    /// Create a record from a header and a raw sequence body.
    ///
    /// The sequence is uppercased here; alphabet and length validation is
    /// the parser's responsibility, so records built directly may violate
    /// the invariants the parser enforces.
    pub fn new(id: impl Into<String>, sequence: impl Into<String>) -> Self {
        let id = id.into();
        let compact_id = id
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_string();
        let sequence = sequence.into().to_ascii_uppercase();

        Self {
            id,
            compact_id,
            sequence,
        }
    }
}

/// An insertion-ordered collection of sequence records keyed by full header.
///
/// Iteration order is insertion order, so classification output is
/// reproducible across runs. Inserting a record whose id is already present
/// replaces the previous record in place (last write wins) and keeps the
/// original position.
#[derive(Debug, Clone, Default)]
pub struct SequenceCollection {
    records: Vec<SequenceRecord>,
    index: HashMap<String, usize>,
}

impl SequenceCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any existing record with the same id.
    ///
    /// Returns `true` when an existing record was overwritten, so callers
    /// can diagnose the collision.
    pub fn insert(&mut self, record: SequenceRecord) -> bool {
        if let Some(&pos) = self.index.get(&record.id) {
            self.records[pos] = record;
            true
        } else {
            self.index.insert(record.id.clone(), self.records.len());
            self.records.push(record);
            false
        }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&SequenceRecord> {
        self.index.get(id).map(|&pos| &self.records[pos])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &SequenceRecord> {
        self.records.iter()
    }
}

impl FromIterator<SequenceRecord> for SequenceCollection {
    fn from_iter<I: IntoIterator<Item = SequenceRecord>>(iter: I) -> Self {
        let mut collection = Self::new();
        for record in iter {
            collection.insert(record);
        }
        collection
    }
}
