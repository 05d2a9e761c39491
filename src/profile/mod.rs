//! Hexamer frequency profiling.
//!
//! A training set is reduced to a table mapping each observed in-frame
//! hexamer to its relative frequency across the whole collection. Windows
//! are 6 bases wide and advance 3 bases at a time, so each window spans two
//! consecutive codon positions rather than every possible offset.

use std::collections::HashMap;

use serde::Serialize;
use tracing::info;

use crate::core::record::SequenceCollection;

/// Width of a scoring window, in bases
pub const HEXAMER_LEN: usize = 6;

/// Step between consecutive windows: one codon
pub const FRAME_STEP: usize = 3;

/// Safely convert a window count to f64 for frequency calculations
///
/// Window counts in practice are far below the f64 mantissa limit, so the
/// precision loss allowed here never materializes.
#[inline]
fn count_to_f64(count: u64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Iterate the in-frame hexamer windows of a sequence.
///
/// Yields the window at positions 0, 3, 6, ... and stops as soon as a full
/// window no longer fits; a trailing partial window is never padded.
pub fn frame_windows(sequence: &str) -> impl Iterator<Item = &str> {
    (0..sequence.len().saturating_sub(HEXAMER_LEN - 1))
        .step_by(FRAME_STEP)
        .map(move |i| &sequence[i..i + HEXAMER_LEN])
}

/// Relative frequencies of the hexamers observed in one training set.
///
/// Only observed hexamers are present; the table is never zero-filled over
/// the 4^6 universe. A collection with no extractable windows yields an
/// empty table with a zero total, no frequency is computed for it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HexamerTable {
    frequencies: HashMap<String, f64>,
    total_windows: u64,
}

impl HexamerTable {
    /// Count in-frame hexamers across every record of a collection and
    /// normalize by the collection-wide window total.
    ///
    /// The denominator is shared across all records, so longer or more
    /// numerous training sequences dominate the normalization.
    #[must_use]
    pub fn build(collection: &SequenceCollection) -> Self {
        let mut counts: HashMap<String, u64> = HashMap::new();
        let mut total: u64 = 0;

        for record in collection.iter() {
            for window in frame_windows(&record.sequence) {
                *counts.entry(window.to_string()).or_insert(0) += 1;
                total += 1;
            }
        }

        let frequencies = if total == 0 {
            HashMap::new()
        } else {
            counts
                .into_iter()
                .map(|(hexamer, count)| (hexamer, count_to_f64(count) / count_to_f64(total)))
                .collect()
        };

        info!(
            records = collection.len(),
            total_windows = total,
            distinct_hexamers = frequencies.len(),
            "hexamer counting complete"
        );

        Self {
            frequencies,
            total_windows: total,
        }
    }

    /// Frequency of a hexamer, or `None` if it was never observed
    #[must_use]
    pub fn frequency(&self, hexamer: &str) -> Option<f64> {
        self.frequencies.get(hexamer).copied()
    }

    #[must_use]
    pub fn contains(&self, hexamer: &str) -> bool {
        self.frequencies.contains_key(hexamer)
    }

    /// Number of distinct hexamers observed
    #[must_use]
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Grand total of windows counted across the collection
    #[must_use]
    pub fn total_windows(&self) -> u64 {
        self.total_windows
    }

    /// Entries sorted by descending frequency, ties broken lexicographically
    #[must_use]
    pub fn sorted_entries(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<(&str, f64)> = self
            .frequencies
            .iter()
            .map(|(hexamer, freq)| (hexamer.as_str(), *freq))
            .collect();

        entries.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });

        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::SequenceRecord;

    fn collection(records: &[(&str, &str)]) -> SequenceCollection {
        records
            .iter()
            .map(|(id, seq)| SequenceRecord::new(*id, *seq))
            .collect()
    }

    #[test]
    fn test_frame_windows_step_three() {
        let windows: Vec<&str> = frame_windows("AAACCCGGGTTT").collect();
        assert_eq!(windows, vec!["AAACCC", "CCCGGG", "GGGTTT"]);
    }

    #[test]
    fn test_frame_windows_stops_at_partial() {
        // Positions 0 and 3 fit; position 6 would need 12 bases
        let windows: Vec<&str> = frame_windows("AAACCCGGGTT").collect();
        assert_eq!(windows, vec!["AAACCC", "CCCGGG"]);
    }

    #[test]
    fn test_frame_windows_exact_and_short() {
        assert_eq!(frame_windows("ACGTAC").count(), 1);
        assert_eq!(frame_windows("ACGTA").count(), 0);
        assert_eq!(frame_windows("").count(), 0);
    }

    #[test]
    fn test_build_single_hexamer() {
        let table = HexamerTable::build(&collection(&[("s1", "AAAAAA")]));
        assert_eq!(table.total_windows(), 1);
        assert_eq!(table.frequency("AAAAAA"), Some(1.0));
        assert!(table.frequency("TTTTTT").is_none());
    }

    #[test]
    fn test_build_shared_denominator() {
        // Three windows from s1, one from s2: four in total
        let table = HexamerTable::build(&collection(&[
            ("s1", "AAAAAAAAAAAA"), // AAAAAA at 0, 3, 6
            ("s2", "TTTTTT"),
        ]));

        assert_eq!(table.total_windows(), 4);
        assert!((table.frequency("AAAAAA").unwrap() - 0.75).abs() < 1e-12);
        assert!((table.frequency("TTTTTT").unwrap() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_build_frequencies_sum_to_one() {
        let table = HexamerTable::build(&collection(&[
            ("s1", "ACGTACGTACGTACGT"),
            ("s2", "GGGCCCAAATTTGGG"),
            ("s3", "NNNNNNNNN"),
        ]));

        let sum: f64 = table.sorted_entries().iter().map(|(_, f)| f).sum();
        assert!((sum - 1.0).abs() < 1e-9, "frequencies sum to {sum}");
    }

    #[test]
    fn test_build_empty_collection() {
        let table = HexamerTable::build(&SequenceCollection::new());
        assert!(table.is_empty());
        assert_eq!(table.total_windows(), 0);
    }

    #[test]
    fn test_sorted_entries_order() {
        let table = HexamerTable::build(&collection(&[
            ("s1", "AAAAAAAAAAAA"), // AAAAAA x3
            ("s2", "CCCCCC"),
            ("s3", "TTTTTT"),
        ]));

        let order: Vec<&str> = table.sorted_entries().iter().map(|(h, _)| *h).collect();
        assert_eq!(order, vec!["AAAAAA", "CCCCCC", "TTTTTT"]);
    }
}
