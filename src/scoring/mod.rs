//! Log-odds classification of unknown sequences.
//!
//! Each unknown sequence is scanned with the same in-frame windows used for
//! profiling. Every window present in both training tables contributes
//! `log2(coding_freq / intronic_freq)` to a running score; the mean over all
//! extracted windows decides the label by strict sign comparison.

use serde::Serialize;
use tracing::{debug, warn};

use crate::core::record::{SequenceCollection, SequenceRecord};
use crate::core::types::Classification;
use crate::profile::{frame_windows, HexamerTable};

/// Safely convert a window count to f64 for the length normalization
#[inline]
fn count_to_f64(count: u64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Classification outcome for a single unknown sequence
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationResult {
    /// Compact identifier of the classified record
    pub id: String,

    /// Tri-state label, or `Error` for degenerate scoring
    pub label: Classification,

    /// Mean per-window log-odds score; `None` when scoring failed
    pub score: Option<f64>,
}

/// Classify every record of `unknown`, in collection iteration order.
///
/// Per-record failures are reported as `Classification::Error` results and
/// never abort the pass over the remaining records.
#[must_use]
pub fn classify(
    unknown: &SequenceCollection,
    coding: &HexamerTable,
    intronic: &HexamerTable,
) -> Vec<ClassificationResult> {
    unknown
        .iter()
        .map(|record| score_record(record, coding, intronic))
        .collect()
}

/// Score one record against the two training tables.
///
/// `n_hexamers` counts every extracted window, including windows that are
/// skipped because one of the tables has never seen them; only the score
/// accumulation is restricted to hexamers known to both models.
pub fn score_record(
    record: &SequenceRecord,
    coding: &HexamerTable,
    intronic: &HexamerTable,
) -> ClassificationResult {
    let mut n_hexamers: u64 = 0;
    let mut score = 0.0_f64;

    for window in frame_windows(&record.sequence) {
        n_hexamers += 1;

        match (coding.frequency(window), intronic.frequency(window)) {
            (Some(coding_freq), Some(intronic_freq)) => {
                score += (coding_freq / intronic_freq).log2();
            }
            _ => {
                warn!(
                    id = %record.compact_id,
                    hexamer = %window,
                    "hexamer absent from a training table, skipped"
                );
            }
        }
    }

    if n_hexamers == 0 {
        warn!(
            id = %record.compact_id,
            "no hexamer windows could be extracted, cannot score"
        );
        return ClassificationResult {
            id: record.compact_id.clone(),
            label: Classification::Error,
            score: None,
        };
    }

    let hexamer_score = score / count_to_f64(n_hexamers);

    if !hexamer_score.is_finite() {
        warn!(
            id = %record.compact_id,
            "non-finite score, cannot classify"
        );
        return ClassificationResult {
            id: record.compact_id.clone(),
            label: Classification::Error,
            score: None,
        };
    }

    debug!(
        id = %record.compact_id,
        n_hexamers,
        score = hexamer_score,
        "record scored"
    );

    // Strict sign comparison, no epsilon tolerance
    let label = if hexamer_score < 0.0 {
        Classification::Intronic
    } else if hexamer_score > 0.0 {
        Classification::Coding
    } else {
        Classification::Undetermined
    };

    ClassificationResult {
        id: record.compact_id.clone(),
        label,
        score: Some(hexamer_score),
    }
}
