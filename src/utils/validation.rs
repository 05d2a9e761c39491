//! Centralized validation helpers for sequence records.

/// The 15-symbol IUPAC nucleotide ambiguity alphabet, plus `.` for gaps
pub const IUPAC_DNA: &str = "ACGTRYSWKMBDHVN.";

/// Minimum sequence length: anything shorter cannot hold a single hexamer
pub const MIN_SEQUENCE_LEN: usize = 6;

/// Maximum number of records allowed in a single file (DOS protection)
pub const MAX_RECORDS: usize = 100_000;

/// Check whether a character is a valid IUPAC nucleotide code, case-insensitively.
///
/// # Examples
///
/// ```
/// use hexascan::utils::validation::is_iupac_base;
///
/// assert!(is_iupac_base('a'));
/// assert!(is_iupac_base('N'));
/// assert!(is_iupac_base('.'));
/// assert!(!is_iupac_base('X'));
/// ```
#[must_use]
pub fn is_iupac_base(c: char) -> bool {
    c.is_ascii() && IUPAC_DNA.contains(c.to_ascii_uppercase())
}

/// Find the first character of a sequence outside the IUPAC DNA alphabet.
///
/// Returns `None` when the whole sequence is valid.
#[must_use]
pub fn find_invalid_base(sequence: &str) -> Option<char> {
    sequence.chars().find(|c| !is_iupac_base(*c))
}

/// Check if adding another record would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new record.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_record_limit(count: usize) -> Option<String> {
    if count >= MAX_RECORDS {
        Some(format!(
            "Too many records: adding another would exceed maximum of {MAX_RECORDS}"
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_iupac_base() {
        for c in "ACGTRYSWKMBDHVN.".chars() {
            assert!(is_iupac_base(c), "{c} should be valid");
            assert!(
                is_iupac_base(c.to_ascii_lowercase()),
                "{c} lowercase should be valid"
            );
        }

        assert!(!is_iupac_base('X'));
        assert!(!is_iupac_base('U'));
        assert!(!is_iupac_base('-'));
        assert!(!is_iupac_base(' '));
        assert!(!is_iupac_base('é'));
    }

    #[test]
    fn test_find_invalid_base() {
        assert_eq!(find_invalid_base("ACGTacgt"), None);
        assert_eq!(find_invalid_base("NNNRYSW."), None);
        assert_eq!(find_invalid_base("ACGXTT"), Some('X'));
        assert_eq!(find_invalid_base("acgu"), Some('u'));
        assert_eq!(find_invalid_base(""), None);
    }

    #[test]
    fn test_check_record_limit() {
        assert!(check_record_limit(0).is_none());
        assert!(check_record_limit(MAX_RECORDS - 1).is_none());
        assert!(check_record_limit(MAX_RECORDS).is_some());
        assert!(check_record_limit(MAX_RECORDS + 1).is_some());
    }
}
