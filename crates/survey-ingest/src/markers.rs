//! Text markers read as missing values.

/// Cell contents treated as null in both delimited text and spreadsheets.
///
/// These are the conventional missing-value spellings of survey exports.
/// Matching is exact: surrounding whitespace or other casings stay data.
/// Empty cells are always null and are not listed.
pub const NULL_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Returns `true` when `value` is one of [`NULL_MARKERS`].
pub fn is_null_marker(value: &str) -> bool {
    NULL_MARKERS.contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_match_exactly() {
        assert!(is_null_marker("NA"));
        assert!(is_null_marker("n/a"));
        assert!(!is_null_marker(" NA"));
        assert!(!is_null_marker("na"));
        assert!(!is_null_marker(""));
    }
}
