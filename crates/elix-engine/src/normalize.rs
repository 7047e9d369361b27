//! Diagnosis-code normalization.

use std::collections::BTreeSet;

/// Normalizes one diagnosis code: trim whitespace, uppercase, strip the
/// literal periods ICD-10-CM codes are often written with.
///
/// Malformed input is not an error here; a code that normalizes to garbage
/// simply matches no prefix downstream.
pub(crate) fn normalize_code(code: &str) -> String {
    code.trim()
        .chars()
        .filter(|&c| c != '.')
        .flat_map(char::to_uppercase)
        .collect()
}

/// Normalizes a collection of codes into a deduplicated set.
///
/// Codes that normalize to the empty string are dropped.
pub(crate) fn normalize_all<I, S>(codes: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    codes
        .into_iter()
        .map(|code| normalize_code(code.as_ref()))
        .filter(|code| {
            if code.is_empty() {
                tracing::trace!("dropping diagnosis code that normalized to empty");
                false
            } else {
                true
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_code() {
        assert_eq!(normalize_code("i50.9"), "I509");
        assert_eq!(normalize_code("  I509  "), "I509");
        assert_eq!(normalize_code("e11.22"), "E1122");
        assert_eq!(normalize_code("..."), "");
    }

    #[test]
    fn test_normalize_all_dedupes() {
        let set = normalize_all(["i50.9", " I509 ", "I50.9"]);
        assert_eq!(set.len(), 1);
        assert!(set.contains("I509"));
    }

    #[test]
    fn test_normalize_all_drops_empty() {
        let set = normalize_all(["", "  ", ".", "I10"]);
        assert_eq!(set.len(), 1);
        assert!(set.contains("I10"));
    }
}
