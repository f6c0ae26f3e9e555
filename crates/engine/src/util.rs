//! Internal helpers shared by the catalogue and the draw lookup.

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Fold a free-text key for comparison: strips accents, lowercases, and
/// collapses every run of non-alphanumeric characters into a single space.
///
/// Returns `None` when nothing alphanumeric is left.
pub(crate) fn normalize_key(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut out = String::new();
    let mut prev_space = false;
    for ch in trimmed.nfkd() {
        if is_combining_mark(ch) {
            continue;
        }
        if ch.is_alphanumeric() {
            for lower in ch.to_lowercase() {
                out.push(lower);
            }
            prev_space = false;
        } else if !out.is_empty() && !prev_space {
            out.push(' ');
            prev_space = true;
        }
    }
    let normalized = out.trim();
    if normalized.is_empty() {
        None
    } else {
        Some(normalized.to_string())
    }
}

/// `true` if `value` is non-empty and made only of ASCII decimal digits.
pub(crate) fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_key_folds_accents_case_and_separators() {
        assert_eq!(normalize_key("  PALÉ ").as_deref(), Some("pale"));
        assert_eq!(
            normalize_key("CASH3_FRONT  box").as_deref(),
            Some("cash3 front box")
        );
        assert_eq!(
            normalize_key("SINGULACIÓN 2").as_deref(),
            Some("singulacion 2")
        );
        assert_eq!(
            normalize_key("LA SUERTE 6:00pm").as_deref(),
            Some("la suerte 6 00pm")
        );
    }

    #[test]
    fn normalize_key_rejects_blank_keys() {
        assert_eq!(normalize_key(""), None);
        assert_eq!(normalize_key("   "), None);
        assert_eq!(normalize_key("__"), None);
    }

    #[test]
    fn is_digits_requires_ascii_digits_only() {
        assert!(is_digits("0123"));
        assert!(!is_digits(""));
        assert!(!is_digits("12a"));
        assert!(!is_digits("١٢"));
    }
}
