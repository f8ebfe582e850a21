//! Case-folding text comparison.
//!
//! The single equality utility shared by the filter engine and the lookup
//! resolver. Matching is exact (not substring) on the folded forms.

/// Case-insensitive exact equality on trimmed values.
pub fn eq_fold(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_case_and_surrounding_whitespace() {
        assert!(eq_fold("Delhi", "delhi"));
        assert!(eq_fold("  KERALA ", "Kerala"));
        assert!(eq_fold("Tamil Nadu", "tamil nadu"));
    }

    #[test]
    fn is_exact_not_substring() {
        assert!(!eq_fold("Delhi", "New Delhi"));
        assert!(!eq_fold("Goa", "Go"));
    }
}
