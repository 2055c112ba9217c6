//! Text and amount normalization.
//!
//! Both transforms are deliberately aggressive and lossy; downstream
//! matching depends on them exactly as written, so changing either one
//! silently changes which documents pass.

/// Lowercase, then keep only `[a-z0-9]`.
///
/// Whitespace and punctuation vanish and the survivors concatenate:
/// `"John Smith"` comes out as `"johnsmith"` and is matched as one token.
pub fn normalize_text(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Keep only ASCII digits.
///
/// Currency symbols, grouping commas and decimal points all disappear, so
/// `"1,00,000.50"` becomes `"10000050"`. Non-reversible, kept for
/// compatibility with documents verified under the same rule.
pub fn normalize_amount(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Split a name on whitespace, normalize each word, drop words that
/// normalize to one character or less.
pub fn name_tokens(name: &str) -> Vec<String> {
    name.split_whitespace()
        .map(normalize_text)
        .filter(|token| token.len() > 1)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_space_and_punctuation() {
        assert_eq!(normalize_text("John Smith 2024"), "johnsmith2024");
        assert_eq!(normalize_text("  A-B_c!  "), "abc");
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize_text("Loan Agreement #42");
        assert_eq!(normalize_text(&once), once);
    }

    #[test]
    fn amount_keeps_digits_only() {
        assert_eq!(normalize_amount("₹1,00,000.00"), "10000000");
        assert_eq!(normalize_amount("250000"), "250000");
        assert_eq!(normalize_amount("₹"), "");
    }

    #[test]
    fn tokens_drop_short_words() {
        assert_eq!(name_tokens("John Smith"), vec!["john", "smith"]);
        assert!(name_tokens("A B").is_empty());
        assert_eq!(name_tokens("J. Robert Oppenheimer"), vec!["robert", "oppenheimer"]);
    }
}
