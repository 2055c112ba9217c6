//! Log Redaction
//!
//! Masks applicant names and claimed amounts before they appear in log
//! lines; the intake flow handles loan documents and the raw values are
//! nobody's business in a log file.

use regex::Regex;
use std::sync::LazyLock;

static DIGIT_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d").unwrap());

/// Mask a name: keep the first character of each word, star the rest.
/// `"John Smith"` → `"J*** S****"`.
pub fn mask_name(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    let rest = chars.count();
                    format!("{first}{}", "*".repeat(rest))
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Mask an amount: keep the last two digits, star all earlier ones.
/// Formatting characters pass through so the shape stays recognizable.
pub fn mask_amount(amount: &str) -> String {
    let digit_count = amount.chars().filter(|c| c.is_ascii_digit()).count();
    if digit_count <= 2 {
        return DIGIT_RUN_RE.replace_all(amount, "*").to_string();
    }

    let mut seen = 0;
    amount
        .chars()
        .map(|c| {
            if c.is_ascii_digit() {
                seen += 1;
                if seen <= digit_count - 2 {
                    return '*';
                }
            }
            c
        })
        .collect()
}
