//! Success snapshot key.

/// Cache key for "nothing relevant changed since the last success":
/// document identity + normalized name + digit-only amount, `|`-joined.
///
/// Only the single most recent successful verification is remembered; this
/// is an explicit last-success slot, not a general cache.
pub fn snapshot_key(document_uri: &str, normalized_name: &str, normalized_amount: &str) -> String {
    format!("{document_uri}|{normalized_name}|{normalized_amount}")
}
