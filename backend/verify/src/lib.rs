//! Document verification check.
//!
//! Decides whether an uploaded loan document plausibly corroborates the
//! applicant's stated name and loan amount: normalize both sides, run the
//! image through the injected OCR binding, substring-match, remember the
//! last successful input combination so unchanged re-submits skip the
//! network entirely.

pub mod debounce;
pub mod normalize;
pub mod snapshot;
pub mod verifier;

pub use debounce::Debouncer;
pub use normalize::{name_tokens, normalize_amount, normalize_text};
pub use snapshot::snapshot_key;
pub use verifier::DocumentVerifier;
