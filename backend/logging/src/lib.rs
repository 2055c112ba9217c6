//! Structured logging for the LendForge backend.
//!
//! Handles log output setup (console + rotating NDJSON file) and masking of
//! applicant data before it reaches a log line.

pub mod logger;
pub mod redact;

pub use logger::init_logger;
pub use redact::{mask_amount, mask_name};
