//! Shared intake types.
//!
//! Everything here is ephemeral: constructed per form session, never
//! persisted, discarded when the applicant navigates away.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An uploaded loan document image.
///
/// `uri` is the local handle used for change detection; `base64` is the
/// actual payload shipped to the text extractor. Both must be non-empty
/// before a verification is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentImage {
    pub uri: String,
    pub base64: String,
}

impl DocumentImage {
    pub fn new(uri: impl Into<String>, base64: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            base64: base64.into(),
        }
    }

    /// True when either half of the payload is missing.
    pub fn is_incomplete(&self) -> bool {
        self.uri.is_empty() || self.base64.is_empty()
    }
}

/// Lifecycle of one verification attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Idle,
    Verifying,
    Success,
    Failed,
}

impl Default for VerificationStatus {
    fn default() -> Self {
        Self::Idle
    }
}

/// One check's worth of input, assembled from the form state at trigger time.
#[derive(Debug, Clone)]
pub struct VerificationRequest {
    /// Sourced from the earlier application step.
    pub applicant_name: String,
    /// Raw user input: digits plus whatever formatting the applicant typed.
    pub claimed_amount: String,
    pub document: Option<DocumentImage>,
}

/// Derived outcome surfaced back to the form. Not persisted anywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationOutcome {
    pub status: VerificationStatus,
    /// User-facing explanation of the current status.
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_at: Option<DateTime<Utc>>,
}

impl Default for VerificationOutcome {
    fn default() -> Self {
        Self {
            status: VerificationStatus::Idle,
            message: String::new(),
            verified_at: None,
        }
    }
}

impl VerificationOutcome {
    pub fn verifying() -> Self {
        Self {
            status: VerificationStatus::Verifying,
            message: "Verifying document...".to_string(),
            verified_at: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: VerificationStatus::Failed,
            message: message.into(),
            verified_at: None,
        }
    }

    pub fn success() -> Self {
        Self {
            status: VerificationStatus::Success,
            message: "Document verified successfully.".to_string(),
            verified_at: Some(Utc::now()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == VerificationStatus::Success
    }
}
