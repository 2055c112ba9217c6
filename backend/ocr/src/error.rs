//! OCR provider error taxonomy.

use thiserror::Error;

/// What went wrong while extracting text from a document image.
#[derive(Debug, Clone, Error)]
pub enum OcrError {
    /// No engine could be reached at all.
    #[error("no OCR engine available")]
    Unavailable,
    /// The request never completed (connection refused, DNS, timeout).
    #[error("{0}")]
    Transport(String),
    /// The provider answered but reported a failure of its own.
    #[error("{0}")]
    Vendor(String),
    /// The provider succeeded but produced no text.
    #[error("OCR API returned empty text")]
    EmptyText,
}

impl OcrError {
    /// Best-effort human-readable detail for surfacing to the applicant.
    /// `None` means the caller should fall back to its generic message.
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Unavailable => None,
            Self::Transport(msg) | Self::Vendor(msg) => Some(msg.clone()),
            Self::EmptyText => Some(self.to_string()),
        }
    }
}
