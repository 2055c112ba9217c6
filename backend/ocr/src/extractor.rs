//! The text-extraction capability interface.

use async_trait::async_trait;
use lendforge_core::DocumentImage;

use crate::error::OcrError;

/// One operation: best-effort text out of a document image.
///
/// Implementations own their transport entirely; the verification check
/// only consumes the plain extracted-text result and never retries.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract_text(&self, document: &DocumentImage) -> Result<String, OcrError>;

    /// Short binding label for logs and diagnostics.
    fn binding(&self) -> &'static str;
}
