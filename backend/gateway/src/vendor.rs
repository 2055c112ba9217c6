//! Upstream OCR vendor client (OCR.space wire format).
//!
//! Thin pass-through: ship the base64 payload as a form field, pull the
//! parsed text back out of the reply. The vendor enforces its own payload
//! limits (~1 MB base64 on the free tier) and reports oversize uploads as
//! processing errors, which we surface verbatim.

use reqwest::Client;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum VendorError {
    /// Request never completed or the vendor answered with an HTTP error.
    #[error("OCR vendor request failed: {0}")]
    Upstream(String),
    /// The vendor accepted the request but could not process the image.
    #[error("{0}")]
    Processing(String),
    /// The vendor's reply did not look like its documented format.
    #[error("unexpected OCR vendor reply: {0}")]
    Malformed(String),
}

pub struct VendorClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl VendorClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Extract text from a base64-encoded image. Empty extraction is the
    /// caller's concern; this only distinguishes the vendor's failures.
    pub async fn parse_image(&self, base64_image: &str) -> Result<String, VendorError> {
        debug!(bytes = base64_image.len(), "Forwarding image to OCR vendor");

        let resp = self
            .client
            .post(&self.base_url)
            .header("apikey", &self.api_key)
            .form(&[
                (
                    "base64Image",
                    format!("data:image/jpeg;base64,{base64_image}"),
                ),
                ("language", "eng".to_string()),
                ("scale", "true".to_string()),
                ("OCREngine", "2".to_string()),
            ])
            .send()
            .await
            .map_err(|e| VendorError::Upstream(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            warn!(%status, "OCR vendor returned an error status");
            return Err(VendorError::Upstream(format!("status {status}")));
        }

        let json: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| VendorError::Malformed(e.to_string()))?;

        if json["IsErroredOnProcessing"].as_bool().unwrap_or(false) {
            // ErrorMessage arrives as a string or an array of strings.
            let message = match &json["ErrorMessage"] {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Array(items) => items
                    .first()
                    .and_then(|v| v.as_str())
                    .unwrap_or("OCR processing failed")
                    .to_string(),
                _ => "OCR processing failed".to_string(),
            };
            return Err(VendorError::Processing(message));
        }

        let text = json["ParsedResults"][0]["ParsedText"]
            .as_str()
            .ok_or_else(|| VendorError::Malformed("missing ParsedResults".to_string()))?;

        Ok(text.trim().to_string())
    }
}
