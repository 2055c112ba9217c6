//! Remote OCR binding: calls the gateway's `/ocr` proxy endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use lendforge_core::DocumentImage;

use crate::error::OcrError;
use crate::extractor::TextExtractor;

/// Fallback message when the proxy fails without a parseable error body.
const REQUEST_FAILED: &str = "OCR API request failed";

#[derive(Debug, Deserialize)]
struct OcrApiReply {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

pub struct RemoteExtractor {
    client: Client,
    base_url: String,
}

impl RemoteExtractor {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl TextExtractor for RemoteExtractor {
    async fn extract_text(&self, document: &DocumentImage) -> Result<String, OcrError> {
        if document.base64.is_empty() {
            return Err(OcrError::Vendor("Missing base64 image data".into()));
        }

        let url = format!("{}/ocr", self.base_url);
        debug!(url = %url, "Dispatching document to OCR proxy");

        let resp = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "base64Image": document.base64 }))
            .send()
            .await
            .map_err(|e| OcrError::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            // Prefer the proxy's own error message over the generic one;
            // non-JSON bodies fall through to the fallback.
            let message = resp
                .json::<OcrApiReply>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| REQUEST_FAILED.to_string());
            return Err(OcrError::Vendor(message));
        }

        let body: OcrApiReply = resp
            .json()
            .await
            .map_err(|_| OcrError::Vendor(REQUEST_FAILED.to_string()))?;

        match body.text {
            Some(text) if !text.is_empty() => Ok(text),
            _ => match body.error {
                Some(error) => Err(OcrError::Vendor(error)),
                None => Err(OcrError::EmptyText),
            },
        }
    }

    fn binding(&self) -> &'static str {
        "remote"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn doc() -> DocumentImage {
        DocumentImage::new("file:///tmp/doc.jpg", "aGVsbG8=")
    }

    #[tokio::test]
    async fn returns_extracted_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ocr"))
            .and(body_partial_json(serde_json::json!({ "base64Image": "aGVsbG8=" })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "text": "loan agreement" })),
            )
            .mount(&server)
            .await;

        let extractor = RemoteExtractor::new(server.uri());
        let text = extractor.extract_text(&doc()).await.unwrap();
        assert_eq!(text, "loan agreement");
    }

    #[tokio::test]
    async fn surfaces_proxy_error_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ocr"))
            .respond_with(
                ResponseTemplate::new(422)
                    .set_body_json(serde_json::json!({ "error": "OCR returned empty text" })),
            )
            .mount(&server)
            .await;

        let extractor = RemoteExtractor::new(server.uri());
        let err = extractor.extract_text(&doc()).await.unwrap_err();
        assert_eq!(err.detail().as_deref(), Some("OCR returned empty text"));
    }

    #[tokio::test]
    async fn falls_back_to_generic_message_on_opaque_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ocr"))
            .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let extractor = RemoteExtractor::new(server.uri());
        let err = extractor.extract_text(&doc()).await.unwrap_err();
        assert_eq!(err.detail().as_deref(), Some("OCR API request failed"));
    }

    #[tokio::test]
    async fn empty_text_without_error_field() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ocr"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "text": "" })),
            )
            .mount(&server)
            .await;

        let extractor = RemoteExtractor::new(server.uri());
        let err = extractor.extract_text(&doc()).await.unwrap_err();
        assert!(matches!(err, OcrError::EmptyText));
    }
}
