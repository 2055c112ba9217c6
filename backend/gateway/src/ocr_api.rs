//! `POST /ocr` — proxy an uploaded image to the OCR vendor.
//!
//! Status taxonomy, kept stable because the mobile client matches on it:
//! 400 missing field, 502 vendor unreachable/HTTP failure, 422 vendor
//! processing error or empty extraction, 500 anything else.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::server::AppState;
use crate::vendor::VendorError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrRequest {
    #[serde(default)]
    pub base64_image: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OcrReply {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct OcrErrorReply {
    pub error: String,
}

fn error_reply(status: StatusCode, message: &str) -> (StatusCode, Json<OcrErrorReply>) {
    (
        status,
        Json(OcrErrorReply {
            error: message.to_string(),
        }),
    )
}

/// Handler for `POST /ocr`.
pub async fn extract_text(
    State(state): State<AppState>,
    Json(request): Json<OcrRequest>,
) -> Result<Json<OcrReply>, (StatusCode, Json<OcrErrorReply>)> {
    let base64_image = match request.base64_image {
        Some(img) if !img.is_empty() => img,
        _ => return Err(error_reply(StatusCode::BAD_REQUEST, "Missing base64Image")),
    };

    match state.vendor.parse_image(&base64_image).await {
        Ok(text) if text.is_empty() => {
            info!("OCR vendor extracted no text");
            Err(error_reply(
                StatusCode::UNPROCESSABLE_ENTITY,
                "OCR returned empty text",
            ))
        }
        Ok(text) => Ok(Json(OcrReply { text })),
        Err(VendorError::Upstream(detail)) => {
            warn!(%detail, "OCR vendor request failed");
            Err(error_reply(StatusCode::BAD_GATEWAY, "OCR API request failed"))
        }
        Err(VendorError::Processing(message)) => {
            Err(error_reply(StatusCode::UNPROCESSABLE_ENTITY, &message))
        }
        Err(VendorError::Malformed(detail)) => {
            warn!(%detail, "OCR vendor reply was malformed");
            Err(error_reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                "OCR server error",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::build_router;
    use crate::vendor::VendorClient;

    use axum::body::Body;
    use axum::http::{header, Request};
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn post_ocr(vendor_url: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let state = AppState::for_tests(VendorClient::new(vendor_url, "test-key"));
        let app = build_router(state);

        let response = app
            .oneshot(
                Request::post("/ocr")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn missing_field_is_400() {
        let (status, body) = post_ocr("http://127.0.0.1:9", serde_json::json!({})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing base64Image");
    }

    #[tokio::test]
    async fn successful_extraction_returns_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "ParsedResults": [{ "ParsedText": "john smith 100000" }],
                "IsErroredOnProcessing": false
            })))
            .mount(&server)
            .await;

        let (status, body) =
            post_ocr(&server.uri(), serde_json::json!({ "base64Image": "aW1hZ2U=" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["text"], "john smith 100000");
    }

    #[tokio::test]
    async fn unreachable_vendor_is_502() {
        // Port 9 (discard) refuses connections.
        let (status, body) = post_ocr(
            "http://127.0.0.1:9",
            serde_json::json!({ "base64Image": "aW1hZ2U=" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"], "OCR API request failed");
    }

    #[tokio::test]
    async fn vendor_processing_error_is_422_with_vendor_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "IsErroredOnProcessing": true,
                "ErrorMessage": ["Unable to recognize the file type"]
            })))
            .mount(&server)
            .await;

        let (status, body) =
            post_ocr(&server.uri(), serde_json::json!({ "base64Image": "aW1hZ2U=" })).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "Unable to recognize the file type");
    }

    #[tokio::test]
    async fn empty_extraction_is_422() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "ParsedResults": [{ "ParsedText": "  " }],
                "IsErroredOnProcessing": false
            })))
            .mount(&server)
            .await;

        let (status, body) =
            post_ocr(&server.uri(), serde_json::json!({ "base64Image": "aW1hZ2U=" })).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "OCR returned empty text");
    }

    #[tokio::test]
    async fn malformed_vendor_reply_is_500() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let (status, body) =
            post_ocr(&server.uri(), serde_json::json!({ "base64Image": "aW1hZ2U=" })).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "OCR server error");
    }
}
