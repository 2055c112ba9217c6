//! Gateway health endpoint.
//!
//! Liveness only: answers `ok` whenever the process is up. Deliberately
//! checks nothing downstream — neither the database nor the OCR vendor.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: String,
}

/// Handler for `GET /health`.
pub async fn get_health() -> Json<HealthReport> {
    Json(HealthReport {
        status: "ok".to_string(),
    })
}
