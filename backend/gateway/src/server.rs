//! Main HTTP gateway server.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use lendforge_config::LendForgeConfig;

use crate::vendor::VendorClient;
use crate::{db, health_api, ocr_api};

/// Transport-level payload cap; the only size validation the proxy does.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Application state shared across routes.
#[derive(Clone)]
pub struct AppState {
    pub vendor: Arc<VendorClient>,
    /// Established at startup, used by no handler.
    pub db: Option<sqlx::PgPool>,
}

impl AppState {
    pub fn new(vendor: VendorClient, db: Option<sqlx::PgPool>) -> Self {
        Self {
            vendor: Arc::new(vendor),
            db,
        }
    }

    #[cfg(test)]
    pub fn for_tests(vendor: VendorClient) -> Self {
        Self::new(vendor, None)
    }
}

/// Build the gateway router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/ocr", post(ocr_api::extract_text))
        .route("/health", get(health_api::get_health))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Connect the database, bind, and serve until shutdown.
pub async fn serve(config: &LendForgeConfig) -> Result<()> {
    let vendor = VendorClient::new(config.vendor_base_url(), config.ocr_api_key());
    let db = db::connect(&config.database_url()).await;
    let state = AppState::new(vendor, db);

    let addr: SocketAddr = format!("{}:{}", config.host(), config.port())
        .parse()
        .context("invalid gateway listen address")?;

    let app = build_router(state);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server running on port {}", config.port());

    axum::serve(listener, app).await?;
    Ok(())
}
