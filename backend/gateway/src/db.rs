//! Database bootstrap.
//!
//! The pool is opened at startup and its fate logged; no request handler
//! reads or writes through it. Connection failure is non-fatal — the
//! gateway serves OCR traffic either way.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{error, info};

pub async fn connect(database_url: &str) -> Option<PgPool> {
    let result = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(3))
        .connect(database_url)
        .await;

    match result {
        Ok(pool) => {
            info!("Database connected");
            Some(pool)
        }
        Err(e) => {
            error!(error = %e, "Database connection error");
            None
        }
    }
}
