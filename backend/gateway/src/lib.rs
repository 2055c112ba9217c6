//! LendForge gateway: the thin HTTP service in front of the OCR vendor.
//!
//! One real route (`POST /ocr`, a pass-through to the cloud OCR API), one
//! health probe, and a database connection that is established at startup
//! and deliberately touched by no handler.

pub mod db;
pub mod health_api;
pub mod ocr_api;
pub mod server;
pub mod vendor;

pub use server::{build_router, serve, AppState};
pub use vendor::{VendorClient, VendorError};
