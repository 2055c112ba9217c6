//! Startup binding selection.
//!
//! Runs once at process start; everything downstream holds the chosen
//! extractor behind `Arc<dyn TextExtractor>` and never branches on the
//! binding again.

use std::sync::Arc;

use tracing::{info, warn};

use crate::extractor::TextExtractor;
use crate::local::TesseractExtractor;
use crate::remote::RemoteExtractor;

/// Pick the OCR binding by availability.
///
/// `engine` comes from config: `auto` probes for a local engine and falls
/// back to the proxy, `local` insists on the local engine (still falling
/// back, with a warning, when none is installed), `remote` skips the probe.
pub fn select_extractor(engine: &str, proxy_base_url: &str) -> Arc<dyn TextExtractor> {
    match engine {
        "remote" => {
            info!("OCR binding: remote proxy");
            Arc::new(RemoteExtractor::new(proxy_base_url))
        }
        other => {
            if let Some(local) = TesseractExtractor::detect() {
                info!("OCR binding: local engine");
                Arc::new(local)
            } else {
                if other == "local" {
                    warn!("Local OCR engine requested but not found, using remote proxy");
                } else {
                    info!("No local OCR engine found, using remote proxy");
                }
                Arc::new(RemoteExtractor::new(proxy_base_url))
            }
        }
    }
}
