//! CLI Verify Command
//!
//! One-shot document check: read the image, pick an OCR binding, run the
//! same verifier the intake flow uses, print the outcome.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine};
use tracing::info;

use lendforge_core::{Alert, AlertSink, DocumentImage, VerificationRequest};
use lendforge_config::LendForgeConfig;
use lendforge_ocr::select_extractor;
use lendforge_verify::DocumentVerifier;
use logging::{mask_amount, mask_name};

/// Prints alerts the way the mobile app would pop them.
struct ConsoleSink;

impl AlertSink for ConsoleSink {
    fn alert(&self, alert: Alert) {
        println!("[{}] {}", alert.title, alert.body);
    }
}

pub async fn run(
    config: &LendForgeConfig,
    name: &str,
    amount: &str,
    image: &Path,
) -> Result<bool> {
    let bytes = tokio::fs::read(image)
        .await
        .with_context(|| format!("failed to read image {}", image.display()))?;
    let base64 = STANDARD.encode(&bytes);

    let extractor = select_extractor(&config.ocr_engine(), &config.proxy_base_url());
    info!(
        binding = extractor.binding(),
        name = %mask_name(name),
        amount = %mask_amount(amount),
        "Verifying document"
    );

    let verifier = DocumentVerifier::new(extractor, Arc::new(ConsoleSink));
    let request = VerificationRequest {
        applicant_name: name.to_string(),
        claimed_amount: amount.to_string(),
        document: Some(DocumentImage::new(image.display().to_string(), base64)),
    };

    let verified = verifier.verify(&request, true).await;
    let outcome = verifier.outcome();
    println!("{}", outcome.message);
    Ok(verified)
}
