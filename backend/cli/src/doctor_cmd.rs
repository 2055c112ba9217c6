//! CLI Doctor Command
//!
//! Checks the resolved config, the local OCR engine, and whether the
//! gateway answers its health probe.

use std::time::Duration;

use anyhow::Result;

use lendforge_config::LendForgeConfig;
use lendforge_ocr::TesseractExtractor;

pub async fn run(config: &LendForgeConfig) -> Result<()> {
    println!("\n🔍 Running LendForge Doctor...\n");

    print_config(config);
    let local_ok = check_local_engine();
    let gateway_ok = check_gateway(config).await;

    println!();
    if gateway_ok || local_ok {
        println!("✅ At least one OCR binding is usable.");
    } else {
        println!("❌ No OCR binding reachable; document verification will fail.");
    }

    Ok(())
}

fn print_config(config: &LendForgeConfig) {
    println!("Resolved config:");
    println!("  listen      {}:{}", config.host(), config.port());
    println!("  database    {}", config.database_url());
    println!("  vendor      {}", config.vendor_base_url());
    println!("  apiKey      {}", redact_key(&config.ocr_api_key()));
    println!("  engine      {}", config.ocr_engine());
    println!("  debounceMs  {}\n", config.debounce_ms());
}

/// Show enough of the key to recognize it, never the whole thing.
fn redact_key(key: &str) -> String {
    if key.len() <= 4 {
        return "*".repeat(key.len());
    }
    format!("{}{}", &key[..4], "*".repeat(key.len() - 4))
}

fn check_local_engine() -> bool {
    println!("Local OCR engine:");
    match TesseractExtractor::detect() {
        Some(_) => {
            println!("  🟢 tesseract found on PATH");
            true
        }
        None => {
            println!("  🟡 tesseract not found (remote binding will be used)");
            false
        }
    }
}

async fn check_gateway(config: &LendForgeConfig) -> bool {
    println!("Gateway health:");
    let url = format!("{}/health", config.proxy_base_url());
    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(3))
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            println!("  🔴 could not build HTTP client: {e}");
            return false;
        }
    };

    match client.get(&url).send().await {
        Ok(resp) if resp.status().is_success() => {
            println!("  🟢 {url} answered OK");
            true
        }
        Ok(resp) => {
            println!("  🔴 {url} answered {}", resp.status());
            false
        }
        Err(e) => {
            println!("  🔴 {url} unreachable: {e}");
            false
        }
    }
}
