//! LendForge runtime configuration schema.
//!
//! Typed for serde YAML deserialization, camelCase on disk. Every section
//! is optional; resolver methods supply the defaults so callers never
//! branch on `Option` themselves.

use serde::{Deserialize, Serialize};

/// Root configuration (`lendforge.yaml`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LendForgeConfig {
    /// Gateway HTTP server settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway: Option<GatewaySettings>,

    /// Database connection settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseSettings>,

    /// OCR vendor and binding settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ocr: Option<OcrSettings>,

    /// Verification check tuning
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification: Option<VerificationSettings>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewaySettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrSettings {
    /// Upstream OCR vendor endpoint the gateway proxies to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_base_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Binding selection: "auto" | "local" | "remote"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,

    /// Base URL clients use to reach the gateway's /ocr proxy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debounce_ms: Option<u64>,
}

impl LendForgeConfig {
    pub fn host(&self) -> String {
        self.gateway
            .as_ref()
            .and_then(|g| g.host.clone())
            .unwrap_or_else(|| "0.0.0.0".to_string())
    }

    pub fn port(&self) -> u16 {
        self.gateway.as_ref().and_then(|g| g.port).unwrap_or(5000)
    }

    pub fn database_url(&self) -> String {
        self.database
            .as_ref()
            .and_then(|d| d.url.clone())
            .unwrap_or_else(|| "postgres://localhost:5432/loanapproval".to_string())
    }

    pub fn vendor_base_url(&self) -> String {
        self.ocr
            .as_ref()
            .and_then(|o| o.vendor_base_url.clone())
            .unwrap_or_else(|| "https://api.ocr.space/parse/image".to_string())
    }

    /// OCR.space ships a public demo key; real deployments override it.
    pub fn ocr_api_key(&self) -> String {
        self.ocr
            .as_ref()
            .and_then(|o| o.api_key.clone())
            .unwrap_or_else(|| "helloworld".to_string())
    }

    pub fn ocr_engine(&self) -> String {
        self.ocr
            .as_ref()
            .and_then(|o| o.engine.clone())
            .unwrap_or_else(|| "auto".to_string())
    }

    pub fn proxy_base_url(&self) -> String {
        self.ocr
            .as_ref()
            .and_then(|o| o.proxy_base_url.clone())
            .unwrap_or_else(|| format!("http://localhost:{}", self.port()))
    }

    pub fn debounce_ms(&self) -> u64 {
        self.verification
            .as_ref()
            .and_then(|v| v.debounce_ms)
            .unwrap_or(500)
    }
}
