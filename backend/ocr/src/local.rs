//! Local OCR binding: shells out to a Tesseract executable.
//!
//! Selected when a `tesseract` binary is found on PATH at startup. Works
//! off the document's local file handle; the base64 payload is only used
//! by the remote binding.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use lendforge_core::DocumentImage;

use crate::error::OcrError;
use crate::extractor::TextExtractor;

const TESSERACT_BIN: &str = "tesseract";

pub struct TesseractExtractor {
    binary: PathBuf,
}

impl TesseractExtractor {
    /// Probe PATH for a usable tesseract binary.
    pub fn detect() -> Option<Self> {
        let path_var = std::env::var_os("PATH")?;
        for dir in std::env::split_paths(&path_var) {
            let candidate = dir.join(TESSERACT_BIN);
            if candidate.is_file() {
                debug!(binary = %candidate.display(), "Found local OCR engine");
                return Some(Self { binary: candidate });
            }
        }
        None
    }

    /// Use a specific binary path (tests, non-standard installs).
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

/// Map a document handle to a filesystem path, tolerating `file://` URIs.
fn local_path(uri: &str) -> &Path {
    Path::new(uri.strip_prefix("file://").unwrap_or(uri))
}

#[async_trait]
impl TextExtractor for TesseractExtractor {
    async fn extract_text(&self, document: &DocumentImage) -> Result<String, OcrError> {
        let path = local_path(&document.uri);

        let output = Command::new(&self.binary)
            .arg(path)
            .arg("stdout")
            .stdin(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| OcrError::Transport(format!("failed to run tesseract: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = stderr.lines().last().unwrap_or("").trim().to_string();
            warn!(status = ?output.status.code(), "Local OCR run failed");
            if detail.is_empty() {
                return Err(OcrError::Vendor(format!(
                    "tesseract exited with status {}",
                    output.status
                )));
            }
            return Err(OcrError::Vendor(detail));
        }

        let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if text.is_empty() {
            return Err(OcrError::EmptyText);
        }
        Ok(text)
    }

    fn binding(&self) -> &'static str {
        "local"
    }
}
