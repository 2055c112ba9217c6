//! The verification check itself.
//!
//! Precondition checks → snapshot de-duplication → OCR extraction →
//! normalized substring matching. Concurrent invocations are not
//! coordinated beyond the caller's debounce: each one runs the extractor
//! independently and the later completion overwrites the shared outcome
//! (last-write-wins, as the form flow tolerates).

use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use lendforge_core::{
    Alert, AlertSink, VerificationOutcome, VerificationRequest, VerificationStatus,
};
use lendforge_ocr::TextExtractor;

use crate::normalize::{name_tokens, normalize_amount, normalize_text};
use crate::snapshot::snapshot_key;

const MSG_DOCUMENT_MISSING: &str = "Please upload a clear loan document.";
const MSG_NAME_MISSING: &str = "Applicant name is missing. Please go back and fill it.";
const MSG_AMOUNT_MISSING: &str = "Please enter the total loan amount before verification.";
const MSG_PROCESS_FAILED: &str = "Could not process the document. Please try again.";
const MSG_PROCESS_FAILED_ALERT: &str =
    "Could not process the document. Please ensure the image is clear and try again.";
const MSG_NOT_MATCHED: &str = "Document verification failed. Name or amount not matched.";
const MSG_NOT_MATCHED_ALERT: &str =
    "Name or amount not matched. Please upload a valid loan document.";
const MSG_MATCHED_ALERT: &str = "Name and amount matched.";

#[derive(Debug, Default)]
struct VerifyState {
    outcome: VerificationOutcome,
    /// Single-slot de-duplication key: the last input combination that
    /// verified successfully. Failures never touch it.
    last_success: Option<String>,
}

/// Runs the document check against an injected OCR binding.
///
/// Cloning is cheap and shares outcome state, so a debounced background
/// task and the submit path observe the same status.
#[derive(Clone)]
pub struct DocumentVerifier {
    extractor: Arc<dyn TextExtractor>,
    alerts: Arc<dyn AlertSink>,
    state: Arc<Mutex<VerifyState>>,
}

impl DocumentVerifier {
    pub fn new(extractor: Arc<dyn TextExtractor>, alerts: Arc<dyn AlertSink>) -> Self {
        Self {
            extractor,
            alerts,
            state: Arc::new(Mutex::new(VerifyState::default())),
        }
    }

    /// Current outcome as last written by any invocation.
    pub fn outcome(&self) -> VerificationOutcome {
        self.lock().outcome.clone()
    }

    pub fn status(&self) -> VerificationStatus {
        self.lock().outcome.status
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VerifyState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn fail(&self, message: &str) {
        self.lock().outcome = VerificationOutcome::failed(message);
    }

    /// Run the check. Returns `true` only when both the name and the
    /// amount were found in the extracted text (or the inputs are
    /// unchanged since the last success).
    ///
    /// `show_alerts` controls the blocking alert surface; the outcome
    /// message is updated either way.
    pub async fn verify(&self, request: &VerificationRequest, show_alerts: bool) -> bool {
        let document = match &request.document {
            Some(doc) if !doc.is_incomplete() => doc.clone(),
            _ => {
                self.fail(MSG_DOCUMENT_MISSING);
                return false;
            }
        };

        if request.applicant_name.is_empty() {
            self.fail(MSG_NAME_MISSING);
            return false;
        }

        if request.claimed_amount.is_empty() {
            self.fail(MSG_AMOUNT_MISSING);
            return false;
        }

        let normalized_name = normalize_text(&request.applicant_name);
        let normalized_amount = normalize_amount(&request.claimed_amount);
        let snapshot = snapshot_key(&document.uri, &normalized_name, &normalized_amount);

        {
            let mut state = self.lock();
            if state.last_success.as_deref() == Some(snapshot.as_str())
                && state.outcome.status == VerificationStatus::Success
            {
                debug!("Verification inputs unchanged since last success, skipping OCR");
                return true;
            }
            state.outcome = VerificationOutcome::verifying();
        }

        let extracted = match self.extractor.extract_text(&document).await {
            Ok(text) => text,
            Err(err) => {
                warn!(binding = self.extractor.binding(), error = %err, "OCR extraction failed");
                let message = err.detail().unwrap_or_else(|| MSG_PROCESS_FAILED.to_string());
                self.fail(&message);
                if show_alerts {
                    let body = err
                        .detail()
                        .unwrap_or_else(|| MSG_PROCESS_FAILED_ALERT.to_string());
                    self.alerts.alert(Alert::new("Verification Error", body));
                }
                return false;
            }
        };

        let ocr_text = normalize_text(&extracted);
        let tokens = name_tokens(&request.applicant_name);

        // Whole glued name OR every word present somewhere; deliberate OR.
        let name_match = (!normalized_name.is_empty() && ocr_text.contains(&normalized_name))
            || (!tokens.is_empty() && tokens.iter().all(|token| ocr_text.contains(token)));
        let amount_match = !normalized_amount.is_empty() && ocr_text.contains(&normalized_amount);

        if !name_match || !amount_match {
            self.fail(MSG_NOT_MATCHED);
            if show_alerts {
                self.alerts.alert(Alert::new(
                    "Document Verification Failed",
                    MSG_NOT_MATCHED_ALERT,
                ));
            }
            return false;
        }

        {
            let mut state = self.lock();
            state.outcome = VerificationOutcome::success();
            state.last_success = Some(snapshot);
        }
        if show_alerts {
            self.alerts
                .alert(Alert::new("Verification Success", MSG_MATCHED_ALERT));
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use lendforge_core::{DocumentImage, MemorySink};
    use lendforge_ocr::OcrError;

    struct FakeExtractor {
        text: Result<String, OcrError>,
        calls: AtomicUsize,
    }

    impl FakeExtractor {
        fn ok(text: &str) -> Arc<Self> {
            Arc::new(Self {
                text: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
            })
        }

        fn err(err: OcrError) -> Arc<Self> {
            Arc::new(Self {
                text: Err(err),
                calls: AtomicUsize::new(0),
            })
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TextExtractor for FakeExtractor {
        async fn extract_text(&self, _document: &DocumentImage) -> Result<String, OcrError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.text.clone()
        }

        fn binding(&self) -> &'static str {
            "fake"
        }
    }

    const EXTRACTED: &str = "loan agreement johnsmith amount 10000000 date 2024-01-05";

    fn request(name: &str, amount: &str) -> VerificationRequest {
        VerificationRequest {
            applicant_name: name.to_string(),
            claimed_amount: amount.to_string(),
            document: Some(DocumentImage::new("file:///tmp/doc.jpg", "aW1hZ2U=")),
        }
    }

    fn verifier(extractor: Arc<FakeExtractor>) -> (DocumentVerifier, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let v = DocumentVerifier::new(extractor, sink.clone());
        (v, sink)
    }

    #[tokio::test]
    async fn missing_document_fails_without_ocr_call() {
        let extractor = FakeExtractor::ok(EXTRACTED);
        let (v, _) = verifier(extractor.clone());
        let mut req = request("John Smith", "100000.00");
        req.document = None;

        assert!(!v.verify(&req, true).await);
        assert_eq!(v.outcome().message, MSG_DOCUMENT_MISSING);
        assert_eq!(extractor.call_count(), 0);
    }

    #[tokio::test]
    async fn missing_name_and_amount_fail_without_ocr_call() {
        let extractor = FakeExtractor::ok(EXTRACTED);
        let (v, _) = verifier(extractor.clone());

        assert!(!v.verify(&request("", "100000"), true).await);
        assert_eq!(v.outcome().message, MSG_NAME_MISSING);

        assert!(!v.verify(&request("John Smith", ""), true).await);
        assert_eq!(v.outcome().message, MSG_AMOUNT_MISSING);

        assert_eq!(extractor.call_count(), 0);
    }

    #[tokio::test]
    async fn full_name_and_amount_substrings_pass() {
        let extractor = FakeExtractor::ok(EXTRACTED);
        let (v, sink) = verifier(extractor.clone());

        assert!(v.verify(&request("John Smith", "100000.00"), true).await);
        assert_eq!(v.status(), VerificationStatus::Success);
        assert_eq!(sink.drain()[0].title, "Verification Success");
        assert_eq!(extractor.call_count(), 1);
    }

    #[tokio::test]
    async fn all_tokens_present_passes_without_glued_name() {
        // "smithjohn" never appears glued, but both words do.
        let extractor = FakeExtractor::ok("mr john x smith owes 250000 rupees");
        let (v, _) = verifier(extractor);

        assert!(v.verify(&request("Smith John", "250000"), false).await);
    }

    #[tokio::test]
    async fn amount_mismatch_fails_even_when_name_matches() {
        let extractor = FakeExtractor::ok(EXTRACTED);
        let (v, sink) = verifier(extractor);

        assert!(!v.verify(&request("John Smith", "250000"), true).await);
        assert_eq!(v.outcome().message, MSG_NOT_MATCHED);
        assert_eq!(sink.drain()[0].title, "Document Verification Failed");
    }

    #[tokio::test]
    async fn single_letter_tokens_cannot_rescue_a_name() {
        // Tokens "a"/"b" are discarded, glued "ab" is absent from the text.
        let extractor = FakeExtractor::ok("agreement amount 5000");
        let (v, _) = verifier(extractor);

        assert!(!v.verify(&request("A B", "5000"), false).await);
        assert_eq!(v.outcome().message, MSG_NOT_MATCHED);
    }

    #[tokio::test]
    async fn unchanged_snapshot_skips_second_ocr_call() {
        let extractor = FakeExtractor::ok(EXTRACTED);
        let (v, _) = verifier(extractor.clone());
        let req = request("John Smith", "100000.00");

        assert!(v.verify(&req, false).await);
        assert!(v.verify(&req, false).await);
        assert_eq!(extractor.call_count(), 1);

        // Changing the amount changes the snapshot and re-runs OCR.
        assert!(!v.verify(&request("John Smith", "999"), false).await);
        assert_eq!(extractor.call_count(), 2);
    }

    #[tokio::test]
    async fn failure_does_not_update_snapshot() {
        let extractor = FakeExtractor::ok(EXTRACTED);
        let (v, _) = verifier(extractor.clone());

        assert!(!v.verify(&request("John Smith", "999"), false).await);
        assert!(!v.verify(&request("John Smith", "999"), false).await);
        // No success was cached, so both attempts hit the extractor.
        assert_eq!(extractor.call_count(), 2);
    }

    #[tokio::test]
    async fn provider_error_detail_is_surfaced() {
        let extractor = FakeExtractor::err(OcrError::Vendor("image too blurry".into()));
        let (v, sink) = verifier(extractor);

        assert!(!v.verify(&request("John Smith", "100000"), true).await);
        assert_eq!(v.outcome().message, "image too blurry");
        assert_eq!(sink.drain()[0].body, "image too blurry");
    }

    #[tokio::test]
    async fn provider_error_without_detail_uses_fallback() {
        let extractor = FakeExtractor::err(OcrError::Unavailable);
        let (v, _) = verifier(extractor);

        assert!(!v.verify(&request("John Smith", "100000"), false).await);
        assert_eq!(v.outcome().message, MSG_PROCESS_FAILED);
    }

    #[tokio::test]
    async fn background_runs_suppress_alerts() {
        let extractor = FakeExtractor::ok(EXTRACTED);
        let (v, sink) = verifier(extractor);

        assert!(!v.verify(&request("John Smith", "42"), false).await);
        assert!(sink.is_empty());
    }
}
