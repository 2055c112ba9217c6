//! Blocking alert surface.
//!
//! The verifier never decides how failures reach the applicant; callers
//! inject a sink and a per-invocation flag controls whether alerts fire at
//! all (explicit submits and fresh uploads do, debounced background runs
//! do not).

use std::sync::Mutex;

/// A dismissible alert shown to the applicant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub body: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

pub trait AlertSink: Send + Sync {
    fn alert(&self, alert: Alert);
}

/// Swallows every alert. Used for debounced background verifications.
#[derive(Debug, Default)]
pub struct NullSink;

impl AlertSink for NullSink {
    fn alert(&self, _alert: Alert) {}
}

/// Records alerts in memory so tests and the CLI can inspect them.
#[derive(Debug, Default)]
pub struct MemorySink {
    alerts: Mutex<Vec<Alert>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drain(&self) -> Vec<Alert> {
        let mut guard = self.alerts.lock().unwrap_or_else(|e| e.into_inner());
        std::mem::take(&mut *guard)
    }

    pub fn len(&self) -> usize {
        self.alerts.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AlertSink for MemorySink {
    fn alert(&self, alert: Alert) {
        self.alerts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(alert);
    }
}
