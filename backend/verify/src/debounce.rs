//! Cancel-and-reschedule debounce timer.
//!
//! Every new call aborts the previously scheduled task, so a burst of
//! keystrokes produces exactly one firing that reflects the final state.
//! Aborting only touches tasks still waiting out their delay; work that
//! already started is never cancelled (last-write-wins is accepted at the
//! verifier level).

use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

use tokio::task::JoinHandle;

pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Schedule `fut` to run after the quiet period, replacing any
    /// still-pending earlier schedule.
    pub fn call<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            fut.await;
        });

        let mut guard = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = guard.replace(handle) {
            previous.abort();
        }
    }

    /// Drop whatever is pending without running it.
    pub fn cancel(&self) {
        let mut guard = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = guard.take() {
            previous.abort();
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DEBOUNCE_MS))
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    async fn settle() {
        // Let the spawned task get scheduled and run to completion.
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn burst_of_calls_fires_once() {
        let debouncer = Debouncer::new(Duration::from_millis(500));
        let fired = Arc::new(AtomicUsize::new(0));

        for _ in 0..5 {
            let fired = Arc::clone(&fired);
            debouncer.call(async move {
                fired.fetch_add(1, Ordering::SeqCst);
            });
        }

        settle().await;
        tokio::time::advance(Duration::from_millis(501)).await;
        settle().await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn spaced_calls_each_fire() {
        let debouncer = Debouncer::new(Duration::from_millis(500));
        let fired = Arc::new(AtomicUsize::new(0));

        for _ in 0..2 {
            let fired = Arc::clone(&fired);
            debouncer.call(async move {
                fired.fetch_add(1, Ordering::SeqCst);
            });
            settle().await;
            tokio::time::advance(Duration::from_millis(501)).await;
            settle().await;
        }

        assert_eq!(fired.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_drops_pending_work() {
        let debouncer = Debouncer::new(Duration::from_millis(500));
        let fired = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&fired);
        debouncer.call(async move {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        debouncer.cancel();

        tokio::time::advance(Duration::from_millis(501)).await;
        settle().await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
