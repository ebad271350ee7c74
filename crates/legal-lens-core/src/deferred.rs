/// One-shot deferred detection.
///
/// Dynamically rendered pages need a moment before their visible text is complete,
/// so the host schedules detection after a settle delay. If the page goes away
/// first, the host cancels and the signals are never gathered.
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::info;

use crate::classifier::{self, ClassificationResult, THRESHOLD};
use crate::error::DetectionError;
use crate::signals::PageSignals;

/// Delay between page load and detection.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(1000);

pub struct DeferredDetection {
    handle: JoinHandle<ClassificationResult>,
}

impl DeferredDetection {
    /// Spawn a task that waits `delay`, calls `gather` once and classifies the result.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(delay: Duration, gather: F) -> Self
    where
        F: FnOnce() -> PageSignals + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let signals = gather();
            let result = classifier::classify(&signals);
            info!(
                url = signals.url(),
                score = result.score,
                threshold = THRESHOLD,
                is_legal_page = result.is_legal_page,
                "deferred detection complete"
            );
            result
        });
        Self { handle }
    }

    /// Abort the detection. A no-op if it already finished.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the classification outcome.
    pub async fn outcome(self) -> Result<ClassificationResult, DetectionError> {
        self.handle.await.map_err(|e| {
            if e.is_cancelled() {
                DetectionError::Cancelled
            } else {
                DetectionError::Failed(e.to_string())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    use super::*;

    fn terms_page() -> PageSignals {
        PageSignals::extract(
            "https://example.com/terms",
            "Terms of Use",
            "These terms are governed by the laws of Delaware.",
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_classifies_after_settle_delay() {
        let gathered = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&gathered);
        let detection = DeferredDetection::schedule(DEFAULT_SETTLE_DELAY, move || {
            flag.store(true, Ordering::SeqCst);
            terms_page()
        });

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(!gathered.load(Ordering::SeqCst));
        assert!(!detection.is_finished());

        let result = detection.outcome().await.unwrap();
        assert!(gathered.load(Ordering::SeqCst));
        assert_eq!(result.score, 3 + 4 + 2 + 2);
        assert!(result.is_legal_page);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_before_delay_skips_gathering() {
        let gathered = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&gathered);
        let detection = DeferredDetection::schedule(DEFAULT_SETTLE_DELAY, move || {
            flag.store(true, Ordering::SeqCst);
            terms_page()
        });

        tokio::time::sleep(Duration::from_millis(100)).await;
        detection.cancel();

        let err = detection.outcome().await.unwrap_err();
        assert!(matches!(err, DetectionError::Cancelled));

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(!gathered.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn test_panicking_gather_reports_failure() {
        let detection = DeferredDetection::schedule(Duration::ZERO, || -> PageSignals {
            panic!("page unloaded mid-read")
        });
        let err = detection.outcome().await.unwrap_err();
        assert!(matches!(err, DetectionError::Failed(_)));
    }
}
