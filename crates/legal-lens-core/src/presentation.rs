/// Contract between the classifier and whatever renders the on-page indicator.
///
/// Rendering itself lives in the host. This module only fixes the rule: call
/// `show` once for a legal page, and do nothing otherwise.
use std::sync::atomic::{AtomicBool, Ordering};

use crate::classifier::ClassificationResult;

/// A user-visible affordance (badge, toast, status-bar item).
pub trait Indicator {
    fn show(&self, result: &ClassificationResult);
}

/// Invoke `indicator` if the page was classified as legal. Returns whether it was invoked.
pub fn present<I: Indicator + ?Sized>(result: &ClassificationResult, indicator: &I) -> bool {
    if !result.is_legal_page {
        return false;
    }
    tracing::debug!(score = result.score, "showing legal page indicator");
    indicator.show(result);
    true
}

/// Forwards at most one `show` call to the wrapped indicator, so a page never
/// ends up with two badges.
pub struct ShowOnce<I> {
    inner: I,
    shown: AtomicBool,
}

impl<I: Indicator> ShowOnce<I> {
    pub fn new(inner: I) -> Self {
        Self {
            inner,
            shown: AtomicBool::new(false),
        }
    }

    pub fn has_shown(&self) -> bool {
        self.shown.load(Ordering::Acquire)
    }

    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I: Indicator> Indicator for ShowOnce<I> {
    fn show(&self, result: &ClassificationResult) {
        if self.shown.swap(true, Ordering::AcqRel) {
            return;
        }
        self.inner.show(result);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct RecordingIndicator {
        shown: Mutex<Vec<u32>>,
    }

    impl Indicator for RecordingIndicator {
        fn show(&self, result: &ClassificationResult) {
            self.shown.lock().unwrap().push(result.score);
        }
    }

    #[test]
    fn test_legal_page_invokes_indicator() {
        let indicator = RecordingIndicator::default();
        assert!(present(&ClassificationResult::from_score(9), &indicator));
        assert_eq!(*indicator.shown.lock().unwrap(), vec![9]);
    }

    #[test]
    fn test_non_legal_page_does_nothing() {
        let indicator = RecordingIndicator::default();
        assert!(!present(&ClassificationResult::from_score(4), &indicator));
        assert!(indicator.shown.lock().unwrap().is_empty());
    }

    #[test]
    fn test_show_once_suppresses_second_badge() {
        let indicator = ShowOnce::new(RecordingIndicator::default());
        let result = ClassificationResult::from_score(15);
        assert!(!indicator.has_shown());

        assert!(present(&result, &indicator));
        assert!(present(&result, &indicator));
        assert!(indicator.has_shown());

        let inner = indicator.into_inner();
        assert_eq!(*inner.shown.lock().unwrap(), vec![15]);
    }

    #[test]
    fn test_present_accepts_trait_objects() {
        let indicator: Box<dyn Indicator> = Box::new(RecordingIndicator::default());
        assert!(present(&ClassificationResult::from_score(5), indicator.as_ref()));
    }
}
