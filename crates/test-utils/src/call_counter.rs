use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use questline::Completion;

/// A fake completion predicate that:
/// - records how many times it was evaluated
/// - returns a result the test can flip at any time.
#[derive(Debug, Clone, Default)]
pub struct CallCounter {
    calls: Arc<AtomicUsize>,
    result: Arc<AtomicBool>,
}

impl CallCounter {
    pub fn new(result: bool) -> Self {
        let counter = Self::default();
        counter.set(result);
        counter
    }

    /// A [`Completion`] backed by this counter.
    pub fn completion(&self) -> Completion {
        let calls = Arc::clone(&self.calls);
        let result = Arc::clone(&self.result);
        Completion::check(move || {
            calls.fetch_add(1, Ordering::SeqCst);
            result.load(Ordering::SeqCst)
        })
    }

    pub fn set(&self, result: bool) {
        self.result.store(result, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}
