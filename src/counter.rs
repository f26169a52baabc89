use std::sync::atomic::{
    AtomicUsize,
    Ordering::Relaxed,
};

/// Length mirror for the synchronized queues, readable without the lock.
#[derive(Debug, Default)]
pub(crate) struct RelaxedCounter(AtomicUsize);

impl RelaxedCounter {
    pub fn new(value: usize) -> Self {
        Self(AtomicUsize::new(value))
    }

    pub fn get(&self) -> usize {
        self.0.load(Relaxed)
    }

    pub fn set(&self, value: usize) {
        self.0.store(value, Relaxed)
    }
}
