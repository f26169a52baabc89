//! Mutex-guarded wrappers for sharing a queue between threads.
//!
//! The core queues are not synchronized. These wrappers take a
//! [`parking_lot::Mutex`] for the duration of one queue operation each.

use parking_lot::Mutex;

use crate::counter::RelaxedCounter;
use crate::error::Result;
use crate::priority::PriorityQueue;
use crate::turns::{Person, TurnQueue};

pub struct SyncPriorityQueue<V = String, P = i32> {
    inner: Mutex<PriorityQueue<V, P>>,
    length: RelaxedCounter,
}

impl<V, P> std::fmt::Debug for SyncPriorityQueue<V, P>
where
    V: std::fmt::Debug,
    P: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncPriorityQueue")
            .field("inner", &self.inner)
            .finish()
    }
}

impl<V, P> Default for SyncPriorityQueue<V, P> {
    fn default() -> Self {
        Self::from(PriorityQueue::default())
    }
}

impl<V, P> From<PriorityQueue<V, P>> for SyncPriorityQueue<V, P> {
    fn from(queue: PriorityQueue<V, P>) -> Self {
        Self {
            length: RelaxedCounter::new(queue.len()),
            inner: Mutex::new(queue),
        }
    }
}

impl<V, P> SyncPriorityQueue<V, P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&self, value: V, priority: P) {
        let mut queue = self.inner.lock();
        queue.enqueue(value, priority);
        self.length.set(queue.len());
    }

    /// Number of entries as of the last completed operation.
    pub fn len(&self) -> usize {
        self.length.get()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_inner(self) -> PriorityQueue<V, P> {
        self.inner.into_inner()
    }
}

impl<V, P> SyncPriorityQueue<V, P>
where
    P: Ord,
{
    pub fn dequeue(&self) -> Result<V> {
        let mut queue = self.inner.lock();
        let value = queue.dequeue()?;
        self.length.set(queue.len());
        Ok(value)
    }

    pub fn peek(&self) -> Option<V>
    where
        V: Clone,
    {
        self.inner.lock().peek().cloned()
    }

    /// Dequeues up to `amount` values, stopping early once the queue is empty.
    pub fn drain(&self, amount: usize) -> impl Iterator<Item = V> + '_ {
        (0..amount).map_while(|_| self.dequeue().ok())
    }
}

#[derive(Debug, Default)]
pub struct SyncTurnQueue {
    inner: Mutex<TurnQueue>,
    length: RelaxedCounter,
}

impl From<TurnQueue> for SyncTurnQueue {
    fn from(queue: TurnQueue) -> Self {
        Self {
            length: RelaxedCounter::new(queue.len()),
            inner: Mutex::new(queue),
        }
    }
}

impl SyncTurnQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_person(&self, name: impl Into<String>, turns: i32) {
        let mut queue = self.inner.lock();
        queue.add_person(name, turns);
        self.length.set(queue.len());
    }

    pub fn get_next_person(&self) -> Result<Person> {
        let mut queue = self.inner.lock();
        let person = queue.get_next_person()?;

        self.length.set(queue.len());

        Ok(person)
    }

    /// Hands out up to `amount` turns, stopping early once no one is left.
    pub fn drain(&self, amount: usize) -> impl Iterator<Item = Person> + '_ {
        (0..amount).map_while(|_| self.get_next_person().ok())
    }

    pub fn len(&self) -> usize {
        self.length.get()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_inner(self) -> TurnQueue {
        self.inner.into_inner()
    }
}
