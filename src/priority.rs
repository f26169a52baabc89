use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{QueueError, Result};

/// A value paired with the priority it was enqueued at.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PriorityEntry<V, P = i32> {
    value: V,
    priority: P,
}

impl<V, P> PriorityEntry<V, P> {
    pub fn new(value: V, priority: P) -> Self {
        Self { value, priority }
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn priority(&self) -> &P {
        &self.priority
    }

    pub fn into_value(self) -> V {
        self.value
    }
}

impl<V, P> fmt::Display for PriorityEntry<V, P>
where
    V: fmt::Display,
    P: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Pri:{})", self.value, self.priority)
    }
}

/// Priority queue that always hands out the highest priority value first.
///
/// Entries are stored in insertion order and the highest priority is found by
/// a linear scan on removal. Among entries sharing the highest priority, the
/// one enqueued earliest is removed first.
///
/// ```
/// use turnq::PriorityQueue;
///
/// let mut queue = PriorityQueue::new();
/// queue.enqueue("low", 1);
/// queue.enqueue("high", 5);
/// queue.enqueue("also high", 5);
///
/// assert_eq!(queue.dequeue(), Ok("high"));
/// assert_eq!(queue.dequeue(), Ok("also high"));
/// assert_eq!(queue.dequeue(), Ok("low"));
/// assert!(queue.dequeue().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PriorityQueue<V = String, P = i32> {
    entries: Vec<PriorityEntry<V, P>>,
}

impl<V, P> Default for PriorityQueue<V, P> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V, P> PriorityQueue<V, P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Adds `value` to the back of the queue, whatever its priority.
    pub fn enqueue(&mut self, value: V, priority: P) {
        self.entries.push(PriorityEntry::new(value, priority));
        trace!(len = self.entries.len(), "enqueued entry");
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in insertion order, not removal order.
    pub fn iter(&self) -> std::slice::Iter<'_, PriorityEntry<V, P>> {
        self.entries.iter()
    }
}

impl<V, P> PriorityQueue<V, P>
where
    P: Ord,
{
    /// Removes and returns the value with the highest priority.
    ///
    /// Ties go to the entry that was enqueued first. The remaining entries
    /// keep their relative order.
    pub fn dequeue(&mut self) -> Result<V> {
        let Some(index) = self.highest() else {
            debug!("dequeue on empty priority queue");
            return Err(QueueError::Empty);
        };

        let entry = self.entries.remove(index);
        trace!(index, len = self.entries.len(), "dequeued entry");

        Ok(entry.into_value())
    }

    /// The value the next [`dequeue`](Self::dequeue) would return.
    pub fn peek(&self) -> Option<&V> {
        self.highest().map(|index| self.entries[index].value())
    }

    fn highest(&self) -> Option<usize> {
        let mut entries = self.entries.iter().enumerate();
        let (mut best, mut best_entry) = entries.next()?;

        for (index, entry) in entries {
            // Strictly greater only, so the first of equal priorities stays.
            if entry.priority > best_entry.priority {
                best = index;
                best_entry = entry;
            }
        }

        Some(best)
    }
}

impl<V, P> fmt::Display for PriorityQueue<V, P>
where
    V: fmt::Display,
    P: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;

        for (index, entry) in self.entries.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{entry}")?;
        }

        f.write_str("]")
    }
}

impl<V, P> Extend<(V, P)> for PriorityQueue<V, P> {
    fn extend<T: IntoIterator<Item = (V, P)>>(&mut self, iter: T) {
        for (value, priority) in iter {
            self.enqueue(value, priority);
        }
    }
}

impl<V, P> FromIterator<(V, P)> for PriorityQueue<V, P> {
    fn from_iter<T: IntoIterator<Item = (V, P)>>(iter: T) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<'a, V, P> IntoIterator for &'a PriorityQueue<V, P> {
    type Item = &'a PriorityEntry<V, P>;
    type IntoIter = std::slice::Iter<'a, PriorityEntry<V, P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highest_priority_first() {
        let mut queue = PriorityQueue::new();
        queue.enqueue("a", 1);
        queue.enqueue("b", 5);
        queue.enqueue("c", 3);

        assert_eq!(queue.dequeue(), Ok("b"));
        assert_eq!(queue.dequeue(), Ok("c"));
        assert_eq!(queue.dequeue(), Ok("a"));
        assert!(queue.is_empty());
    }

    #[test]
    fn ties_are_fifo() {
        let mut queue = PriorityQueue::new();
        queue.enqueue("first", 2);
        queue.enqueue("low", 1);
        queue.enqueue("second", 2);
        queue.enqueue("third", 2);

        assert_eq!(queue.dequeue(), Ok("first"));
        assert_eq!(queue.dequeue(), Ok("second"));
        assert_eq!(queue.dequeue(), Ok("third"));
        assert_eq!(queue.dequeue(), Ok("low"));
    }

    #[test]
    fn negative_and_zero_priorities() {
        let mut queue = PriorityQueue::new();
        queue.enqueue("min", i32::MIN);
        queue.enqueue("zero", 0);
        queue.enqueue("neg", -7);

        assert_eq!(queue.dequeue(), Ok("zero"));
        assert_eq!(queue.dequeue(), Ok("neg"));
        assert_eq!(queue.dequeue(), Ok("min"));
    }

    #[test]
    fn empty_then_recovers() {
        let mut queue: PriorityQueue<&str> = PriorityQueue::new();
        assert_eq!(queue.dequeue(), Err(QueueError::Empty));

        queue.enqueue("back", 4);
        assert_eq!(queue.dequeue(), Ok("back"));
    }

    #[test]
    fn removal_preserves_order() {
        let mut queue = PriorityQueue::new();
        queue.enqueue("a", 1);
        queue.enqueue("b", 9);
        queue.enqueue("c", 2);

        queue.dequeue().unwrap();
        assert_eq!(queue.to_string(), "[a (Pri:1), c (Pri:2)]");
    }

    #[test]
    fn display_format() {
        let mut queue = PriorityQueue::new();
        assert_eq!(queue.to_string(), "[]");

        queue.enqueue(String::from("Bob"), 2);
        assert_eq!(queue.to_string(), "[Bob (Pri:2)]");

        queue.enqueue(String::from("Tim"), -1);
        assert_eq!(queue.to_string(), "[Bob (Pri:2), Tim (Pri:-1)]");
    }

    #[test]
    fn peek_matches_dequeue() {
        let mut queue: PriorityQueue<_> = [("x", 1), ("y", 3), ("z", 3)].into_iter().collect();

        assert_eq!(queue.peek(), Some(&"y"));
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.dequeue(), Ok("y"));
        assert_eq!(queue.peek(), Some(&"z"));
    }

    #[test]
    fn iter_in_insertion_order() {
        let queue: PriorityQueue<_> = [("x", 1), ("y", 3)].into_iter().collect();
        let values: Vec<_> = queue.iter().map(|entry| *entry.value()).collect();

        assert_eq!(values, ["x", "y"]);
    }
}
