use thiserror::Error;

pub type Result<T> = std::result::Result<T, QueueError>;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// Dequeue on a priority queue with no entries.
    #[error("the queue is empty")]
    Empty,

    /// Turn requested from a turn queue with no people.
    #[error("no one in the queue")]
    NoOneInQueue,
}

impl QueueError {
    /// Both variants describe an operation on an empty collection.
    pub fn is_empty_collection(&self) -> bool {
        matches!(self, Self::Empty | Self::NoOneInQueue)
    }
}
