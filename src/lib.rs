//! Two small in-memory queues.
//!
//! - [`PriorityQueue`] hands out the highest priority value first, breaking
//!   ties in insertion order.
//! - [`TurnQueue`] cycles people through a number of turns each, with zero or
//!   negative turns meaning the person stays in rotation forever.
//!
//! Neither queue is synchronized. [`SyncPriorityQueue`] and [`SyncTurnQueue`]
//! wrap them in a mutex for sharing between threads.

mod counter;
mod error;
mod priority;
mod sync;
mod turns;

pub use error::{QueueError, Result};
pub use priority::{PriorityEntry, PriorityQueue};
pub use sync::{SyncPriorityQueue, SyncTurnQueue};
pub use turns::{Person, TurnQueue};
