use std::collections::VecDeque;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{QueueError, Result};

/// Someone waiting for a turn.
///
/// A `turns` value of zero or less means the person never runs out of turns.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Person {
    name: String,
    turns: i32,
}

impl Person {
    pub fn new(name: impl Into<String>, turns: i32) -> Self {
        Self {
            name: name.into(),
            turns,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn turns(&self) -> i32 {
        self.turns
    }

    pub fn has_infinite_turns(&self) -> bool {
        self.turns <= 0
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_infinite_turns() {
            write!(f, "{} (infinite)", self.name)
        } else {
            write!(f, "{} ({})", self.name, self.turns)
        }
    }
}

/// Circular queue handing out turns in FIFO order.
///
/// Each call to [`get_next_person`](Self::get_next_person) takes the person at
/// the front, uses up one of their turns and puts them at the back again while
/// they have turns left. People with infinite turns always go to the back
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TurnQueue {
    people: VecDeque<Person>,
}

impl TurnQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            people: VecDeque::with_capacity(capacity),
        }
    }

    /// Adds a person to the back of the queue. Zero or negative `turns` means
    /// infinite turns.
    pub fn add_person(&mut self, name: impl Into<String>, turns: i32) {
        let person = Person::new(name, turns);
        trace!(name = person.name(), turns, "added person");
        self.people.push_back(person);
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Takes the next turn.
    ///
    /// The returned person carries their remaining turns after this one was
    /// used. A person whose last turn was just used is returned with zero
    /// turns and is no longer in the queue.
    pub fn get_next_person(&mut self) -> Result<Person> {
        let Some(mut person) = self.people.pop_front() else {
            debug!("turn requested from empty queue");
            return Err(QueueError::NoOneInQueue);
        };

        if person.has_infinite_turns() {
            trace!(name = person.name(), "rotating person with infinite turns");
            self.people.push_back(person.clone());
            return Ok(person);
        }

        person.turns -= 1;

        if person.turns > 0 {
            trace!(name = person.name(), turns = person.turns, "rotating person");
            self.people.push_back(person.clone());
        } else {
            debug!(name = person.name(), "person used their last turn");
        }

        Ok(person)
    }

    /// The person who gets the next turn, as currently stored.
    pub fn peek_next(&self) -> Option<&Person> {
        self.people.front()
    }

    /// People in rotation order.
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, Person> {
        self.people.iter()
    }
}

impl<'a> IntoIterator for &'a TurnQueue {
    type Item = &'a Person;
    type IntoIter = std::collections::vec_deque::Iter<'a, Person>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
