//! Fixed-capacity rolling log shared by a game's chat and action histories.
//!
//! The log owns exactly `capacity` slots for its whole life. Appending
//! overwrites the logically oldest slot and moves the oldest-slot cursor on by
//! one, so after `capacity` appends the earliest entries are gone for good.
//! Reads always hand back `capacity` entries, oldest first; slots that were
//! never written hold `T::default()`.

use parking_lot::RwLock;
use serde::Serialize;
use time::OffsetDateTime;

use crate::errors::domain::{DomainError, ValidationKind};

/// Default number of entries kept in a game's chat and action logs.
pub const DEFAULT_LOG_CAPACITY: usize = 8;

/// A single timestamped line of a game log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    #[serde(rename = "timestamp_in_seconds", with = "time::serde::timestamp")]
    pub creation_time: OffsetDateTime,
    pub player_name: String,
    /// Display hint for the frontend; opaque to the log.
    pub color_tag: String,
    pub text: String,
}

impl Message {
    /// Build a message stamped with the current time.
    pub fn now(
        player_name: impl Into<String>,
        color_tag: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            creation_time: OffsetDateTime::now_utc(),
            player_name: player_name.into(),
            color_tag: color_tag.into(),
            text: text.into(),
        }
    }

    /// True for the zero-valued placeholder held by never-written slots.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Default for Message {
    fn default() -> Self {
        Self {
            creation_time: OffsetDateTime::UNIX_EPOCH,
            player_name: String::new(),
            color_tag: String::new(),
            text: String::new(),
        }
    }
}

struct Ring<T> {
    slots: Vec<T>,
    index_of_oldest: usize,
}

/// Bounded, insertion-ordered log safe for concurrent appends.
///
/// Writers serialize on an internal lock held only for the duration of one
/// slot write; readers take the same lock shared while copying, so a
/// snapshot never observes a half-written slot.
pub struct RollingLog<T> {
    capacity: usize,
    ring: RwLock<Ring<T>>,
}

impl<T: Clone + Default> RollingLog<T> {
    /// Allocate `capacity` default-valued slots. A capacity of zero is rejected.
    pub fn new(capacity: usize) -> Result<Self, DomainError> {
        if capacity == 0 {
            return Err(DomainError::validation(
                ValidationKind::InvalidCapacity,
                "Rolling log capacity must be at least 1",
            ));
        }

        Ok(Self {
            capacity,
            ring: RwLock::new(Ring {
                slots: vec![T::default(); capacity],
                index_of_oldest: 0,
            }),
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Record `entry` as the newest entry, discarding the oldest.
    pub fn push(&self, entry: T) {
        self.push_with(|| entry);
    }

    /// Like [`push`](Self::push), but builds the entry while the write lock is
    /// held so entries that carry their own timestamp land in timestamp order.
    pub fn push_with(&self, make_entry: impl FnOnce() -> T) {
        let mut ring = self.ring.write();
        let oldest = ring.index_of_oldest;
        ring.slots[oldest] = make_entry();
        ring.index_of_oldest = (oldest + 1) % self.capacity;
    }

    /// Copy of all `capacity` entries, oldest first.
    pub fn snapshot(&self) -> Vec<T> {
        let ring = self.ring.read();
        let (newer, older) = ring.slots.split_at(ring.index_of_oldest);
        older.iter().chain(newer.iter()).cloned().collect()
    }
}

impl RollingLog<Message> {
    /// Append a message from `player_name` stamped with the current time.
    pub fn append(
        &self,
        player_name: impl Into<String>,
        color_tag: impl Into<String>,
        text: impl Into<String>,
    ) {
        let (player_name, color_tag, text) = (player_name.into(), color_tag.into(), text.into());
        self.push_with(|| Message::now(player_name, color_tag, text));
    }
}

impl<T> std::fmt::Debug for RollingLog<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RollingLog")
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}
