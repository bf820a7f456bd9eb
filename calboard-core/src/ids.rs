//! Id generation strategies for new events.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::event::EventId;

/// Produces ids for events created through [`crate::store::EventStore::create`].
pub trait IdGenerator {
    fn next_id(&mut self) -> EventId;

    /// Called with every id already in the store, so generators can avoid
    /// handing them out again.
    fn observe(&mut self, _existing: &EventId) {}
}

/// Counter starting after the largest numeric id seen. Once the counter is
/// exhausted it hands out UUIDs instead.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    last: u64,
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> EventId {
        match self.last.checked_add(1) {
            Some(next) => {
                self.last = next;
                EventId::from(next)
            }
            None => UuidIds.next_id(),
        }
    }

    fn observe(&mut self, existing: &EventId) {
        if let Some(n) = existing.as_number() {
            self.last = self.last.max(n);
        }
    }
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> EventId {
        EventId::new(uuid::Uuid::new_v4().to_string())
    }
}

/// Milliseconds since the epoch, bumped when the clock has not advanced.
#[derive(Debug, Clone, Default)]
pub struct TimestampIds {
    last: i64,
}

impl IdGenerator for TimestampIds {
    fn next_id(&mut self) -> EventId {
        let now = Utc::now().timestamp_millis();
        self.last = if now > self.last { now } else { self.last + 1 };
        EventId::new(self.last.to_string())
    }
}

/// Configurable choice of generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    #[default]
    Sequential,
    Uuid,
    Timestamp,
}

impl IdStrategy {
    pub fn generator(self) -> Box<dyn IdGenerator> {
        match self {
            IdStrategy::Sequential => Box::new(SequentialIds::default()),
            IdStrategy::Uuid => Box::new(UuidIds),
            IdStrategy::Timestamp => Box::new(TimestampIds::default()),
        }
    }
}

impl IdGenerator for Box<dyn IdGenerator> {
    fn next_id(&mut self) -> EventId {
        (**self).next_id()
    }

    fn observe(&mut self, existing: &EventId) {
        (**self).observe(existing)
    }
}
