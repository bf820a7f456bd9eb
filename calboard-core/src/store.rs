//! In-memory event collection.
//!
//! `EventStore` owns the events and is the only way to change them. Reads
//! hand out shared borrows (or an owned [`EventStore::snapshot`]), so callers
//! cannot mutate stored events behind the store's back.
//!
//! Updates and removals that name an unknown id are no-ops that still return
//! the unchanged collection.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::error::{CalboardError, CalboardResult};
use crate::event::{Event, EventDraft, EventId};
use crate::ids::{IdGenerator, SequentialIds};

/// How many fresh ids `create` tries before giving up.
const MAX_ID_ATTEMPTS: usize = 16;

#[derive(Debug)]
pub struct EventStore<G: IdGenerator = SequentialIds> {
    events: Vec<Event>,
    ids: G,
}

impl EventStore<SequentialIds> {
    pub fn new() -> Self {
        Self::with_id_generator(SequentialIds::default())
    }

    /// Build a store from an existing collection, rejecting duplicate ids
    /// and inverted ranges.
    pub fn from_events(events: impl IntoIterator<Item = Event>) -> CalboardResult<Self> {
        Self::with_events(SequentialIds::default(), events)
    }
}

impl Default for EventStore<SequentialIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> EventStore<G> {
    pub fn with_id_generator(ids: G) -> Self {
        EventStore {
            events: Vec::new(),
            ids,
        }
    }

    /// Like [`EventStore::from_events`], with a chosen id generator.
    pub fn with_events(ids: G, events: impl IntoIterator<Item = Event>) -> CalboardResult<Self> {
        let mut store = Self::with_id_generator(ids);
        for event in events {
            store.add(event)?;
        }
        Ok(store)
    }

    /// Current events in insertion order.
    pub fn list(&self) -> &[Event] {
        &self.events
    }

    /// Owned copy of the current events.
    pub fn snapshot(&self) -> Vec<Event> {
        self.events.clone()
    }

    pub fn get(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|e| &e.id == id)
    }

    pub fn contains(&self, id: &EventId) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn position(&self, id: &EventId) -> Option<usize> {
        self.events.iter().position(|e| &e.id == id)
    }

    /// Append an event that already carries its id.
    pub fn add(&mut self, event: Event) -> CalboardResult<&[Event]> {
        if self.contains(&event.id) {
            return Err(CalboardError::DuplicateId(event.id));
        }
        check_range(&event)?;

        debug!(id = %event.id, title = %event.title, "adding event");
        self.ids.observe(&event.id);
        self.events.push(event);
        Ok(&self.events)
    }

    /// Append a draft under a freshly generated id.
    pub fn create(&mut self, draft: EventDraft) -> CalboardResult<EventId> {
        let mut candidate = self.ids.next_id();
        let mut attempts = 1;

        while self.contains(&candidate) {
            if attempts == MAX_ID_ATTEMPTS {
                return Err(CalboardError::DuplicateId(candidate));
            }
            candidate = self.ids.next_id();
            attempts += 1;
        }

        let event = draft.into_event(candidate.clone());
        self.add(event)?;
        Ok(candidate)
    }

    /// Replace the event with the same id in full.
    pub fn update(&mut self, event: Event) -> CalboardResult<&[Event]> {
        check_range(&event)?;

        match self.position(&event.id) {
            Some(index) => {
                debug!(id = %event.id, "updating event");
                self.events[index] = event;
            }
            None => debug!(id = %event.id, "update for unknown event ignored"),
        }
        Ok(&self.events)
    }

    /// Move or resize an event, keeping everything else.
    pub fn reschedule(
        &mut self,
        id: &EventId,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> CalboardResult<&[Event]> {
        let Some(mut moved) = self.get(id).cloned() else {
            debug!(id = %id, "reschedule for unknown event ignored");
            return Ok(&self.events);
        };

        moved.start = start;
        moved.end = end;
        self.update(moved)
    }

    /// Remove the event with `id`, if present.
    pub fn remove(&mut self, id: &EventId) -> &[Event] {
        match self.position(id) {
            Some(index) => {
                debug!(id = %id, "removing event");
                self.events.remove(index);
            }
            None => debug!(id = %id, "remove for unknown event ignored"),
        }
        &self.events
    }

    /// Events whose start falls on or after `today`.
    pub fn upcoming(&self, today: NaiveDate) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.start.date() >= today)
            .collect()
    }
}

fn check_range(event: &Event) -> CalboardResult<()> {
    if event.has_valid_range() {
        Ok(())
    } else {
        Err(CalboardError::InvalidRange {
            id: event.id.clone(),
            start: event.start,
            end: event.end,
        })
    }
}
