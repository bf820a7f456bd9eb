//! Core types for calboard.
//!
//! This crate holds everything a calendar front end needs besides rendering:
//! - `store` owns the event collection and is the only way to change it
//! - `filter` narrows a collection by title, description, color and dates
//! - `recurrence` resolves recurring events into concrete occurrences

pub mod config;
pub mod date_range;
pub mod document;
pub mod error;
pub mod event;
pub mod filter;
pub mod ids;
pub mod recurrence;
pub mod sample;
pub mod store;

pub use error::{CalboardError, CalboardResult};
pub use event::{Event, EventColor, EventDraft, EventId, Recurrence, RecurrenceForm, Weekday};
pub use filter::FilterSpec;
pub use store::EventStore;
