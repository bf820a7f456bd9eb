//! Error types for calboard.

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::event::EventId;

/// Errors that can occur in calboard operations.
#[derive(Error, Debug)]
pub enum CalboardError {
    #[error("An event with id '{0}' already exists")]
    DuplicateId(EventId),

    #[error("Event not found: {0}")]
    NotFound(EventId),

    #[error("Event '{id}' ends before it starts ({start} > {end})")]
    InvalidRange {
        id: EventId,
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[error("Invalid recurrence: {0}")]
    InvalidRecurrence(String),

    #[error("Unknown event color '{0}'")]
    InvalidColor(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for calboard operations.
pub type CalboardResult<T> = Result<T, CalboardError>;
