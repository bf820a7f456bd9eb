//! Event filtering.
//!
//! A [`FilterSpec`] is a conjunction of optional constraints. [`apply`]
//! keeps the events that satisfy all of them and returns them sorted by
//! start time. Recurrence rules are never consulted here.

use chrono::NaiveDateTime;

use crate::date_range::DateRange;
use crate::event::{Event, EventColor};

/// Constraints a caller wants applied before display.
///
/// Empty text patterns and `None` values are inactive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    /// Case-insensitive substring of the title.
    pub title: String,
    /// Case-insensitive substring of the description.
    pub description: String,
    pub color: Option<EventColor>,
    pub window: DateRange,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, pattern: impl Into<String>) -> Self {
        self.title = pattern.into();
        self
    }

    pub fn description(mut self, pattern: impl Into<String>) -> Self {
        self.description = pattern.into();
        self
    }

    pub fn color(mut self, color: EventColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn from(mut self, from: NaiveDateTime) -> Self {
        self.window.from = Some(from);
        self
    }

    pub fn to(mut self, to: NaiveDateTime) -> Self {
        self.window.to = Some(to);
        self
    }

    pub fn window(mut self, window: DateRange) -> Self {
        self.window = window;
        self
    }

    pub fn is_active(&self) -> bool {
        !self.title.is_empty()
            || !self.description.is_empty()
            || self.color.is_some()
            || self.window.is_bounded()
    }

    /// Reset every constraint.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether `event` satisfies every active constraint.
    pub fn matches(&self, event: &Event) -> bool {
        contains_ignore_case(&event.title, &self.title)
            && contains_ignore_case(&event.description, &self.description)
            && self.color.is_none_or(|color| event.color == Some(color))
            && self.window.admits(event.start, event.end)
    }

    /// Short labels for the active constraints, e.g. `title: team` or
    /// `Date Range: May 20, 2025 - Any`.
    pub fn active_labels(&self) -> Vec<String> {
        let mut labels = Vec::new();

        if !self.title.is_empty() {
            labels.push(format!("title: {}", self.title));
        }
        if let Some(color) = self.color {
            labels.push(format!("color: {}", color));
        }
        if !self.description.is_empty() {
            labels.push(format!("description: {}", self.description));
        }
        if self.window.is_bounded() {
            let bound = |b: Option<NaiveDateTime>| {
                b.map(|dt| dt.format("%b %-d, %Y").to_string())
                    .unwrap_or_else(|| "Any".to_string())
            };
            labels.push(format!(
                "Date Range: {} - {}",
                bound(self.window.from),
                bound(self.window.to)
            ));
        }

        labels
    }
}

/// An empty pattern matches everything.
fn contains_ignore_case(haystack: &str, pattern: &str) -> bool {
    pattern.is_empty() || haystack.to_lowercase().contains(&pattern.to_lowercase())
}

/// Keep the events matching `spec`, sorted ascending by start.
///
/// The sort is stable, so events with equal starts keep their input order.
pub fn apply(events: &[Event], spec: &FilterSpec) -> Vec<Event> {
    let mut filtered: Vec<Event> = events
        .iter()
        .filter(|event| spec.matches(event))
        .cloned()
        .collect();

    filtered.sort_by_key(|event| event.start);

    tracing::trace!(
        input = events.len(),
        output = filtered.len(),
        active = spec.is_active(),
        "filter applied"
    );

    filtered
}
