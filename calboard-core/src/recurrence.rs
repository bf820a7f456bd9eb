//! Recurrence resolution.
//!
//! Decides whether a rule produces an occurrence on a given day, and expands
//! events into concrete occurrences inside a window for calendar rendering.
//! Everything here works at day granularity: a series covers the days from
//! `series_start.date()` to `end_date.date()` inclusive.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::date_range::DayWindow;
use crate::event::{Event, EventId, Recurrence, Weekday};

/// Whether `rule`, anchored at `series_start`, has an occurrence on `day`.
///
/// A rule whose end date precedes its series start yields an empty series.
pub fn occurs_on(rule: &Recurrence, day: NaiveDate, series_start: NaiveDateTime) -> bool {
    let first = series_start.date();
    let last = rule.end_date().date();

    if day < first || day > last {
        return false;
    }

    match rule {
        Recurrence::Daily { .. } => true,
        Recurrence::Weekly { days, .. } => days.contains(Weekday::from(day.weekday())),
        Recurrence::Monthly { .. } => day.day() == clamped_day_of_month(first.day(), day),
        Recurrence::Custom { interval, .. } => {
            let offset = (day - first).num_days();
            offset % 7 == 0 && (offset / 7) % i64::from(interval.get()) == 0
        }
    }
}

/// `day_of_month` clamped to the length of `day`'s month.
fn clamped_day_of_month(day_of_month: u32, day: NaiveDate) -> u32 {
    day_of_month.min(days_in_month(day.year(), day.month()))
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

/// One concrete instance of an event on the calendar grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    pub event_id: EventId,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Expand `event` into the occurrences that touch `window`.
///
/// The event's own `[start, end]` is always an occurrence when its span
/// overlaps the window, like [`Event::occurs_on`]. A recurring event adds
/// one occurrence per rule day inside the window, at the series start's time
/// of day and with the event's duration.
pub fn occurrences(event: &Event, window: &DayWindow) -> Vec<Occurrence> {
    let anchor_overlaps = event.start.date() <= window.last && event.end.date() >= window.first;
    let anchor = Occurrence {
        event_id: event.id.clone(),
        start: event.start,
        end: event.end,
    };

    let Some(rule) = &event.recurrence else {
        return if anchor_overlaps { vec![anchor] } else { Vec::new() };
    };

    let duration = event.duration();
    let time_of_day = event.start.time();

    let first = window.first.max(event.start.date());
    let last = window.last.min(rule.end_date().date());

    let mut expanded: Vec<Occurrence> = DayWindow::new(first, last)
        .days()
        .filter(|day| occurs_on(rule, *day, event.start))
        .map(|day| {
            let start = day.and_time(time_of_day);
            Occurrence {
                event_id: event.id.clone(),
                start,
                end: start + duration,
            }
        })
        .collect();

    if anchor_overlaps && !expanded.contains(&anchor) {
        expanded.insert(0, anchor);
    }
    expanded
}

/// Expand a whole collection, sorted by occurrence start.
///
/// Occurrences that began before the window but run into it are included,
/// so the earliest start may precede `window.first`.
pub fn agenda(events: &[Event], window: &DayWindow) -> Vec<Occurrence> {
    let mut all: Vec<Occurrence> = events
        .iter()
        .flat_map(|event| occurrences(event, window))
        .collect();

    all.sort_by_key(|occ| occ.start);
    all
}
