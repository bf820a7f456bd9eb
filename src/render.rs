//! Terminal rendering for calboard types.
//!
//! Extension traits that add colored output to calboard-core types using
//! owo_colors.

use calboard_core::Event;
use calboard_core::recurrence::Occurrence;
use chrono::{NaiveDate, NaiveDateTime};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let (r, g, b) = self.display_color().rgb();
        let dot = "●".truecolor(r, g, b).to_string();
        let time = format_span(self.start, self.end);
        let id = format!("[{}]", self.id);

        let mut line = format!("{} {} {} {}", dot, self.to_string().bold(), time, id.dimmed());
        if let Some(rule) = &self.recurrence {
            line.push_str(&format!(" {}", format!("↻ {rule}").dimmed()));
        }
        if !self.description.is_empty() {
            line.push_str(&format!("\n    {}", self.description.dimmed()));
        }
        line
    }
}

/// An occurrence with the event it belongs to.
pub struct AgendaEntry<'a> {
    pub occurrence: &'a Occurrence,
    pub event: &'a Event,
    /// Day the entry is listed under.
    pub day: NaiveDate,
}

impl Render for AgendaEntry<'_> {
    fn render(&self) -> String {
        let (r, g, b) = self.event.display_color().rgb();
        let time = if self.occurrence.start.date() < self.day {
            format!("{:>7}", "cont.")
        } else {
            format!("{:>7}", self.occurrence.start.format("%H:%M"))
        };
        let tag = format!("[{}]", self.event.id);
        format!(
            "  {} {} {} {}",
            time,
            "●".truecolor(r, g, b),
            self.event,
            tag.dimmed()
        )
    }
}

/// Format a date as a human-readable label (e.g. "Today", "Tomorrow", "Wed May 21")
pub fn format_date_label(date: NaiveDate, today: NaiveDate) -> String {
    let diff = (date - today).num_days();
    match diff {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d, %Y").to_string(),
    }
}

/// "May 20, 2025 10:00 AM - 11:00 AM", repeating the date for multi-day spans
fn format_span(start: NaiveDateTime, end: NaiveDateTime) -> String {
    let first = start.format("%B %-d, %Y %-I:%M %p");
    if start.date() == end.date() {
        format!("{} - {}", first, end.format("%-I:%M %p"))
    } else {
        format!("{} - {}", first, end.format("%B %-d, %Y %-I:%M %p"))
    }
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
