//! Commands that change the collection. The core keeps events in memory
//! only, so each prints the resulting collection as JSON for the caller to
//! keep.

use anyhow::Result;
use calboard_core::date_range::parse_datetime;
use calboard_core::event::RecurrenceKind;
use calboard_core::{Event, EventColor, EventDraft, EventId, RecurrenceForm, Weekday};
use owo_colors::OwoColorize;

use crate::source::Store;

pub struct AddArgs {
    pub title: String,
    pub start: String,
    pub end: Option<String>,
    pub description: String,
    pub color: Option<String>,
    pub repeat: Option<String>,
    pub days: Vec<String>,
    pub interval: u32,
    pub until: Option<String>,
}

impl AddArgs {
    fn into_draft(self, default_color: EventColor) -> Result<EventDraft> {
        let start = parse_datetime(&self.start)?;
        let mut draft = EventDraft::new(self.title, start);

        if let Some(end) = &self.end {
            draft.end = parse_datetime(end)?;
        }
        draft.description = self.description;
        draft.color = Some(match &self.color {
            Some(color) => color.parse::<EventColor>()?,
            None => default_color,
        });

        let mut form = RecurrenceForm::new(start);
        if let Some(repeat) = &self.repeat {
            form.enabled = true;
            form.kind = repeat.parse::<RecurrenceKind>()?;
            form.days = self
                .days
                .iter()
                .map(|d| d.parse::<Weekday>())
                .collect::<Result<Vec<_>, _>>()?;
            form.interval = self.interval;
            if let Some(until) = &self.until {
                form.end_date = parse_datetime(until)?;
            }
        }
        draft.recurrence = form.into_rule()?;

        Ok(draft)
    }
}

pub fn add(store: &mut Store, args: AddArgs, default_color: EventColor) -> Result<()> {
    let draft = args.into_draft(default_color)?;
    let id = store.create(draft)?;

    eprintln!("{} {}", "Added event".green(), id);
    print_events(store.list())
}

pub fn reschedule(store: &mut Store, id: &str, start: &str, end: &str) -> Result<()> {
    let id = EventId::from(id);
    let start = parse_datetime(start)?;
    let end = parse_datetime(end)?;

    if !store.contains(&id) {
        eprintln!("{}", format!("No event with id {id}, nothing moved").dimmed());
    }

    let events = store.reschedule(&id, start, end)?;
    print_events(events)
}

pub fn remove(store: &mut Store, id: &str) -> Result<()> {
    let id = EventId::from(id);

    if !store.contains(&id) {
        eprintln!("{}", format!("No event with id {id}, nothing removed").dimmed());
    }

    let events = store.remove(&id);
    print_events(events)
}

fn print_events(events: &[Event]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(events)?);
    Ok(())
}
