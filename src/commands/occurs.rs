use anyhow::Result;
use calboard_core::date_range::parse_date;
use calboard_core::{CalboardError, EventId};
use owo_colors::OwoColorize;

use crate::source::Store;

pub fn run(store: &Store, id: &str, date: &str) -> Result<()> {
    let id = EventId::from(id);
    let day = parse_date(date)?;

    let event = store.get(&id).ok_or(CalboardError::NotFound(id))?;

    if event.occurs_on(day) {
        println!("{} occurs on {}", event.bold(), day.format("%a %b %-d, %Y"));
    } else {
        println!(
            "{}",
            format!("{} does not occur on {}", event, day.format("%a %b %-d, %Y")).dimmed()
        );
    }

    Ok(())
}
