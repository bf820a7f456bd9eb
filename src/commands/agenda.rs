use anyhow::Result;
use calboard_core::date_range::DayWindow;
use calboard_core::recurrence;
use owo_colors::OwoColorize;

use crate::render::{AgendaEntry, Render, format_date_label};
use crate::source::Store;

pub fn run(store: &Store, from: Option<&str>, to: Option<&str>, default_days: u64) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let window = DayWindow::from_args(from, to, today, default_days)?;

    let occurrences = recurrence::agenda(store.list(), &window);

    if occurrences.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    // Group occurrences by day and print
    let mut current_date = None;

    for occurrence in &occurrences {
        let Some(event) = store.get(&occurrence.event_id) else {
            continue;
        };

        // Spans that began before the window are listed under its first day
        let day = occurrence.start.date().max(window.first);
        if current_date != Some(day) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", format_date_label(day, today).bold());
            current_date = Some(day);
        }

        println!("{}", AgendaEntry { occurrence, event, day }.render());
    }

    Ok(())
}
