use anyhow::Result;
use calboard_core::date_range::parse_date;
use owo_colors::OwoColorize;

use crate::render::{Render, pluralize};
use crate::source::Store;

pub fn run(store: &Store, today: Option<&str>) -> Result<()> {
    let today = match today {
        Some(s) => parse_date(s)?,
        None => chrono::Local::now().date_naive(),
    };

    let mut upcoming = store.upcoming(today);
    upcoming.sort_by_key(|event| event.start);

    println!(
        "{}",
        format!(
            "{} Upcoming {}",
            upcoming.len(),
            pluralize("Event", upcoming.len())
        )
        .bold()
    );

    for event in upcoming {
        println!("  {}", event.render());
    }

    Ok(())
}
