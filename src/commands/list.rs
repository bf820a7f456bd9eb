use anyhow::Result;
use calboard_core::date_range::DateRange;
use calboard_core::filter::{self, FilterSpec};
use calboard_core::{Event, EventColor};
use owo_colors::OwoColorize;

use crate::render::{Render, pluralize};
use crate::source::Store;

pub struct ListArgs {
    pub title: String,
    pub description: String,
    pub color: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub json: bool,
}

impl ListArgs {
    fn filter_spec(&self) -> Result<FilterSpec> {
        let window = DateRange::from_args(self.from.as_deref(), self.to.as_deref())?;
        let mut spec = FilterSpec::new()
            .title(self.title.as_str())
            .description(self.description.as_str())
            .window(window);

        if let Some(color) = &self.color {
            spec = spec.color(color.parse::<EventColor>()?);
        }

        Ok(spec)
    }
}

pub fn run(store: &Store, args: ListArgs) -> Result<()> {
    let spec = args.filter_spec()?;
    let events = filter::apply(store.list(), &spec);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&events)?);
        return Ok(());
    }

    let labels = spec.active_labels();
    if !labels.is_empty() {
        println!("{}", format!("Filters: {}", labels.join(", ")).dimmed());
        println!();
    }

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    print_grouped(&events);

    println!();
    println!(
        "{}",
        format!("{} {}", events.len(), pluralize("event", events.len())).dimmed()
    );

    Ok(())
}

/// Print events under a bold heading per start day. Expects `events` sorted.
fn print_grouped(events: &[Event]) {
    let mut current = None;

    for event in events {
        let day = event.start.date();
        if current != Some(day) {
            if current.is_some() {
                println!();
            }
            println!("{}", day.format("%A, %B %-d, %Y").bold());
            current = Some(day);
        }
        println!("  {}", event.render());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> ListArgs {
        ListArgs {
            title: String::new(),
            description: String::new(),
            color: None,
            from: None,
            to: None,
            json: false,
        }
    }

    #[test]
    fn test_empty_args_give_inactive_filter() {
        let spec = args().filter_spec().unwrap();
        assert!(!spec.is_active());
    }

    #[test]
    fn test_color_by_name_or_hex() {
        let by_name = ListArgs {
            color: Some("green".into()),
            ..args()
        };
        let by_hex = ListArgs {
            color: Some("#4caf50".into()),
            ..args()
        };
        assert_eq!(by_name.filter_spec().unwrap().color, Some(EventColor::Green));
        assert_eq!(by_hex.filter_spec().unwrap().color, Some(EventColor::Green));
    }

    #[test]
    fn test_unknown_color_is_an_error() {
        let bad = ListArgs {
            color: Some("teal".into()),
            ..args()
        };
        assert!(bad.filter_spec().is_err());
    }

    #[test]
    fn test_dates_become_day_bounds() {
        let spec = ListArgs {
            from: Some("2025-05-28".into()),
            to: Some("2025-05-29".into()),
            ..args()
        }
        .filter_spec()
        .unwrap();

        let from = spec.window.from.unwrap();
        let to = spec.window.to.unwrap();
        assert_eq!(from.to_string(), "2025-05-28 00:00:00");
        assert_eq!(to.to_string(), "2025-05-29 23:59:59");
    }
}
