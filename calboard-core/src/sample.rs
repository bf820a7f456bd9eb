//! Built-in demo collection, used when no events file is configured.

use chrono::{NaiveDate, NaiveDateTime};

use crate::event::{Event, EventColor, Recurrence, Weekday, WeekdaySet};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .unwrap_or_default()
}

/// Ten events across May to June 2025, four of them recurring.
pub fn sample_events() -> Vec<Event> {
    vec![
        Event::new(1, "Team Meeting", at(2025, 5, 20, 10, 0), at(2025, 5, 20, 11, 0))
            .with_description("Weekly team sync")
            .with_color(EventColor::Blue),
        Event::new(2, "Project Review", at(2025, 5, 21, 14, 0), at(2025, 5, 21, 15, 30))
            .with_description("Quarterly project review meeting")
            .with_color(EventColor::Green)
            .with_recurrence(Recurrence::Weekly {
                days: WeekdaySet::from(Weekday::Monday).with(Weekday::Wednesday),
                end_date: at(2025, 6, 30, 0, 0),
            }),
        Event::new(3, "Client Presentation", at(2025, 5, 26, 9, 0), at(2025, 5, 26, 11, 0))
            .with_description("Quarterly client presentation and review")
            .with_color(EventColor::Red),
        Event::new(4, "Team Building", at(2025, 5, 27, 14, 0), at(2025, 5, 27, 17, 0))
            .with_description("Team building activities and games")
            .with_color(EventColor::Orange),
        Event::new(5, "Training Session", at(2025, 5, 28, 10, 0), at(2025, 5, 30, 12, 0))
            .with_description("New software training session")
            .with_color(EventColor::Purple)
            .with_recurrence(Recurrence::Weekly {
                days: WeekdaySet::from(Weekday::Tuesday),
                end_date: at(2025, 6, 30, 0, 0),
            }),
        Event::new(6, "Product Launch", at(2025, 5, 29, 13, 0), at(2025, 5, 29, 15, 0))
            .with_description("New product launch event")
            .with_color(EventColor::Brown),
        Event::new(7, "End of Month Review", at(2025, 5, 30, 15, 0), at(2025, 5, 30, 16, 30))
            .with_description("Monthly performance review meeting")
            .with_color(EventColor::Blue)
            .with_recurrence(Recurrence::monthly(at(2025, 12, 30, 0, 0))),
        Event::new(8, "Summer Workshop", at(2025, 6, 5, 9, 0), at(2025, 6, 5, 16, 0))
            .with_description("Annual summer workshop for team development")
            .with_color(EventColor::Green),
        Event::new(9, "Code Review Session", at(2025, 6, 12, 14, 0), at(2025, 6, 12, 16, 0))
            .with_description("Bi-weekly code review and best practices discussion")
            .with_color(EventColor::Red)
            .with_recurrence(Recurrence::Weekly {
                days: WeekdaySet::from(Weekday::Friday),
                end_date: at(2025, 7, 31, 0, 0),
            }),
        Event::new(10, "Quarterly Planning", at(2025, 6, 25, 10, 0), at(2025, 6, 25, 15, 0))
            .with_description("Q3 planning and strategy meeting")
            .with_color(EventColor::Purple),
    ]
}
