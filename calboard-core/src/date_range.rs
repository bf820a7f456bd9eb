//! Date ranges for filtering and expanding events.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{CalboardError, CalboardResult};

/// Timestamp window for filtering events.
/// None values mean unbounded in that direction. Both bounds are inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDateTime>,
    pub to: Option<NaiveDateTime>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDateTime>, to: Option<NaiveDateTime>) -> Self {
        DateRange { from, to }
    }

    /// Parse optional YYYY-MM-DD bounds.
    /// - `from` becomes the start of that day
    /// - `to` becomes the end of that day (23:59:59)
    pub fn from_args(from: Option<&str>, to: Option<&str>) -> CalboardResult<Self> {
        let from = from.map(parse_date_start).transpose()?;
        let to = to.map(parse_date_end).transpose()?;
        Ok(DateRange { from, to })
    }

    pub fn is_bounded(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    /// Whether an event spanning `[start, end]` fits the window.
    ///
    /// With both bounds the event must lie entirely inside; overlapping is
    /// not enough. With one bound only that side is checked.
    pub fn admits(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        match (self.from, self.to) {
            (Some(from), Some(to)) => start >= from && end <= to,
            (Some(from), None) => start >= from,
            (None, Some(to)) => end <= to,
            (None, None) => true,
        }
    }
}

/// Inclusive range of calendar days, used when expanding recurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub first: NaiveDate,
    pub last: NaiveDate,
}

impl DayWindow {
    pub fn new(first: NaiveDate, last: NaiveDate) -> Self {
        DayWindow { first, last }
    }

    /// `days` days starting at `first` (a single day when `days` is 0 or 1).
    pub fn starting(first: NaiveDate, days: u64) -> Self {
        let last = first
            .checked_add_days(Days::new(days.saturating_sub(1)))
            .unwrap_or(first);
        DayWindow { first, last }
    }

    /// Parse optional YYYY-MM-DD bounds, defaulting to `default_days` days
    /// from `today`.
    pub fn from_args(
        from: Option<&str>,
        to: Option<&str>,
        today: NaiveDate,
        default_days: u64,
    ) -> CalboardResult<Self> {
        let first = match from {
            Some(s) => parse_date(s)?,
            None => today,
        };

        let last = match to {
            Some(s) => parse_date(s)?,
            None => DayWindow::starting(first, default_days).last,
        };

        Ok(DayWindow { first, last })
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        day >= self.first && day <= self.last
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.first.iter_days().take_while(|day| *day <= self.last)
    }
}

/// Parse YYYY-MM-DD
pub fn parse_date(s: &str) -> CalboardResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| CalboardError::InvalidDate(s.to_string()))
}

/// Parse `YYYY-MM-DDTHH:MM`, `YYYY-MM-DD HH:MM` (seconds optional) or a bare
/// date, which means midnight.
pub fn parse_datetime(s: &str) -> CalboardResult<NaiveDateTime> {
    let trimmed = s.trim();
    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];

    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map(Ok)
        .unwrap_or_else(|| parse_date_start(trimmed))
        .map_err(|_| CalboardError::InvalidDate(s.to_string()))
}

/// Parse YYYY-MM-DD as start of day
fn parse_date_start(s: &str) -> CalboardResult<NaiveDateTime> {
    Ok(parse_date(s)?.and_time(NaiveTime::MIN))
}

/// Parse YYYY-MM-DD as end of day
fn parse_date_end(s: &str) -> CalboardResult<NaiveDateTime> {
    let date = parse_date(s)?;
    date.and_hms_opt(23, 59, 59)
        .ok_or_else(|| CalboardError::InvalidDate(s.to_string()))
}
