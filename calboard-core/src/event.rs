//! Event types.
//!
//! These are the values the store owns and the filter and recurrence
//! modules read. Timestamps are naive wall-clock values; there is no
//! timezone handling anywhere in calboard.

use std::collections::BTreeSet;
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use chrono::{Duration, Months, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::error::{CalboardError, CalboardResult};

/// Opaque event identifier, unique within a store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawEventId", into = "String")]
pub struct EventId(String);

/// Ids arrive either as strings or as plain numbers (`"id": 1`).
#[derive(Deserialize)]
#[serde(untagged)]
enum RawEventId {
    Text(String),
    Number(u64),
}

impl From<RawEventId> for EventId {
    fn from(raw: RawEventId) -> Self {
        match raw {
            RawEventId::Text(s) => EventId(s),
            RawEventId::Number(n) => EventId(n.to_string()),
        }
    }
}

impl From<EventId> for String {
    fn from(id: EventId) -> Self {
        id.0
    }
}

impl EventId {
    pub fn new(id: impl Into<String>) -> Self {
        EventId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The id as a number, if it is one. Used to seed sequential generators.
    pub fn as_number(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl From<&str> for EventId {
    fn from(s: &str) -> Self {
        EventId(s.to_string())
    }
}

impl From<String> for EventId {
    fn from(s: String) -> Self {
        EventId(s)
    }
}

impl From<u64> for EventId {
    fn from(n: u64) -> Self {
        EventId(n.to_string())
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The fixed event palette. Serialized as the hex value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EventColor {
    #[default]
    #[serde(rename = "#3174ad")]
    Blue,
    #[serde(rename = "#4caf50")]
    Green,
    #[serde(rename = "#f44336")]
    Red,
    #[serde(rename = "#ff9800")]
    Orange,
    #[serde(rename = "#9c27b0")]
    Purple,
    #[serde(rename = "#795548")]
    Brown,
}

impl EventColor {
    pub const ALL: [EventColor; 6] = [
        EventColor::Blue,
        EventColor::Green,
        EventColor::Red,
        EventColor::Orange,
        EventColor::Purple,
        EventColor::Brown,
    ];

    /// Color used when an event carries none.
    pub const FALLBACK: EventColor = EventColor::Blue;

    pub fn hex(self) -> &'static str {
        match self {
            EventColor::Blue => "#3174ad",
            EventColor::Green => "#4caf50",
            EventColor::Red => "#f44336",
            EventColor::Orange => "#ff9800",
            EventColor::Purple => "#9c27b0",
            EventColor::Brown => "#795548",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EventColor::Blue => "Blue",
            EventColor::Green => "Green",
            EventColor::Red => "Red",
            EventColor::Orange => "Orange",
            EventColor::Purple => "Purple",
            EventColor::Brown => "Brown",
        }
    }

    /// RGB components, for terminal rendering.
    pub fn rgb(self) -> (u8, u8, u8) {
        let hex = &self.hex()[1..];
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or_default();
        (channel(0), channel(2), channel(4))
    }
}

impl fmt::Display for EventColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}

impl FromStr for EventColor {
    type Err = CalboardError;

    /// Accepts either the hex value (`#3174ad`) or the label (`blue`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        EventColor::ALL
            .into_iter()
            .find(|c| c.hex().eq_ignore_ascii_case(needle) || c.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CalboardError::InvalidColor(s.to_string()))
    }
}

/// Weekday tag used by weekly rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
            Weekday::Sunday => "Sun",
        };
        f.write_str(label)
    }
}

impl FromStr for Weekday {
    type Err = CalboardError;

    /// Accepts full or abbreviated English names (`monday`, `Mon`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<chrono::Weekday>()
            .map(Weekday::from)
            .map_err(|_| CalboardError::InvalidRecurrence(format!("unknown weekday '{s}'")))
    }
}

/// A non-empty set of weekdays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Weekday>", into = "Vec<Weekday>")]
pub struct WeekdaySet(BTreeSet<Weekday>);

impl WeekdaySet {
    pub fn contains(&self, day: Weekday) -> bool {
        self.0.contains(&day)
    }

    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.0.iter().copied()
    }
}

impl WeekdaySet {
    /// Add `day` to the set.
    pub fn with(mut self, day: Weekday) -> Self {
        self.0.insert(day);
        self
    }
}

impl From<Weekday> for WeekdaySet {
    fn from(day: Weekday) -> Self {
        WeekdaySet(BTreeSet::from([day]))
    }
}

impl TryFrom<Vec<Weekday>> for WeekdaySet {
    type Error = CalboardError;

    fn try_from(days: Vec<Weekday>) -> Result<Self, Self::Error> {
        let set: BTreeSet<Weekday> = days.into_iter().collect();
        if set.is_empty() {
            return Err(CalboardError::InvalidRecurrence(
                "weekly recurrence needs at least one weekday".into(),
            ));
        }
        Ok(WeekdaySet(set))
    }
}

impl From<WeekdaySet> for Vec<Weekday> {
    fn from(set: WeekdaySet) -> Self {
        set.0.into_iter().collect()
    }
}

/// A recurrence rule. Every variant is bounded by `end_date`, the last
/// possible occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum Recurrence {
    Daily {
        end_date: NaiveDateTime,
    },
    Weekly {
        days: WeekdaySet,
        end_date: NaiveDateTime,
    },
    Monthly {
        end_date: NaiveDateTime,
    },
    /// Every `interval` weeks on the series start's weekday.
    Custom {
        interval: NonZeroU32,
        end_date: NaiveDateTime,
    },
}

impl Recurrence {
    pub fn daily(end_date: NaiveDateTime) -> Self {
        Recurrence::Daily { end_date }
    }

    pub fn weekly(
        days: impl IntoIterator<Item = Weekday>,
        end_date: NaiveDateTime,
    ) -> CalboardResult<Self> {
        let days = WeekdaySet::try_from(days.into_iter().collect::<Vec<_>>())?;
        Ok(Recurrence::Weekly { days, end_date })
    }

    pub fn monthly(end_date: NaiveDateTime) -> Self {
        Recurrence::Monthly { end_date }
    }

    pub fn custom(interval: u32, end_date: NaiveDateTime) -> CalboardResult<Self> {
        let interval = NonZeroU32::new(interval).ok_or_else(|| {
            CalboardError::InvalidRecurrence("custom interval must be at least one week".into())
        })?;
        Ok(Recurrence::Custom { interval, end_date })
    }

    pub fn end_date(&self) -> NaiveDateTime {
        match self {
            Recurrence::Daily { end_date }
            | Recurrence::Weekly { end_date, .. }
            | Recurrence::Monthly { end_date }
            | Recurrence::Custom { end_date, .. } => *end_date,
        }
    }

    pub fn kind(&self) -> RecurrenceKind {
        match self {
            Recurrence::Daily { .. } => RecurrenceKind::Daily,
            Recurrence::Weekly { .. } => RecurrenceKind::Weekly,
            Recurrence::Monthly { .. } => RecurrenceKind::Monthly,
            Recurrence::Custom { .. } => RecurrenceKind::Custom,
        }
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let until = self.end_date().format("%b %-d, %Y");
        match self {
            Recurrence::Daily { .. } => write!(f, "daily until {until}"),
            Recurrence::Weekly { days, .. } => {
                let days: Vec<String> = days.iter().map(|d| d.to_string()).collect();
                write!(f, "weekly on {} until {until}", days.join(", "))
            }
            Recurrence::Monthly { .. } => write!(f, "monthly until {until}"),
            Recurrence::Custom { interval, .. } => {
                write!(f, "every {interval} weeks until {until}")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceKind {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Custom,
}

impl FromStr for RecurrenceKind {
    type Err = CalboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(RecurrenceKind::Daily),
            "weekly" => Ok(RecurrenceKind::Weekly),
            "monthly" => Ok(RecurrenceKind::Monthly),
            "custom" => Ok(RecurrenceKind::Custom),
            _ => Err(CalboardError::InvalidRecurrence(format!(
                "unknown recurrence type '{s}'"
            ))),
        }
    }
}

/// Loose recurrence settings as an edit form holds them: every field is
/// present whatever the kind, and `enabled` switches the rule off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceForm {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, rename = "type")]
    pub kind: RecurrenceKind,
    #[serde(default)]
    pub days: Vec<Weekday>,
    #[serde(default = "default_interval")]
    pub interval: u32,
    pub end_date: NaiveDateTime,
}

fn default_interval() -> u32 {
    1
}

impl RecurrenceForm {
    /// Disabled daily form ending one month after `start`.
    pub fn new(start: NaiveDateTime) -> Self {
        let end_date = start
            .checked_add_months(Months::new(1))
            .unwrap_or(start);
        RecurrenceForm {
            enabled: false,
            kind: RecurrenceKind::Daily,
            days: Vec::new(),
            interval: default_interval(),
            end_date,
        }
    }

    /// Validate into a rule. A disabled form means no recurrence.
    pub fn into_rule(self) -> CalboardResult<Option<Recurrence>> {
        if !self.enabled {
            return Ok(None);
        }

        let rule = match self.kind {
            RecurrenceKind::Daily => Recurrence::daily(self.end_date),
            RecurrenceKind::Weekly => Recurrence::weekly(self.days, self.end_date)?,
            RecurrenceKind::Monthly => Recurrence::monthly(self.end_date),
            RecurrenceKind::Custom => Recurrence::custom(self.interval, self.end_date)?,
        };
        Ok(Some(rule))
    }
}

impl From<&Recurrence> for RecurrenceForm {
    fn from(rule: &Recurrence) -> Self {
        let (days, interval) = match rule {
            Recurrence::Weekly { days, .. } => (days.iter().collect(), default_interval()),
            Recurrence::Custom { interval, .. } => (Vec::new(), interval.get()),
            _ => (Vec::new(), default_interval()),
        };
        RecurrenceForm {
            enabled: true,
            kind: rule.kind(),
            days,
            interval,
            end_date: rule.end_date(),
        }
    }
}

/// A calendar event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<EventColor>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_recurrence",
        deserialize_with = "deserialize_recurrence"
    )]
    pub recurrence: Option<Recurrence>,
}

/// Recurrence as stored on an event: the edit form shape. `enabled` is
/// optional so bare tagged rules load as enabled.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredRecurrence {
    #[serde(default)]
    enabled: Option<bool>,
    #[serde(default, rename = "type")]
    kind: RecurrenceKind,
    #[serde(default)]
    days: Vec<Weekday>,
    #[serde(default = "default_interval")]
    interval: u32,
    end_date: Option<NaiveDateTime>,
}

fn serialize_recurrence<S>(rule: &Option<Recurrence>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    rule.as_ref().map(RecurrenceForm::from).serialize(serializer)
}

/// A stored rule with `enabled: false` means no recurrence.
fn deserialize_recurrence<'de, D>(deserializer: D) -> Result<Option<Recurrence>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(stored) = Option::<StoredRecurrence>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if stored.enabled == Some(false) {
        return Ok(None);
    }

    let end_date = stored
        .end_date
        .ok_or_else(|| <D::Error as de::Error>::missing_field("endDate"))?;
    let form = RecurrenceForm {
        enabled: true,
        kind: stored.kind,
        days: stored.days,
        interval: stored.interval,
        end_date,
    };
    form.into_rule().map_err(de::Error::custom)
}

impl Event {
    pub fn new(
        id: impl Into<EventId>,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Event {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            start,
            end,
            color: None,
            recurrence: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_color(mut self, color: EventColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_recurrence(mut self, recurrence: Recurrence) -> Self {
        self.recurrence = Some(recurrence);
        self
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    pub fn display_color(&self) -> EventColor {
        self.color.unwrap_or(EventColor::FALLBACK)
    }

    pub fn is_recurring(&self) -> bool {
        self.recurrence.is_some()
    }

    pub fn has_valid_range(&self) -> bool {
        self.start <= self.end
    }

    /// Whether the literal `[start, end]` span touches `day`.
    pub fn spans(&self, day: NaiveDate) -> bool {
        day >= self.start.date() && day <= self.end.date()
    }

    /// Whether the event contributes anything to `day`: its own span, or a
    /// day its rule produces.
    pub fn occurs_on(&self, day: NaiveDate) -> bool {
        self.spans(day)
            || self
                .recurrence
                .as_ref()
                .is_some_and(|rule| crate::recurrence::occurs_on(rule, day, self.start))
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.title.is_empty() {
            write!(f, "(untitled)")
        } else {
            write!(f, "{}", self.title)
        }
    }
}

/// An event that has not been given an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub color: Option<EventColor>,
    pub recurrence: Option<Recurrence>,
}

impl EventDraft {
    /// One-hour event starting at `start`, in the fallback color.
    pub fn new(title: impl Into<String>, start: NaiveDateTime) -> Self {
        EventDraft {
            title: title.into(),
            description: String::new(),
            start,
            end: start + Duration::hours(1),
            color: Some(EventColor::FALLBACK),
            recurrence: None,
        }
    }

    pub fn into_event(self, id: EventId) -> Event {
        Event {
            id,
            title: self.title,
            description: self.description,
            start: self.start,
            end: self.end,
            color: self.color,
            recurrence: self.recurrence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    // --- EventId ---

    #[test]
    fn id_deserializes_from_number_or_string() {
        let numeric: EventId = serde_json::from_str("42").unwrap();
        let text: EventId = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(numeric, EventId::from(42));
        assert_eq!(numeric.as_number(), Some(42));
        assert_eq!(text.as_str(), "abc");
        assert_eq!(text.as_number(), None);
    }

    // --- EventColor ---

    #[test]
    fn color_parses_hex_and_label() {
        assert_eq!("#4caf50".parse::<EventColor>().unwrap(), EventColor::Green);
        assert_eq!("#4CAF50".parse::<EventColor>().unwrap(), EventColor::Green);
        assert_eq!("purple".parse::<EventColor>().unwrap(), EventColor::Purple);
        assert!("#000000".parse::<EventColor>().is_err());
    }

    #[test]
    fn color_serializes_as_hex() {
        let json = serde_json::to_string(&EventColor::Red).unwrap();
        assert_eq!(json, "\"#f44336\"");
    }

    #[test]
    fn color_rgb() {
        assert_eq!(EventColor::Blue.rgb(), (0x31, 0x74, 0xad));
    }

    #[test]
    fn missing_color_falls_back_to_blue() {
        let event = Event::new(1, "x", at(2025, 5, 20, 10, 0), at(2025, 5, 20, 11, 0));
        assert_eq!(event.display_color(), EventColor::Blue);
    }

    #[test]
    fn weekday_parses_short_and_long_names() {
        assert_eq!("mon".parse::<Weekday>().unwrap(), Weekday::Monday);
        assert_eq!("Wednesday".parse::<Weekday>().unwrap(), Weekday::Wednesday);
        assert!("funday".parse::<Weekday>().is_err());
    }

    // --- Recurrence ---

    #[test]
    fn recurrence_kind_parses_case_insensitively() {
        assert_eq!("Weekly".parse::<RecurrenceKind>().unwrap(), RecurrenceKind::Weekly);
        assert_eq!("custom".parse::<RecurrenceKind>().unwrap(), RecurrenceKind::Custom);
        assert!("yearly".parse::<RecurrenceKind>().is_err());
    }

    #[test]
    fn weekly_requires_days() {
        let err = Recurrence::weekly([], at(2025, 6, 30, 0, 0)).unwrap_err();
        assert!(matches!(err, CalboardError::InvalidRecurrence(_)));
    }

    #[test]
    fn custom_requires_positive_interval() {
        assert!(Recurrence::custom(0, at(2025, 6, 30, 0, 0)).is_err());
        assert!(Recurrence::custom(2, at(2025, 6, 30, 0, 0)).is_ok());
    }

    #[test]
    fn recurrence_deserializes_tagged_shape() {
        let json = r#"{"type":"weekly","days":["monday","wednesday"],"endDate":"2025-06-30T00:00:00"}"#;
        let rule: Recurrence = serde_json::from_str(json).unwrap();
        match rule {
            Recurrence::Weekly { days, end_date } => {
                assert!(days.contains(Weekday::Monday));
                assert!(days.contains(Weekday::Wednesday));
                assert!(!days.contains(Weekday::Friday));
                assert_eq!(end_date, at(2025, 6, 30, 0, 0));
            }
            other => panic!("expected weekly rule, got {other:?}"),
        }
    }

    #[test]
    fn recurrence_rejects_empty_weekly_days_on_deserialize() {
        let json = r#"{"type":"weekly","days":[],"endDate":"2025-06-30T00:00:00"}"#;
        assert!(serde_json::from_str::<Recurrence>(json).is_err());
    }

    #[test]
    fn recurrence_rejects_zero_interval_on_deserialize() {
        let json = r#"{"type":"custom","interval":0,"endDate":"2025-06-30T00:00:00"}"#;
        assert!(serde_json::from_str::<Recurrence>(json).is_err());
    }

    // --- RecurrenceForm ---

    #[test]
    fn disabled_form_has_no_rule() {
        let form = RecurrenceForm::new(at(2025, 5, 20, 10, 0));
        assert_eq!(form.end_date, at(2025, 6, 20, 10, 0));
        assert_eq!(form.into_rule().unwrap(), None);
    }

    #[test]
    fn enabled_form_validates_by_kind() {
        let mut form = RecurrenceForm::new(at(2025, 5, 20, 10, 0));
        form.enabled = true;
        form.kind = RecurrenceKind::Weekly;
        assert!(form.clone().into_rule().is_err());

        form.days = vec![Weekday::Tuesday];
        let rule = form.into_rule().unwrap().unwrap();
        assert_eq!(rule.kind(), RecurrenceKind::Weekly);
    }

    #[test]
    fn form_tolerates_unused_fields() {
        let json = r#"{"enabled":true,"type":"monthly","days":[],"interval":1,"endDate":"2025-12-30T00:00:00"}"#;
        let form: RecurrenceForm = serde_json::from_str(json).unwrap();
        let rule = form.into_rule().unwrap().unwrap();
        assert_eq!(rule, Recurrence::monthly(at(2025, 12, 30, 0, 0)));
    }

    // --- Event ---

    #[test]
    fn event_deserializes_stored_shape() {
        let json = r##"{
            "id": 1,
            "title": "Team Meeting",
            "start": "2025-05-20T10:00:00",
            "end": "2025-05-20T11:00:00",
            "description": "Weekly team sync",
            "recurrence": null,
            "color": "#3174ad"
        }"##;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.id, EventId::from(1));
        assert_eq!(event.color, Some(EventColor::Blue));
        assert!(!event.is_recurring());
        assert_eq!(event.duration(), Duration::hours(1));
    }

    #[test]
    fn non_recurring_event_occurs_across_its_span() {
        let event = Event::new(5, "Training", at(2025, 5, 28, 10, 0), at(2025, 5, 30, 12, 0));
        assert!(!event.occurs_on(NaiveDate::from_ymd_opt(2025, 5, 27).unwrap()));
        assert!(event.occurs_on(NaiveDate::from_ymd_opt(2025, 5, 28).unwrap()));
        assert!(event.occurs_on(NaiveDate::from_ymd_opt(2025, 5, 30).unwrap()));
        assert!(!event.occurs_on(NaiveDate::from_ymd_opt(2025, 5, 31).unwrap()));
    }

    #[test]
    fn recurring_event_occurs_on_its_own_span() {
        // Starts on a Wednesday with a Tuesday-only rule
        let event = Event::new(5, "Training", at(2025, 5, 28, 10, 0), at(2025, 5, 30, 12, 0))
            .with_recurrence(Recurrence::Weekly {
                days: WeekdaySet::from(Weekday::Tuesday),
                end_date: at(2025, 6, 30, 0, 0),
            });
        assert!(event.occurs_on(NaiveDate::from_ymd_opt(2025, 5, 28).unwrap()));
        assert!(event.occurs_on(NaiveDate::from_ymd_opt(2025, 5, 29).unwrap()));
        assert!(event.occurs_on(NaiveDate::from_ymd_opt(2025, 6, 3).unwrap()));
        assert!(!event.occurs_on(NaiveDate::from_ymd_opt(2025, 6, 4).unwrap()));
    }

    #[test]
    fn event_recurrence_serializes_as_enabled_form() {
        let rule = Recurrence::Weekly {
            days: WeekdaySet::from(Weekday::Wednesday).with(Weekday::Monday),
            end_date: at(2025, 6, 30, 0, 0),
        };
        let event = Event::new(2, "Review", at(2025, 5, 21, 14, 0), at(2025, 5, 21, 15, 0))
            .with_recurrence(rule);

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["recurrence"]["enabled"], true);
        assert_eq!(value["recurrence"]["type"], "weekly");
        assert_eq!(value["recurrence"]["days"], serde_json::json!(["monday", "wednesday"]));

        let back: Event = serde_json::from_value(value).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn disabled_stored_recurrence_loads_as_none() {
        let json = r#"{
            "id": 3,
            "start": "2025-06-05T09:00:00",
            "end": "2025-06-05T10:00:00",
            "recurrence": {"enabled": false, "type": "weekly", "days": [], "interval": 1}
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert!(!event.is_recurring());
    }

    #[test]
    fn enabled_stored_recurrence_is_validated() {
        let json = r#"{
            "id": 3,
            "start": "2025-06-05T09:00:00",
            "end": "2025-06-05T10:00:00",
            "recurrence": {"enabled": true, "type": "custom", "interval": 0, "endDate": "2025-07-01T00:00:00"}
        }"#;
        assert!(serde_json::from_str::<Event>(json).is_err());
    }

    #[test]
    fn draft_defaults_to_one_hour() {
        let draft = EventDraft::new("Standup", at(2025, 5, 20, 9, 0));
        let event = draft.into_event(EventId::from("x"));
        assert_eq!(event.end, at(2025, 5, 20, 10, 0));
        assert_eq!(event.color, Some(EventColor::Blue));
    }
}
