//! Reading event collections from JSON.
//!
//! calboard never writes events back; a document is only a starting
//! collection for a store.

use std::path::Path;

use crate::error::{CalboardError, CalboardResult};
use crate::event::Event;
use crate::ids::IdGenerator;
use crate::store::EventStore;

/// Parse a JSON array of events.
pub fn parse_events(json: &str) -> CalboardResult<Vec<Event>> {
    serde_json::from_str(json).map_err(|e| CalboardError::Serialization(e.to_string()))
}

pub fn read_events(path: &Path) -> CalboardResult<Vec<Event>> {
    let content = std::fs::read_to_string(path)?;
    parse_events(&content).map_err(|e| match e {
        CalboardError::Serialization(msg) => {
            CalboardError::Serialization(format!("{}: {}", path.display(), msg))
        }
        other => other,
    })
}

/// Load a store from a JSON file, validating ids and ranges. `ids` is
/// seeded with the loaded ids.
pub fn load_store<G: IdGenerator>(path: &Path, ids: G) -> CalboardResult<EventStore<G>> {
    EventStore::with_events(ids, read_events(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventId, Recurrence, Weekday};
    use crate::ids::SequentialIds;

    const DOC: &str = r##"[
        {
            "id": 1,
            "title": "Team Meeting",
            "start": "2025-05-20T10:00:00",
            "end": "2025-05-20T11:00:00",
            "description": "Weekly team sync",
            "recurrence": null,
            "color": "#3174ad"
        },
        {
            "id": "review",
            "title": "Project Review",
            "start": "2025-05-21T14:00:00",
            "end": "2025-05-21T15:30:00",
            "recurrence": {
                "type": "weekly",
                "days": ["monday", "wednesday"],
                "endDate": "2025-06-30T00:00:00"
            }
        }
    ]"##;

    #[test]
    fn test_parse_events() {
        let events = parse_events(DOC).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].id, EventId::from("review"));
        assert_eq!(events[1].description, "");
        assert_eq!(events[1].color, None);

        let rule = events[1].recurrence.clone().unwrap();
        let expected = Recurrence::weekly(
            [Weekday::Monday, Weekday::Wednesday],
            chrono::NaiveDate::from_ymd_opt(2025, 6, 30)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        )
        .unwrap();
        assert_eq!(rule, expected);
    }

    #[test]
    fn test_parse_rejects_unknown_color() {
        let doc = r##"[{"id":1,"start":"2025-05-20T10:00:00","end":"2025-05-20T11:00:00","color":"#123456"}]"##;
        assert!(matches!(
            parse_events(doc).unwrap_err(),
            CalboardError::Serialization(_)
        ));
    }

    #[test]
    fn test_load_store_rejects_duplicate_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        let doc = r#"[
            {"id":1,"start":"2025-05-20T10:00:00","end":"2025-05-20T11:00:00"},
            {"id":"1","start":"2025-05-21T10:00:00","end":"2025-05-21T11:00:00"}
        ]"#;
        std::fs::write(&path, doc).unwrap();

        assert!(matches!(
            load_store(&path, SequentialIds::default()).unwrap_err(),
            CalboardError::DuplicateId(_)
        ));
    }

    #[test]
    fn test_disabled_recurrence_is_dropped_on_load() {
        let doc = r#"[{
            "id": 4,
            "title": "Team Building",
            "start": "2025-05-27T14:00:00",
            "end": "2025-05-27T17:00:00",
            "recurrence": {"enabled": false, "type": "daily", "days": [], "interval": 1, "endDate": "2025-06-30T00:00:00"}
        }]"#;
        let events = parse_events(doc).unwrap();
        assert!(!events[0].is_recurring());
        let june_5 = chrono::NaiveDate::from_ymd_opt(2025, 6, 5).unwrap();
        assert!(!events[0].occurs_on(june_5));
    }

    #[test]
    fn test_load_store_seeds_id_generator() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(
            &path,
            r#"[{"id":41,"start":"2025-05-20T10:00:00","end":"2025-05-20T11:00:00"}]"#,
        )
        .unwrap();

        let mut store = load_store(&path, SequentialIds::default()).unwrap();
        let start = chrono::NaiveDate::from_ymd_opt(2025, 7, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let id = store.create(crate::event::EventDraft::new("next", start)).unwrap();
        assert_eq!(id, EventId::from(42));
    }

    #[test]
    fn test_read_events_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "not json").unwrap();

        let err = read_events(&path).unwrap_err().to_string();
        assert!(err.contains("broken.json"));
    }
}
