//! Turns the record lists `osascript` prints back into structured values.
//!
//! The output looks like `{summary:Lunch, startDate:..., location:Cafe}`.
//! Nothing is quoted, so a comma inside a value will split a record.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::calendar::{CalendarInfo, EventRecord, SearchHit};

static CALENDAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"name:([^,}]+)(?:, description:([^}]+))?").expect("calendar pattern must compile")
});

static EVENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"summary:([^,}]+), startDate:([^,}]+), endDate:([^,}]+)(?:, location:([^,}]+))?(?:, description:([^}]+))?",
    )
    .expect("event pattern must compile")
});

static SEARCH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"calendar:([^,}]+), summary:([^,}]+), startDate:([^,}]+), endDate:([^,}]+)(?:, location:([^}]+))?",
    )
    .expect("search pattern must compile")
});

fn field(captures: &Captures, index: usize) -> String {
    captures
        .get(index)
        .map(|m| m.as_str().trim().to_owned())
        .unwrap_or_default()
}

pub fn calendars(output: &str) -> Vec<CalendarInfo> {
    CALENDAR_RE
        .captures_iter(output)
        .map(|c| CalendarInfo {
            name: field(&c, 1),
            description: field(&c, 2),
        })
        .collect()
}

pub fn events(output: &str) -> Vec<EventRecord> {
    EVENT_RE
        .captures_iter(output)
        .map(|c| EventRecord {
            summary: field(&c, 1),
            start_date: field(&c, 2),
            end_date: field(&c, 3),
            location: field(&c, 4),
            description: field(&c, 5),
        })
        .collect()
}

pub fn search_hits(output: &str) -> Vec<SearchHit> {
    SEARCH_RE
        .captures_iter(output)
        .map(|c| SearchHit {
            calendar: field(&c, 1),
            summary: field(&c, 2),
            start_date: field(&c, 3),
            end_date: field(&c, 4),
            location: field(&c, 5),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_in_date_drops_record() {
        let output = "summary:Lunch, startDate:Monday, 13 January 2025 at 12:00:00, \
                      endDate:Monday, 13 January 2025 at 13:00:00";
        assert!(events(output).is_empty());
    }

    #[test]
    fn test_event_fields_are_trimmed_verbatim() {
        let output = "summary: Lunch , startDate:1/13/2025 12:00:00 PM, endDate:1/13/2025 1:00:00 PM, \
                      location:Cafe, description:Team sync";
        let events = events(output);
        assert_eq!(
            events,
            vec![EventRecord {
                summary: "Lunch".to_owned(),
                start_date: "1/13/2025 12:00:00 PM".to_owned(),
                end_date: "1/13/2025 1:00:00 PM".to_owned(),
                location: "Cafe".to_owned(),
                description: "Team sync".to_owned(),
            }]
        );
    }

    #[test]
    fn test_event_without_optional_fields() {
        let events = events("summary:X, startDate:Y, endDate:Z");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].end_date, "Z");
        assert_eq!(events[0].location, "");
        assert_eq!(events[0].description, "");
    }

    #[test]
    fn test_event_description_without_location() {
        let events = events("{summary:X, startDate:Y, endDate:Z, description:Notes}");
        assert_eq!(events[0].location, "");
        assert_eq!(events[0].description, "Notes");
    }

    #[test]
    fn test_events_in_braces_keep_order() {
        let output = "{summary:First, startDate:A, endDate:B, location:Here, description:One}, \
                      {summary:Second, startDate:C, endDate:D, location:missing value, description:missing value}";
        let events = events(output);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].summary, "First");
        assert_eq!(events[0].description, "One");
        assert_eq!(events[1].summary, "Second");
        assert_eq!(events[1].location, "missing value");
    }

    #[test]
    fn test_empty_output() {
        assert!(events("").is_empty());
        assert!(calendars("").is_empty());
        assert!(search_hits("").is_empty());
    }

    #[test]
    fn test_unmatched_output() {
        assert!(events("nothing to see").is_empty());
    }

    #[test]
    fn test_comma_in_location_splits_record() {
        let events = events("{summary:X, startDate:Y, endDate:Z, location:Room 4, Building B}");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].location, "Room 4");
        assert_eq!(events[0].description, "");
    }

    #[test]
    fn test_calendars() {
        let calendars =
            calendars("{name:Home, description:Family stuff}, {name:Work, description:missing value}");
        assert_eq!(
            calendars,
            vec![
                CalendarInfo {
                    name: "Home".to_owned(),
                    description: "Family stuff".to_owned(),
                },
                CalendarInfo {
                    name: "Work".to_owned(),
                    description: "missing value".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn test_calendar_without_description() {
        let calendars = calendars("name:Birthdays");
        assert_eq!(calendars.len(), 1);
        assert_eq!(calendars[0].name, "Birthdays");
        assert_eq!(calendars[0].description, "");
    }

    #[test]
    fn test_search_hits() {
        let output = "{calendar:Work, summary:Lunch, startDate:A, endDate:B, location:Cafe}, \
                      {calendar:Home, summary:Lunch with Sam, startDate:C, endDate:D}";
        let hits = search_hits(output);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].calendar, "Work");
        assert_eq!(hits[0].location, "Cafe");
        assert_eq!(hits[1].summary, "Lunch with Sam");
        assert_eq!(hits[1].end_date, "D");
        assert_eq!(hits[1].location, "");
    }
}
