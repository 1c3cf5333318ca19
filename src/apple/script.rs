//! AppleScript templates for the Calendar application.
//!
//! Values are interpolated verbatim into string literals. Quotes inside them
//! are not escaped here; only the shell boundary in the bridge is.

use serde_json::Number;

use super::calendar::{EventChanges, NewEvent};

pub fn list_calendars() -> String {
    r#"
tell application "Calendar"
  set calList to {}
  repeat with cal in calendars
    set calInfo to {name:(name of cal), description:(description of cal)}
    set end of calList to calInfo
  end repeat
  return calList
end tell
"#
    .to_owned()
}

pub fn events(calendar_name: &str, days_ahead: &Number) -> String {
    format!(
        r#"
tell application "Calendar"
  set targetCal to first calendar whose name is "{calendar_name}"
  set startDate to current date
  set endDate to startDate + ({days_ahead} * days)

  set eventList to {{}}
  repeat with evt in (every event of targetCal whose start date is greater than or equal to startDate and start date is less than or equal to endDate)
    set eventInfo to {{summary:(summary of evt), startDate:(start date of evt as text), endDate:(end date of evt as text), location:(location of evt), description:(description of evt)}}
    set end of eventList to eventInfo
  end repeat
  return eventList
end tell
"#
    )
}

pub fn create_event(event: &NewEvent) -> String {
    let location = event
        .location
        .as_deref()
        .map(|location| format!(r#", location:"{location}""#))
        .unwrap_or_default();
    let description = event
        .description
        .as_deref()
        .map(|description| format!("\n    set description of newEvent to \"{description}\""))
        .unwrap_or_default();

    format!(
        r#"
tell application "Calendar"
  set targetCal to first calendar whose name is "{calendar}"
  tell targetCal
    set newEvent to make new event with properties {{summary:"{summary}", start date:date "{start}", end date:date "{end}"{location}}}{description}
  end tell
  return "Event created: " & summary of newEvent
end tell
"#,
        calendar = event.calendar_name,
        summary = event.summary,
        start = event.start_date,
        end = event.end_date,
    )
}

pub fn delete_event(calendar_name: &str, event_summary: &str) -> String {
    format!(
        r#"
tell application "Calendar"
  set targetCal to first calendar whose name is "{calendar_name}"
  set targetEvent to first event of targetCal whose summary is "{event_summary}"
  delete targetEvent
  return "Event deleted: {event_summary}"
end tell
"#
    )
}

pub fn update_event(changes: &EventChanges) -> String {
    let mut properties = Vec::new();
    if let Some(summary) = &changes.new_summary {
        properties.push(format!(r#"summary:"{summary}""#));
    }
    if let Some(start) = &changes.new_start_date {
        properties.push(format!(r#"start date:date "{start}""#));
    }
    if let Some(end) = &changes.new_end_date {
        properties.push(format!(r#"end date:date "{end}""#));
    }
    if let Some(location) = &changes.new_location {
        properties.push(format!(r#"location:"{location}""#));
    }

    let set_properties = if properties.is_empty() {
        String::new()
    } else {
        format!(
            "set properties of targetEvent to {{{}}}",
            properties.join(", ")
        )
    };
    let set_description = changes
        .new_description
        .as_deref()
        .map(|description| format!("\n  set description of targetEvent to \"{description}\""))
        .unwrap_or_default();

    format!(
        r#"
tell application "Calendar"
  set targetCal to first calendar whose name is "{calendar}"
  set targetEvent to first event of targetCal whose summary is "{summary}"
  {set_properties}{set_description}
  return "Event updated: " & summary of targetEvent
end tell
"#,
        calendar = changes.calendar_name,
        summary = changes.event_summary,
    )
}

pub fn search_events(query: &str, days_ahead: &Number) -> String {
    format!(
        r#"
tell application "Calendar"
  set startDate to current date
  set endDate to startDate + ({days_ahead} * days)

  set eventList to {{}}
  repeat with cal in calendars
    repeat with evt in (every event of cal whose start date is greater than or equal to startDate and start date is less than or equal to endDate)
      if summary of evt contains "{query}" or description of evt contains "{query}" then
        set eventInfo to {{calendar:(name of cal), summary:(summary of evt), startDate:(start date of evt as text), endDate:(end date of evt as text), location:(location of evt)}}
        set end of eventList to eventInfo
      end if
    end repeat
  end repeat
  return eventList
end tell
"#
    )
}
