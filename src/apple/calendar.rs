use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::{parser, script, Bridge};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarInfo {
    pub name: String,
    pub description: String,
}

/// An event as read back from Calendar. Dates are left in whatever text form
/// the application printed them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub summary: String,
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub calendar: String,
    pub summary: String,
    pub start_date: String,
    pub end_date: String,
    pub location: String,
}

#[derive(Debug, Clone)]
pub struct NewEvent {
    pub calendar_name: String,
    pub summary: String,
    pub start_date: String,
    pub end_date: String,
    pub location: Option<String>,
    pub description: Option<String>,
}

/// Changes to the first event in `calendar_name` whose summary is
/// `event_summary`. `None` fields are left untouched.
#[derive(Debug, Clone)]
pub struct EventChanges {
    pub calendar_name: String,
    pub event_summary: String,
    pub new_summary: Option<String>,
    pub new_start_date: Option<String>,
    pub new_end_date: Option<String>,
    pub new_location: Option<String>,
    pub new_description: Option<String>,
}

/// The Calendar application, driven through a [`Bridge`].
pub struct Calendar<B> {
    bridge: B,
}

impl<B: Bridge> Calendar<B> {
    pub fn new(bridge: B) -> Self {
        Self { bridge }
    }

    #[cfg(test)]
    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    pub async fn calendars(&self) -> Result<Vec<CalendarInfo>> {
        let output = self.bridge.run(&script::list_calendars()).await?;
        Ok(parser::calendars(&output))
    }

    /// Events of `calendar_name` starting between now and `days_ahead` days
    /// from now.
    pub async fn events(
        &self,
        calendar_name: &str,
        days_ahead: &Number,
    ) -> Result<Vec<EventRecord>> {
        let output = self
            .bridge
            .run(&script::events(calendar_name, days_ahead))
            .await
            .context("Failed to get events")?;
        Ok(parser::events(&output))
    }

    pub async fn create_event(&self, event: &NewEvent) -> Result<String> {
        Ok(self.bridge.run(&script::create_event(event)).await?)
    }

    pub async fn delete_event(&self, calendar_name: &str, event_summary: &str) -> Result<String> {
        Ok(self
            .bridge
            .run(&script::delete_event(calendar_name, event_summary))
            .await?)
    }

    pub async fn update_event(&self, changes: &EventChanges) -> Result<String> {
        Ok(self.bridge.run(&script::update_event(changes)).await?)
    }

    /// Events in any calendar whose summary or description contains `query`.
    pub async fn search(&self, query: &str, days_ahead: &Number) -> Result<Vec<SearchHit>> {
        let output = self
            .bridge
            .run(&script::search_events(query, days_ahead))
            .await
            .context("Failed to search events")?;
        Ok(parser::search_hits(&output))
    }
}
