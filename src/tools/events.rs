use anyhow::Result;

use crate::{
    apple::{Bridge, Calendar},
    config::CalendarConfig,
    mcp::ToolProvider,
    tool_params,
};

#[derive(Default)]
pub struct GetEvents;

tool_params! {
    GetEventsParams,
    required(calendar_name: string, "The name of the calendar to get events from"),
    optional(days_ahead: number, "Number of days ahead to fetch events (default: 30)")
}

impl ToolProvider for GetEvents {
    const NAME: &'static str = "get_events";
    const DESCRIPTION: &'static str = "Get events from a specific calendar";
    type Params = GetEventsParams;

    async fn execute_with_params<B: Bridge>(
        &self,
        calendar: &Calendar<B>,
        defaults: &CalendarConfig,
        params: Self::Params,
    ) -> Result<serde_json::Value> {
        let days_ahead = defaults.days_ahead_or(params.days_ahead);
        let events = calendar.events(&params.calendar_name, &days_ahead).await?;
        Ok(serde_json::to_value(events)?)
    }
}

#[derive(Default)]
pub struct SearchEvents;

tool_params! {
    SearchEventsParams,
    required(query: string, "Search query to match against event summaries and descriptions"),
    optional(days_ahead: number, "Number of days ahead to search (default: 30)")
}

impl ToolProvider for SearchEvents {
    const NAME: &'static str = "search_events";
    const DESCRIPTION: &'static str = "Search for events across all calendars by keyword";
    type Params = SearchEventsParams;

    async fn execute_with_params<B: Bridge>(
        &self,
        calendar: &Calendar<B>,
        defaults: &CalendarConfig,
        params: Self::Params,
    ) -> Result<serde_json::Value> {
        let days_ahead = defaults.days_ahead_or(params.days_ahead);
        let hits = calendar.search(&params.query, &days_ahead).await?;
        Ok(serde_json::to_value(hits)?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::apple::testing::StubBridge;

    #[tokio::test]
    async fn test_get_events_uses_configured_window() {
        let calendar = Calendar::new(StubBridge::returning(""));
        let defaults = CalendarConfig { days_ahead: 45 };
        let result = GetEvents
            .execute(&calendar, &defaults, &json!({"calendar_name": "Work"}))
            .await
            .unwrap();
        assert_eq!(result, json!([]));
        let script = calendar_script(&calendar);
        assert!(script.contains("(45 * days)"));
    }

    #[tokio::test]
    async fn test_get_events_explicit_window() {
        let calendar = Calendar::new(StubBridge::returning(
            "{summary:Lunch, startDate:A, endDate:B, location:Cafe, description:Team sync}",
        ));
        let result = GetEvents
            .execute(
                &calendar,
                &CalendarConfig::default(),
                &json!({"calendar_name": "Work", "days_ahead": 7}),
            )
            .await
            .unwrap();
        assert_eq!(
            result,
            json!([{
                "summary": "Lunch",
                "startDate": "A",
                "endDate": "B",
                "location": "Cafe",
                "description": "Team sync"
            }])
        );
        assert!(calendar_script(&calendar).contains("(7 * days)"));
    }

    #[tokio::test]
    async fn test_get_events_fractional_window() {
        let calendar = Calendar::new(StubBridge::returning(""));
        GetEvents
            .execute(
                &calendar,
                &CalendarConfig::default(),
                &json!({"calendar_name": "Work", "days_ahead": 0.5}),
            )
            .await
            .unwrap();
        assert!(calendar_script(&calendar).contains("set endDate to startDate + (0.5 * days)"));
    }

    #[tokio::test]
    async fn test_get_events_requires_calendar_name() {
        let calendar = Calendar::new(StubBridge::returning(""));
        let err = GetEvents
            .execute(&calendar, &CalendarConfig::default(), &json!({}))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Missing required parameter: calendar_name");
    }

    #[tokio::test]
    async fn test_search_events() {
        let calendar = Calendar::new(StubBridge::returning(
            "{calendar:Work, summary:Lunch, startDate:A, endDate:B, location:Cafe}",
        ));
        let result = SearchEvents
            .execute(&calendar, &CalendarConfig::default(), &json!({"query": "Lunch"}))
            .await
            .unwrap();
        assert_eq!(result[0]["calendar"], "Work");
        assert_eq!(result[0]["startDate"], "A");
        assert!(calendar_script(&calendar).contains(r#"contains "Lunch""#));
    }

    fn calendar_script(calendar: &Calendar<StubBridge>) -> String {
        calendar.bridge().last_script()
    }
}
