use anyhow::Result;

use crate::{
    apple::{Bridge, Calendar, EventChanges, NewEvent},
    config::CalendarConfig,
    mcp::ToolProvider,
    tool_params,
};

#[derive(Default)]
pub struct CreateEvent;

tool_params! {
    CreateEventParams,
    required(calendar_name: string, "The name of the calendar to create the event in"),
    required(summary: string, "The title/summary of the event"),
    required(start_date: string, "Start date and time (e.g., '1/15/2025 2:00:00 PM')"),
    required(end_date: string, "End date and time (e.g., '1/15/2025 3:00:00 PM')"),
    optional(location: string, "Location of the event (optional)"),
    optional(description: string, "Description of the event (optional)")
}

impl ToolProvider for CreateEvent {
    const NAME: &'static str = "create_event";
    const DESCRIPTION: &'static str = "Create a new event in a calendar";
    type Params = CreateEventParams;

    async fn execute_with_params<B: Bridge>(
        &self,
        calendar: &Calendar<B>,
        _defaults: &CalendarConfig,
        params: Self::Params,
    ) -> Result<serde_json::Value> {
        let event = NewEvent {
            calendar_name: params.calendar_name,
            summary: params.summary,
            start_date: params.start_date,
            end_date: params.end_date,
            location: params.location,
            description: params.description,
        };
        let message = calendar.create_event(&event).await?;
        Ok(message.into())
    }
}

#[derive(Default)]
pub struct DeleteEvent;

tool_params! {
    DeleteEventParams,
    required(calendar_name: string, "The name of the calendar containing the event"),
    required(event_summary: string, "The summary/title of the event to delete")
}

impl ToolProvider for DeleteEvent {
    const NAME: &'static str = "delete_event";
    const DESCRIPTION: &'static str = "Delete an event from a calendar";
    type Params = DeleteEventParams;

    async fn execute_with_params<B: Bridge>(
        &self,
        calendar: &Calendar<B>,
        _defaults: &CalendarConfig,
        params: Self::Params,
    ) -> Result<serde_json::Value> {
        let message = calendar
            .delete_event(&params.calendar_name, &params.event_summary)
            .await?;
        Ok(message.into())
    }
}

#[derive(Default)]
pub struct UpdateEvent;

tool_params! {
    UpdateEventParams,
    required(calendar_name: string, "The name of the calendar containing the event"),
    required(event_summary: string, "The current summary/title of the event to update"),
    optional(new_summary: string, "New summary/title for the event (optional)"),
    optional(new_start_date: string, "New start date and time (optional)"),
    optional(new_end_date: string, "New end date and time (optional)"),
    optional(new_location: string, "New location (optional)"),
    optional(new_description: string, "New description (optional)")
}

impl ToolProvider for UpdateEvent {
    const NAME: &'static str = "update_event";
    const DESCRIPTION: &'static str = "Update an existing event in a calendar";
    type Params = UpdateEventParams;

    async fn execute_with_params<B: Bridge>(
        &self,
        calendar: &Calendar<B>,
        _defaults: &CalendarConfig,
        params: Self::Params,
    ) -> Result<serde_json::Value> {
        let changes = EventChanges {
            calendar_name: params.calendar_name,
            event_summary: params.event_summary,
            new_summary: params.new_summary,
            new_start_date: params.new_start_date,
            new_end_date: params.new_end_date,
            new_location: params.new_location,
            new_description: params.new_description,
        };
        let message = calendar.update_event(&changes).await?;
        Ok(message.into())
    }
}
