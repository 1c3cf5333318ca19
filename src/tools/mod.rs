pub mod calendars;
pub mod edit;
pub mod events;

use crate::{
    apple::{Bridge, Calendar},
    config::Config,
    mcp::{macros::register_tools, ToolDefinition, ToolRequest, ToolResponse},
};

register_tools! {
    calendars::ListCalendars,
    events::GetEvents,
    edit::CreateEvent,
    edit::DeleteEvent,
    edit::UpdateEvent,
    events::SearchEvents,
}

/// Routes tool calls to the Calendar tools. Every failure comes back as an
/// error response rather than an `Err`.
pub struct Dispatcher<B> {
    config: Config,
    calendar: Calendar<B>,
}

impl<B: Bridge> Dispatcher<B> {
    pub fn new(config: Config, bridge: B) -> Self {
        Self {
            config,
            calendar: Calendar::new(bridge),
        }
    }

    pub fn tools(&self) -> Vec<ToolDefinition> {
        list_tools(&self.config)
    }

    pub async fn handle(&self, request: &ToolRequest) -> ToolResponse {
        tracing::info!(tool = %request.name, "Calling tool");

        match execute_tool(&self.config, &self.calendar, &request.name, &request.arguments).await {
            Ok(serde_json::Value::String(text)) => ToolResponse::text(text),
            Ok(value) => match serde_json::to_string_pretty(&value) {
                Ok(text) => ToolResponse::text(text),
                Err(e) => ToolResponse::error(&e.into()),
            },
            Err(e) => {
                tracing::warn!(tool = %request.name, "Tool failed: {:#}", e);
                ToolResponse::error(&e)
            }
        }
    }

    #[cfg(test)]
    pub fn calendar(&self) -> &Calendar<B> {
        &self.calendar
    }
}
