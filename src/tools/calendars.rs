use anyhow::Result;

use crate::{
    apple::{Bridge, Calendar},
    config::CalendarConfig,
    mcp::ToolProvider,
    tool_params,
};

#[derive(Default)]
pub struct ListCalendars;

tool_params! {
    ListCalendarsParams
}

impl ToolProvider for ListCalendars {
    const NAME: &'static str = "list_calendars";
    const DESCRIPTION: &'static str = "List all available calendars in Apple Calendar";
    type Params = ListCalendarsParams;

    async fn execute_with_params<B: Bridge>(
        &self,
        calendar: &Calendar<B>,
        _defaults: &CalendarConfig,
        _params: Self::Params,
    ) -> Result<serde_json::Value> {
        let calendars = calendar.calendars().await?;
        Ok(serde_json::to_value(calendars)?)
    }
}
