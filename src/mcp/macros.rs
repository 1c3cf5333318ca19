macro_rules! register_tools {
    ( $($tool:path),* $(,)? ) => {
        pub fn list_tools(config: &crate::config::Config) -> Vec<crate::mcp::ToolDefinition> {
            let mut tools = Vec::new();
            $(
                if config.is_tool_enabled::<$tool>() {
                    tools.push(<$tool as crate::mcp::ToolProvider>::tool_definition());
                }
            )*
            tools
        }

        pub async fn execute_tool<B: crate::apple::Bridge>(
            config: &crate::config::Config,
            calendar: &crate::apple::Calendar<B>,
            name: &str,
            arguments: &serde_json::Value,
        ) -> anyhow::Result<serde_json::Value> {
            $(
                if <$tool as crate::mcp::ToolProvider>::NAME == name && config.is_tool_enabled::<$tool>() {
                    let tool = <$tool>::default();
                    return crate::mcp::ToolProvider::execute(
                        &tool,
                        calendar,
                        &config.calendar,
                        arguments,
                    )
                    .await;
                }
            )*
            Err(crate::error::Error::UnknownTool(name.to_owned()).into())
        }
    };
}

pub(crate) use register_tools;
