use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::apple::{Bridge, Calendar};

#[derive(Debug, Serialize, Deserialize)]
pub struct Request {
    pub jsonrpc: String,
    /// Absent for notifications, which get no response.
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    pub method: String,
    pub params: Option<serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Response {
    pub jsonrpc: String,
    pub id: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

impl RpcError {
    pub const METHOD_NOT_FOUND: i64 = -32601;
    pub const INVALID_PARAMS: i64 = -32602;
    pub const INTERNAL_ERROR: i64 = -32603;

    pub fn internal(error: impl std::fmt::Display) -> Self {
        Self {
            code: Self::INTERNAL_ERROR,
            message: error.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: serde_json::Value,
}

/// Parameters of a `tools/call` request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ToolRequest {
    pub name: String,
    #[serde(default = "empty_arguments")]
    pub arguments: serde_json::Value,
}

fn empty_arguments() -> serde_json::Value {
    serde_json::Value::Object(Default::default())
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TextContent {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

/// Outcome of a tool call, always a single text block.
#[derive(Debug, Serialize, Deserialize)]
pub struct ToolResponse {
    pub content: Vec<TextContent>,
    #[serde(
        rename = "isError",
        default,
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub is_error: bool,
}

impl ToolResponse {
    pub fn text(text: String) -> Self {
        Self {
            content: vec![TextContent {
                kind: "text".to_owned(),
                text,
            }],
            is_error: false,
        }
    }

    pub fn error(error: &anyhow::Error) -> Self {
        Self {
            is_error: true,
            ..Self::text(format!("Error: {error:#}"))
        }
    }
}

pub trait ToolParams: Sized {
    fn input_schema() -> serde_json::Value;
    fn extract_params(arguments: &serde_json::Value) -> Result<Self>;
}

pub trait ToolProvider {
    const NAME: &'static str;
    const DESCRIPTION: &'static str;
    type Params: ToolParams;

    fn tool_definition() -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME.to_owned(),
            description: Self::DESCRIPTION.to_owned(),
            input_schema: Self::Params::input_schema(),
        }
    }

    /// Runs the tool. A JSON string result is returned to the client as-is,
    /// anything else is pretty-printed.
    async fn execute_with_params<B: Bridge>(
        &self,
        calendar: &Calendar<B>,
        defaults: &crate::config::CalendarConfig,
        params: Self::Params,
    ) -> Result<serde_json::Value>;

    async fn execute<B: Bridge>(
        &self,
        calendar: &Calendar<B>,
        defaults: &crate::config::CalendarConfig,
        arguments: &serde_json::Value,
    ) -> Result<serde_json::Value> {
        let params = Self::Params::extract_params(arguments)?;
        self.execute_with_params(calendar, defaults, params).await
    }
}
