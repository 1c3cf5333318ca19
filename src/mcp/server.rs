use anyhow::Result;
use serde_json::json;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::{
    apple::Bridge,
    config::Config,
    mcp::{Request, Response, RpcError, ToolRequest},
    tools::Dispatcher,
};

const PROTOCOL_VERSION: &str = "2024-11-05";

pub struct Server<B> {
    dispatcher: Dispatcher<B>,
}

impl<B: Bridge> Server<B> {
    pub fn new(config: Config, bridge: B) -> Self {
        Self {
            dispatcher: Dispatcher::new(config, bridge),
        }
    }

    pub async fn run(&self) -> Result<()> {
        self.serve(BufReader::new(io::stdin()), io::stdout()).await
    }

    /// Answers newline-delimited JSON-RPC requests one at a time until the
    /// reader hits EOF.
    pub async fn serve<R, W>(&self, mut reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut line = Vec::new();

        loop {
            line.clear();
            let n = reader.read_until(b'\n', &mut line).await?;
            if n == 0 {
                break; // EOF
            }
            if line.trim_ascii().is_empty() {
                continue;
            }

            let request = match serde_json::from_slice::<Request>(&line) {
                Ok(request) => request,
                Err(e) => {
                    tracing::warn!("Ignoring malformed request: {}", e);
                    continue;
                }
            };

            if let Some(response) = self.handle_request(request).await {
                let response_json = serde_json::to_string(&response)?;
                writer.write_all(response_json.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                writer.flush().await?;
            }
        }

        Ok(())
    }

    async fn handle_request(&self, request: Request) -> Option<Response> {
        let Some(id) = request.id else {
            tracing::debug!(method = %request.method, "Received notification");
            return None;
        };

        let outcome = match request.method.as_str() {
            "initialize" => Ok(Self::handle_initialize()),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(self.handle_list_tools()),
            "tools/call" => self.handle_call_tool(request.params).await,
            method => {
                tracing::warn!(method, "Method not found");
                Err(RpcError {
                    code: RpcError::METHOD_NOT_FOUND,
                    message: "Method not found".to_owned(),
                })
            }
        };

        let (result, error) = match outcome {
            Ok(result) => (Some(result), None),
            Err(error) => (None, Some(error)),
        };

        Some(Response {
            jsonrpc: "2.0".to_owned(),
            id,
            result,
            error,
        })
    }

    fn handle_initialize() -> serde_json::Value {
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION")
            }
        })
    }

    fn handle_list_tools(&self) -> serde_json::Value {
        json!({
            "tools": self.dispatcher.tools()
        })
    }

    async fn handle_call_tool(
        &self,
        params: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, RpcError> {
        let params = params.unwrap_or_else(|| json!({}));
        let request: ToolRequest = serde_json::from_value(params).map_err(|e| RpcError {
            code: RpcError::INVALID_PARAMS,
            message: format!("Invalid tool call: {e}"),
        })?;

        let response = self.dispatcher.handle(&request).await;
        serde_json::to_value(response).map_err(RpcError::internal)
    }
}
