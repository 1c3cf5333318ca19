pub(crate) mod macros;
pub mod params;
mod server;
mod types;

pub use server::Server;
pub use types::{
    Request, Response, RpcError, ToolDefinition, ToolParams, ToolProvider, ToolRequest,
    ToolResponse,
};
