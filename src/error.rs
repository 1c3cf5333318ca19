use thiserror::Error;

/// Failures raised while servicing a tool call.
#[derive(Error, Debug)]
pub enum Error {
    /// The scripting bridge could not be spawned or exited with a failure.
    #[error("AppleScript error: {0}")]
    Bridge(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Missing required parameter: {0}")]
    MissingParameter(String),
}
