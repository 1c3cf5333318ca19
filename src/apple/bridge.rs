use crate::{config::BridgeConfig, error::Error};

/// Something that can run an AppleScript and hand back what it printed.
pub trait Bridge {
    async fn run(&self, script: &str) -> Result<String, Error>;
}

/// Runs scripts through `osascript` inside a shell, blocking until it exits.
#[derive(Debug, Clone)]
pub struct OsaScript {
    config: BridgeConfig,
}

impl OsaScript {
    pub fn new(config: BridgeConfig) -> Self {
        Self { config }
    }

    fn command_line(&self, script: &str) -> String {
        format!("{} -e '{}'", self.config.osascript, quote_single(script))
    }
}

impl Bridge for OsaScript {
    async fn run(&self, script: &str) -> Result<String, Error> {
        tracing::debug!(script, "Running AppleScript");

        let output = tokio::process::Command::new(&self.config.shell)
            .arg("-c")
            .arg(self.command_line(script))
            .output()
            .await
            .map_err(|e| {
                tracing::warn!("Failed to spawn {}: {}", self.config.shell, e);
                Error::Bridge(e.to_string())
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_owned();
            tracing::warn!(status = %output.status, "osascript failed: {}", stderr);
            let message = if stderr.is_empty() {
                format!("Command failed with {}", output.status)
            } else {
                stderr
            };
            return Err(Error::Bridge(message));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_owned())
    }
}

/// Makes `text` safe to place between single quotes in a shell command.
pub fn quote_single(text: &str) -> String {
    text.replace('\'', r"'\''")
}
