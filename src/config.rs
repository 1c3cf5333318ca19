use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::mcp::ToolProvider;

/// Environment variable pointing at an explicit config file.
pub const CONFIG_ENV: &str = "APPLE_CALENDAR_MCP_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Program used to run AppleScript
    #[serde(default = "default_osascript")]
    pub osascript: String,
    /// Shell the osascript command line is handed to
    #[serde(default = "default_shell")]
    pub shell: String,
}

fn default_osascript() -> String {
    "osascript".to_owned()
}

fn default_shell() -> String {
    "/bin/sh".to_owned()
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            osascript: default_osascript(),
            shell: default_shell(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Number of days to look ahead when a tool call doesn't say
    #[serde(default = "default_days_ahead")]
    pub days_ahead: u32,
}

fn default_days_ahead() -> u32 {
    30
}

impl CalendarConfig {
    /// The look-ahead window for a call, falling back to the configured one.
    pub fn days_ahead_or(&self, requested: Option<serde_json::Number>) -> serde_json::Number {
        requested.unwrap_or_else(|| self.days_ahead.into())
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            days_ahead: default_days_ahead(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ToolConfig {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsConfig {
    pub list_calendars: Option<ToolConfig>,
    pub get_events: Option<ToolConfig>,
    pub create_event: Option<ToolConfig>,
    pub delete_event: Option<ToolConfig>,
    pub update_event: Option<ToolConfig>,
    pub search_events: Option<ToolConfig>,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            list_calendars: Some(ToolConfig::default()),
            get_events: Some(ToolConfig::default()),
            create_event: Some(ToolConfig::default()),
            delete_event: Some(ToolConfig::default()),
            update_event: Some(ToolConfig::default()),
            search_events: Some(ToolConfig::default()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub bridge: BridgeConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub tools: ToolsConfig,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = serde_json::from_str(&content)
            .with_context(|| "Failed to parse config file as JSON")?;

        Ok(config)
    }

    pub fn load_default() -> Result<Self> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::load_from_file(path);
        }

        let mut config_paths = vec![PathBuf::from("./apple-calendar-mcp-config.json")];
        if let Some(config_dir) = dirs::config_dir() {
            config_paths.push(config_dir.join("apple-calendar-mcp/config.json"));
        }

        for path in &config_paths {
            if path.exists() {
                tracing::info!("Loading config from {}", path.display());
                return Self::load_from_file(path);
            }
        }

        // No config file found, use defaults
        Ok(Config::default())
    }

    pub fn is_tool_enabled<T: ToolProvider>(&self) -> bool {
        use crate::tools::{calendars, edit, events};

        match T::NAME {
            calendars::ListCalendars::NAME => self.tools.list_calendars.is_some(),
            events::GetEvents::NAME => self.tools.get_events.is_some(),
            events::SearchEvents::NAME => self.tools.search_events.is_some(),
            edit::CreateEvent::NAME => self.tools.create_event.is_some(),
            edit::DeleteEvent::NAME => self.tools.delete_event.is_some(),
            edit::UpdateEvent::NAME => self.tools.update_event.is_some(),
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{calendars, edit, events};

    #[test]
    fn test_everything_enabled_by_default() {
        let config = Config::default();
        assert!(config.is_tool_enabled::<calendars::ListCalendars>());
        assert!(config.is_tool_enabled::<events::GetEvents>());
        assert!(config.is_tool_enabled::<events::SearchEvents>());
        assert!(config.is_tool_enabled::<edit::CreateEvent>());
        assert!(config.is_tool_enabled::<edit::DeleteEvent>());
        assert!(config.is_tool_enabled::<edit::UpdateEvent>());
        assert_eq!(config.calendar.days_ahead, 30);
        assert_eq!(config.bridge.osascript, "osascript");
        assert_eq!(config.bridge.shell, "/bin/sh");
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert!(config.is_tool_enabled::<edit::DeleteEvent>());
        assert_eq!(config.calendar.days_ahead, 30);
    }

    #[test]
    fn test_example_config_file_is_parseable() {
        let example_config = include_str!("../apple-calendar-mcp-config.example.json");
        let config: Config = serde_json::from_str(example_config).unwrap();

        // The example is a read-only setup
        assert!(config.is_tool_enabled::<calendars::ListCalendars>());
        assert!(config.is_tool_enabled::<events::GetEvents>());
        assert!(config.is_tool_enabled::<events::SearchEvents>());
        assert!(!config.is_tool_enabled::<edit::CreateEvent>());
        assert!(!config.is_tool_enabled::<edit::DeleteEvent>());
        assert!(!config.is_tool_enabled::<edit::UpdateEvent>());

        assert_eq!(config.calendar.days_ahead, 14);
        assert_eq!(config.bridge.osascript, "/usr/bin/osascript");
    }

    #[test]
    fn test_config_parsing() {
        let json = r#"{
            "calendar": {
                "days_ahead": 90
            },
            "tools": {
                "get_events": {},
                "delete_event": {}
            }
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();

        assert!(config.is_tool_enabled::<events::GetEvents>());
        assert!(config.is_tool_enabled::<edit::DeleteEvent>());
        assert!(!config.is_tool_enabled::<calendars::ListCalendars>());
        assert!(!config.is_tool_enabled::<edit::UpdateEvent>());
        assert_eq!(config.calendar.days_ahead, 90);
        assert_eq!(config.bridge.shell, "/bin/sh");
    }

    #[test]
    fn test_days_ahead_or() {
        let calendar = CalendarConfig { days_ahead: 14 };
        assert_eq!(calendar.days_ahead_or(None).to_string(), "14");
        let half = serde_json::Number::from_f64(0.5).unwrap();
        assert_eq!(calendar.days_ahead_or(Some(half)).to_string(), "0.5");
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = Config::load_from_file("/nonexistent/config.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
