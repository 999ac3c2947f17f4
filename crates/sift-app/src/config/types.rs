//! Configuration types for sift

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use sift_client::{ApiConfig, ToolConfig, DEFAULT_API_URL};
use sift_core::logging::LogConfig;
use sift_core::{SortDirection, SourceType};

use crate::filter::{FilterState, PriorityFilter};

/// Application settings (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub filters: FilterSettings,

    #[serde(default)]
    pub tool: ToolSettings,

    #[serde(default)]
    pub browser: BrowserSettings,

    #[serde(default)]
    pub log: LogSettings,
}

/// Daemon API connection
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiSettings {
    #[serde(default = "default_api_url")]
    pub url: String,

    /// Sent as `X-API-Key` when non-empty
    #[serde(default)]
    pub key: String,

    #[serde(default = "default_api_timeout")]
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            url: default_api_url(),
            key: String::new(),
            timeout_secs: default_api_timeout(),
        }
    }
}

/// Behavior settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Seconds between automatic refreshes; 0 disables
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,

    /// How long status messages stay visible
    #[serde(default = "default_status_timeout")]
    pub status_timeout_ms: u64,

    /// Mark an item read when it is opened in the reader
    #[serde(default = "default_true")]
    pub mark_read_on_open: bool,

    /// Command line history entries to keep
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            refresh_interval_secs: default_refresh_interval(),
            status_timeout_ms: default_status_timeout(),
            mark_read_on_open: true,
            history_size: default_history_size(),
        }
    }
}

/// Initial view filters
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FilterSettings {
    /// `all`, `high`, `medium` or `low`
    #[serde(default)]
    pub priority: Option<String>,

    /// Show read items too
    #[serde(default)]
    pub show_all: bool,

    /// `rss`, `reddit` or `youtube`
    #[serde(default)]
    pub source_type: Option<String>,

    #[serde(default)]
    pub sort: SortDirection,

    #[serde(default)]
    pub show_unprioritized: bool,
}

/// External pattern tool
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ToolSettings {
    #[serde(default = "default_tool_command")]
    pub command: String,

    #[serde(default = "default_tool_args")]
    pub args: Vec<String>,

    #[serde(default = "default_tool_timeout")]
    pub timeout_secs: u64,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            command: default_tool_command(),
            args: default_tool_args(),
            timeout_secs: default_tool_timeout(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct BrowserSettings {
    /// Browser executable; empty uses the platform opener
    #[serde(default)]
    pub command: String,
}

/// Log file settings; `SIFT_LOG` overrides `level`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LogSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

/// Values given on the command line, which take precedence over the file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub api_url: Option<String>,
    pub api_key: Option<String>,
    pub refresh_interval_secs: Option<u64>,
}

impl Settings {
    pub fn apply_overrides(&mut self, overrides: &CliOverrides) {
        if let Some(url) = &overrides.api_url {
            self.api.url = url.clone();
        }
        if let Some(key) = &overrides.api_key {
            self.api.key = key.clone();
        }
        if let Some(secs) = overrides.refresh_interval_secs {
            self.behavior.refresh_interval_secs = secs;
        }
    }

    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            url: self.api.url.clone(),
            key: Some(self.api.key.clone()).filter(|k| !k.is_empty()),
            timeout: Duration::from_secs(self.api.timeout_secs.max(1)),
        }
    }

    pub fn tool_config(&self) -> ToolConfig {
        ToolConfig {
            command: self.tool.command.clone(),
            args: self.tool.args.clone(),
            timeout: Duration::from_secs(self.tool.timeout_secs.max(1)),
        }
    }

    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            filter: self.log.level.clone(),
            directory: self.log.directory.clone(),
        }
    }

    /// Initial filters. Unrecognized values fall back to the defaults.
    pub fn initial_filters(&self) -> FilterState {
        let f = &self.filters;
        FilterState {
            priority: f
                .priority
                .as_deref()
                .and_then(|p| p.parse::<PriorityFilter>().ok())
                .unwrap_or_default(),
            show_all: f.show_all,
            source_type: f
                .source_type
                .as_deref()
                .and_then(|t| t.parse::<SourceType>().ok()),
            sort: f.sort,
            show_unprioritized: f.show_unprioritized,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_api_timeout() -> u64 {
    10
}

fn default_refresh_interval() -> u64 {
    300
}

fn default_status_timeout() -> u64 {
    3000
}

fn default_history_size() -> usize {
    crate::command_line::DEFAULT_HISTORY_SIZE
}

fn default_tool_command() -> String {
    "fabric".to_string()
}

fn default_tool_args() -> Vec<String> {
    vec!["--pattern".to_string()]
}

fn default_tool_timeout() -> u64 {
    120
}
