//! TOML-based application configuration.
//!
//! Stores user preferences for the calendar views:
//! - Calendar data API endpoint and request timeout
//! - Week start day
//! - Default block colors per item kind
//!
//! Configuration is stored at `~/.config/timetracker/config.toml`. Set
//! TIMETRACKER_ENV=dev to use `~/.config/timetracker-dev/` instead.

use std::path::PathBuf;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::calendar::{BlockPalette, CalendarItemKind};
use crate::error::ConfigError;

/// Calendar data API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// View configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// First day of the week: "monday" through "sunday".
    #[serde(default = "default_week_start")]
    pub week_start: String,
    #[serde(default = "default_event_color")]
    pub event_color: String,
    #[serde(default = "default_task_color")]
    pub task_color: String,
    #[serde(default = "default_time_entry_color")]
    pub time_entry_color: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/timetracker/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub view: ViewConfig,
}

// Default functions
fn default_base_url() -> String {
    "http://localhost:8080".into()
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_week_start() -> String {
    "monday".into()
}
fn default_event_color() -> String {
    CalendarItemKind::Event.default_color().into()
}
fn default_task_color() -> String {
    CalendarItemKind::Task.default_color().into()
}
fn default_time_entry_color() -> String {
    CalendarItemKind::TimeEntry.default_color().into()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            week_start: default_week_start(),
            event_color: default_event_color(),
            task_color: default_task_color(),
            time_entry_color: default_time_entry_color(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            view: ViewConfig::default(),
        }
    }
}

/// Returns `~/.config/timetracker[-dev]/` based on TIMETRACKER_ENV.
fn data_dir() -> Result<PathBuf, std::io::Error> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("TIMETRACKER_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("timetracker-dev")
    } else {
        base_dir.join("timetracker")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("~/.config"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk, writing defaults when no file exists yet.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Load from disk, returning defaults on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "api.base_url" => Some(self.api.base_url.clone()),
            "api.timeout_secs" => Some(self.api.timeout_secs.to_string()),
            "view.week_start" => Some(self.view.week_start.clone()),
            "view.event_color" => Some(self.view.event_color.clone()),
            "view.task_color" => Some(self.view.task_color.clone()),
            "view.time_entry_color" => Some(self.view.time_entry_color.clone()),
            _ => None,
        }
    }

    /// Set a config value by key. The caller persists with [`Config::save`].
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "api.base_url" => self.api.base_url = value.to_string(),
            "api.timeout_secs" => {
                self.api.timeout_secs =
                    value.parse().map_err(|_| ConfigError::InvalidValue {
                        key: key.to_string(),
                        message: format!("cannot parse '{value}' as seconds"),
                    })?;
            }
            "view.week_start" => {
                parse_week_start(value).ok_or_else(|| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: format!("unknown weekday '{value}'"),
                })?;
                self.view.week_start = value.to_lowercase();
            }
            "view.event_color" => self.view.event_color = value.to_string(),
            "view.task_color" => self.view.task_color = value.to_string(),
            "view.time_entry_color" => self.view.time_entry_color = value.to_string(),
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Week start as a chrono weekday, defaulting to Monday on bad values.
    pub fn week_start(&self) -> Weekday {
        parse_week_start(&self.view.week_start).unwrap_or(Weekday::Mon)
    }

    /// The configured block palette.
    pub fn palette(&self) -> BlockPalette {
        BlockPalette {
            event: self.view.event_color.clone(),
            task: self.view.task_color.clone(),
            time_entry: self.view.time_entry_color.clone(),
        }
    }
}

fn parse_week_start(value: &str) -> Option<Weekday> {
    match value.to_lowercase().as_str() {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}
