//! Handles settings for the application. Configuration is read from
//! `settings.toml` (optional) and from `LOTTERY_POS__*` environment variables,
//! e.g. `LOTTERY_POS__TICKET__MAX_LINES=100`.
use lottery_engine::MAX_GENERATED_LINES;
use serde::Deserialize;

use crate::error::Result;

pub const DEFAULT_CONFIG_PATH: &str = "settings";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct App {
    /// Log level applied to every crate of the workspace.
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// What to do when a notation expands past `max_lines`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Overflow {
    #[default]
    Reject,
    Truncate,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct Ticket {
    pub max_lines: usize,
    pub overflow: Overflow,
}

impl Default for Ticket {
    fn default() -> Self {
        Self {
            max_lines: MAX_GENERATED_LINES,
            overflow: Overflow::Reject,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub ticket: Ticket,
}

impl Settings {
    /// Loads `path` (extension optional, missing file allowed) and layers the
    /// environment on top.
    pub fn new(path: Option<&str>) -> Result<Self> {
        let path = path.unwrap_or(DEFAULT_CONFIG_PATH);
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("LOTTERY_POS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
