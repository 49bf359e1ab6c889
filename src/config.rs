//! App Configuration
//!
//! Optional JSON overrides stored under `kanban.config`; every field falls
//! back to its default.

use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::date;
use crate::models::DEFAULT_TASK_TITLE;
use crate::storage::{self, KeyValueStore};

/// Key holding configuration overrides
pub const CONFIG_KEY: &str = "kanban.config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Storage key of the column sequence
    pub columns_key: String,
    /// Storage key of the task sequence
    pub tasks_key: String,
    pub default_task_title: String,
    /// Pointer travel before a press becomes a drag
    pub drag_threshold_px: i32,
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
    /// chrono format string for task timestamps
    pub date_format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            columns_key: "columns".to_string(),
            tasks_key: "tasks".to_string(),
            default_task_title: DEFAULT_TASK_TITLE.to_string(),
            drag_threshold_px: leptos_dragdrop::DEFAULT_DRAG_THRESHOLD_PX,
            log_level: "info".to_string(),
            date_format: "%b %-d, %Y %H:%M".to_string(),
        }
    }
}

impl AppConfig {
    /// Stored overrides; a date format chrono rejects is replaced by the default
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        let mut config: Self = storage::load(store, CONFIG_KEY, Self::default());
        if !date::is_valid_format(&config.date_format) {
            log::warn!("Ignoring invalid date format {:?}", config.date_format);
            config.date_format = Self::default().date_format;
        }
        config
    }

    /// Unknown level names fall back to `info`
    pub fn log_level(&self) -> LevelFilter {
        LevelFilter::from_str(self.log_level.trim()).unwrap_or(LevelFilter::Info)
    }
}
