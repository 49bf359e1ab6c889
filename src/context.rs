//! Application Context
//!
//! Shared, read-only handles provided via Leptos Context API.

use leptos::prelude::*;
use leptos_dragdrop::{create_dnd_signals, DndSignals};

use crate::config::AppConfig;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Drag-and-drop state shared by every draggable element
    pub dnd: DndSignals,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            dnd: create_dnd_signals(config.drag_threshold_px),
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    pub fn date_format(&self) -> String {
        self.config.with_value(|c| c.date_format.clone())
    }

    pub fn default_task_title(&self) -> String {
        self.config.with_value(|c| c.default_task_title.clone())
    }
}

/// Get the app context, provided by `App`
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
