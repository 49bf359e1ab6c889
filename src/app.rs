//! Kanban Frontend App
//!
//! Root component: provides the app context and mounts the board.

use leptos::prelude::*;

use crate::components::KanbanBoard;
use crate::config::AppConfig;
use crate::context::AppContext;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    log::info!(
        "Starting board (columns key {:?}, tasks key {:?})",
        config.columns_key,
        config.tasks_key
    );

    // Provide context to all children
    provide_context(AppContext::new(config));

    view! {
        <div class="app-layout">
            <KanbanBoard />
        </div>
    }
}
