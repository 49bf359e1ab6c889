//! Board Header Component
//!
//! App title, board counts and the "Add Column" button.

use leptos::prelude::*;

#[component]
pub fn BoardHeader(
    #[prop(into)] column_count: Signal<usize>,
    #[prop(into)] task_count: Signal<usize>,
    #[prop(into)] on_add_column: Callback<()>,
) -> impl IntoView {
    view! {
        <header class="board-header">
            <div class="board-brand">
                <span class="board-logo">"☰"</span>
                <h1>"Kanban"</h1>
                <span class="board-count">
                    {move || format!("{} columns, {} tasks", column_count.get(), task_count.get())}
                </span>
            </div>
            <button class="primary-btn" on:click=move |_| on_add_column.run(())>
                "Add Column"
            </button>
        </header>
    }
}
