//! Drag Overlay Component
//!
//! Follows the pointer with a copy of the item being dragged.

use leptos::prelude::*;

use crate::context::use_app_context;

/// Fixed-position layer at the pointer; `pointer-events: none` so the
/// elements underneath keep receiving mouseover
#[component]
pub fn DragOverlay(children: Children) -> impl IntoView {
    let dnd = use_app_context().dnd;

    let style = move || {
        let (x, y) = dnd.pointer_read.get();
        format!("left: {}px; top: {}px;", x + 8, y + 8)
    };

    view! {
        <div
            class=move || if dnd.active_read.get().is_some() { "drag-overlay" } else { "drag-overlay hidden" }
            style=style
        >
            {children()}
        </div>
    }
}
