//! Task Item Component
//!
//! One task card: title, timestamp, edit and delete controls.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_mousedown, make_on_mouseover, DragItem};

use crate::components::EditState;
use crate::context::use_app_context;
use crate::date::{format_timestamp, now_timestamp};
use crate::models::{Id, Task};

/// A single draggable task card
#[component]
pub fn TaskItem(
    task: Task,
    /// (id, title, date)
    #[prop(into)] on_edit: Callback<(Id, String, String)>,
    #[prop(into)] on_delete: Callback<Id>,
    /// Rendered inside the drag overlay: no drag wiring, no placeholder
    #[prop(optional)] overlay: bool,
) -> impl IntoView {
    let ctx = use_app_context();
    let dnd = ctx.dnd;

    let id = task.id;
    let item = DragItem::task(id);
    let title = StoredValue::new(task.title);
    let date_label = StoredValue::new(format_timestamp(&task.date, &ctx.date_format()));

    let (edit_state, set_edit_state) = signal(EditState::Viewing);
    let is_editing = move || edit_state.with(EditState::is_editing);

    let save = move || {
        let mut staged = None;
        set_edit_state.update(|state| staged = state.commit());
        if let Some(title) = staged {
            on_edit.run((id, title, now_timestamp()));
        }
    };
    let cancel = move || set_edit_state.update(EditState::cancel);

    let on_mousedown = make_on_mousedown(dnd, item);
    let on_mouseover = make_on_mouseover(dnd, item);

    let dragging = dnd.dragging(item);

    move || {
        if !overlay && dragging.get() {
            return view! {
                <div class="task-placeholder" on:mouseover=on_mouseover></div>
            }
            .into_any();
        }

        view! {
            <div
                class={if overlay { "task-card overlay" } else { "task-card" }}
                on:mousedown=move |ev| {
                    if !overlay && !is_editing() {
                        on_mousedown(ev)
                    }
                }
                on:mouseover=move |ev| {
                    if !overlay {
                        on_mouseover(ev)
                    }
                }
            >
                <div class="task-header">
                    {move || match edit_state.get() {
                        EditState::Editing(staged) => view! {
                            <input
                                type="text"
                                class="task-title-input"
                                autofocus=true
                                prop:value=staged
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    set_edit_state.update(|state| state.stage(value));
                                }
                                on:keydown=move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                                    "Enter" => save(),
                                    "Escape" => cancel(),
                                    _ => {}
                                }
                            />
                        }.into_any(),
                        EditState::Viewing => view! {
                            <div class="task-title">{title.get_value()}</div>
                        }.into_any(),
                    }}
                </div>

                <div class="task-footer">
                    <span class="task-date">{date_label.get_value()}</span>
                    <Show
                        when=is_editing
                        fallback=move || view! {
                            <div class="task-actions">
                                <button
                                    class="ghost-btn"
                                    on:click=move |_| set_edit_state.set(EditState::begin(&title.get_value()))
                                >
                                    "Edit"
                                </button>
                                <button class="ghost-btn" on:click=move |_| on_delete.run(id)>"Delete"</button>
                            </div>
                        }
                    >
                        <div class="task-actions">
                            <button class="ghost-btn" on:click=move |_| cancel()>"Cancel"</button>
                            <button class="primary-btn" on:click=move |_| save()>"Save"</button>
                        </div>
                    </Show>
                </div>
            </div>
        }
        .into_any()
    }
}
