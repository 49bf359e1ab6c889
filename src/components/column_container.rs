//! Column Container Component
//!
//! One board column: editable title, its tasks in sequence order and an
//! "Add Task" button. The header is the drag handle; the whole column is a
//! drop target for tasks.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_mousedown, make_on_mouseover, DragItem};

use crate::components::{DeleteColumnButton, EditState, TaskItem};
use crate::context::use_app_context;
use crate::models::{Column, Id, Task};

/// Column header: title, or an input while renaming
#[component]
fn ColumnTitle(
    column_id: Id,
    title: String,
    #[prop(into)] on_rename: Callback<(Id, String)>,
) -> impl IntoView {
    let ctx = use_app_context();
    let title = StoredValue::new(title);
    let (edit_state, set_edit_state) = signal(EditState::Viewing);

    // Enter and blur both commit; the second one finds nothing staged
    let commit = move || {
        let mut staged = None;
        set_edit_state.update(|state| staged = state.commit());
        if let Some(new_title) = staged {
            on_rename.run((column_id, new_title));
        }
    };

    move || match edit_state.get() {
        EditState::Editing(staged) => view! {
            <input
                type="text"
                class="column-title-input"
                autofocus=true
                prop:value=staged
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    set_edit_state.update(|state| state.stage(value));
                }
                on:blur=move |_| commit()
                on:keydown=move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                    "Enter" => commit(),
                    "Escape" => set_edit_state.update(EditState::cancel),
                    _ => {}
                }
            />
        }
        .into_any(),
        EditState::Viewing => view! {
            <h2
                class="column-title"
                title="Double-click to rename"
                on:dblclick=move |_| {
                    if !ctx.dnd.drag_just_ended_read.get_untracked() {
                        set_edit_state.set(EditState::begin(&title.get_value()));
                    }
                }
            >
                {title.get_value()}
            </h2>
        }
        .into_any(),
    }
}

/// A board column with its tasks
#[component]
pub fn ColumnContainer(
    column: Column,
    /// This column's tasks, already filtered and ordered
    #[prop(into)] tasks: Signal<Vec<Task>>,
    #[prop(into)] on_add_task: Callback<Id>,
    #[prop(into)] on_delete_task: Callback<Id>,
    #[prop(into)] on_edit_task: Callback<(Id, String, String)>,
    #[prop(into)] on_delete_column: Callback<Id>,
    #[prop(into)] on_rename_column: Callback<(Id, String)>,
    /// Rendered inside the drag overlay: no drag wiring, no placeholder
    #[prop(optional)] overlay: bool,
) -> impl IntoView {
    let ctx = use_app_context();
    let dnd = ctx.dnd;

    let id = column.id;
    let item = DragItem::column(id);
    let title = StoredValue::new(column.title);

    let on_mousedown = make_on_mousedown(dnd, item);
    let on_mouseover = make_on_mouseover(dnd, item);

    let dragging = dnd.dragging(item);
    let column_class = move || {
        let mut c = String::from("column");
        if overlay {
            c.push_str(" overlay");
        } else if dnd.is_over(item) {
            c.push_str(" drop-target");
        }
        c
    };

    move || {
        if !overlay && dragging.get() {
            return view! {
                <div class="column-placeholder" on:mouseover=on_mouseover></div>
            }
            .into_any();
        }

        view! {
            <div class=column_class on:mouseover=move |ev| {
                if !overlay {
                    on_mouseover(ev)
                }
            }>
                <div
                    class="column-header"
                    on:mousedown=move |ev| {
                        if !overlay {
                            on_mousedown(ev)
                        }
                    }
                >
                    <ColumnTitle column_id=id title=title.get_value() on_rename=on_rename_column />
                    <DeleteColumnButton
                        title=title.get_value()
                        task_count=Signal::derive(move || tasks.with(Vec::len))
                        on_confirm=move |()| on_delete_column.run(id)
                    />
                </div>

                <div class="column-tasks">
                    <For
                        each=move || tasks.get()
                        // Title and date in the key so edits re-render the card
                        key=|task| (task.id, task.title.clone(), task.date.clone())
                        children=move |task| {
                            view! {
                                <TaskItem
                                    task=task
                                    on_edit=on_edit_task
                                    on_delete=on_delete_task
                                    overlay=overlay
                                />
                            }
                        }
                    />
                </div>

                <div class="column-footer">
                    <button class="ghost-btn wide" on:click=move |_| on_add_task.run(id)>
                        "Add Task"
                    </button>
                </div>
            </div>
        }
        .into_any()
    }
}
