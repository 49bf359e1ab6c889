//! Kanban Board Component
//!
//! Owns the board state and is the only place it is mutated. Children report
//! create/edit/delete intents through callbacks; drag gestures come in
//! through leptos-dragdrop and are applied here.

use leptos::prelude::*;
use reactive_stores::Store;

use leptos_dragdrop::*;

use crate::components::{BoardHeader, ColumnContainer, DragOverlay, NewColumnDialog, TaskItem};
use crate::context::use_app_context;
use crate::date::now_timestamp;
use crate::models::{BoardItem, Id, Task};
use crate::storage::{self, BrowserStorage};
use crate::store::*;

/// Board orchestrator with DnD support
#[component]
pub fn KanbanBoard() -> impl IntoView {
    let ctx = use_app_context();
    let config = ctx.config();
    let dnd = ctx.dnd;

    let store = Store::new(KanbanState::new(storage::load_board(&BrowserStorage, &config)));

    // Persist every board change under the two configured keys
    Effect::new(move |_| {
        let board = store.board().read();
        if let Err(e) = storage::save_board(&BrowserStorage, &config, &board) {
            log::error!("Failed to save board: {}", e);
        }
    });

    // Gesture lifecycle
    bind_global_handlers(
        dnd,
        move |active| store_drag_start(&store, active.into()),
        move |_, over| store_drag_end(&store, over.map(BoardItem::from)),
        move |_| store_drag_cancel(&store),
    );

    // Drag-over fires whenever the item under the pointer changes
    Effect::new(move |_| {
        if let Some(over) = dnd.over_read.get() {
            store_drag_over(&store, over.into());
        }
    });

    // Intents from children
    let default_title = ctx.default_task_title();
    let on_add_task = Callback::new(move |column_id: Id| {
        store_create_task(&store, column_id, &default_title, now_timestamp());
    });
    let on_delete_task = Callback::new(move |id: Id| store_delete_task(&store, id));
    let on_edit_task = Callback::new(move |(id, title, date): (Id, String, String)| {
        store_edit_task(&store, id, title, date);
    });
    let on_delete_column = Callback::new(move |id: Id| store_delete_column(&store, id));
    let on_rename_column = Callback::new(move |(id, title): (Id, String)| {
        store_rename_column(&store, id, &title);
    });

    let tasks_of = move |column_id: Id| {
        Signal::derive(move || store.board().read().tasks_in(column_id).cloned().collect::<Vec<Task>>())
    };

    // Copy of the dragged item for the overlay; rebuilt only per gesture
    let dragged = store_dragged_item(&store);
    let overlay_content = move || {
        let active = dragged.get()?;
        let view = match active {
            BoardItem::Column(id) => {
                let column = store.board().read_untracked().column(id).cloned()?;
                view! {
                    <ColumnContainer
                        column=column
                        tasks=tasks_of(id)
                        on_add_task=on_add_task
                        on_delete_task=on_delete_task
                        on_edit_task=on_edit_task
                        on_delete_column=on_delete_column
                        on_rename_column=on_rename_column
                        overlay=true
                    />
                }
                .into_any()
            }
            BoardItem::Task(id) => {
                let task = store.board().read_untracked().task(id).cloned()?;
                view! {
                    <TaskItem task=task on_edit=on_edit_task on_delete=on_delete_task overlay=true />
                }
                .into_any()
            }
        };
        Some(view)
    };

    view! {
        <div class="board-page">
            <BoardHeader
                column_count=Signal::derive(move || store.board().read().columns().len())
                task_count=Signal::derive(move || store.board().read().tasks().len())
                on_add_column=move |()| { *store.new_column_open().write() = true; }
            />

            <div class="board-columns" on:mouseleave=make_on_mouseleave(dnd)>
                <For
                    each=move || store.board().read().columns().to_vec()
                    // Title in the key so renames re-render the header
                    key=|column| (column.id, column.title.clone())
                    children=move |column| {
                        let tasks = tasks_of(column.id);
                        view! {
                            <ColumnContainer
                                column=column
                                tasks=tasks
                                on_add_task=on_add_task
                                on_delete_task=on_delete_task
                                on_edit_task=on_edit_task
                                on_delete_column=on_delete_column
                                on_rename_column=on_rename_column
                            />
                        }
                    }
                />
                {move || store.board().read().columns().is_empty().then(|| view! {
                    <div class="empty-board">"No columns yet. Use \"Add Column\" to start."</div>
                })}
            </div>

            <DragOverlay>{overlay_content}</DragOverlay>

            <NewColumnDialog
                open=Signal::derive(move || *store.new_column_open().read())
                on_create=move |title: String| {
                    if store_create_column(&store, &title).is_some() {
                        *store.new_column_open().write() = false;
                    }
                }
                on_close=move |()| { *store.new_column_open().write() = false; }
            />
        </div>
    }
}
