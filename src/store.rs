//! Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Only the board
//! orchestrator holds the store; children get read-only slices and report
//! intents through callbacks.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board::{Board, DragSession};
use crate::models::{BoardItem, Id};

#[derive(Clone, Debug, Default, Store)]
pub struct KanbanState {
    /// Canonical columns and tasks
    pub board: Board,
    /// Gesture in progress, if any
    pub drag: Option<DragSession>,
    /// Whether the "new column" dialog is open
    pub new_column_open: bool,
}

impl KanbanState {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type KanbanStore = Store<KanbanState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_create_column(store: &KanbanStore, title: &str) -> Option<Id> {
    let id = store.board().write().create_column(title);
    match id {
        Some(id) => log::debug!("Created column {}", id),
        None => log::debug!("Rejected column with blank title"),
    }
    id
}

pub fn store_rename_column(store: &KanbanStore, id: Id, title: &str) {
    if store.board().write().rename_column(id, title) {
        log::debug!("Renamed column {}", id);
    }
}

/// Removes the column and its tasks in a single write
pub fn store_delete_column(store: &KanbanStore, id: Id) {
    if store.board().write().delete_column(id) {
        log::debug!("Deleted column {} and its tasks", id);
    }
}

pub fn store_create_task(store: &KanbanStore, column_id: Id, title: &str, date: String) -> Id {
    let id = store.board().write().create_task(column_id, title, date);
    log::debug!("Created task {} in column {}", id, column_id);
    id
}

pub fn store_edit_task(store: &KanbanStore, id: Id, title: String, date: String) {
    if store.board().write().edit_task(id, title, date) {
        log::debug!("Edited task {}", id);
    }
}

pub fn store_delete_task(store: &KanbanStore, id: Id) {
    if store.board().write().delete_task(id) {
        log::debug!("Deleted task {}", id);
    }
}

/// The dragged item, notifying only when a gesture starts or ends
///
/// The session itself is rewritten on every over change.
pub fn store_dragged_item(store: &KanbanStore) -> Memo<Option<BoardItem>> {
    let store = *store;
    Memo::new(move |_| store.drag().read().as_ref().map(DragSession::active))
}

pub fn store_drag_start(store: &KanbanStore, active: BoardItem) {
    log::debug!("Drag start: {:?}", active);
    *store.drag().write() = Some(DragSession::start(active));
}

/// Continuous drag-over; reorders tasks live
pub fn store_drag_over(store: &KanbanStore, over: BoardItem) {
    let Some(mut session) = *store.drag().read_untracked() else {
        return;
    };
    // Probe a copy first so the store is only written on real changes
    let mut board = Board::clone(&store.board().read_untracked());
    let changed = session.over(&mut board, over);
    *store.drag().write() = Some(session);
    if changed {
        log::debug!("Drag over {:?}: moved {:?}", over, session.active());
        *store.board().write() = board;
    }
}

pub fn store_drag_end(store: &KanbanStore, over: Option<BoardItem>) {
    let Some(session) = store.drag().write().take() else {
        return;
    };
    log::debug!("Drag end: {:?} over {:?}", session.active(), over);
    let mut board = Board::clone(&store.board().read_untracked());
    if session.end(&mut board, over) {
        *store.board().write() = board;
    }
}

pub fn store_drag_cancel(store: &KanbanStore) {
    if let Some(session) = store.drag().write().take() {
        log::debug!("Drag cancelled: {:?}", session.active());
    }
}
