//! Board Models
//!
//! Columns, tasks and the identifiers that tie them together.
//! Field names serialize in camelCase to match stored board data.

use leptos_dragdrop::{DragItem, DragKind};
use serde::{Deserialize, Serialize};

/// Entity identifier, unique within its collection
pub type Id = u32;

/// Title given to tasks created from a column's "Add Task" button
pub const DEFAULT_TASK_TITLE: &str = "New Task";

/// A named lane holding an ordered list of tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: Id,
    pub title: String,
}

/// A titled, timestamped work item belonging to exactly one column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Id,
    /// Owning column
    pub column_id: Id,
    pub title: String,
    /// RFC 3339 timestamp of creation or last edit
    pub date: String,
}

impl Task {
    pub fn new(id: Id, column_id: Id, title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id,
            column_id,
            title: title.into(),
            date: date.into(),
        }
    }
}

/// Either entity, as seen by a drag gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardItem {
    Column(Id),
    Task(Id),
}

impl From<DragItem> for BoardItem {
    fn from(item: DragItem) -> Self {
        match item.kind {
            DragKind::Column => BoardItem::Column(item.id),
            DragKind::Task => BoardItem::Task(item.id),
        }
    }
}

impl From<BoardItem> for DragItem {
    fn from(item: BoardItem) -> Self {
        match item {
            BoardItem::Column(id) => DragItem::column(id),
            BoardItem::Task(id) => DragItem::task(id),
        }
    }
}
