//! Sequence Reordering
//!
//! Pure functions from (sequence, active, over) to a new sequence.
//! Display order is sequence order: columns left to right, and tasks top to
//! bottom once filtered by column.

use crate::models::{BoardItem, Column, Id, Task};

/// Remove the element at `from` and reinsert it at `to`
///
/// Out-of-range indices leave the sequence unchanged.
pub fn array_move<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut out = items.to_vec();
    if from == to || from >= out.len() || to >= out.len() {
        return out;
    }
    let item = out.remove(from);
    out.insert(to, item);
    out
}

/// Move the active column to the position of the column it was dropped on
pub fn reorder_columns(columns: &[Column], active: Id, over: Id) -> Vec<Column> {
    if active == over {
        return columns.to_vec();
    }
    let from = columns.iter().position(|c| c.id == active);
    let to = columns.iter().position(|c| c.id == over);
    match (from, to) {
        (Some(from), Some(to)) => array_move(columns, from, to),
        _ => columns.to_vec(),
    }
}

/// Reorder or re-parent the active task against whatever is under the pointer
///
/// * Over a task in the same column: plain move to that task's index.
/// * Over a task in another column: adopt its column and land directly before it.
/// * Over a column: adopt that column and move to the end of the sequence,
///   which is the end of the column's visual block. A task already in that
///   column stays where it is.
///
/// The caller checks that a column target exists.
pub fn move_task(tasks: &[Task], active: Id, over: BoardItem) -> Vec<Task> {
    let Some(from) = tasks.iter().position(|t| t.id == active) else {
        return tasks.to_vec();
    };

    match over {
        BoardItem::Task(over_id) => {
            if over_id == active {
                return tasks.to_vec();
            }
            let Some(to) = tasks.iter().position(|t| t.id == over_id) else {
                return tasks.to_vec();
            };
            let target_column = tasks[to].column_id;
            if tasks[from].column_id == target_column {
                return array_move(tasks, from, to);
            }

            let mut out = tasks.to_vec();
            let mut task = out.remove(from);
            task.column_id = target_column;
            // Removal shifts everything after `from` left by one
            let before_over = if from < to { to - 1 } else { to };
            out.insert(before_over, task);
            out
        }
        BoardItem::Column(column_id) => {
            if tasks[from].column_id == column_id {
                return tasks.to_vec();
            }
            let mut out = tasks.to_vec();
            let mut task = out.remove(from);
            task.column_id = column_id;
            out.push(task);
            out
        }
    }
}
