//! Board State
//!
//! The canonical column and task sequences and every operation that mutates
//! them. All operations are total: unknown identifiers and empty titles are
//! no-ops, reported through the returned `bool`/`Option`.

use std::collections::HashSet;

use crate::ids::IdAllocator;
use crate::models::{BoardItem, Column, Id, Task};
use crate::reorder;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    columns: Vec<Column>,
    tasks: Vec<Task>,
    ids: IdAllocator,
}

impl Board {
    /// Build a board from stored sequences
    ///
    /// Later duplicates of an identifier are dropped, and the allocator is
    /// seeded past every identifier kept.
    pub fn from_parts(columns: Vec<Column>, tasks: Vec<Task>) -> Self {
        let columns = dedup_by_id(columns, |c| c.id);
        let tasks = dedup_by_id(tasks, |t| t.id);
        let ids = IdAllocator::seeded(columns.iter().map(|c| c.id).chain(tasks.iter().map(|t| t.id)));
        Self { columns, tasks, ids }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn column(&self, id: Id) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    pub fn task(&self, id: Id) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Tasks of one column, in display order
    pub fn tasks_in(&self, column_id: Id) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter().filter(move |t| t.column_id == column_id)
    }

    /// Tasks whose column no longer exists; these are never rendered
    pub fn orphaned_tasks(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| self.column(t.column_id).is_none())
            .collect()
    }

    fn fresh_id(&mut self) -> Id {
        let (columns, tasks) = (&self.columns, &self.tasks);
        self.ids
            .next_id(|id| columns.iter().any(|c| c.id == id) || tasks.iter().any(|t| t.id == id))
    }

    /// Append a column; rejected when the title is blank
    pub fn create_column(&mut self, title: &str) -> Option<Id> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        let id = self.fresh_id();
        self.columns.push(Column {
            id,
            title: title.to_string(),
        });
        Some(id)
    }

    /// Rename a column; a blank title keeps the old one
    pub fn rename_column(&mut self, id: Id, title: &str) -> bool {
        let title = title.trim();
        if title.is_empty() {
            return false;
        }
        match self.columns.iter_mut().find(|c| c.id == id) {
            Some(column) if column.title != title => {
                column.title = title.to_string();
                true
            }
            _ => false,
        }
    }

    /// Remove a column together with all of its tasks
    pub fn delete_column(&mut self, id: Id) -> bool {
        let before = self.columns.len();
        self.columns.retain(|c| c.id != id);
        if self.columns.len() == before {
            return false;
        }
        self.tasks.retain(|t| t.column_id != id);
        true
    }

    /// Append a task to the end of the sequence
    pub fn create_task(&mut self, column_id: Id, title: impl Into<String>, date: impl Into<String>) -> Id {
        let id = self.fresh_id();
        self.tasks.push(Task::new(id, column_id, title, date));
        id
    }

    pub fn delete_task(&mut self, id: Id) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Replace title and date, keeping identity and column
    pub fn edit_task(&mut self, id: Id, title: impl Into<String>, date: impl Into<String>) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.title = title.into();
                task.date = date.into();
                true
            }
            None => false,
        }
    }

    pub fn reorder_columns(&mut self, active: Id, over: Id) -> bool {
        let reordered = reorder::reorder_columns(&self.columns, active, over);
        replace_if_changed(&mut self.columns, reordered)
    }

    /// Reorder or re-parent a task against the item under the pointer
    pub fn move_task(&mut self, active: Id, over: BoardItem) -> bool {
        if let BoardItem::Column(column_id) = over {
            if self.column(column_id).is_none() {
                return false;
            }
        }
        let moved = reorder::move_task(&self.tasks, active, over);
        replace_if_changed(&mut self.tasks, moved)
    }
}

fn replace_if_changed<T: PartialEq>(current: &mut Vec<T>, next: Vec<T>) -> bool {
    if *current == next {
        return false;
    }
    *current = next;
    true
}

fn dedup_by_id<T, F: Fn(&T) -> Id>(items: Vec<T>, id: F) -> Vec<T> {
    let mut seen = HashSet::new();
    items.into_iter().filter(|item| seen.insert(id(item))).collect()
}

/// A drag gesture in progress
///
/// Drag-over events arrive many times per gesture; an over target that was
/// already processed is skipped, so repeated events for the same pair leave
/// the board untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    active: BoardItem,
    last_over: Option<BoardItem>,
}

impl DragSession {
    pub fn start(active: BoardItem) -> Self {
        Self {
            active,
            last_over: None,
        }
    }

    pub fn active(&self) -> BoardItem {
        self.active
    }

    /// Pointer moved onto `over`. Tasks move live; columns wait for the drop.
    pub fn over(&mut self, board: &mut Board, over: BoardItem) -> bool {
        if self.last_over == Some(over) {
            return false;
        }
        self.last_over = Some(over);
        match self.active {
            BoardItem::Task(id) => board.move_task(id, over),
            BoardItem::Column(_) => false,
        }
    }

    /// Pointer released over `over`; commits a column reorder
    ///
    /// A column dropped onto a task takes the position of that task's column.
    pub fn end(self, board: &mut Board, over: Option<BoardItem>) -> bool {
        let BoardItem::Column(active) = self.active else {
            return false;
        };
        let target = match over {
            Some(BoardItem::Column(id)) => Some(id),
            Some(BoardItem::Task(id)) => board.task(id).map(|t| t.column_id),
            None => None,
        };
        match target {
            Some(target) => board.reorder_columns(active, target),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DEFAULT_TASK_TITLE;
    use proptest::prelude::*;

    const DATE: &str = "2024-01-01T00:00:00.000Z";

    fn board_with_columns(titles: &[&str]) -> Board {
        let mut board = Board::default();
        for title in titles {
            board.create_column(title).unwrap();
        }
        board
    }

    fn column_ids(board: &Board) -> Vec<Id> {
        board.columns().iter().map(|c| c.id).collect()
    }

    fn task_ids(board: &Board) -> Vec<Id> {
        board.tasks().iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_create_two_tasks_then_delete_column() {
        let mut board = Board::from_parts(vec![Column { id: 1, title: "Todo".into() }], vec![]);
        let a = board.create_task(1, DEFAULT_TASK_TITLE, DATE);
        let b = board.create_task(1, DEFAULT_TASK_TITLE, DATE);

        assert_ne!(a, b);
        assert_eq!(board.tasks().len(), 2);
        assert!(board.tasks().iter().all(|t| t.column_id == 1 && t.title == "New Task"));

        assert!(board.delete_column(1));
        assert!(board.tasks().is_empty());
        assert!(board.columns().is_empty());
    }

    #[test]
    fn test_create_column_rejects_blank_title() {
        let mut board = Board::default();
        assert_eq!(board.create_column(""), None);
        assert_eq!(board.create_column("   "), None);
        assert!(board.columns().is_empty());
    }

    #[test]
    fn test_create_column_appends_trimmed() {
        let mut board = board_with_columns(&["Todo"]);
        let id = board.create_column("  Done ").unwrap();
        assert_eq!(board.columns().last().unwrap(), &Column { id, title: "Done".into() });
    }

    #[test]
    fn test_delete_column_keeps_other_tasks() {
        let mut board = board_with_columns(&["Todo", "Doing"]);
        let (todo, doing) = (board.columns()[0].id, board.columns()[1].id);
        board.create_task(todo, "a", DATE);
        let kept = board.create_task(doing, "b", DATE);

        assert!(board.delete_column(todo));
        assert_eq!(task_ids(&board), vec![kept]);
        assert!(!board.delete_column(todo));
    }

    #[test]
    fn test_edit_task_last_write_wins() {
        let mut board = board_with_columns(&["Todo"]);
        let column = board.columns()[0].id;
        let id = board.create_task(column, DEFAULT_TASK_TITLE, DATE);

        assert!(board.edit_task(id, "first", "2024-02-01T00:00:00.000Z"));
        assert!(board.edit_task(id, "second", "2024-03-01T00:00:00.000Z"));

        let task = board.task(id).unwrap();
        assert_eq!(task.title, "second");
        assert_eq!(task.date, "2024-03-01T00:00:00.000Z");
        assert_eq!(task.column_id, column);
    }

    #[test]
    fn test_missing_ids_are_noops() {
        let mut board = board_with_columns(&["Todo"]);
        let snapshot = board.clone();
        assert!(!board.delete_task(42));
        assert!(!board.edit_task(42, "x", DATE));
        assert!(!board.rename_column(42, "x"));
        assert!(!board.move_task(42, BoardItem::Column(1)));
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_rename_column() {
        let mut board = board_with_columns(&["Todo"]);
        let id = board.columns()[0].id;
        assert!(board.rename_column(id, " Backlog "));
        assert_eq!(board.column(id).unwrap().title, "Backlog");
        assert!(!board.rename_column(id, ""));
        assert_eq!(board.column(id).unwrap().title, "Backlog");
    }

    #[test]
    fn test_reorder_columns_scenario() {
        let mut board = Board::from_parts(
            vec![Column { id: 1, title: "A".into() }, Column { id: 2, title: "B".into() }],
            vec![],
        );
        assert!(!board.reorder_columns(1, 1));
        assert!(board.reorder_columns(1, 2));
        assert_eq!(column_ids(&board), vec![2, 1]);
        assert!(board.reorder_columns(1, 2));
        assert_eq!(column_ids(&board), vec![1, 2]);
    }

    #[test]
    fn test_move_task_to_unknown_column_is_rejected() {
        let mut board = board_with_columns(&["Todo"]);
        let column = board.columns()[0].id;
        let id = board.create_task(column, "a", DATE);
        assert!(!board.move_task(id, BoardItem::Column(999)));
        assert_eq!(board.task(id).unwrap().column_id, column);
    }

    #[test]
    fn test_from_parts_drops_duplicates_and_seeds_ids() {
        let columns = vec![
            Column { id: 3, title: "A".into() },
            Column { id: 3, title: "dup".into() },
        ];
        let tasks = vec![Task::new(50, 3, "t", DATE), Task::new(50, 3, "dup", DATE)];
        let mut board = Board::from_parts(columns, tasks);

        assert_eq!(board.columns().len(), 1);
        assert_eq!(board.tasks().len(), 1);
        assert_eq!(board.tasks()[0].title, "t");
        assert_eq!(board.create_column("B"), Some(51));
    }

    #[test]
    fn test_ids_stay_unique_past_max() {
        let columns = vec![Column { id: Id::MAX, title: "A".into() }];
        let tasks = vec![Task::new(1, Id::MAX, "t", DATE)];
        let mut board = Board::from_parts(columns, tasks);

        let b = board.create_column("B").unwrap();
        let c = board.create_column("C").unwrap();
        let task = board.create_task(b, "u", DATE);
        assert_eq!((b, c, task), (2, 3, 4));

        assert!(board.delete_column(b));
        assert_eq!(column_ids(&board), vec![Id::MAX, c]);
        assert_eq!(task_ids(&board), vec![1]);
    }

    #[test]
    fn test_orphaned_tasks() {
        let board = Board::from_parts(
            vec![Column { id: 1, title: "A".into() }],
            vec![Task::new(2, 1, "ok", DATE), Task::new(3, 9, "lost", DATE)],
        );
        let orphans: Vec<Id> = board.orphaned_tasks().iter().map(|t| t.id).collect();
        assert_eq!(orphans, vec![3]);
        assert_eq!(board.tasks_in(1).count(), 1);
    }

    #[test]
    fn test_drag_session_repeated_over_is_idempotent() {
        let mut board = board_with_columns(&["Todo", "Doing"]);
        let (todo, doing) = (board.columns()[0].id, board.columns()[1].id);
        let a = board.create_task(todo, "a", DATE);
        let b = board.create_task(doing, "b", DATE);

        let mut session = DragSession::start(BoardItem::Task(a));
        assert!(session.over(&mut board, BoardItem::Task(b)));
        let after_first = board.clone();
        assert!(!session.over(&mut board, BoardItem::Task(b)));
        assert!(!session.over(&mut board, BoardItem::Task(b)));
        assert_eq!(board, after_first);
        assert_eq!(board.task(a).unwrap().column_id, doing);
        assert_eq!(task_ids(&board), vec![a, b]);
    }

    #[test]
    fn test_drag_session_task_over_column() {
        let mut board = board_with_columns(&["Todo", "Doing"]);
        let (todo, doing) = (board.columns()[0].id, board.columns()[1].id);
        let a = board.create_task(todo, "a", DATE);
        let b = board.create_task(todo, "b", DATE);

        let mut session = DragSession::start(BoardItem::Task(a));
        assert!(session.over(&mut board, BoardItem::Column(doing)));
        assert_eq!(task_ids(&board), vec![b, a]);
        assert_eq!(board.task(a).unwrap().column_id, doing);
        // Task drops commit nothing further
        assert!(!session.end(&mut board, Some(BoardItem::Column(doing))));
    }

    #[test]
    fn test_drag_session_column_reorders_on_end_only() {
        let mut board = board_with_columns(&["A", "B", "C"]);
        let ids = column_ids(&board);
        let mut session = DragSession::start(BoardItem::Column(ids[0]));

        assert!(!session.over(&mut board, BoardItem::Column(ids[2])));
        assert_eq!(column_ids(&board), ids);

        assert!(session.end(&mut board, Some(BoardItem::Column(ids[2]))));
        assert_eq!(column_ids(&board), vec![ids[1], ids[2], ids[0]]);
    }

    #[test]
    fn test_drag_session_column_dropped_on_task() {
        let mut board = board_with_columns(&["A", "B"]);
        let ids = column_ids(&board);
        let task = board.create_task(ids[1], "t", DATE);

        let session = DragSession::start(BoardItem::Column(ids[0]));
        assert!(session.end(&mut board, Some(BoardItem::Task(task))));
        assert_eq!(column_ids(&board), vec![ids[1], ids[0]]);
    }

    #[test]
    fn test_drag_session_end_without_target() {
        let mut board = board_with_columns(&["A", "B"]);
        let ids = column_ids(&board);
        let session = DragSession::start(BoardItem::Column(ids[0]));
        assert!(!session.end(&mut board, None));
        assert_eq!(column_ids(&board), ids);
    }

    #[derive(Debug, Clone)]
    enum Op {
        CreateColumn(String),
        CreateTask(usize),
        DeleteTask(usize),
        DeleteColumn(usize),
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            "[a-z ]{0,6}".prop_map(Op::CreateColumn),
            any::<usize>().prop_map(Op::CreateTask),
            any::<usize>().prop_map(Op::DeleteTask),
            any::<usize>().prop_map(Op::DeleteColumn),
        ]
    }

    fn apply(board: &mut Board, op: &Op) {
        match op {
            Op::CreateColumn(title) => {
                board.create_column(title);
            }
            Op::CreateTask(pick) if !board.columns().is_empty() => {
                let column = board.columns()[pick % board.columns().len()].id;
                board.create_task(column, DEFAULT_TASK_TITLE, DATE);
            }
            Op::DeleteTask(pick) if !board.tasks().is_empty() => {
                let id = board.tasks()[pick % board.tasks().len()].id;
                board.delete_task(id);
            }
            Op::DeleteColumn(pick) if !board.columns().is_empty() => {
                let id = board.columns()[pick % board.columns().len()].id;
                board.delete_column(id);
                assert!(board.tasks().iter().all(|t| t.column_id != id));
            }
            _ => {}
        }
    }

    proptest! {
        #[test]
        fn given_any_op_sequence_then_invariants_hold(ops in prop::collection::vec(arb_op(), 0..40)) {
            let mut board = Board::default();
            for op in &ops {
                apply(&mut board, op);

                prop_assert!(board.orphaned_tasks().is_empty());
                let mut seen = HashSet::new();
                prop_assert!(board.columns().iter().all(|c| seen.insert(c.id)));
                prop_assert!(board.tasks().iter().all(|t| seen.insert(t.id)));
            }
        }

        #[test]
        fn given_blank_title_then_column_count_unchanged(title in r"\s{0,5}", n in 0usize..4) {
            let mut board = Board::default();
            for i in 0..n {
                board.create_column(&format!("c{}", i));
            }
            prop_assert_eq!(board.create_column(&title), None);
            prop_assert_eq!(board.columns().len(), n);
        }
    }
}
