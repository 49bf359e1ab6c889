//! UI Components
//!
//! Leptos components for the board.

mod board_header;
mod column_container;
mod delete_column_button;
mod drag_overlay;
mod edit_state;
mod kanban_board;
mod new_column_dialog;
mod task_item;

pub use board_header::BoardHeader;
pub use column_container::ColumnContainer;
pub use delete_column_button::DeleteColumnButton;
pub use drag_overlay::DragOverlay;
pub use edit_state::EditState;
pub use kanban_board::KanbanBoard;
pub use new_column_dialog::NewColumnDialog;
pub use task_item::TaskItem;
