/// Core document model and relocation algorithms for markdown workflow
/// boards: tasks live as text blocks under section headers, and a move
/// lifts one block out of its section and re-seats it under another while
/// keeping spacing and empty-section placeholders intact.

pub mod board;
pub mod line;
pub mod locate;
pub mod placeholder;
pub mod relocate;
pub mod types;

pub use board::{move_task_block, BoardError, MoveReport};
pub use types::{ParseStateError, TaskState};
