/// Locators for task blocks and section headers.

use crate::line::{classify, is_header, LineClass};
use crate::types::TaskState;

/// Half-open line range `[start, end)` of one task block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRange {
    pub start: usize,
    pub end: usize,
}

impl BlockRange {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Find the task block for `task_id`.
///
/// The block starts at the first line carrying the bracketed identifier,
/// preferring the bold marker form `**[id]` and accepting bare `[id]`.
/// It ends at the next blank line, section header, or task marker;
/// section headers always terminate a block, so a block never spans two
/// sections. Duplicate identifiers are a caller error and which block is
/// found is unspecified.
pub fn find_task_block(lines: &[String], task_id: &str) -> Option<BlockRange> {
    let bold = format!("**[{}]", task_id);
    let bare = format!("[{}]", task_id);
    let start = lines
        .iter()
        .position(|line| line.contains(&bold) || line.contains(&bare))?;

    let mut end = lines.len();
    for (i, line) in lines.iter().enumerate().skip(start + 1) {
        match classify(line) {
            LineClass::Blank | LineClass::Header | LineClass::TaskMarker => {
                end = i;
                break;
            }
            _ => {}
        }
    }
    Some(BlockRange { start, end })
}

/// Index of the first header line containing `fragment` as a substring.
/// Substring matching tolerates decorative prefixes in real headers.
pub fn find_section(lines: &[String], fragment: &str) -> Option<usize> {
    lines
        .iter()
        .position(|line| is_header(line) && line.contains(fragment))
}

/// Nearest recognized section header above `start`: the enclosing section
/// of the block beginning there. None when the block sits above every
/// known section.
pub fn find_enclosing_section(lines: &[String], start: usize) -> Option<usize> {
    TaskState::ALL
        .iter()
        .filter_map(|state| find_section(lines, state.section_name()))
        .filter(|&idx| idx < start)
        .max()
}
