/// Board file orchestration: one read-modify-write cycle per move.
///
/// Every lookup failure short-circuits before the write, so a failed move
/// leaves the file byte-identical. The write itself is a single plain
/// `fs::write` with no temp-file rename; a crash mid-write can truncate
/// the file, which callers accept in exchange for keeping the board an
/// ordinary editable markdown document.

use std::fs;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::line::section_title;
use crate::locate::{find_enclosing_section, find_section, find_task_block};
use crate::placeholder::{ensure_empty_placeholder, remove_placeholder_if_nonempty};
use crate::relocate::{extract_block, insert_block, remove_block};
use crate::types::{ParseStateError, TaskState};

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("board file not found: {0}")]
    FileNotFound(String),

    #[error("task {0} not found")]
    TaskNotFound(String),

    #[error("target section not found: {0}")]
    SectionNotFound(String),

    #[error(transparent)]
    UnknownState(#[from] ParseStateError),

    #[error("failed to write board: {0}")]
    Write(#[source] std::io::Error),

    #[error("failed to read board: {0}")]
    Io(#[from] std::io::Error),
}

/// Summary of one completed move.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveReport {
    pub task_id: String,
    pub to_state: TaskState,
    pub to_section: String,
    /// Title of the section the block was lifted out of, when one of the
    /// recognized headers sat above it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_section: Option<String>,
}

/// Move the block for `task_id` into the section mapped to `to_state`,
/// rewriting `path` in place.
///
/// The block is located purely by its identifier; whichever section it
/// currently sits in is the source. Callers retrying an already-applied
/// transition therefore get a harmless re-insert into the same section
/// rather than an error.
pub fn move_task_block(
    path: &Path,
    task_id: &str,
    to_state: TaskState,
) -> Result<MoveReport, BoardError> {
    let lines = read_lines(path)?;

    let range = find_task_block(&lines, task_id)
        .ok_or_else(|| BoardError::TaskNotFound(task_id.to_string()))?;

    let target_name = to_state.section_name();
    let mut target_idx = find_section(&lines, target_name)
        .ok_or_else(|| BoardError::SectionNotFound(target_name.to_string()))?;

    let block = extract_block(&lines, range);
    // The enclosing header sits above the block, so its index survives the
    // removal unchanged.
    let source_idx = find_enclosing_section(&lines, range.start);
    let from_section = source_idx.map(|idx| section_title(&lines[idx]));

    log::debug!(
        "[taskshift.board] moving {} ({} lines) into {}",
        task_id,
        range.len(),
        target_name
    );

    let mut lines = remove_block(&lines, range);
    // Removal shifts everything at or past the block's end up by its length.
    if target_idx > range.start {
        target_idx -= range.len();
    }

    if let Some(idx) = source_idx {
        lines = ensure_empty_placeholder(&lines, idx);
        // A placeholder inserted above the target moves it again; re-derive
        // the position by name instead of patching the offset further.
        if idx < target_idx {
            target_idx = find_section(&lines, target_name)
                .ok_or_else(|| BoardError::SectionNotFound(target_name.to_string()))?;
        }
    } else {
        log::debug!(
            "[taskshift.board] no section found above {}, skipping source placeholder",
            task_id
        );
    }

    lines = insert_block(&lines, target_idx, block);

    // Insertion shifted the document once more; find the target afresh.
    if let Some(idx) = find_section(&lines, target_name) {
        lines = remove_placeholder_if_nonempty(&lines, idx);
    }

    write_lines(path, &lines)?;

    Ok(MoveReport {
        task_id: task_id.to_string(),
        to_state,
        to_section: target_name.to_string(),
        from_section,
    })
}

/// Read the document as a line sequence. A single terminating newline is
/// dropped so it can be re-added verbatim on write; everything else,
/// trailing whitespace included, passes through untouched.
fn read_lines(path: &Path) -> Result<Vec<String>, BoardError> {
    let content = fs::read_to_string(path).map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            BoardError::FileNotFound(path.display().to_string())
        } else {
            BoardError::Io(err)
        }
    })?;

    let mut lines: Vec<String> = content.split('\n').map(str::to_string).collect();
    if lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    Ok(lines)
}

/// Rewrite the document with a single trailing newline.
fn write_lines(path: &Path, lines: &[String]) -> Result<(), BoardError> {
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(path, content).map_err(BoardError::Write)
}
