/// Block extraction and insertion.
///
/// All functions take the current line sequence and return a new one;
/// nothing mutates in place. Index bookkeeping rule: removing `k` lines
/// at `[start, end)` shifts every retained index >= `end` down by `k`,
/// and inserting `k` lines at `p` shifts every index >= `p` up by `k`.
/// Indices before the edit are unaffected.

use crate::line::{classify, is_blank, is_placeholder, is_task_marker, LineClass};
use crate::locate::BlockRange;

/// Copy the block's lines, guaranteeing a trailing blank line so the
/// block can be spliced in anywhere without gluing onto what follows.
pub fn extract_block(lines: &[String], range: BlockRange) -> Vec<String> {
    let mut block: Vec<String> = lines[range.start..range.end].to_vec();
    if block.last().is_some_and(|line| !is_blank(line)) {
        block.push(String::new());
    }
    block
}

/// Delete `[start, end)` from the sequence.
pub fn remove_block(lines: &[String], range: BlockRange) -> Vec<String> {
    let mut result = lines[..range.start].to_vec();
    result.extend_from_slice(&lines[range.end..]);
    result
}

/// Choose the insertion index inside the section starting at `header_idx`.
///
/// Position after the header, past blank lines, past a single placeholder
/// line, and past any intro text sitting directly under the header. Intro
/// text ends at the next section header, the next task marker, or a blank
/// line immediately followed by a task marker.
fn insertion_point(lines: &[String], header_idx: usize) -> usize {
    let mut pos = header_idx + 1;

    while pos < lines.len() && is_blank(&lines[pos]) {
        pos += 1;
    }

    if pos < lines.len() && is_placeholder(&lines[pos]) {
        pos += 1;
    }

    while pos < lines.len() {
        match classify(&lines[pos]) {
            LineClass::Header | LineClass::TaskMarker => break,
            LineClass::Blank if pos + 1 < lines.len() && is_task_marker(&lines[pos + 1]) => break,
            _ => pos += 1,
        }
    }

    pos
}

/// Insert `block` just inside the section at `header_idx`, prepending one
/// blank separator when the preceding line is non-blank.
pub fn insert_block(lines: &[String], header_idx: usize, block: Vec<String>) -> Vec<String> {
    let pos = insertion_point(lines, header_idx);

    let mut result = lines[..pos].to_vec();
    if pos > 0 && !is_blank(&lines[pos - 1]) {
        result.push(String::new());
    }
    result.extend(block);
    result.extend_from_slice(&lines[pos..]);
    result
}
