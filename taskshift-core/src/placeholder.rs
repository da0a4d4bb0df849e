/// Placeholder maintenance.
///
/// Invariant: a section shows a "None" line exactly when it holds zero
/// task blocks. One of these operations runs on the source section after
/// a removal, the other on the target section after an insertion; a
/// single move never needs both on the same section.

use crate::line::{classify, is_blank, is_header, is_placeholder, is_task_marker, LineClass, PLACEHOLDER};

/// Insert a placeholder directly after the header at `header_idx` when
/// the section has no content. Blank lines and horizontal rules under the
/// header do not count as content. Idempotent.
pub fn ensure_empty_placeholder(lines: &[String], header_idx: usize) -> Vec<String> {
    let mut pos = header_idx + 1;
    while pos < lines.len()
        && matches!(classify(&lines[pos]), LineClass::Blank | LineClass::Rule)
    {
        pos += 1;
    }

    if pos < lines.len() && !is_header(&lines[pos]) {
        return lines.to_vec();
    }

    log::debug!(
        "[taskshift.placeholder] section at line {} emptied, adding placeholder",
        header_idx
    );
    let mut result = lines[..=header_idx].to_vec();
    result.push(String::new());
    result.push(PLACEHOLDER.to_string());
    result.push(String::new());
    result.extend_from_slice(&lines[header_idx + 1..]);
    result
}

/// Delete the placeholder under the header at `header_idx` once a task
/// marker follows it. The scan is bounded by the next section header.
/// Idempotent; a no-op when the section has no placeholder.
pub fn remove_placeholder_if_nonempty(lines: &[String], header_idx: usize) -> Vec<String> {
    let mut pos = header_idx + 1;
    while pos < lines.len() && is_blank(&lines[pos]) {
        pos += 1;
    }

    if pos >= lines.len() || !is_placeholder(&lines[pos]) {
        return lines.to_vec();
    }

    for line in &lines[pos + 1..] {
        if is_header(line) {
            break;
        }
        if is_task_marker(line) {
            log::debug!(
                "[taskshift.placeholder] section at line {} populated, dropping placeholder",
                header_idx
            );
            let mut result = lines[..pos].to_vec();
            result.extend_from_slice(&lines[pos + 1..]);
            return result;
        }
    }

    lines.to_vec()
}
