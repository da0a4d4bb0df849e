/// Line classification for board markdown.
///
/// The board grammar is implicit: `##`-or-deeper section headers,
/// bold-bracket task markers (`**[TASK-1] ...`), a literal "None"
/// placeholder in empty sections, horizontal rules. Each line is
/// classified once and the relocation algorithms work against the
/// classes instead of re-scanning raw text.

use std::sync::LazyLock;

use regex::Regex;

/// Placeholder text written into sections that hold no tasks.
pub const PLACEHOLDER: &str = "None";

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\*\*)?None(?:\*\*)?$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Level-2-or-deeper markdown header (a section boundary).
    Header,
    /// Start of a task block in bold-bracket form.
    TaskMarker,
    Blank,
    /// "None" / "**None**" sentinel for an empty section.
    Placeholder,
    /// Horizontal rule, treated as section decoration.
    Rule,
    Other,
}

pub fn classify(line: &str) -> LineClass {
    if line.starts_with("##") {
        return LineClass::Header;
    }
    if line.starts_with("**[") {
        return LineClass::TaskMarker;
    }
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineClass::Blank;
    }
    if PLACEHOLDER_RE.is_match(trimmed) {
        return LineClass::Placeholder;
    }
    if trimmed == "---" {
        return LineClass::Rule;
    }
    LineClass::Other
}

pub fn is_header(line: &str) -> bool {
    classify(line) == LineClass::Header
}

pub fn is_task_marker(line: &str) -> bool {
    classify(line) == LineClass::TaskMarker
}

pub fn is_blank(line: &str) -> bool {
    classify(line) == LineClass::Blank
}

pub fn is_placeholder(line: &str) -> bool {
    classify(line) == LineClass::Placeholder
}

/// Human-readable section title: the header line without its marker.
pub fn section_title(line: &str) -> String {
    line.trim_start_matches('#').trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify("## 🔨 IN PROGRESS"), LineClass::Header);
        assert_eq!(classify("### Subsection"), LineClass::Header);
        assert_eq!(classify("**[TASK-1] Fix the parser**"), LineClass::TaskMarker);
        assert_eq!(classify(""), LineClass::Blank);
        assert_eq!(classify("   "), LineClass::Blank);
        assert_eq!(classify("None"), LineClass::Placeholder);
        assert_eq!(classify("**None**"), LineClass::Placeholder);
        assert_eq!(classify("  None  "), LineClass::Placeholder);
        assert_eq!(classify("---"), LineClass::Rule);
        assert_eq!(classify("body text"), LineClass::Other);
        // Bare-bracket lines are not structural markers, only a locate fallback.
        assert_eq!(classify("[TASK-1] plain"), LineClass::Other);
    }

    #[test]
    fn test_placeholder_must_be_whole_line() {
        assert_eq!(classify("None of these tasks are ready"), LineClass::Other);
    }

    #[test]
    fn test_section_title() {
        assert_eq!(section_title("## 🔍 IN REVIEW"), "🔍 IN REVIEW");
        assert_eq!(section_title("##NEXT"), "NEXT");
    }
}
