//! Column arithmetic for indentation-sensitive edits.
//!
//! Alignment decisions are made in visual columns (tab stops every
//! [`TAB_WIDTH`] columns) while buffer positions count characters. These
//! helpers convert between the two views of a line.

/// Width of a tab stop in visual columns.
pub const TAB_WIDTH: usize = 8;

/// Visual column of the character at `char_offset`, expanding tabs.
///
/// A tab advances to the next multiple of [`TAB_WIDTH`]; every other
/// character occupies one column. Offsets past the end of the line yield
/// the column just past the last character.
pub fn visual_column(line: &str, char_offset: usize) -> usize {
    let mut column = 0;
    for ch in line.chars().take(char_offset) {
        if ch == '\t' {
            column += TAB_WIDTH - column % TAB_WIDTH;
        } else {
            column += 1;
        }
    }
    column
}

/// Character offset of the first non-whitespace character, if any.
pub fn text_start(line: &str) -> Option<usize> {
    line.chars().position(|ch| !ch.is_whitespace())
}

/// Visual column of the first non-whitespace character.
///
/// Blank and whitespace-only lines have no text start.
pub fn text_start_column(line: &str) -> Option<usize> {
    text_start(line).map(|offset| visual_column(line, offset))
}

/// Whether the leading whitespace run contains at least one tab.
pub fn indentation_contains_tab(line: &str) -> bool {
    line.chars()
        .take_while(|ch| ch.is_whitespace())
        .any(|ch| ch == '\t')
}

/// Build a whitespace run whose visual width is exactly `column`.
///
/// With `with_tabs` set, the run is tabs up to the last full tab stop plus
/// spaces for the remainder; otherwise spaces only.
pub fn build_indentation(column: usize, with_tabs: bool) -> String {
    if with_tabs {
        let mut indentation = "\t".repeat(column / TAB_WIDTH);
        indentation.push_str(&" ".repeat(column % TAB_WIDTH));
        indentation
    } else {
        " ".repeat(column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_count_one_column_each() {
        assert_eq!(visual_column("    x", 4), 4);
        assert_eq!(visual_column("abc", 2), 2);
        assert_eq!(visual_column("abc", 0), 0);
    }

    #[test]
    fn tab_advances_to_next_stop() {
        assert_eq!(visual_column("\tx", 1), 8);
        assert_eq!(visual_column("ab\tc", 3), 8);
        assert_eq!(visual_column("\t\t  x", 4), 18);
    }

    #[test]
    fn offset_past_line_end_clamps() {
        assert_eq!(visual_column("ab", 10), 2);
        assert_eq!(visual_column("", 3), 0);
    }

    #[test]
    fn text_start_skips_mixed_whitespace() {
        assert_eq!(text_start("  \t foo"), Some(4));
        assert_eq!(text_start("foo"), Some(0));
    }

    #[test]
    fn blank_lines_have_no_text_start() {
        assert_eq!(text_start(""), None);
        assert_eq!(text_start("   \t "), None);
        assert_eq!(text_start_column("  "), None);
    }

    #[test]
    fn text_start_column_expands_tabs() {
        // Five tabs then two spaces, typical of tab-indented C sources.
        assert_eq!(text_start_column("\t\t\t\t\t  &iter,"), Some(42));
        assert_eq!(text_start_column("    param"), Some(4));
    }

    #[test]
    fn tab_detection_only_looks_at_indentation() {
        assert!(indentation_contains_tab("\t  x"));
        assert!(indentation_contains_tab("  \tx"));
        assert!(!indentation_contains_tab("    x\ty"));
        assert!(!indentation_contains_tab("plain"));
        assert!(!indentation_contains_tab(""));
    }

    #[test]
    fn build_indentation_with_tabs_fills_remainder_with_spaces() {
        assert_eq!(build_indentation(42, true), "\t\t\t\t\t  ");
        assert_eq!(build_indentation(8, true), "\t");
        assert_eq!(build_indentation(3, true), "   ");
        assert_eq!(build_indentation(0, true), "");
    }

    #[test]
    fn build_indentation_spaces_only() {
        assert_eq!(build_indentation(14, false), " ".repeat(14));
        assert_eq!(build_indentation(0, false), "");
    }

    #[test]
    fn rebuilt_indentation_lands_on_target_column() {
        for column in [0, 1, 7, 8, 9, 16, 42] {
            let line = format!("{}x", build_indentation(column, true));
            assert_eq!(text_start_column(&line), Some(column));
        }
    }
}
