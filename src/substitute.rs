//! Document-order substitution with alignment repair.

use crate::buffer::{Buffer, Gravity, Position};
use crate::realign::Realigner;
use crate::scope::{scan_open_parens, AlignmentError};

/// Outcome counts for one substitution pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubstitutionSummary {
    /// Occurrences of the search text that were replaced.
    pub replacements: usize,
    /// Continuation lines whose indentation was rewritten.
    pub realigned_lines: usize,
}

/// Replace every literal occurrence of `search` with `replacement`,
/// keeping parenthesized continuation lines aligned.
///
/// Matches are visited in document order and never overlap; text a
/// replacement just produced is not searched again. Before each
/// replacement the parentheses still open between the end of the match
/// and the end of its line are recorded; afterwards the lines below are
/// realigned against those columns, shifted by the width difference
/// between `replacement` and `search` (in characters).
///
/// On an [`AlignmentError`] the buffer is left partially substituted and
/// must be discarded.
///
/// # Panics
///
/// Panics if `search` is empty.
pub fn substitute_all(
    buffer: &mut Buffer,
    search: &str,
    replacement: &str,
) -> Result<SubstitutionSummary, AlignmentError> {
    assert!(!search.is_empty(), "search text must not be empty");

    let delta = replacement.chars().count() as isize - search.chars().count() as isize;
    let mut summary = SubstitutionSummary::default();
    let mut cursor = Position::new(0, 0);

    while let Some((start, end)) = buffer.find(search, cursor) {
        // Snapshot the open scopes before the buffer changes; the walk
        // compares columns as they were at this point.
        let scopes = scan_open_parens(buffer, end)?;

        let after = buffer.replace(start, end, replacement);
        summary.replacements += 1;

        let resume = buffer.add_marker(after, Gravity::Right);
        if !scopes.is_empty() {
            summary.realigned_lines += Realigner::new(scopes, delta).run(buffer, after)?;
        }
        cursor = buffer.marker_position(resume);
        buffer.remove_marker(resume);
    }

    Ok(summary)
}
