//! The alignment walk that follows every substitution.

use crate::buffer::{Buffer, Position};
use crate::column::{build_indentation, indentation_contains_tab, text_start, visual_column};
use crate::scope::{scan_open_parens, AlignmentError, ScopeStack};

/// Walks the lines after a replaced match and shifts every continuation
/// line that was aligned to a parenthesis the replacement moved.
///
/// All column comparisons happen in the space the lines had before the
/// walk rewrites anything: a matched line's nested parentheses are
/// scanned off it before its indentation changes, so deeper
/// continuations still line up when their turn comes.
#[derive(Debug)]
pub struct Realigner {
    stack: ScopeStack,
    delta: isize,
}

impl Realigner {
    /// `stack` holds the scopes open at the end of the replaced match,
    /// scanned before the replacement was written. `delta` is the width
    /// shift the replacement introduced, in characters.
    pub fn new(stack: ScopeStack, delta: isize) -> Self {
        Self { stack, delta }
    }

    /// Realign the continuation lines after `anchor` while an open scope
    /// still governs them. Returns the number of lines rewritten.
    ///
    /// The walk ends at the first line that belongs to no open scope: a
    /// blank line closes everything, a dedent past the outermost column
    /// drains the stack. A line starting right of the innermost open
    /// column contradicts the alignment assumption and is an error.
    pub fn run(mut self, buffer: &mut Buffer, anchor: Position) -> Result<usize, AlignmentError> {
        let mut realigned = 0;

        for line in anchor.line + 1..buffer.line_count() {
            if self.stack.is_empty() {
                break;
            }

            let start = match text_start(buffer.line(line)) {
                Some(start) => start,
                None => {
                    // A blank line ends every open continuation.
                    self.stack.clear();
                    break;
                }
            };
            let column = visual_column(buffer.line(line), start);

            if let Some(top) = self.stack.top() {
                if column > top {
                    return Err(AlignmentError::UnalignedContinuation {
                        line: line + 1,
                        column,
                        innermost: top,
                    });
                }
            }

            while let Some(top) = self.stack.top() {
                if top == column {
                    break;
                }
                self.stack.pop();
            }
            if self.stack.is_empty() {
                break;
            }

            // Scan before rewriting; the rest of the walk keeps comparing
            // columns the buffer had before the substitution.
            let nested = scan_open_parens(buffer, Position::new(line, 0))?;
            if self.delta != 0 {
                realign_line(buffer, line, start, column, self.delta)?;
                realigned += 1;
            }
            self.stack.push_nested(nested)?;
        }

        Ok(realigned)
    }
}

/// Rewrite the leading whitespace of `line` so its text starts at
/// `column + delta`, keeping tabs if the original run had any.
fn realign_line(
    buffer: &mut Buffer,
    line: usize,
    start: usize,
    column: usize,
    delta: isize,
) -> Result<(), AlignmentError> {
    let target = column as isize + delta;
    if target < 0 {
        return Err(AlignmentError::IndentUnderflow {
            line: line + 1,
            column,
            delta,
        });
    }

    let with_tabs = indentation_contains_tab(buffer.line(line));
    let indentation = build_indentation(target as usize, with_tabs);
    buffer.replace(
        Position::new(line, 0),
        Position::new(line, start),
        &indentation,
    );
    Ok(())
}
