//! Open-parenthesis scope tracking for the realignment walk.

use thiserror::Error;

use crate::buffer::{Buffer, Position};
use crate::column::visual_column;

/// A fault that aborts the whole substitution pass.
///
/// The buffer contents at the point of failure are partially rewritten
/// and unspecified; callers must discard them instead of saving.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AlignmentError {
    #[error("line {line}: continuation at column {column} is right of the innermost open parenthesis (column {innermost})")]
    UnalignedContinuation {
        line: usize,
        column: usize,
        innermost: usize,
    },

    #[error("line {line}: shifting the continuation at column {column} by {delta} would move it before the line start")]
    IndentUnderflow {
        line: usize,
        column: usize,
        delta: isize,
    },

    #[error("scope at column {column} does not nest inside column {top}")]
    OutOfOrderColumns { column: usize, top: usize },
}

/// Alignment columns of the parentheses still open, innermost last.
///
/// Strictly increasing from bottom to top: an inner parenthesis always
/// sits right of the one enclosing it, so the top is the rightmost
/// column. The ordering is checked on every push.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeStack {
    columns: Vec<usize>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The innermost (rightmost) open column, if any.
    pub fn top(&self) -> Option<usize> {
        self.columns.last().copied()
    }

    /// All open columns, outermost first.
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    /// Push an alignment column; it must be right of the current top.
    pub fn push(&mut self, column: usize) -> Result<(), AlignmentError> {
        if let Some(top) = self.top() {
            if column <= top {
                return Err(AlignmentError::OutOfOrderColumns { column, top });
            }
        }
        self.columns.push(column);
        Ok(())
    }

    /// Push every column of `nested` above the current top, innermost last.
    pub fn push_nested(&mut self, nested: ScopeStack) -> Result<(), AlignmentError> {
        for column in nested.columns {
            self.push(column)?;
        }
        Ok(())
    }

    pub fn pop(&mut self) -> Option<usize> {
        self.columns.pop()
    }

    pub fn clear(&mut self) {
        self.columns.clear();
    }
}

/// Record the column after every `(` from `from` to the end of its line.
///
/// Closing parentheses are not tracked; scopes that closed are discarded
/// lazily when a later line no longer lines up with them. The scan moves
/// left to right, so the recorded columns are strictly increasing.
pub fn scan_open_parens(buffer: &Buffer, from: Position) -> Result<ScopeStack, AlignmentError> {
    let line = buffer.line(from.line);
    let mut stack = ScopeStack::new();
    for (offset, ch) in line.chars().enumerate().skip(from.offset) {
        if ch == '(' {
            stack.push(visual_column(line, offset + 1))?;
        }
    }
    Ok(stack)
}
