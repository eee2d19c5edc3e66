//! Lineup Substitution: search and replace that keeps parameter lists aligned.
//!
//! Renaming a function breaks the layout of every call whose arguments
//! continue on the following lines, aligned to the column after the
//! opening parenthesis. This crate performs literal, case-sensitive
//! substitution over a text buffer and rewrites the indentation of those
//! continuation lines so they line up with the parenthesis the
//! replacement shifted.
//!
//! # Architecture
//!
//! [`substitute_all`] drives the pass: it finds each occurrence in
//! document order, records the parentheses still open at the end of the
//! match ([`scope`]), replaces the text, then walks the following lines
//! and rewrites their leading whitespace ([`realign`]). The alignment
//! assumption is strict: a continuation line that lines up right of
//! every open parenthesis aborts the pass with an [`AlignmentError`].
//!
//! # Safety
//!
//! - The pass is all or nothing: on a fault the buffer is discarded and
//!   the file on disk stays untouched
//! - Atomic file writes (tempfile + fsync + rename)
//! - UTF-8 validated on load; positions count characters, not bytes
//!
//! # Example
//!
//! ```
//! use lineup_substitution::{substitute_all, Buffer};
//!
//! let mut buffer = Buffer::from_text("foo (param1,\n     param2);\n");
//! let summary = substitute_all(&mut buffer, "foo", "another_name").unwrap();
//!
//! assert_eq!(summary.replacements, 1);
//! assert_eq!(
//!     buffer.to_text(),
//!     "another_name (param1,\n              param2);\n"
//! );
//! ```

pub mod buffer;
pub mod column;
pub mod file;
pub mod realign;
pub mod scope;
pub mod substitute;

// Re-exports
pub use buffer::{Buffer, Gravity, MarkerId, Position};
pub use file::{load, save, FileError};
pub use realign::Realigner;
pub use scope::{scan_open_parens, AlignmentError, ScopeStack};
pub use substitute::{substitute_all, SubstitutionSummary};
