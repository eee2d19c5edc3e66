//! Line-oriented text buffer with position-tracking markers.
//!
//! Positions address characters, not bytes, so multi-byte content never
//! puts an edit inside a code point. Markers survive edits the way marks
//! do in an editor buffer: edits before a marker shift it, and a deletion
//! spanning it collapses it to the deletion start. Gravity decides which
//! side of an insertion at the marker itself it sticks to.
//!
//! Positions passed to any operation must be valid for the current
//! contents; out-of-range positions are a caller bug and panic.

use std::cmp::Ordering;

/// A caret position: line index plus character offset within that line.
///
/// Field order matters: the derived `Ord` compares line first, so position
/// order is document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, offset: usize) -> Self {
        Self { line, offset }
    }
}

/// Which side of an insertion at the marker's own position it sticks to.
///
/// A [`Gravity::Right`] marker ends up after text inserted exactly at the
/// marker; a [`Gravity::Left`] marker stays before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gravity {
    Left,
    Right,
}

/// Handle to a marker registered with [`Buffer::add_marker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerId(usize);

#[derive(Debug, Clone)]
struct Marker {
    position: Position,
    gravity: Gravity,
}

/// An in-memory text buffer, kept as lines without their terminators.
///
/// `from_text` and `to_text` round-trip exactly: a trailing newline in the
/// input shows up as a final empty line and is re-emitted on output.
#[derive(Debug, Clone)]
pub struct Buffer {
    lines: Vec<String>,
    markers: Vec<Option<Marker>>,
}

impl Buffer {
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
            markers: Vec::new(),
        }
    }

    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The line at `index`, without its terminator. Panics if out of range.
    pub fn line(&self, index: usize) -> &str {
        &self.lines[index]
    }

    fn assert_valid(&self, position: Position) {
        assert!(
            position.line < self.lines.len(),
            "line {} out of range ({} lines)",
            position.line,
            self.lines.len()
        );
        assert!(
            position.offset <= self.lines[position.line].chars().count(),
            "offset {} out of range on line {}",
            position.offset,
            position.line
        );
    }

    /// Find the first literal occurrence of `needle` at or after `from`.
    ///
    /// The search is case-sensitive and crosses line boundaries when the
    /// needle contains newlines. Returns the match as a start/end pair,
    /// end exclusive.
    ///
    /// # Panics
    ///
    /// Panics if `needle` is empty or `from` is out of range.
    pub fn find(&self, needle: &str, from: Position) -> Option<(Position, Position)> {
        assert!(!needle.is_empty(), "needle must not be empty");
        self.assert_valid(from);

        let segments: Vec<&str> = needle.split('\n').collect();
        if segments.len() == 1 {
            self.find_single_line(needle, from)
        } else {
            self.find_multi_line(&segments, from)
        }
    }

    fn find_single_line(&self, needle: &str, from: Position) -> Option<(Position, Position)> {
        let needle_chars = needle.chars().count();
        for (index, line) in self.lines.iter().enumerate().skip(from.line) {
            let from_offset = if index == from.line { from.offset } else { 0 };
            let from_byte = byte_of(line, from_offset);
            if let Some(found) = line[from_byte..].find(needle) {
                let offset = from_offset + line[from_byte..from_byte + found].chars().count();
                return Some((
                    Position::new(index, offset),
                    Position::new(index, offset + needle_chars),
                ));
            }
        }
        None
    }

    /// A multi-line needle matches when its first segment is a suffix of
    /// some line and each middle segment is a whole line. The last
    /// segment must be a prefix of the line that follows.
    fn find_multi_line(&self, segments: &[&str], from: Position) -> Option<(Position, Position)> {
        let last = segments.len() - 1;
        for index in from.line..self.lines.len() {
            if index + last >= self.lines.len() {
                return None;
            }
            let first_line = &self.lines[index];
            if !first_line.ends_with(segments[0]) {
                continue;
            }
            let start_offset = first_line.chars().count() - segments[0].chars().count();
            if index == from.line && start_offset < from.offset {
                continue;
            }
            let mut matched = true;
            for (step, segment) in segments[1..last].iter().enumerate() {
                if self.lines[index + 1 + step] != *segment {
                    matched = false;
                    break;
                }
            }
            if !matched || !self.lines[index + last].starts_with(segments[last]) {
                continue;
            }
            return Some((
                Position::new(index, start_offset),
                Position::new(index + last, segments[last].chars().count()),
            ));
        }
        None
    }

    /// Insert `text` at `at` and return the position just past it.
    ///
    /// Markers at or after `at` shift right; a marker exactly at `at`
    /// moves only with [`Gravity::Right`].
    pub fn insert(&mut self, at: Position, text: &str) -> Position {
        self.assert_valid(at);

        let segments: Vec<&str> = text.split('\n').collect();
        let end = if segments.len() == 1 {
            let byte = byte_of(&self.lines[at.line], at.offset);
            self.lines[at.line].insert_str(byte, text);
            Position::new(at.line, at.offset + text.chars().count())
        } else {
            let byte = byte_of(&self.lines[at.line], at.offset);
            let tail = self.lines[at.line].split_off(byte);
            self.lines[at.line].push_str(segments[0]);
            let last = segments.len() - 1;
            let end = Position::new(at.line + last, segments[last].chars().count());
            let mut rest: Vec<String> = segments[1..].iter().map(|s| s.to_string()).collect();
            rest[last - 1].push_str(&tail);
            self.lines.splice(at.line + 1..at.line + 1, rest);
            end
        };

        for marker in self.markers.iter_mut().flatten() {
            let position = marker.position;
            let moves = match position.cmp(&at) {
                Ordering::Less => false,
                Ordering::Equal => marker.gravity == Gravity::Right,
                Ordering::Greater => true,
            };
            if !moves {
                continue;
            }
            marker.position = if position.line == at.line {
                Position::new(end.line, end.offset + (position.offset - at.offset))
            } else {
                Position::new(position.line + (end.line - at.line), position.offset)
            };
        }

        end
    }

    /// Delete the range `[start, end)`, merging lines when it spans them.
    ///
    /// Markers inside the range collapse to `start`; markers after it
    /// shift left.
    pub fn delete(&mut self, start: Position, end: Position) {
        self.assert_valid(start);
        self.assert_valid(end);
        assert!(start <= end, "inverted range {:?}..{:?}", start, end);

        if start.line == end.line {
            let line = &mut self.lines[start.line];
            let start_byte = byte_of(line, start.offset);
            let end_byte = byte_of(line, end.offset);
            line.replace_range(start_byte..end_byte, "");
        } else {
            let tail_byte = byte_of(&self.lines[end.line], end.offset);
            let tail = self.lines[end.line][tail_byte..].to_string();
            let head_byte = byte_of(&self.lines[start.line], start.offset);
            self.lines[start.line].truncate(head_byte);
            self.lines[start.line].push_str(&tail);
            self.lines.drain(start.line + 1..=end.line);
        }

        for marker in self.markers.iter_mut().flatten() {
            let position = marker.position;
            if position <= start {
                continue;
            }
            marker.position = if position <= end {
                start
            } else if position.line == end.line {
                Position::new(start.line, start.offset + (position.offset - end.offset))
            } else {
                Position::new(position.line - (end.line - start.line), position.offset)
            };
        }
    }

    /// Replace `[start, end)` with `text`; returns the position just past
    /// the inserted text.
    ///
    /// Equivalent to delete followed by insert, including for markers: a
    /// right-gravity marker at `end` ends up after the replacement.
    pub fn replace(&mut self, start: Position, end: Position, text: &str) -> Position {
        self.delete(start, end);
        self.insert(start, text)
    }

    pub fn add_marker(&mut self, position: Position, gravity: Gravity) -> MarkerId {
        self.assert_valid(position);
        self.markers.push(Some(Marker { position, gravity }));
        MarkerId(self.markers.len() - 1)
    }

    /// Current position of a marker. Panics if the marker was removed.
    pub fn marker_position(&self, id: MarkerId) -> Position {
        self.markers[id.0]
            .as_ref()
            .map(|marker| marker.position)
            .expect("marker was removed")
    }

    pub fn remove_marker(&mut self, id: MarkerId) {
        self.markers[id.0] = None;
    }
}

/// Byte index of the character at `char_offset`, clamped to the line end.
fn byte_of(line: &str, char_offset: usize) -> usize {
    line.char_indices()
        .nth(char_offset)
        .map(|(byte, _)| byte)
        .unwrap_or(line.len())
}
