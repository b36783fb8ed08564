//! Text span and range types for source location tracking.
//!
//! These types are used throughout the frontend to track where AST nodes,
//! tokens, and errors originate in the source code.

use serde::ser::SerializeTuple;
use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Range;

/// A position in source text, measured as a byte offset from the start.
pub type TextPos = u32;

/// A span in source text, defined by a start position and a length.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextSpan {
    /// The byte offset where this span starts.
    pub start: TextPos,
    /// The length of this span in bytes.
    pub length: TextPos,
}

impl TextSpan {
    /// Create a new text span.
    #[inline]
    pub fn new(start: TextPos, length: TextPos) -> Self {
        Self { start, length }
    }

    /// Create a span from start and end positions.
    #[inline]
    pub fn from_bounds(start: TextPos, end: TextPos) -> Self {
        debug_assert!(end >= start);
        Self {
            start,
            length: end - start,
        }
    }

    /// The end position of this span (exclusive).
    #[inline]
    pub fn end(&self) -> TextPos {
        self.start + self.length
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Convert to a byte range.
    #[inline]
    pub fn to_range(&self) -> Range<usize> {
        self.start as usize..self.end() as usize
    }
}

impl fmt::Debug for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end())
    }
}

/// A text range with start and end positions.
///
/// Serializes as the ESTree `range` tuple `[start, end]`.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct TextRange {
    /// The byte offset where this range starts (inclusive).
    pub pos: TextPos,
    /// The byte offset where this range ends (exclusive).
    pub end: TextPos,
}

impl TextRange {
    /// Create a new text range.
    #[inline]
    pub fn new(pos: TextPos, end: TextPos) -> Self {
        debug_assert!(pos <= end, "range start {pos} after end {end}");
        Self { pos, end }
    }

    /// Create an empty range at a position.
    #[inline]
    pub fn empty(pos: TextPos) -> Self {
        Self { pos, end: pos }
    }

    /// The length of this range in bytes.
    #[inline]
    pub fn len(&self) -> TextPos {
        self.end - self.pos
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos == self.end
    }

    /// Convert to a TextSpan.
    #[inline]
    pub fn to_span(&self) -> TextSpan {
        TextSpan::from_bounds(self.pos, self.end)
    }

    /// Convert to a byte range.
    #[inline]
    pub fn to_range(&self) -> Range<usize> {
        self.pos as usize..self.end as usize
    }

    /// Whether this range contains a position.
    #[inline]
    pub fn contains(&self, pos: TextPos) -> bool {
        pos >= self.pos && pos < self.end
    }

    /// Whether `other` lies entirely within this range.
    #[inline]
    pub fn encloses(&self, other: TextRange) -> bool {
        self.pos <= other.pos && other.end <= self.end
    }

    /// The smallest range covering both ranges.
    pub fn cover(&self, other: TextRange) -> TextRange {
        TextRange::new(self.pos.min(other.pos), self.end.max(other.end))
    }
}

impl fmt::Debug for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.pos, self.end)
    }
}

impl Serialize for TextRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.pos)?;
        tuple.serialize_element(&self.end)?;
        tuple.end()
    }
}

impl From<TextRange> for TextSpan {
    fn from(range: TextRange) -> Self {
        range.to_span()
    }
}

impl From<TextSpan> for TextRange {
    fn from(span: TextSpan) -> Self {
        TextRange::new(span.start, span.end())
    }
}

/// An ESTree position: 1-based line, 0-based column in UTF-16 code units.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// The ESTree `loc` object of a node or token.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize)]
pub struct SourceLocation {
    pub start: Position,
    pub end: Position,
}

/// A map from byte offsets to line numbers, built from source text.
///
/// Recognises every ECMAScript line terminator: `\n`, `\r`, `\r\n`, U+2028
/// and U+2029. Columns are UTF-16 units; a lookup is two binary searches,
/// whatever the line length.
#[derive(Debug, Clone)]
pub struct LineMap {
    /// Byte offsets of the start of each line.
    line_starts: Vec<TextPos>,
    /// One entry per non-ASCII character: its end offset and the running
    /// total of UTF-8 bytes beyond its UTF-16 length, up to and including it.
    wide_chars: Vec<(TextPos, u32)>,
}

impl LineMap {
    /// Build a line map from source text.
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0u32];
        let mut wide_chars = Vec::new();
        let mut excess = 0u32;
        let mut chars = text.char_indices().peekable();
        while let Some((i, ch)) = chars.next() {
            let end = (i + ch.len_utf8()) as u32;
            match ch {
                '\n' | '\u{2028}' | '\u{2029}' => line_starts.push(end),
                '\r' => {
                    if let Some(&(next, '\n')) = chars.peek() {
                        chars.next();
                        line_starts.push(next as u32 + 1);
                    } else {
                        line_starts.push(end);
                    }
                }
                _ => {}
            }
            if !ch.is_ascii() {
                excess += (ch.len_utf8() - ch.len_utf16()) as u32;
                wide_chars.push((end, excess));
            }
        }
        Self {
            line_starts,
            wide_chars,
        }
    }

    /// Get the line index (0-based) for a byte offset.
    pub fn line_of(&self, pos: TextPos) -> u32 {
        match self.line_starts.binary_search(&pos) {
            Ok(line) => line as u32,
            Err(line) => (line - 1) as u32,
        }
    }

    /// Bytes beyond UTF-16 length of all characters ending at or before `pos`.
    fn excess_before(&self, pos: TextPos) -> u32 {
        let index = self.wide_chars.partition_point(|&(end, _)| end <= pos);
        index.checked_sub(1).map_or(0, |index| self.wide_chars[index].1)
    }

    /// Get the ESTree position (1-based line, UTF-16 column) of a byte offset.
    pub fn position_of(&self, pos: TextPos) -> Position {
        let line = self.line_of(pos);
        let line_start = self.line_starts[line as usize];
        let bytes = pos - line_start;
        let column = bytes - (self.excess_before(pos) - self.excess_before(line_start));
        Position::new(line + 1, column)
    }

    /// Get the `loc` object of a byte range.
    pub fn location_of(&self, range: TextRange) -> SourceLocation {
        SourceLocation {
            start: self.position_of(range.pos),
            end: self.position_of(range.end),
        }
    }

    /// Get the byte offset of the start of a line (0-based index).
    pub fn line_start(&self, line: u32) -> TextPos {
        self.line_starts[line as usize]
    }

    /// Get the total number of lines.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_span_from_bounds() {
        let span = TextSpan::from_bounds(5, 15);
        assert_eq!(span.start, 5);
        assert_eq!(span.length, 10);
        assert_eq!(span.end(), 15);
    }

    #[test]
    fn test_range_encloses() {
        let outer = TextRange::new(0, 10);
        assert!(outer.encloses(TextRange::new(2, 10)));
        assert!(!outer.encloses(TextRange::new(2, 11)));
        assert_eq!(outer.cover(TextRange::new(8, 14)), TextRange::new(0, 14));
    }

    #[test]
    fn test_range_serializes_as_tuple() {
        let json = serde_json::to_string(&TextRange::new(3, 7)).unwrap();
        assert_eq!(json, "[3,7]");
    }

    #[test]
    fn test_line_map() {
        let text = "line1\nline2\nline3";
        let map = LineMap::new(text);
        assert_eq!(map.line_count(), 3);
        assert_eq!(map.line_of(0), 0);
        assert_eq!(map.line_of(5), 0);
        assert_eq!(map.line_of(6), 1);
        assert_eq!(map.line_of(12), 2);

        let position = map.position_of(8);
        assert_eq!(position, Position::new(2, 2));
    }

    #[test]
    fn test_line_map_crlf_and_separators() {
        let text = "a\r\nb\rc\u{2028}d";
        let map = LineMap::new(text);
        assert_eq!(map.line_count(), 4);
        assert_eq!(map.position_of(3), Position::new(2, 0));
        assert_eq!(map.position_of(5), Position::new(3, 0));
        assert_eq!(map.position_of(9), Position::new(4, 0));
    }

    #[test]
    fn test_columns_count_utf16_units() {
        let text = "'😀' + x";
        let map = LineMap::new(text);
        // the emoji is 4 bytes but 2 UTF-16 units
        let x = text.find('x').unwrap() as u32;
        assert_eq!(x, 9);
        assert_eq!(map.position_of(x), Position::new(1, 7));
    }

    #[test]
    fn test_columns_after_wide_chars_on_earlier_lines() {
        let text = "é\n😀ab\nx€y";
        let map = LineMap::new(text);
        assert_eq!(map.position_of(3), Position::new(2, 0));
        // 😀 is 4 bytes, 2 units
        assert_eq!(map.position_of(8), Position::new(2, 3));
        // € is 3 bytes, 1 unit
        let y = text.find('y').unwrap() as u32;
        assert_eq!(map.position_of(y), Position::new(3, 2));
    }

    #[test]
    fn test_long_line_lookups() {
        let text = "ab;".repeat(50_000);
        let map = LineMap::new(&text);
        assert_eq!(map.position_of(149_999), Position::new(1, 149_999));
        let location = map.location_of(TextRange::new(3, 5));
        assert_eq!(location.end, Position::new(1, 5));
    }
}
