//! Source files and locations inside them.
//!
//! Everything is addressed by byte offset. Lines and columns are only
//! computed when a location has to be shown to a person.

use std::ops::Range;

/// A resolved location in a source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Line (1-indexed)
    pub line: u32,
    /// Column (1-indexed, counted in characters)
    pub column: u32,
    /// Byte offset from the beginning of the file
    pub offset: usize,
}

impl Position {
    pub fn new(line: u32, column: u32, offset: usize) -> Self {
        Self { line, column, offset }
    }
}

/// A half-open region `start..end` of a source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    /// Length in bytes
    pub fn len(&self) -> usize {
        self.end.offset.saturating_sub(self.start.offset)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Byte range covered by the span, usable for slicing the source
    pub fn range(&self) -> Range<usize> {
        self.start.offset..self.end.offset
    }
}

/// A named source text with a table of line starts
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub name: String,
    pub source: String,
    line_starts: Vec<usize>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        let source = source.into();
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();

        Self {
            name: name.into(),
            source,
            line_starts,
        }
    }

    /// Text of a 1-indexed line, without its newline
    pub fn line(&self, line: u32) -> Option<&str> {
        let idx = line.checked_sub(1)? as usize;
        let start = *self.line_starts.get(idx)?;
        let end = self
            .line_starts
            .get(idx + 1)
            .map_or(self.source.len(), |&next| next - 1);

        self.source.get(start..end)
    }

    /// Resolves a byte offset into a line/column position.
    ///
    /// Offsets past the end are clamped to the end of the file. An offset that
    /// falls inside a multi-byte character resolves to that character's column.
    pub fn position_of(&self, offset: usize) -> Position {
        let offset = offset.min(self.source.len());
        // `line_starts[0] == 0`, so the partition point is at least 1
        let idx = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let line_start = self.line_starts[idx];
        let column = self.source[line_start..]
            .char_indices()
            .take_while(|&(i, _)| line_start + i < offset)
            .count();

        Position::new(idx as u32 + 1, column as u32 + 1, offset)
    }

    /// Builds a span covering the byte range `start..end`
    pub fn span(&self, start: usize, end: usize) -> Span {
        Span {
            start: self.position_of(start),
            end: self.position_of(end),
        }
    }
}
