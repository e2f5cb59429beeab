//! Byte offset ⇄ line/column conversion.
//!
//! Editor collaborators hand the core a plain string; everything inside the
//! core works in byte offsets. [`LineIndex`] is the bridge back to the
//! 0-indexed line/column positions that hover, rename, and reference
//! results are reported in.

use text_size::{TextRange, TextSize};

use super::{Position, Span};

/// Maps byte offsets to line/column positions and back.
///
/// Built once per document text; line starts are byte offsets of the first
/// character of each line. Handles both `\n` and `\r\n` line endings (the
/// `\r` counts as a character on its line).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Byte offset of the start of each line; always starts with 0.
    line_starts: Vec<TextSize>,
    len: TextSize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        for (i, b) in text.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(TextSize::new(i as u32 + 1));
            }
        }
        Self {
            line_starts,
            len: TextSize::of(text),
        }
    }

    /// Number of lines in the indexed text (at least 1, even for "").
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a byte offset to a 0-indexed line/column position.
    ///
    /// Offsets past the end of the text clamp to the end of the last line.
    pub fn position(&self, offset: TextSize) -> Position {
        let offset = offset.min(self.len);
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let column = u32::from(offset) - u32::from(self.line_starts[line]);
        Position::new(line, column as usize)
    }

    /// Convert a 0-indexed line/column position back to a byte offset.
    ///
    /// Returns `None` for lines past the end of the text. Columns are not
    /// bounds-checked against the line length; callers resolving positions
    /// produced by [`Self::position`] always stay in range.
    pub fn offset(&self, position: Position) -> Option<TextSize> {
        let start = *self.line_starts.get(position.line)?;
        Some(start + TextSize::new(position.column as u32))
    }

    /// Convert a byte range to a line/column span.
    pub fn span(&self, range: TextRange) -> Span {
        Span::new(self.position(range.start()), self.position(range.end()))
    }
}
