//! Source positions, spans, and span conversion.
//!
//! Template nodes carry byte spans. Rules never do line/column arithmetic
//! themselves; they go through [`SpanConverter`], which [`LineIndex`]
//! implements for a concrete source string.

/// Half-open byte range `[start, end)` in a template source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceSpan {
    pub start: usize,
    pub end: usize,
}

impl SourceSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Line/column position (both 1-based, column counted in characters).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// Line/column range of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceRange {
    pub start: Position,
    pub end: Position,
}

/// Converts spans to line/column ranges and positions back to offsets.
pub trait SpanConverter {
    /// Line/column range covered by `span`.
    fn to_range(&self, span: SourceSpan) -> SourceRange;

    /// Byte offset of `pos`.
    fn to_offset(&self, pos: Position) -> usize;

    /// Text of a 1-based line without its terminator, for report context.
    fn line_text(&self, _line: usize) -> &str {
        ""
    }
}

/// Line start table over a source string.
pub struct LineIndex<'a> {
    source: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(source: &'a str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            source,
            line_starts,
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Position of a byte offset. Offsets past the end clamp to the end.
    pub fn position(&self, offset: usize) -> Position {
        let offset = offset.min(self.source.len());
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let line_start = self.line_start(line);
        let col = self
            .source
            .get(line_start..offset)
            .map_or(0, |prefix| prefix.chars().count());
        Position::new(line, col + 1)
    }

    fn line_start(&self, line: usize) -> usize {
        self.line_starts
            .get(line.saturating_sub(1))
            .copied()
            .unwrap_or(self.source.len())
    }

    fn line_end(&self, line: usize) -> usize {
        self.line_starts
            .get(line)
            .map_or(self.source.len(), |next| next.saturating_sub(1))
    }
}

impl SpanConverter for LineIndex<'_> {
    fn to_range(&self, span: SourceSpan) -> SourceRange {
        SourceRange {
            start: self.position(span.start),
            end: self.position(span.end),
        }
    }

    fn to_offset(&self, pos: Position) -> usize {
        let line_start = self.line_start(pos.line);
        let line = self.line_text(pos.line);
        let within = line
            .char_indices()
            .nth(pos.col.saturating_sub(1))
            .map_or(line.len(), |(i, _)| i);
        line_start + within
    }

    fn line_text(&self, line: usize) -> &str {
        let start = self.line_start(line);
        let end = self.line_end(line).max(start);
        self.source
            .get(start..end)
            .map_or("", |text| text.strip_suffix('\r').unwrap_or(text))
    }
}

/// Position of an issue in a template file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceLocation {
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub col: usize,
}

impl SourceLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }
}

/// Location of an issue plus what the reporter needs to display it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceContext {
    pub location: SourceLocation,
    /// End of the reported range.
    pub end: Position,
    /// The source line containing the start of the range.
    pub source_line: String,
}

impl SourceContext {
    pub fn new(location: SourceLocation, end: Position, source_line: impl Into<String>) -> Self {
        Self {
            location,
            end,
            source_line: source_line.into(),
        }
    }

    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn col(&self) -> usize {
        self.location.col
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_position_first_line() {
        let index = LineIndex::new("<div>Hi</div>");
        assert_eq!(index.position(0), Position::new(1, 1));
        assert_eq!(index.position(5), Position::new(1, 6));
    }

    #[test]
    fn test_position_multiline() {
        let source = "<div>\n  <span>Hi</span>\n</div>";
        let index = LineIndex::new(source);
        assert_eq!(index.line_count(), 3);
        assert_eq!(index.position(8), Position::new(2, 3));
        assert_eq!(index.position(source.len()), Position::new(3, 7));
    }

    #[test]
    fn test_position_counts_characters() {
        let index = LineIndex::new("<p>héllo</p><b>");
        // "é" is two bytes but one column
        assert_eq!(index.position(13), Position::new(1, 13));
    }

    #[test]
    fn test_to_offset_round_trips_position() {
        let source = "<div>\n  <span title=\"é\">Hi</span>\n</div>";
        let index = LineIndex::new(source);
        for offset in [0, 6, 8, 21, 23, 30, source.len()] {
            let pos = index.position(offset);
            assert_eq!(index.to_offset(pos), offset, "offset {}", offset);
        }
    }

    #[test]
    fn test_to_range() {
        let index = LineIndex::new("<a>\n<b>");
        let range = index.to_range(SourceSpan::new(4, 7));
        assert_eq!(range.start, Position::new(2, 1));
        assert_eq!(range.end, Position::new(2, 4));
    }

    #[test]
    fn test_line_text_strips_terminators() {
        let index = LineIndex::new("<a>\r\n<b>\n");
        assert_eq!(index.line_text(1), "<a>");
        assert_eq!(index.line_text(2), "<b>");
        assert_eq!(index.line_text(3), "");
        assert_eq!(index.line_text(42), "");
    }
}
