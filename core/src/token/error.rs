use std::fmt;

use serde::Serialize;

/// Zero-based line/character pair. `character` counts UTF-16 code units, which is
/// what editors send over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }

    pub fn start() -> Self {
        Self { line: 0, character: 0 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.character + 1)
    }
}

/// Half-open byte range `[start, end)` into the original source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn single(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Cursor containment: the end offset counts as inside so a cursor placed right
    /// after a token still hits it.
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset <= self.end
    }

    pub fn covers(&self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    pub fn to(&self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }

    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        let end = self.end.min(source.len());
        let start = self.start.min(end);
        source.get(start..end).unwrap_or("")
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start.line == self.end.line {
            write!(f, "{}:{}-{}", self.start.line + 1, self.start.character + 1, self.end.character + 1)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Replace the text in `span` with `new_text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextEdit {
    pub span: Span,
    pub new_text: String,
}

impl TextEdit {
    pub fn new(span: Span, new_text: impl Into<String>) -> Self {
        Self {
            span,
            new_text: new_text.into(),
        }
    }
}

/// Apply non-overlapping edits to `source`.
pub fn apply_edits(source: &str, edits: &[TextEdit]) -> String {
    let mut sorted: Vec<&TextEdit> = edits.iter().collect();
    sorted.sort_by_key(|e| (e.span.start, e.span.end));
    let mut out = String::with_capacity(source.len());
    let mut at = 0;
    for edit in sorted {
        if edit.span.start < at {
            continue;
        }
        out.push_str(Span::new(at, edit.span.start).text(source));
        out.push_str(&edit.new_text);
        at = edit.span.end;
    }
    out.push_str(Span::new(at, source.len()).text(source));
    out
}

/// Syntax error recorded by the parser. Parsing never stops on one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseError {
    pub message: String,
    pub span: Span,
}

impl ParseError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.message, self.span)
    }
}

impl std::error::Error for ParseError {}

/// Convert a byte offset into a line/character position. Offsets past the end clamp
/// to the end of the source; offsets inside a multi-byte character snap back to its start.
pub fn offset_to_position(text: &str, offset: usize) -> Position {
    let mut offset = offset.min(text.len());
    while offset > 0 && !text.is_char_boundary(offset) {
        offset -= 1;
    }
    let before = &text[..offset];
    let line = before.bytes().filter(|b| *b == b'\n').count() as u32;
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let character = text[line_start..offset].chars().map(|c| c.len_utf16() as u32).sum();
    Position::new(line, character)
}

/// Convert a line/character position back into a byte offset. A character past the end
/// of its line clamps to the line end; a line past the end clamps to the source length.
pub fn position_to_offset(text: &str, position: Position) -> usize {
    let mut line_start = 0usize;
    for _ in 0..position.line {
        match text[line_start..].find('\n') {
            Some(i) => line_start += i + 1,
            None => return text.len(),
        }
    }
    let line_end = text[line_start..].find('\n').map(|i| line_start + i).unwrap_or(text.len());
    let mut seen = 0u32;
    for (i, ch) in text[line_start..line_end].char_indices() {
        if seen >= position.character {
            return line_start + i;
        }
        seen += ch.len_utf16() as u32;
    }
    line_end
}

pub fn span_to_range(text: &str, span: Span) -> Range {
    Range::new(offset_to_position(text, span.start), offset_to_position(text, span.end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_to_position() {
        let text = "line1\nline2\nline3";

        assert_eq!(offset_to_position(text, 0), Position::new(0, 0));
        assert_eq!(offset_to_position(text, 5), Position::new(0, 5)); // at '\n'
        assert_eq!(offset_to_position(text, 6), Position::new(1, 0)); // start of line2
        assert_eq!(offset_to_position(text, 11), Position::new(1, 5));
        assert_eq!(offset_to_position(text, 12), Position::new(2, 0));
        assert_eq!(offset_to_position(text, 999), Position::new(2, 5));
    }

    #[test]
    fn test_position_round_trip_with_wide_chars() {
        let text = "a { content: \"é😀\"; }\nb {}";
        let emoji = text.find('😀').unwrap();
        let pos = offset_to_position(text, emoji);
        assert_eq!(pos, Position::new(0, 15));
        assert_eq!(position_to_offset(text, pos), emoji);
        // The emoji takes two UTF-16 units.
        let after = offset_to_position(text, emoji + '😀'.len_utf8());
        assert_eq!(after.character, 17);
        assert_eq!(position_to_offset(text, Position::new(1, 2)), text.len() - 2);
    }

    #[test]
    fn test_position_to_offset_clamps() {
        let text = "ab\ncd";
        assert_eq!(position_to_offset(text, Position::new(0, 10)), 2);
        assert_eq!(position_to_offset(text, Position::new(7, 0)), text.len());
    }

    #[test]
    fn test_span_display() {
        let text = "a {\n  color: red;\n}";
        let range = span_to_range(text, Span::new(6, 11));
        assert_eq!(range.to_string(), "2:3-8");
        let range = span_to_range(text, Span::new(0, text.len()));
        assert_eq!(range.to_string(), "1:1-3:2");
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::new("expected '{'", Span::new(4, 5));
        assert_eq!(err.to_string(), "expected '{' at 4..5");
    }
}
