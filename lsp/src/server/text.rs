use ropey::Rope;
use tower_lsp::lsp_types::{Position, TextDocumentContentChangeEvent};

/// Rope char index for an editor position. `character` counts UTF-16 units; positions
/// past the end of a line clamp to the line's last character, lines past the end clamp
/// to the end of the rope.
pub(crate) fn position_to_char_idx(text: &Rope, pos: Position) -> usize {
    let line_idx = pos.line as usize;
    if line_idx >= text.len_lines() {
        return text.len_chars();
    }
    let line_start = text.line_to_char(line_idx);
    let line = text.line(line_idx);
    let content_chars = line
        .chars()
        .take_while(|c| *c != '\n' && *c != '\r')
        .count();
    let target = pos.character as usize;

    if let Some(s) = line.as_str() {
        if s.is_ascii() {
            return line_start + target.min(content_chars);
        }
    }

    let mut units = 0usize;
    let mut chars = 0usize;
    for ch in line.chars().take(content_chars) {
        let width = ch.len_utf16();
        if units + width > target {
            break;
        }
        units += width;
        chars += 1;
    }
    line_start + chars
}

/// Apply one content change: ranged changes splice the rope, rangeless ones replace it.
pub(crate) fn apply_change(text: &mut Rope, change: &TextDocumentContentChangeEvent) {
    let Some(range) = &change.range else {
        *text = Rope::from_str(&change.text);
        return;
    };
    let a = position_to_char_idx(text, range.start);
    let b = position_to_char_idx(text, range.end);
    let (start, end) = (a.min(b), a.max(b));
    if start < end {
        text.remove(start..end);
    }
    if !change.text.is_empty() {
        text.insert(start, &change.text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tower_lsp::lsp_types::Range;

    fn change(start: (u32, u32), end: (u32, u32), text: &str) -> TextDocumentContentChangeEvent {
        TextDocumentContentChangeEvent {
            range: Some(Range::new(Position::new(start.0, start.1), Position::new(end.0, end.1))),
            range_length: None,
            text: text.to_string(),
        }
    }

    #[test]
    fn positions_clamp_to_line_content() {
        let rope = Rope::from_str("a {\r\n  color: red;\n}");
        assert_eq!(position_to_char_idx(&rope, Position::new(0, 99)), 3);
        assert_eq!(position_to_char_idx(&rope, Position::new(1, 2)), 7);
        assert_eq!(position_to_char_idx(&rope, Position::new(9, 0)), rope.len_chars());
    }

    #[test]
    fn utf16_columns_map_to_chars() {
        let rope = Rope::from_str("a { content: \"😀x\"; }");
        // '😀' takes two UTF-16 units but one char.
        assert_eq!(position_to_char_idx(&rope, Position::new(0, 16)), 15);
        assert_eq!(position_to_char_idx(&rope, Position::new(0, 15)), 14);
    }

    #[test]
    fn incremental_changes_splice() {
        let mut rope = Rope::from_str("a { colr: red; }\n");
        apply_change(&mut rope, &change((0, 4), (0, 8), "color"));
        assert_eq!(rope.to_string(), "a { color: red; }\n");
        apply_change(&mut rope, &change((1, 0), (1, 0), "b {}\n"));
        assert_eq!(rope.to_string(), "a { color: red; }\nb {}\n");

        let full = TextDocumentContentChangeEvent {
            range: None,
            range_length: None,
            text: "c {}".to_string(),
        };
        apply_change(&mut rope, &full);
        assert_eq!(rope.to_string(), "c {}");
    }
}
