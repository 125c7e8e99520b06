use serde::Serialize;

use crate::{
    ast::{NodeRef, Stylesheet, path_at},
    token::{Span, Token, TokenKind, scan},
};

/// One link in a selection chain; `parent` indexes the enclosing range in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectionRange {
    pub span: Span,
    pub parent: Option<usize>,
}

/// Arena of ranges shared by every requested offset. `innermost[i]` is the arena index
/// of the smallest range around the i-th offset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionRanges {
    pub ranges: Vec<SelectionRange>,
    pub innermost: Vec<usize>,
}

impl SelectionRanges {
    /// Spans from the range at `index` outwards.
    pub fn chain(&self, index: usize) -> impl Iterator<Item = Span> + '_ {
        let mut next = Some(index);
        std::iter::from_fn(move || {
            let range = self.ranges.get(next?)?;
            next = range.parent;
            Some(range.span)
        })
    }
}

pub fn selection_ranges(sheet: &Stylesheet, source: &str, offsets: &[usize]) -> SelectionRanges {
    let tokens = scan(source);
    let mut result = SelectionRanges::default();
    for &offset in offsets {
        let offset = offset.min(source.len());
        let spans = enclosing_spans(sheet, &tokens, offset);
        let mut parent = None;
        for span in spans {
            result.ranges.push(SelectionRange { span, parent });
            parent = Some(result.ranges.len() - 1);
        }
        // The stylesheet span always contributes, so `parent` is set.
        result.innermost.push(parent.unwrap_or_default());
    }
    result
}

/// Enclosing spans for `offset`, outermost first, each strictly inside the previous.
fn enclosing_spans(sheet: &Stylesheet, tokens: &[Token], offset: usize) -> Vec<Span> {
    let mut spans: Vec<Span> = Vec::new();
    let mut push = |span: Span| {
        let nested = match spans.last() {
            Some(last) => last.covers(span) && *last != span && !span.is_empty(),
            None => true,
        };
        if nested && span.contains(offset) {
            spans.push(span);
        }
    };

    for node in path_at(sheet, offset) {
        match node {
            NodeRef::Stylesheet(s) => push(s.span),
            NodeRef::Ruleset(rule) => {
                push(rule.span);
                if rule.selectors.span.contains(offset) && offset <= rule.block.start {
                    push(rule.selectors.span);
                    if let Some(sel) = rule.selectors.selectors.iter().find(|s| s.span.contains(offset)) {
                        push(sel.span);
                    }
                } else {
                    push(rule.block);
                    push(inner(rule.block));
                }
            }
            NodeRef::AtRule(at) => {
                push(at.span);
                match &at.block {
                    Some(block) if offset > block.span.start => {
                        push(block.span);
                        push(inner(block.span));
                    }
                    _ => {
                        let mut prelude = at.prelude.iter().filter(|t| !t.is_trivia());
                        if let Some(first) = prelude.next() {
                            let last = prelude.last().unwrap_or(first);
                            push(Span::new(first.start, last.end));
                        }
                    }
                }
            }
            NodeRef::Declaration(decl) => {
                push(decl.span);
                if let Some(value) = &decl.value {
                    push(value.span);
                }
            }
            NodeRef::Comment(comment) => push(comment.span),
        }
    }

    if let Some(tok) = token_at(tokens, offset) {
        push(tok.span());
    }
    spans
}

/// Block span without its braces.
fn inner(block: Span) -> Span {
    Span::new((block.start + 1).min(block.end), block.end.saturating_sub(1).max(block.start))
}

/// The non-whitespace token under `offset`, preferring the one starting there.
fn token_at(tokens: &[Token], offset: usize) -> Option<&Token> {
    tokens
        .iter()
        .filter(|t| !matches!(t.kind, TokenKind::Whitespace | TokenKind::Eof))
        .filter(|t| t.span().contains(offset))
        .last()
}
