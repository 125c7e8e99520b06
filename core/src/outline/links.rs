use serde::Serialize;

use crate::{
    ast::{NodeRef, Stylesheet, walk},
    token::{Span, Token, TokenKind},
};

/// A reference to another resource. `span` covers just the target text (no quotes and
/// no `url(` wrapper); `target` is unresolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentLink {
    pub span: Span,
    pub target: String,
}

pub fn document_links(sheet: &Stylesheet, source: &str) -> Vec<DocumentLink> {
    let mut out = Vec::new();
    walk(sheet, &mut |node, _| {
        match node {
            NodeRef::Declaration(decl) => {
                if let Some(value) = &decl.value {
                    url_links(&value.tokens, source, &mut out);
                }
            }
            NodeRef::AtRule(at) => {
                url_links(&at.prelude, source, &mut out);
                if at.name.eq_ignore_ascii_case("import")
                    && let Some(tok) = at.prelude.iter().find(|t| !t.is_trivia())
                    && tok.kind == TokenKind::String
                {
                    push_link(&mut out, string_body(tok, source), &tok.value);
                }
            }
            _ => {}
        }
        true
    });
    out.sort_by_key(|l| l.span.start);
    out
}

fn url_links(tokens: &[Token], source: &str, out: &mut Vec<DocumentLink>) {
    for (i, tok) in tokens.iter().enumerate() {
        match tok.kind {
            TokenKind::Url => push_link(out, url_body(tok, source), &tok.value),
            TokenKind::Function if tok.value.eq_ignore_ascii_case("url") => {
                if let Some(arg) = tokens[i + 1..].iter().find(|t| !t.is_trivia())
                    && arg.kind == TokenKind::String
                {
                    push_link(out, string_body(arg, source), &arg.value);
                }
            }
            _ => {}
        }
    }
}

fn push_link(out: &mut Vec<DocumentLink>, span: Span, target: &str) {
    let target = target.trim();
    if target.is_empty() || target.get(..5).is_some_and(|p| p.eq_ignore_ascii_case("data:")) {
        return;
    }
    out.push(DocumentLink {
        span,
        target: target.to_string(),
    });
}

/// Span inside the quotes of a string token (an unterminated string has no closing quote).
fn string_body(tok: &Token, source: &str) -> Span {
    let text = tok.text(source);
    let quote = text.chars().next().unwrap_or('"');
    let closed = text.len() >= 2 && text.ends_with(quote);
    Span::new(tok.start + 1, if closed { tok.end - 1 } else { tok.end })
}

/// Span of the raw target inside `url( ... )`, surrounding whitespace excluded.
fn url_body(tok: &Token, source: &str) -> Span {
    let text = tok.text(source);
    let Some(open) = text.find('(') else {
        return tok.span();
    };
    let inner_end = if text.ends_with(')') { text.len() - 1 } else { text.len() };
    let inner = &text[open + 1..inner_end];
    let lead = inner.len() - inner.trim_start().len();
    let trimmed = inner.trim();
    let start = tok.start + open + 1 + lead;
    Span::new(start, start + trimmed.len())
}
