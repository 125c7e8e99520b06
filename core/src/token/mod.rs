mod error;
mod lexer;

#[cfg(test)]
mod token_test;

pub use error::*;
pub use lexer::*;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    Ident,      // color
    AtKeyword,  // @media
    Hash,       // #fff
    String,     // "abc"
    BadString,  // "abc<newline>
    Number,     // 1.5
    Percentage, // 50%
    Dimension,  // 10px
    Url,        // url(x.png)
    BadUrl,     // url(x y)
    Function,   // rgb(
    Colon,      // :
    Semicolon,  // ;
    Comma,      // ,
    LBrace,     // {
    RBrace,     // }
    LParen,     // (
    RParen,     // )
    LBracket,   // [
    RBracket,   // ]
    Delim,      // any other single character
    Whitespace,
    Comment, // /* ... */
    Cdo,     // <!--
    Cdc,     // -->
    Eof,
}

/// A lexical unit with its exact byte span and decoded value.
///
/// Decoded values: identifiers, functions and at-keywords carry the name (no `(` / `@`),
/// hashes carry the name without `#`, strings carry the unescaped body, numbers and
/// percentages carry the numeric text, dimensions carry number text plus unit text,
/// comments carry the body without delimiters, everything else carries its source text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
    pub value: String,
}

impl Token {
    pub fn new(kind: TokenKind, start: usize, end: usize, value: impl Into<String>) -> Self {
        Self {
            kind,
            start,
            end,
            value: value.into(),
        }
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }

    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        self.span().text(source)
    }

    pub fn is_trivia(&self) -> bool {
        matches!(self.kind, TokenKind::Whitespace | TokenKind::Comment)
    }

    pub fn is_delim(&self, c: char) -> bool {
        self.kind == TokenKind::Delim && self.value.len() == c.len_utf8() && self.value.starts_with(c)
    }

    pub fn is_ident(&self, name: &str) -> bool {
        self.kind == TokenKind::Ident && self.value.eq_ignore_ascii_case(name)
    }

    pub fn is_function(&self, name: &str) -> bool {
        self.kind == TokenKind::Function && self.value.eq_ignore_ascii_case(name)
    }

    /// Numeric part of a number, percentage or dimension token.
    pub fn numeric_value(&self) -> Option<f64> {
        match self.kind {
            TokenKind::Number | TokenKind::Percentage => self.value.parse().ok(),
            TokenKind::Dimension => split_dimension(&self.value).0.parse().ok(),
            _ => None,
        }
    }

    /// Lowercased unit of a dimension token.
    pub fn unit(&self) -> Option<String> {
        if self.kind == TokenKind::Dimension {
            Some(split_dimension(&self.value).1.to_ascii_lowercase())
        } else {
            None
        }
    }
}

/// Split dimension text such as `-1.5em` into `("-1.5", "em")`.
pub fn split_dimension(text: &str) -> (&str, &str) {
    let bytes = text.as_bytes();
    let mut i = 0;
    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i + 1 < bytes.len() && bytes[i] == b'.' && bytes[i + 1].is_ascii_digit() {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }
    text.split_at(i)
}

/// Index of the token that closes the block opened at `open` (a function, `(`, `[` or `{`),
/// or the last index when the block runs to the end.
pub fn matching_close(tokens: &[Token], open: usize) -> usize {
    let mut depth = 0usize;
    let mut i = open;
    while i < tokens.len() {
        match tokens[i].kind {
            TokenKind::Function | TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace => depth += 1,
            TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return i;
                }
            }
            TokenKind::Eof => return i.saturating_sub(1).max(open),
            _ => {}
        }
        i += 1;
    }
    tokens.len().saturating_sub(1).max(open)
}
