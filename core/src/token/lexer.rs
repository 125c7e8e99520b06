use crate::token::{Token, TokenKind};

const ASCII_WHITESPACE: u8 = 1 << 0;
const ASCII_DIGIT: u8 = 1 << 1;
const ASCII_HEX: u8 = 1 << 2;
const NAME_START: u8 = 1 << 3;
const NAME_CONT: u8 = 1 << 4;

const fn build_byte_class() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        let c = i as u8;
        if matches!(c, b' ' | b'\t' | b'\n' | b'\r' | 0x0C) {
            table[i] |= ASCII_WHITESPACE;
        }
        if c >= b'0' && c <= b'9' {
            table[i] |= ASCII_DIGIT | ASCII_HEX | NAME_CONT;
        }
        if (c >= b'a' && c <= b'f') || (c >= b'A' && c <= b'F') {
            table[i] |= ASCII_HEX;
        }
        if (c >= b'a' && c <= b'z') || (c >= b'A' && c <= b'Z') || c == b'_' || c >= 0x80 {
            table[i] |= NAME_START | NAME_CONT;
        }
        if c == b'-' {
            table[i] |= NAME_CONT;
        }
        i += 1;
    }
    table
}

const BYTE_CLASS: [u8; 256] = build_byte_class();

#[inline]
pub(crate) fn is_whitespace_byte(b: u8) -> bool {
    BYTE_CLASS[b as usize] & ASCII_WHITESPACE != 0
}

#[inline]
pub(crate) fn is_name_start_byte(b: u8) -> bool {
    BYTE_CLASS[b as usize] & NAME_START != 0
}

#[inline]
pub(crate) fn is_name_byte(b: u8) -> bool {
    BYTE_CLASS[b as usize] & NAME_CONT != 0
}

#[inline]
fn is_digit(b: u8) -> bool {
    BYTE_CLASS[b as usize] & ASCII_DIGIT != 0
}

#[inline]
fn is_hex(b: u8) -> bool {
    BYTE_CLASS[b as usize] & ASCII_HEX != 0
}

/// Tokenize `source` into a flat token sequence terminated by exactly one `Eof` token.
pub fn scan(source: &str) -> Vec<Token> {
    Scanner::new(source).scan_all()
}

/// Byte-oriented CSS scanner. Non-ASCII bytes are opaque name characters, so token
/// boundaries always fall on UTF-8 character boundaries.
pub struct Scanner<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            bytes: src.as_bytes(),
            pos: 0,
        }
    }

    pub fn scan_all(mut self) -> Vec<Token> {
        let mut tokens = Vec::with_capacity(self.src.len() / 3 + 1);
        loop {
            let token = self.next_token();
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                break;
            }
        }
        tokens
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    fn starts_with(&self, s: &str) -> bool {
        self.bytes[self.pos..].starts_with(s.as_bytes())
    }

    fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.src[start..end]
    }

    pub fn next_token(&mut self) -> Token {
        let start = self.pos;
        let Some(c) = self.peek_at(0) else {
            return Token::new(TokenKind::Eof, start, start, "");
        };

        if is_whitespace_byte(c) {
            while self.peek_at(0).is_some_and(is_whitespace_byte) {
                self.pos += 1;
            }
            return Token::new(TokenKind::Whitespace, start, self.pos, self.slice(start, self.pos));
        }

        if self.starts_with("/*") {
            return self.scan_comment(start);
        }

        if c == b'"' || c == b'\'' {
            return self.scan_string(start, c);
        }

        if self.at_number_start() {
            return self.scan_numeric(start);
        }

        if c == b'#' && self.is_name_at(1) {
            self.pos += 1;
            let name = self.consume_name();
            return Token::new(TokenKind::Hash, start, self.pos, name);
        }

        if c == b'@' && self.is_ident_start_at(1) {
            self.pos += 1;
            let name = self.consume_name();
            return Token::new(TokenKind::AtKeyword, start, self.pos, name);
        }

        if self.starts_with("<!--") {
            self.pos += 4;
            return Token::new(TokenKind::Cdo, start, self.pos, "<!--");
        }

        if self.starts_with("-->") {
            self.pos += 3;
            return Token::new(TokenKind::Cdc, start, self.pos, "-->");
        }

        if self.is_ident_start_at(0) {
            return self.scan_ident_like(start);
        }

        self.pos += 1;
        let kind = match c {
            b':' => TokenKind::Colon,
            b';' => TokenKind::Semicolon,
            b',' => TokenKind::Comma,
            b'{' => TokenKind::LBrace,
            b'}' => TokenKind::RBrace,
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'[' => TokenKind::LBracket,
            b']' => TokenKind::RBracket,
            _ => TokenKind::Delim,
        };
        Token::new(kind, start, self.pos, self.slice(start, self.pos))
    }

    fn scan_comment(&mut self, start: usize) -> Token {
        self.pos += 2;
        let body_start = self.pos;
        while self.pos < self.bytes.len() {
            if self.starts_with("*/") {
                let body = self.slice(body_start, self.pos);
                self.pos += 2;
                return Token::new(TokenKind::Comment, start, self.pos, body);
            }
            self.pos += 1;
        }
        // Unterminated: the comment swallows the rest of the input.
        Token::new(TokenKind::Comment, start, self.pos, self.slice(body_start, self.pos))
    }

    fn scan_string(&mut self, start: usize, quote: u8) -> Token {
        self.pos += 1;
        let mut value = String::new();
        while let Some(c) = self.peek_at(0) {
            match c {
                _ if c == quote => {
                    self.pos += 1;
                    return Token::new(TokenKind::String, start, self.pos, value);
                }
                b'\n' | b'\r' | 0x0C => {
                    // The break itself is not part of the bad string.
                    return Token::new(TokenKind::BadString, start, self.pos, value);
                }
                b'\\' => match self.peek_at(1) {
                    None => self.pos += 1,
                    Some(b'\r') if self.peek_at(2) == Some(b'\n') => self.pos += 3,
                    Some(b'\n' | b'\r' | 0x0C) => self.pos += 2,
                    Some(_) => {
                        self.pos += 1;
                        value.push(self.consume_escape());
                    }
                },
                _ => {
                    let ch_len = utf8_len(c);
                    value.push_str(self.slice(self.pos, self.pos + ch_len));
                    self.pos += ch_len;
                }
            }
        }
        Token::new(TokenKind::String, start, self.pos, value)
    }

    fn at_number_start(&self) -> bool {
        let digit_at = |i: usize| self.peek_at(i).is_some_and(is_digit);
        match self.peek_at(0) {
            Some(b'+' | b'-') => digit_at(1) || (self.peek_at(1) == Some(b'.') && digit_at(2)),
            Some(b'.') => digit_at(1),
            Some(c) => is_digit(c),
            None => false,
        }
    }

    fn scan_numeric(&mut self, start: usize) -> Token {
        if matches!(self.peek_at(0), Some(b'+' | b'-')) {
            self.pos += 1;
        }
        while self.peek_at(0).is_some_and(is_digit) {
            self.pos += 1;
        }
        if self.peek_at(0) == Some(b'.') && self.peek_at(1).is_some_and(is_digit) {
            self.pos += 1;
            while self.peek_at(0).is_some_and(is_digit) {
                self.pos += 1;
            }
        }
        let number_end = self.pos;

        if self.peek_at(0) == Some(b'%') {
            self.pos += 1;
            return Token::new(TokenKind::Percentage, start, self.pos, self.slice(start, number_end));
        }
        if self.is_ident_start_at(0) {
            let unit = self.consume_name();
            let mut value = self.slice(start, number_end).to_string();
            value.push_str(&unit);
            return Token::new(TokenKind::Dimension, start, self.pos, value);
        }
        Token::new(TokenKind::Number, start, self.pos, self.slice(start, number_end))
    }

    fn scan_ident_like(&mut self, start: usize) -> Token {
        let name = self.consume_name();
        if self.peek_at(0) != Some(b'(') {
            return Token::new(TokenKind::Ident, start, self.pos, name);
        }
        self.pos += 1;
        if name.eq_ignore_ascii_case("url") {
            let after_paren = self.pos;
            while self.peek_at(0).is_some_and(is_whitespace_byte) {
                self.pos += 1;
            }
            if matches!(self.peek_at(0), Some(b'"' | b'\'')) {
                // Quoted argument: behave like an ordinary function call.
                self.pos = after_paren;
                return Token::new(TokenKind::Function, start, self.pos, name);
            }
            return self.scan_url(start);
        }
        Token::new(TokenKind::Function, start, self.pos, name)
    }

    /// Raw URL body after `url(` and any leading whitespace.
    fn scan_url(&mut self, start: usize) -> Token {
        let mut value = String::new();
        while let Some(c) = self.peek_at(0) {
            match c {
                b')' => {
                    self.pos += 1;
                    return Token::new(TokenKind::Url, start, self.pos, value);
                }
                b'\\' if self.peek_at(1).is_some_and(|n| n != b'\n') => {
                    self.pos += 1;
                    value.push(self.consume_escape());
                }
                _ if is_whitespace_byte(c) => {
                    while self.peek_at(0).is_some_and(is_whitespace_byte) {
                        self.pos += 1;
                    }
                    match self.peek_at(0) {
                        Some(b')') => {
                            self.pos += 1;
                            return Token::new(TokenKind::Url, start, self.pos, value);
                        }
                        None => return Token::new(TokenKind::Url, start, self.pos, value),
                        Some(_) => return self.scan_bad_url(start),
                    }
                }
                b'"' | b'\'' | b'(' | b'\\' => return self.scan_bad_url(start),
                _ => {
                    let ch_len = utf8_len(c);
                    value.push_str(self.slice(self.pos, self.pos + ch_len));
                    self.pos += ch_len;
                }
            }
        }
        Token::new(TokenKind::Url, start, self.pos, value)
    }

    /// Synchronize to the next unescaped `)` (inclusive) after a malformed URL.
    fn scan_bad_url(&mut self, start: usize) -> Token {
        while let Some(c) = self.peek_at(0) {
            match c {
                b')' => {
                    self.pos += 1;
                    break;
                }
                b'\\' if self.peek_at(1).is_some() => {
                    self.pos += 1;
                    self.pos += utf8_len(self.bytes[self.pos]);
                }
                _ => self.pos += 1,
            }
        }
        Token::new(TokenKind::BadUrl, start, self.pos, self.slice(start, self.pos))
    }

    fn is_valid_escape_at(&self, offset: usize) -> bool {
        self.peek_at(offset) == Some(b'\\') && self.peek_at(offset + 1).is_some_and(|n| n != b'\n' && n != b'\r')
    }

    fn is_name_at(&self, offset: usize) -> bool {
        self.peek_at(offset).is_some_and(is_name_byte) || self.is_valid_escape_at(offset)
    }

    fn is_ident_start_at(&self, offset: usize) -> bool {
        match self.peek_at(offset) {
            Some(b'-') => {
                matches!(self.peek_at(offset + 1), Some(b'-'))
                    || self.peek_at(offset + 1).is_some_and(is_name_start_byte)
                    || self.is_valid_escape_at(offset + 1)
            }
            Some(c) if is_name_start_byte(c) => true,
            Some(b'\\') => self.is_valid_escape_at(offset),
            _ => false,
        }
    }

    fn consume_name(&mut self) -> String {
        let mut name = String::new();
        let mut run_start = self.pos;
        loop {
            match self.peek_at(0) {
                Some(c) if is_name_byte(c) => self.pos += 1,
                Some(b'\\') if self.is_valid_escape_at(0) => {
                    name.push_str(self.slice(run_start, self.pos));
                    self.pos += 1;
                    name.push(self.consume_escape());
                    run_start = self.pos;
                }
                _ => break,
            }
        }
        name.push_str(self.slice(run_start, self.pos));
        name
    }

    /// Decode the escape whose backslash has already been consumed.
    fn consume_escape(&mut self) -> char {
        let Some(first) = self.peek_at(0) else {
            return '\u{FFFD}';
        };
        if is_hex(first) {
            let hex_start = self.pos;
            while self.pos - hex_start < 6 && self.peek_at(0).is_some_and(is_hex) {
                self.pos += 1;
            }
            let code = u32::from_str_radix(self.slice(hex_start, self.pos), 16).unwrap_or(0xFFFD);
            if self.peek_at(0).is_some_and(is_whitespace_byte) {
                self.pos += 1;
            }
            return match char::from_u32(code) {
                Some(c) if code != 0 => c,
                _ => '\u{FFFD}',
            };
        }
        let ch_len = utf8_len(first);
        let ch = self.slice(self.pos, self.pos + ch_len).chars().next().unwrap_or('\u{FFFD}');
        self.pos += ch_len;
        ch
    }
}

#[inline]
fn utf8_len(first: u8) -> usize {
    match first {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xFF => 4,
        _ => 1,
    }
}
