use crate::{
    ast::{AtRule, Combinator, Comment, Declaration, Node, Ruleset, Selector, SelectorList, SelectorPart, Stylesheet, Value},
    token::{ParseError, Span, Token, TokenKind, scan},
};

/// Blocks nested deeper than this are skipped wholesale instead of parsed.
const MAX_NESTING: usize = 128;

/// Parse `source` into a stylesheet. Never fails: syntax errors are collected next to a
/// best-effort tree.
pub fn parse(source: &str) -> (Stylesheet, Vec<ParseError>) {
    let tokens = scan(source);
    let mut parser = Parser::new(source, &tokens);
    let sheet = parser.parse_stylesheet();
    if !parser.errors.is_empty() {
        tracing::debug!(errors = parser.errors.len(), "stylesheet parsed with syntax errors");
    }
    (sheet, parser.errors)
}

pub struct Parser<'a> {
    source: &'a str,
    tokens: &'a [Token],
    pos: usize,
    nesting: usize,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    /// `tokens` must end with an `Eof` token, as produced by [`scan`].
    pub fn new(source: &'a str, tokens: &'a [Token]) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            nesting: 0,
            errors: Vec::new(),
        }
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    fn peek(&self) -> &'a Token {
        let tokens: &'a [Token] = self.tokens;
        &tokens[self.pos.min(tokens.len().saturating_sub(1))]
    }

    fn peek_kind(&self) -> TokenKind {
        self.tokens.get(self.pos).map(|t| t.kind).unwrap_or(TokenKind::Eof)
    }

    fn bump(&mut self) -> &'a Token {
        let tok = self.peek();
        if tok.kind != TokenKind::Eof {
            self.pos += 1;
        }
        tok
    }

    fn skip_whitespace(&mut self) {
        while self.peek_kind() == TokenKind::Whitespace {
            self.pos += 1;
        }
    }

    fn skip_trivia(&mut self) {
        while self.peek().is_trivia() {
            self.pos += 1;
        }
    }

    fn error(&mut self, message: impl Into<String>, span: Span) {
        self.errors.push(ParseError::new(message, span));
    }

    pub fn parse_stylesheet(&mut self) -> Stylesheet {
        let mut children = Vec::new();
        loop {
            self.skip_whitespace();
            let tok = self.peek();
            match tok.kind {
                TokenKind::Eof => break,
                TokenKind::Comment => {
                    self.bump();
                    children.push(Node::Comment(Comment { span: tok.span() }));
                }
                TokenKind::Cdo | TokenKind::Cdc => {
                    self.bump();
                }
                TokenKind::AtKeyword => {
                    let rule = self.parse_at_rule();
                    children.push(Node::AtRule(rule));
                }
                TokenKind::RBrace => {
                    self.error("unexpected '}'", tok.span());
                    self.bump();
                }
                TokenKind::Semicolon => {
                    self.error("unexpected ';'", tok.span());
                    self.bump();
                }
                _ => {
                    if let Some(ruleset) = self.parse_ruleset() {
                        children.push(Node::Ruleset(ruleset));
                    }
                }
            }
        }
        Stylesheet {
            span: Span::new(0, self.source.len()),
            children,
        }
    }

    /// Parse `{ ... }` starting at the current `{`. Returns the children and the span of
    /// the block including braces.
    fn parse_block(&mut self) -> (Vec<Node>, Span) {
        let open = self.bump();
        let start = open.start;

        if self.nesting >= MAX_NESTING {
            self.error("blocks nested too deeply", open.span());
            let end = self.skip_to_block_end();
            return (Vec::new(), Span::new(start, end));
        }

        self.nesting += 1;
        let mut children = Vec::new();
        let end = loop {
            self.skip_whitespace();
            let tok = self.peek();
            match tok.kind {
                TokenKind::Eof => {
                    self.error("expected '}'", tok.span());
                    break tok.end;
                }
                TokenKind::RBrace => {
                    self.bump();
                    break tok.end;
                }
                TokenKind::Comment => {
                    self.bump();
                    children.push(Node::Comment(Comment { span: tok.span() }));
                }
                TokenKind::Semicolon | TokenKind::Cdo | TokenKind::Cdc => {
                    self.bump();
                }
                TokenKind::AtKeyword => {
                    let rule = self.parse_at_rule();
                    children.push(Node::AtRule(rule));
                }
                _ => {
                    if self.looks_like_declaration() {
                        if let Some(decl) = self.parse_declaration() {
                            children.push(Node::Declaration(decl));
                        }
                    } else if let Some(ruleset) = self.parse_ruleset() {
                        children.push(Node::Ruleset(ruleset));
                    }
                }
            }
        };
        self.nesting -= 1;
        (children, Span::new(start, end))
    }

    /// Consume everything up to and including the `}` matching an already consumed `{`.
    fn skip_to_block_end(&mut self) -> usize {
        let mut depth = 1usize;
        loop {
            let tok = self.bump();
            match tok.kind {
                TokenKind::Eof => return tok.end,
                TokenKind::LBrace => depth += 1,
                TokenKind::RBrace => {
                    depth -= 1;
                    if depth == 0 {
                        return tok.end;
                    }
                }
                _ => {}
            }
        }
    }

    /// An identifier followed (after whitespace) by `:` starts a declaration; anything
    /// else inside a block is a nested rule. Looks ahead without consuming.
    fn looks_like_declaration(&self) -> bool {
        if self.peek_kind() != TokenKind::Ident {
            return false;
        }
        let mut i = self.pos + 1;
        while self.tokens.get(i).is_some_and(|t| t.kind == TokenKind::Whitespace) {
            i += 1;
        }
        self.tokens.get(i).is_some_and(|t| t.kind == TokenKind::Colon)
    }

    pub fn parse_declaration(&mut self) -> Option<Declaration> {
        let property = self.peek();
        if property.kind != TokenKind::Ident {
            self.error("expected property name", property.span());
            self.recover_declaration();
            return None;
        }
        self.bump();
        self.skip_trivia();

        let colon = self.peek();
        if colon.kind != TokenKind::Colon {
            self.error("expected ':'", colon.span());
            self.recover_declaration();
            return None;
        }
        self.bump();

        let (value, important, value_end) = self.parse_value();
        let mut end = value_end.max(colon.end);

        let mut semicolon = false;
        if self.peek_kind() == TokenKind::Semicolon {
            end = self.bump().end;
            semicolon = true;
        }

        Some(Declaration {
            span: Span::new(property.start, end),
            property: property.clone(),
            value,
            important,
            semicolon,
        })
    }

    /// Collect value tokens up to a `;` or `}` outside any parentheses. Returns the value,
    /// the `!important` flag, and the end offset of the last significant token consumed.
    fn parse_value(&mut self) -> (Option<Value>, bool, usize) {
        self.skip_whitespace();
        let mut tokens: Vec<Token> = Vec::new();
        let mut depth = 0usize;
        loop {
            let tok = self.peek();
            match tok.kind {
                TokenKind::Eof => break,
                TokenKind::Semicolon | TokenKind::RBrace if depth == 0 => break,
                TokenKind::Function | TokenKind::LParen => depth += 1,
                TokenKind::RParen if depth > 0 => depth -= 1,
                _ => {}
            }
            tokens.push(tok.clone());
            self.bump();
        }

        trim_trailing_whitespace(&mut tokens);
        let last_end = tokens.last().map(|t| t.end).unwrap_or(0);

        let mut important = false;
        if let Some(k) = last_significant(&tokens)
            && tokens[k].kind == TokenKind::Ident
            && tokens[k].value == "important"
            && let Some(j) = last_significant(&tokens[..k])
            && tokens[j].is_delim('!')
        {
            important = true;
            tokens.truncate(j);
            trim_trailing_whitespace(&mut tokens);
        }

        let value = match (tokens.first(), tokens.last()) {
            (Some(first), Some(last)) => Some(Value {
                span: Span::new(first.start, last.end),
                tokens,
            }),
            _ => None,
        };
        (value, important, last_end)
    }

    fn recover_declaration(&mut self) {
        let mut depth = 0usize;
        loop {
            match self.peek_kind() {
                TokenKind::Eof => return,
                TokenKind::Semicolon if depth == 0 => {
                    self.bump();
                    return;
                }
                TokenKind::RBrace if depth == 0 => return,
                TokenKind::Function | TokenKind::LParen => depth += 1,
                TokenKind::RParen => depth = depth.saturating_sub(1),
                _ => {}
            }
            self.bump();
        }
    }

    pub fn parse_ruleset(&mut self) -> Option<Ruleset> {
        let start = self.peek().start;
        let selectors = self.parse_selector_list();

        let tok = self.peek();
        if tok.kind != TokenKind::LBrace {
            self.error("expected '{'", tok.span());
            match tok.kind {
                TokenKind::Semicolon => {
                    self.bump();
                }
                TokenKind::RBrace if self.nesting == 0 => {
                    self.bump();
                }
                _ => {}
            }
            return None;
        }

        let (children, block) = self.parse_block();
        Some(Ruleset {
            span: Span::new(start, block.end),
            selectors,
            block,
            children,
        })
    }

    fn parse_selector_list(&mut self) -> SelectorList {
        let mut groups: Vec<Vec<&'a Token>> = vec![Vec::new()];
        let mut depth = 0usize;
        loop {
            let tok = self.peek();
            match tok.kind {
                TokenKind::Eof => break,
                TokenKind::LBrace | TokenKind::Semicolon | TokenKind::RBrace if depth == 0 => break,
                TokenKind::Comma if depth == 0 => {
                    groups.push(Vec::new());
                    self.bump();
                    continue;
                }
                TokenKind::Function | TokenKind::LParen | TokenKind::LBracket => depth += 1,
                TokenKind::RParen | TokenKind::RBracket => depth = depth.saturating_sub(1),
                _ => {}
            }
            if let Some(group) = groups.last_mut() {
                group.push(tok);
            }
            self.bump();
        }

        let selectors: Vec<Selector> = groups.iter().filter_map(|g| build_selector(g)).collect();
        let span = match (selectors.first(), selectors.last()) {
            (Some(first), Some(last)) => Span::new(first.span.start, last.span.end),
            _ => Span::single(self.peek().start),
        };
        SelectorList { span, selectors }
    }

    pub fn parse_at_rule(&mut self) -> AtRule {
        let at = self.bump();
        let mut prelude: Vec<Token> = Vec::new();
        let mut depth = 0usize;
        let mut block = None;
        let mut end = at.end;
        loop {
            let tok = self.peek();
            match tok.kind {
                TokenKind::Semicolon if depth == 0 => {
                    end = self.bump().end;
                    break;
                }
                TokenKind::LBrace if depth == 0 => {
                    let (children, span) = self.parse_block();
                    end = span.end;
                    block = Some(Stylesheet { span, children });
                    break;
                }
                TokenKind::RBrace if depth == 0 => {
                    self.error("expected ';' or '{'", tok.span());
                    break;
                }
                TokenKind::Eof => {
                    self.error("expected ';' or '{'", tok.span());
                    break;
                }
                TokenKind::Function | TokenKind::LParen | TokenKind::LBracket => depth += 1,
                TokenKind::RParen | TokenKind::RBracket => depth = depth.saturating_sub(1),
                _ => {}
            }
            if !tok.is_trivia() {
                end = tok.end;
            }
            prelude.push(tok.clone());
            self.bump();
        }

        while prelude.first().is_some_and(|t| t.kind == TokenKind::Whitespace) {
            prelude.remove(0);
        }
        trim_trailing_whitespace(&mut prelude);

        AtRule {
            span: Span::new(at.start, end),
            name: at.value.clone(),
            name_span: at.span(),
            prelude,
            block,
        }
    }
}

fn trim_trailing_whitespace(tokens: &mut Vec<Token>) {
    while tokens.last().is_some_and(|t| t.kind == TokenKind::Whitespace) {
        tokens.pop();
    }
}

fn last_significant(tokens: &[Token]) -> Option<usize> {
    tokens.iter().rposition(|t| !t.is_trivia())
}

fn is_combinator(tok: &Token) -> Option<Combinator> {
    if tok.kind != TokenKind::Delim {
        return None;
    }
    match tok.value.as_str() {
        ">" => Some(Combinator::Child),
        "+" => Some(Combinator::NextSibling),
        "~" => Some(Combinator::SubsequentSibling),
        _ => None,
    }
}

/// Split one comma-separated selector into compounds and combinators. Whitespace between
/// two compounds becomes a descendant combinator; trailing combinators are dropped. A
/// leading combinator is kept so nested relative selectors such as `> .b` survive.
fn build_selector(tokens: &[&Token]) -> Option<Selector> {
    let mut parts: Vec<SelectorPart> = Vec::new();
    let mut compound: Vec<Token> = Vec::new();
    let mut gap: Option<Span> = None;
    let mut depth = 0usize;

    fn flush(compound: &mut Vec<Token>, parts: &mut Vec<SelectorPart>) {
        if let (Some(first), Some(last)) = (compound.first(), compound.last()) {
            let span = Span::new(first.start, last.end);
            parts.push(SelectorPart::Compound {
                span,
                tokens: std::mem::take(compound),
            });
        }
    }

    for tok in tokens {
        if depth == 0 {
            if tok.is_trivia() {
                flush(&mut compound, &mut parts);
                if matches!(parts.last(), Some(SelectorPart::Compound { .. })) {
                    gap = Some(gap.map_or(tok.span(), |g| g.to(tok.span())));
                }
                continue;
            }
            if let Some(kind) = is_combinator(tok) {
                flush(&mut compound, &mut parts);
                gap = None;
                parts.push(SelectorPart::Combinator { span: tok.span(), kind });
                continue;
            }
            if let Some(span) = gap.take()
                && compound.is_empty()
                && matches!(parts.last(), Some(SelectorPart::Compound { .. }))
            {
                parts.push(SelectorPart::Combinator {
                    span,
                    kind: Combinator::Descendant,
                });
            }
        }
        match tok.kind {
            TokenKind::Function | TokenKind::LParen | TokenKind::LBracket => depth += 1,
            TokenKind::RParen | TokenKind::RBracket => depth = depth.saturating_sub(1),
            _ => {}
        }
        compound.push((*tok).clone());
    }
    flush(&mut compound, &mut parts);

    while matches!(parts.last(), Some(SelectorPart::Combinator { .. })) {
        parts.pop();
    }

    let span = match (parts.first(), parts.last()) {
        (Some(first), Some(last)) => {
            use crate::ast::Spanned;
            Span::new(first.span().start, last.span().end)
        }
        _ => return None,
    };
    Some(Selector { span, parts })
}
