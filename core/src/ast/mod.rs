mod parser;
mod walk;


pub use parser::*;
pub use walk::*;

use serde::Serialize;

use crate::token::{Span, Token};

/// Uniform access to a node's byte span.
pub trait Spanned {
    fn span(&self) -> Span;
}

/// A stylesheet or the body of a block (`{ ... }` of an at-rule). For blocks the span
/// covers the braces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stylesheet {
    pub span: Span,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Node {
    Ruleset(Ruleset),
    AtRule(AtRule),
    Declaration(Declaration),
    Comment(Comment),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ruleset {
    pub span: Span,
    pub selectors: SelectorList,
    /// Span of the `{ ... }` block; the end falls at end of input when `}` is missing.
    pub block: Span,
    pub children: Vec<Node>,
}

impl Ruleset {
    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.children.iter().filter_map(|c| match c {
            Node::Declaration(d) => Some(d),
            _ => None,
        })
    }

    /// No declarations and no nested rules. Comments alone still count as empty.
    pub fn is_empty(&self) -> bool {
        self.children.iter().all(|c| matches!(c, Node::Comment(_)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectorList {
    pub span: Span,
    pub selectors: Vec<Selector>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selector {
    pub span: Span,
    pub parts: Vec<SelectorPart>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Combinator {
    Descendant,
    Child,
    NextSibling,
    SubsequentSibling,
}

impl Combinator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Combinator::Descendant => " ",
            Combinator::Child => ">",
            Combinator::NextSibling => "+",
            Combinator::SubsequentSibling => "~",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SelectorPart {
    /// A run of simple selectors such as `a.btn:hover` (tokens inside brackets and
    /// parentheses included, trivia at depth 0 excluded).
    Compound { span: Span, tokens: Vec<Token> },
    Combinator { span: Span, kind: Combinator },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Declaration {
    pub span: Span,
    pub property: Token,
    pub value: Option<Value>,
    pub important: bool,
    pub semicolon: bool,
}

impl Declaration {
    pub fn name(&self) -> &str {
        &self.property.value
    }

    pub fn is_custom(&self) -> bool {
        self.property.value.starts_with("--")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Value {
    pub span: Span,
    pub tokens: Vec<Token>,
}

impl Value {
    /// Tokens with whitespace and comments filtered out.
    pub fn significant(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| !t.is_trivia())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AtRule {
    pub span: Span,
    /// Name without the leading `@`.
    pub name: String,
    pub name_span: Span,
    pub prelude: Vec<Token>,
    /// Absent for statement at-rules ending in `;`.
    pub block: Option<Stylesheet>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
    pub span: Span,
}

impl Spanned for Stylesheet {
    fn span(&self) -> Span {
        self.span
    }
}

impl Spanned for Node {
    fn span(&self) -> Span {
        match self {
            Node::Ruleset(n) => n.span,
            Node::AtRule(n) => n.span,
            Node::Declaration(n) => n.span,
            Node::Comment(n) => n.span,
        }
    }
}

impl Spanned for Ruleset {
    fn span(&self) -> Span {
        self.span
    }
}

impl Spanned for SelectorList {
    fn span(&self) -> Span {
        self.span
    }
}

impl Spanned for Selector {
    fn span(&self) -> Span {
        self.span
    }
}

impl Spanned for SelectorPart {
    fn span(&self) -> Span {
        match self {
            SelectorPart::Compound { span, .. } | SelectorPart::Combinator { span, .. } => *span,
        }
    }
}

impl Spanned for Declaration {
    fn span(&self) -> Span {
        self.span
    }
}

impl Spanned for Value {
    fn span(&self) -> Span {
        self.span
    }
}

impl Spanned for AtRule {
    fn span(&self) -> Span {
        self.span
    }
}

impl Spanned for Comment {
    fn span(&self) -> Span {
        self.span
    }
}
