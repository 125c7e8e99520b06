use std::{fmt, ops::Add};

use serde::Serialize;

use crate::{
    ast::{Selector, SelectorPart},
    token::{Token, TokenKind, matching_close},
};

/// Selector specificity as `(ids, classes, types)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Add for Specificity {
    type Output = Specificity;

    fn add(self, rhs: Self) -> Self {
        Specificity(self.0 + rhs.0, self.1 + rhs.1, self.2 + rhs.2)
    }
}

impl fmt::Display for Specificity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0, self.1, self.2)
    }
}

// Pseudo-elements that may still be written with a single colon.
const LEGACY_PSEUDO_ELEMENTS: [&str; 4] = ["before", "after", "first-line", "first-letter"];

pub fn selector_specificity(selector: &Selector) -> Specificity {
    selector
        .parts
        .iter()
        .filter_map(|part| match part {
            SelectorPart::Compound { tokens, .. } => Some(tokens_specificity(tokens)),
            SelectorPart::Combinator { .. } => None,
        })
        .fold(Specificity::default(), Add::add)
}

/// Specificity of a token run. Combinators and whitespace contribute nothing, so this
/// works for whole complex selectors as well as single compounds.
pub fn tokens_specificity(tokens: &[Token]) -> Specificity {
    let mut spec = Specificity::default();
    let mut i = 0;
    while i < tokens.len() {
        let tok = &tokens[i];
        match tok.kind {
            TokenKind::Hash => spec.0 += 1,
            TokenKind::Ident => spec.2 += 1,
            TokenKind::Delim if tok.value == "." => {
                spec.1 += 1;
                if tokens.get(i + 1).is_some_and(|t| t.kind == TokenKind::Ident) {
                    i += 1;
                }
            }
            TokenKind::LBracket => {
                spec.1 += 1;
                i = matching_close(tokens, i);
            }
            TokenKind::Colon => {
                let (delta, next) = pseudo_specificity(tokens, i);
                spec = spec + delta;
                i = next;
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    spec
}

/// Specificity of the pseudo selector starting at the colon `at`, and the index after it.
fn pseudo_specificity(tokens: &[Token], at: usize) -> (Specificity, usize) {
    let mut i = at + 1;
    let element = tokens.get(i).is_some_and(|t| t.kind == TokenKind::Colon);
    if element {
        i += 1;
    }
    let Some(tok) = tokens.get(i) else {
        return (Specificity::default(), i);
    };
    match tok.kind {
        TokenKind::Ident => {
            let legacy = LEGACY_PSEUDO_ELEMENTS.iter().any(|n| tok.value.eq_ignore_ascii_case(n));
            let spec = if element || legacy {
                Specificity(0, 0, 1)
            } else {
                Specificity(0, 1, 0)
            };
            (spec, i + 1)
        }
        TokenKind::Function => {
            let close = matching_close(tokens, i);
            let name = tok.value.to_ascii_lowercase();
            let spec = if element {
                Specificity(0, 0, 1)
            } else {
                match name.as_str() {
                    "where" => Specificity::default(),
                    "not" | "is" | "has" | "matches" | "-webkit-any" | "-moz-any" => {
                        let end = close.min(tokens.len()).max(i + 1);
                        most_specific_argument(&tokens[i + 1..end])
                    }
                    _ => Specificity(0, 1, 0),
                }
            };
            (spec, close + 1)
        }
        _ => (Specificity::default(), i),
    }
}

/// The largest specificity among the comma-separated selectors in `args`.
fn most_specific_argument(args: &[Token]) -> Specificity {
    let mut best = Specificity::default();
    let mut start = 0;
    let mut depth = 0usize;
    for (i, tok) in args.iter().enumerate() {
        match tok.kind {
            TokenKind::Function | TokenKind::LParen | TokenKind::LBracket => depth += 1,
            TokenKind::RParen | TokenKind::RBracket => depth = depth.saturating_sub(1),
            TokenKind::Comma if depth == 0 => {
                best = best.max(tokens_specificity(&args[start..i]));
                start = i + 1;
            }
            _ => {}
        }
    }
    best.max(tokens_specificity(&args[start..]))
}
