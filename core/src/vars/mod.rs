//! Custom properties: resolution capability, cursor lookup, cross-references and rename.

#[cfg(test)]
mod vars_test;

use std::{collections::HashMap, hash::BuildHasher};

use serde::Serialize;

use crate::{
    ast::{Stylesheet, declarations},
    token::{Span, TextEdit, Token, TokenKind, is_name_byte, matching_close},
    util::fast_map::{FastHashMap, fast_hash_map_new},
};

/// Maps a custom-property name (with `--`) to its raw value text.
///
/// Implementations may be backed by shared mutable state; callers must not assume two
/// calls return the same answer.
pub trait VariableResolver {
    fn resolve(&self, name: &str) -> Option<String>;
}

impl<S: BuildHasher> VariableResolver for HashMap<String, String, S> {
    fn resolve(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Custom properties declared in a single stylesheet. A later declaration of the same
/// name replaces an earlier one.
#[derive(Debug, Clone, Default)]
pub struct LocalVariables {
    values: FastHashMap<String, String>,
}

impl LocalVariables {
    pub fn from_sheet(sheet: &Stylesheet, source: &str) -> Self {
        let mut values = fast_hash_map_new();
        for (decl, _) in declarations(sheet) {
            if !decl.is_custom() {
                continue;
            }
            let text = decl.value.as_ref().map(|v| v.span.text(source)).unwrap_or("");
            values.insert(decl.name().to_string(), text.to_string());
        }
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl VariableResolver for LocalVariables {
    fn resolve(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}

/// Consults `first`, then `fallback`.
pub struct ChainedResolver<'a> {
    pub first: &'a dyn VariableResolver,
    pub fallback: Option<&'a dyn VariableResolver>,
}

impl VariableResolver for ChainedResolver<'_> {
    fn resolve(&self, name: &str) -> Option<String> {
        self.first.resolve(name).or_else(|| self.fallback.and_then(|r| r.resolve(name)))
    }
}

/// Whether an occurrence declares the property or reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Access {
    Write,
    Read,
}

/// One occurrence of a custom property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    pub name: String,
    /// Declaration: the property token. Reference: `var(` through its `)`.
    pub span: Span,
    /// Just the `--name` text.
    pub name_span: Span,
    pub access: Access,
}

/// `var(--name ...)` references in a token run, nested fallbacks included.
pub fn var_references(tokens: &[Token]) -> Vec<Occurrence> {
    let mut out = Vec::new();
    for (i, tok) in tokens.iter().enumerate() {
        if !tok.is_function("var") {
            continue;
        }
        let Some(name) = tokens[i + 1..].iter().find(|t| !t.is_trivia()) else {
            continue;
        };
        if name.kind != TokenKind::Ident || !name.value.starts_with("--") {
            continue;
        }
        let close = matching_close(tokens, i);
        out.push(Occurrence {
            name: name.value.clone(),
            span: Span::new(tok.start, tokens[close].end.max(name.end)),
            name_span: name.span(),
            access: Access::Read,
        });
    }
    out
}

/// Every custom-property occurrence in the stylesheet, in document order.
pub fn all_occurrences(sheet: &Stylesheet) -> Vec<Occurrence> {
    let mut out = Vec::new();
    for (decl, _) in declarations(sheet) {
        if decl.is_custom() {
            out.push(Occurrence {
                name: decl.name().to_string(),
                span: decl.property.span(),
                name_span: decl.property.span(),
                access: Access::Write,
            });
        }
        if let Some(value) = &decl.value {
            out.extend(var_references(&value.tokens));
        }
    }
    out
}

/// The custom property under `offset`: a declaration name, or anywhere on a `var()`
/// reference (the `var` keyword, inside the parentheses, or on the name itself).
/// The innermost reference wins for nested fallbacks.
pub fn symbol_at(sheet: &Stylesheet, offset: usize) -> Option<Occurrence> {
    all_occurrences(sheet)
        .into_iter()
        .filter(|o| o.span.contains(offset))
        .min_by_key(|o| (!o.name_span.contains(offset), o.span.len()))
}

/// Occurrences of `name`, declarations and references together.
pub fn occurrences_of(sheet: &Stylesheet, name: &str) -> Vec<Occurrence> {
    all_occurrences(sheet).into_iter().filter(|o| o.name == name).collect()
}

/// Property spans of every declaration of the property under `offset`.
pub fn find_definition(sheet: &Stylesheet, offset: usize) -> Vec<Span> {
    let Some(symbol) = symbol_at(sheet, offset) else {
        return Vec::new();
    };
    occurrences_of(sheet, &symbol.name)
        .into_iter()
        .filter(|o| o.access == Access::Write)
        .map(|o| o.span)
        .collect()
}

/// Declarations plus every `var()` usage of the property under `offset`.
pub fn find_references(sheet: &Stylesheet, offset: usize) -> Vec<Span> {
    find_highlights(sheet, offset).into_iter().map(|(span, _)| span).collect()
}

pub fn find_highlights(sheet: &Stylesheet, offset: usize) -> Vec<(Span, Access)> {
    let Some(symbol) = symbol_at(sheet, offset) else {
        return Vec::new();
    };
    occurrences_of(sheet, &symbol.name)
        .into_iter()
        .map(|o| (o.span, o.access))
        .collect()
}

/// The name span and current name if the cursor is on something renameable.
pub fn prepare_rename(sheet: &Stylesheet, offset: usize) -> Option<(Span, String)> {
    symbol_at(sheet, offset).map(|o| (o.name_span, o.name))
}

/// Normalize a requested new name: adds `--` when missing and rejects anything that
/// is not a valid custom-property name.
pub fn normalize_new_name(new_name: &str) -> Option<String> {
    let trimmed = new_name.trim();
    let bare = trimmed.strip_prefix("--").unwrap_or(trimmed);
    if bare.is_empty() || !bare.bytes().all(is_name_byte) {
        return None;
    }
    Some(format!("--{bare}"))
}

/// Edits replacing every occurrence of the property under `offset` with `new_name`.
pub fn rename(sheet: &Stylesheet, offset: usize, new_name: &str) -> Option<Vec<TextEdit>> {
    let symbol = symbol_at(sheet, offset)?;
    let new_name = normalize_new_name(new_name)?;
    Some(
        occurrences_of(sheet, &symbol.name)
            .into_iter()
            .map(|o| TextEdit::new(o.name_span, new_name.clone()))
            .collect(),
    )
}
