use serde::Serialize;

use crate::{
    ast::{Node, Stylesheet},
    format::{join_tokens, selector_list_text},
    token::Span,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SymbolKind {
    Ruleset,
    AtRule,
    Variable,
}

/// Outline entry. `selection` is the part an editor highlights (selectors, the
/// at-keyword, the property name).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentSymbol {
    pub name: String,
    pub kind: SymbolKind,
    pub span: Span,
    pub selection: Span,
    pub children: Vec<DocumentSymbol>,
}

pub fn document_symbols(sheet: &Stylesheet, source: &str) -> Vec<DocumentSymbol> {
    symbols(&sheet.children, source)
}

fn symbols(nodes: &[Node], source: &str) -> Vec<DocumentSymbol> {
    let mut out = Vec::new();
    for node in nodes {
        match node {
            Node::Ruleset(rule) => out.push(DocumentSymbol {
                name: selector_list_text(&rule.selectors, source),
                kind: SymbolKind::Ruleset,
                span: rule.span,
                selection: rule.selectors.span,
                children: symbols(&rule.children, source),
            }),
            Node::AtRule(at) => {
                let prelude = join_tokens(&at.prelude, source);
                let name = if prelude.is_empty() {
                    format!("@{}", at.name)
                } else {
                    format!("@{} {}", at.name, prelude)
                };
                out.push(DocumentSymbol {
                    name,
                    kind: SymbolKind::AtRule,
                    span: at.span,
                    selection: at.name_span,
                    children: at.block.as_ref().map(|b| symbols(&b.children, source)).unwrap_or_default(),
                });
            }
            Node::Declaration(decl) if decl.is_custom() => out.push(DocumentSymbol {
                name: decl.name().to_string(),
                kind: SymbolKind::Variable,
                span: decl.span,
                selection: decl.property.span(),
                children: Vec::new(),
            }),
            Node::Declaration(_) | Node::Comment(_) => {}
        }
    }
    out
}
