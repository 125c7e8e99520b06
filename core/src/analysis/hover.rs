use serde::Serialize;

use crate::{
    analysis::specificity::selector_specificity,
    ast::{NodeRef, Stylesheet, path_at},
    data,
    token::Span,
    vars::{LocalVariables, VariableResolver, symbol_at},
};

/// Markdown hover text and the span it describes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoverResult {
    pub contents: String,
    pub span: Span,
}

pub fn hover(
    sheet: &Stylesheet,
    source: &str,
    offset: usize,
    resolver: Option<&dyn VariableResolver>,
) -> Option<HoverResult> {
    if let Some(symbol) = symbol_at(sheet, offset) {
        let value = LocalVariables::from_sheet(sheet, source)
            .resolve(&symbol.name)
            .or_else(|| resolver.and_then(|r| r.resolve(&symbol.name)));
        let contents = match value {
            Some(value) => format!("```css\n{}: {}\n```", symbol.name, value.trim()),
            None => format!("```css\n{}\n```\nNo value found", symbol.name),
        };
        return Some(HoverResult {
            contents,
            span: symbol.name_span,
        });
    }

    let path = path_at(sheet, offset);
    for node in path.iter().rev() {
        match node {
            NodeRef::Declaration(decl) => {
                if !decl.property.span().contains(offset) {
                    return None;
                }
                let property = data::property(decl.name())
                    .or_else(|| data::property(data::unprefixed(&decl.name().to_ascii_lowercase())))?;
                let mut contents = format!("**{}**\n\n{}", property.name, property.description);
                if property.obsolete {
                    contents.push_str("\n\n*Deprecated*");
                }
                return Some(HoverResult {
                    contents,
                    span: decl.property.span(),
                });
            }
            NodeRef::AtRule(at) => {
                if !at.name_span.contains(offset) {
                    return None;
                }
                let entry = data::at_rule(&at.name).or_else(|| data::at_rule(data::unprefixed(&at.name.to_ascii_lowercase())))?;
                let mut contents = format!("**@{}**\n\n{}", entry.name, entry.description);
                if entry.obsolete {
                    contents.push_str("\n\n*Deprecated*");
                }
                return Some(HoverResult {
                    contents,
                    span: at.name_span,
                });
            }
            NodeRef::Ruleset(rule) => {
                let selector = rule.selectors.selectors.iter().find(|s| s.span.contains(offset))?;
                let text = selector.span.text(source);
                let contents = format!(
                    "```css\n{}\n```\nSelector specificity: {}",
                    normalize_whitespace(text),
                    selector_specificity(selector)
                );
                return Some(HoverResult {
                    contents,
                    span: selector.span,
                });
            }
            NodeRef::Comment(_) => return None,
            NodeRef::Stylesheet(_) => {}
        }
    }
    None
}

fn normalize_whitespace(text: &str) -> String {
    text.split_ascii_whitespace().collect::<Vec<_>>().join(" ")
}
