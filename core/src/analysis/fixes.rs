use serde::Serialize;

use crate::{
    analysis::diagnostics::{DUPLICATE_PROPERTY, UNKNOWN_PROPERTY},
    ast::{Declaration, Node, Ruleset, Stylesheet},
    data,
    token::{Span, TextEdit},
};

const MAX_EDIT_DISTANCE: usize = 2;
const MAX_SUGGESTIONS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickFix {
    pub title: String,
    /// Code of the diagnostic this fix resolves.
    pub code: &'static str,
    pub edit: TextEdit,
}

/// Fixes for the declaration under `offset`: spelling suggestions for an unknown
/// property and removal of a duplicate.
pub fn quick_fixes(sheet: &Stylesheet, source: &str, offset: usize) -> Vec<QuickFix> {
    let Some((rule, decl)) = declaration_at(&sheet.children, offset) else {
        return Vec::new();
    };
    if decl.is_custom() {
        return Vec::new();
    }

    let mut fixes = Vec::new();
    let name = decl.name();
    if !data::is_known_property(name) {
        for suggestion in suggest_properties(name) {
            fixes.push(QuickFix {
                title: format!("Did you mean '{suggestion}'?"),
                code: UNKNOWN_PROPERTY,
                edit: TextEdit::new(decl.property.span(), suggestion),
            });
        }
    }

    let is_duplicate = rule
        .declarations()
        .take_while(|d| d.span.start < decl.span.start)
        .any(|d| d.name().eq_ignore_ascii_case(name));
    if is_duplicate {
        fixes.push(QuickFix {
            title: format!("Remove duplicate property '{name}'"),
            code: DUPLICATE_PROPERTY,
            edit: TextEdit::new(removal_span(source, decl.span), ""),
        });
    }
    fixes
}

fn declaration_at(nodes: &[Node], offset: usize) -> Option<(&Ruleset, &Declaration)> {
    for node in nodes {
        match node {
            Node::Ruleset(rule) if rule.span.contains(offset) => {
                if let Some(found) = declaration_at(&rule.children, offset) {
                    return Some(found);
                }
                return rule.declarations().find(|d| d.span.contains(offset)).map(|d| (rule, d));
            }
            Node::AtRule(at) if at.span.contains(offset) => {
                if let Some(block) = &at.block {
                    return declaration_at(&block.children, offset);
                }
            }
            _ => {}
        }
    }
    None
}

/// Known property names within a small edit distance of `name`, closest first.
pub fn suggest_properties(name: &str) -> Vec<&'static str> {
    let lower = name.to_ascii_lowercase();
    let mut scored: Vec<(usize, &'static str)> = data::properties()
        .iter()
        .filter(|p| !p.obsolete)
        .filter_map(|p| {
            let d = edit_distance(&lower, p.name);
            (d <= MAX_EDIT_DISTANCE).then_some((d, p.name))
        })
        .collect();
    scored.sort();
    scored.into_iter().take(MAX_SUGGESTIONS).map(|(_, n)| n).collect()
}

/// Levenshtein distance over bytes.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut cur = vec![0; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        cur[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            cur[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(cur[j] + 1);
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    prev[b.len()]
}

/// Widen a declaration span to swallow its line when it sits alone on one.
fn removal_span(source: &str, span: Span) -> Span {
    let bytes = source.as_bytes();
    let mut start = span.start;
    while start > 0 && matches!(bytes[start - 1], b' ' | b'\t') {
        start -= 1;
    }
    let at_line_start = start == 0 || bytes[start - 1] == b'\n';
    if !at_line_start {
        start = span.start;
    }
    let mut end = span.end;
    while end < bytes.len() && matches!(bytes[end], b' ' | b'\t') {
        end += 1;
    }
    if at_line_start && end < bytes.len() && bytes[end] == b'\n' {
        end += 1;
    } else if at_line_start && end < bytes.len() && bytes[end] == b'\r' && bytes.get(end + 1) == Some(&b'\n') {
        end += 2;
    }
    Span::new(start, end)
}
