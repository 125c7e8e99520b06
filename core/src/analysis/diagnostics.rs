use serde::Serialize;

use crate::{
    ast::{Node, Ruleset, Stylesheet},
    data,
    token::{ParseError, Range, Span, span_to_range},
    util::fast_map::fast_hash_set_new,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[repr(u8)]
pub enum Severity {
    Error = 1,
    Warning = 2,
    Information = 3,
    Hint = 4,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Information => "info",
            Severity::Hint => "hint",
        }
    }
}

pub const UNKNOWN_PROPERTY: &str = "unknown-property";
pub const DUPLICATE_PROPERTY: &str = "duplicate-property";
pub const UNKNOWN_AT_RULE: &str = "unknown-at-rule";
pub const EMPTY_RULESET: &str = "empty-ruleset";
pub const SYNTAX_ERROR: &str = "syntax-error";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub message: String,
    pub code: &'static str,
    pub severity: Severity,
    pub span: Span,
    pub range: Range,
}

impl Diagnostic {
    fn new(source: &str, span: Span, severity: Severity, code: &'static str, message: String) -> Self {
        Self {
            message,
            code,
            severity,
            span,
            range: span_to_range(source, span),
        }
    }
}

/// Lint results for the stylesheet followed by the parse errors, each as a diagnostic.
pub fn analyze(sheet: &Stylesheet, source: &str, errors: &[ParseError]) -> Vec<Diagnostic> {
    let mut out = lint(sheet, source);
    out.extend(syntax_diagnostics(source, errors));
    out
}

pub fn syntax_diagnostics(source: &str, errors: &[ParseError]) -> Vec<Diagnostic> {
    errors
        .iter()
        .map(|e| Diagnostic::new(source, e.span, Severity::Error, SYNTAX_ERROR, e.message.clone()))
        .collect()
}

/// Semantic checks only: unknown and duplicate properties, unknown at-rules, empty rulesets.
pub fn lint(sheet: &Stylesheet, source: &str) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    lint_nodes(&sheet.children, source, &mut out);
    out
}

fn lint_nodes(nodes: &[Node], source: &str, out: &mut Vec<Diagnostic>) {
    for node in nodes {
        match node {
            Node::Ruleset(rule) => {
                lint_ruleset(rule, source, out);
                lint_nodes(&rule.children, source, out);
            }
            Node::AtRule(at) => {
                if !data::is_known_at_rule(&at.name) {
                    out.push(Diagnostic::new(
                        source,
                        at.name_span,
                        Severity::Warning,
                        UNKNOWN_AT_RULE,
                        format!("unknown at-rule '@{}'", at.name),
                    ));
                }
                if let Some(block) = &at.block {
                    lint_nodes(&block.children, source, out);
                }
            }
            Node::Declaration(_) | Node::Comment(_) => {}
        }
    }
}

fn lint_ruleset(rule: &Ruleset, source: &str, out: &mut Vec<Diagnostic>) {
    if rule.is_empty() {
        out.push(Diagnostic::new(
            source,
            rule.span,
            Severity::Hint,
            EMPTY_RULESET,
            "empty ruleset".to_string(),
        ));
        return;
    }

    let mut seen = fast_hash_set_new();
    for decl in rule.declarations() {
        if decl.is_custom() {
            continue;
        }
        let name = decl.name();
        if !data::is_known_property(name) {
            out.push(Diagnostic::new(
                source,
                decl.property.span(),
                Severity::Warning,
                UNKNOWN_PROPERTY,
                format!("unknown property '{name}'"),
            ));
        }
        if !seen.insert(name.to_ascii_lowercase()) {
            out.push(Diagnostic::new(
                source,
                decl.span,
                Severity::Warning,
                DUPLICATE_PROPERTY,
                format!("duplicate property '{name}'"),
            ));
        }
    }
}
