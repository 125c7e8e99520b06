use cssls_core::{
    analysis::{self, CompletionKind, Severity},
    outline,
    token::{self, Span},
};
use tower_lsp::lsp_types::*;

use super::DIAGNOSTIC_SOURCE;

pub fn lsp_position(text: &str, offset: usize) -> Position {
    let p = token::offset_to_position(text, offset);
    Position::new(p.line, p.character)
}

pub fn lsp_range(text: &str, span: Span) -> Range {
    let r = token::span_to_range(text, span);
    Range::new(
        Position::new(r.start.line, r.start.character),
        Position::new(r.end.line, r.end.character),
    )
}

/// Byte offset for an editor position (UTF-16 columns), clamped to the text.
pub fn offset_at(text: &str, position: Position) -> usize {
    token::position_to_offset(text, token::Position::new(position.line, position.character))
}

pub(crate) fn text_edit(text: &str, edit: &token::TextEdit) -> TextEdit {
    TextEdit {
        range: lsp_range(text, edit.span),
        new_text: edit.new_text.clone(),
    }
}

pub(crate) fn severity(severity: Severity) -> DiagnosticSeverity {
    match severity {
        Severity::Error => DiagnosticSeverity::ERROR,
        Severity::Warning => DiagnosticSeverity::WARNING,
        Severity::Information => DiagnosticSeverity::INFORMATION,
        Severity::Hint => DiagnosticSeverity::HINT,
    }
}

pub(crate) fn diagnostic(text: &str, found: &analysis::Diagnostic) -> Diagnostic {
    let tags = (found.code == analysis::EMPTY_RULESET).then(|| vec![DiagnosticTag::UNNECESSARY]);
    Diagnostic {
        range: lsp_range(text, found.span),
        severity: Some(severity(found.severity)),
        code: Some(NumberOrString::String(found.code.to_string())),
        source: Some(DIAGNOSTIC_SOURCE.to_string()),
        message: found.message.clone(),
        tags,
        ..Default::default()
    }
}

pub(crate) fn completion_kind(kind: CompletionKind) -> CompletionItemKind {
    match kind {
        CompletionKind::Property => CompletionItemKind::PROPERTY,
        CompletionKind::Keyword => CompletionItemKind::VALUE,
        CompletionKind::Function => CompletionItemKind::FUNCTION,
        CompletionKind::Color => CompletionItemKind::COLOR,
        CompletionKind::Variable => CompletionItemKind::VARIABLE,
        CompletionKind::AtRule => CompletionItemKind::KEYWORD,
        CompletionKind::PseudoClass | CompletionKind::PseudoElement => CompletionItemKind::FUNCTION,
        CompletionKind::Element => CompletionItemKind::KEYWORD,
    }
}

pub(crate) fn symbol_kind(kind: outline::SymbolKind) -> SymbolKind {
    match kind {
        outline::SymbolKind::Ruleset => SymbolKind::CLASS,
        outline::SymbolKind::AtRule => SymbolKind::MODULE,
        outline::SymbolKind::Variable => SymbolKind::VARIABLE,
    }
}

pub(crate) fn folding_kind(kind: outline::FoldingKind) -> FoldingRangeKind {
    match kind {
        outline::FoldingKind::Comment => FoldingRangeKind::Comment,
        outline::FoldingKind::Region => FoldingRangeKind::Region,
    }
}
