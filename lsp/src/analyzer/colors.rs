use std::collections::HashMap;

use cssls_core::{
    analysis::{self, QuickFix},
    color::{self, Color as CoreColor},
    vars::{ChainedResolver, LocalVariables, VariableResolver},
};
use tower_lsp::lsp_types::*;

use super::{
    convert::{lsp_range, text_edit},
    CssAnalyzer, ParsedDocument,
};

fn to_lsp_color(c: &CoreColor) -> Color {
    Color {
        red: c.red as f32,
        green: c.green as f32,
        blue: c.blue as f32,
        alpha: c.alpha as f32,
    }
}

fn from_lsp_color(c: &Color) -> CoreColor {
    CoreColor::new(c.red.into(), c.green.into(), c.blue.into(), c.alpha.into())
}

impl CssAnalyzer {
    /// Colors in declaration values. `var()` references resolve against the
    /// document's own custom properties first, then `resolver`.
    pub fn document_colors(&self, doc: &ParsedDocument, resolver: Option<&dyn VariableResolver>) -> Vec<ColorInformation> {
        let local = LocalVariables::from_sheet(&doc.sheet, &doc.text);
        let chained = ChainedResolver {
            first: &local,
            fallback: resolver,
        };
        color::find_colors(&doc.sheet, Some(&chained))
            .iter()
            .map(|found| ColorInformation {
                range: doc.range_of(found.span),
                color: to_lsp_color(&found.color),
            })
            .collect()
    }

    /// Hex, rgb and hsl renderings of a picked color, each replacing `range`.
    pub fn color_presentations(&self, color: &Color, range: Range) -> Vec<ColorPresentation> {
        color::presentations(&from_lsp_color(color))
            .into_iter()
            .map(|label| ColorPresentation {
                text_edit: Some(TextEdit {
                    range,
                    new_text: label.clone(),
                }),
                label,
                additional_text_edits: None,
            })
            .collect()
    }

    /// Color notation conversions and quick fixes at the start of `range`. Quick fixes
    /// link back to the matching diagnostics the client sent along.
    pub fn code_actions(
        &self,
        doc: &ParsedDocument,
        uri: &Url,
        range: Range,
        diagnostics: &[Diagnostic],
    ) -> Vec<CodeActionOrCommand> {
        let offset = doc.offset_at(range.start);
        let mut actions = Vec::new();

        for fix in analysis::quick_fixes(&doc.sheet, &doc.text, offset) {
            let related: Vec<Diagnostic> = diagnostics
                .iter()
                .filter(|d| matches_fix(d, &fix))
                .cloned()
                .collect();
            actions.push(CodeActionOrCommand::CodeAction(CodeAction {
                title: fix.title.clone(),
                kind: Some(CodeActionKind::QUICKFIX),
                diagnostics: (!related.is_empty()).then_some(related),
                edit: Some(single_file_edit(uri, vec![text_edit(&doc.text, &fix.edit)])),
                is_preferred: Some(false),
                ..Default::default()
            }));
        }

        for conversion in color::color_code_actions(&doc.sheet, &doc.text, offset) {
            let edit = TextEdit {
                range: lsp_range(&doc.text, conversion.span),
                new_text: conversion.new_text,
            };
            actions.push(CodeActionOrCommand::CodeAction(CodeAction {
                title: conversion.title,
                kind: Some(CodeActionKind::REFACTOR_REWRITE),
                edit: Some(single_file_edit(uri, vec![edit])),
                ..Default::default()
            }));
        }
        actions
    }
}

fn matches_fix(diagnostic: &Diagnostic, fix: &QuickFix) -> bool {
    matches!(&diagnostic.code, Some(NumberOrString::String(code)) if code == fix.code)
}

pub(crate) fn single_file_edit(uri: &Url, edits: Vec<TextEdit>) -> WorkspaceEdit {
    WorkspaceEdit {
        changes: Some(HashMap::from([(uri.clone(), edits)])),
        ..Default::default()
    }
}
