use cssls_core::{analysis, vars::VariableResolver};
use tower_lsp::lsp_types::*;

use super::{
    convert::{completion_kind, lsp_range},
    CssAnalyzer, ParsedDocument,
};

impl CssAnalyzer {
    /// Candidates for the cursor, in the order the core ranks them. Each item carries
    /// a text edit over the typed fragment so sigils like `@` and `::` are replaced too.
    pub fn completion(&self, doc: &ParsedDocument, position: Position) -> Vec<CompletionItem> {
        let offset = doc.offset_at(position);
        let found = analysis::complete(&doc.sheet, &doc.text, offset, self.settings.completion);
        found
            .into_iter()
            .enumerate()
            .map(|(i, item)| {
                let range = lsp_range(&doc.text, item.replace);
                CompletionItem {
                    label: item.label,
                    kind: Some(completion_kind(item.kind)),
                    detail: item.detail,
                    documentation: item
                        .deprecated
                        .then(|| Documentation::String("Deprecated: this entry is obsolete".to_string())),
                    tags: item.deprecated.then(|| vec![CompletionItemTag::DEPRECATED]),
                    sort_text: Some(format!("{i:05}")),
                    text_edit: Some(CompletionTextEdit::Edit(TextEdit {
                        range,
                        new_text: item.insert_text,
                    })),
                    ..Default::default()
                }
            })
            .collect()
    }

    pub fn hover(
        &self,
        doc: &ParsedDocument,
        position: Position,
        resolver: Option<&dyn VariableResolver>,
    ) -> Option<Hover> {
        let offset = doc.offset_at(position);
        let found = analysis::hover(&doc.sheet, &doc.text, offset, resolver)?;
        Some(Hover {
            contents: HoverContents::Markup(MarkupContent {
                kind: MarkupKind::Markdown,
                value: found.contents,
            }),
            range: Some(doc.range_of(found.span)),
        })
    }
}
