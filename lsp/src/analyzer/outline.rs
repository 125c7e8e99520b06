use cssls_core::{
    format::{self, FormatOptions},
    outline,
    token::Span,
};
use tower_lsp::lsp_types::*;
use tracing::debug;

use super::{
    convert::{folding_kind, lsp_range, symbol_kind},
    CssAnalyzer, ParsedDocument,
};

impl CssAnalyzer {
    pub fn document_symbols(&self, doc: &ParsedDocument) -> Vec<DocumentSymbol> {
        outline::document_symbols(&doc.sheet, &doc.text)
            .iter()
            .map(|s| to_lsp_symbol(&doc.text, s))
            .collect()
    }

    pub fn folding_ranges(&self, doc: &ParsedDocument) -> Vec<FoldingRange> {
        outline::folding_ranges(&doc.sheet, &doc.text)
            .into_iter()
            .map(|r| FoldingRange {
                start_line: r.start_line,
                end_line: r.end_line,
                kind: r.kind.map(folding_kind),
                ..Default::default()
            })
            .collect()
    }

    /// One chain per position, innermost range first with parents growing outwards.
    pub fn selection_ranges(&self, doc: &ParsedDocument, positions: &[Position]) -> Vec<SelectionRange> {
        let offsets: Vec<usize> = positions.iter().map(|p| doc.offset_at(*p)).collect();
        let arena = outline::selection_ranges(&doc.sheet, &doc.text, &offsets);
        arena
            .innermost
            .iter()
            .map(|&index| {
                let spans: Vec<Span> = arena.chain(index).collect();
                let mut parent: Option<Box<SelectionRange>> = None;
                for span in spans.iter().rev() {
                    parent = Some(Box::new(SelectionRange {
                        range: lsp_range(&doc.text, *span),
                        parent,
                    }));
                }
                parent.map(|b| *b).unwrap_or(SelectionRange {
                    range: lsp_range(&doc.text, Span::default()),
                    parent: None,
                })
            })
            .collect()
    }

    /// Links resolved against `base`. Targets that do not form a valid URL are dropped.
    pub fn document_links(&self, doc: &ParsedDocument, base: &Url) -> Vec<DocumentLink> {
        outline::document_links(&doc.sheet, &doc.text)
            .into_iter()
            .filter_map(|link| match base.join(&link.target) {
                Ok(target) => Some(DocumentLink {
                    range: doc.range_of(link.span),
                    target: Some(target),
                    tooltip: None,
                    data: None,
                }),
                Err(e) => {
                    debug!("skipping link '{}': {}", link.target, e);
                    None
                }
            })
            .collect()
    }

    /// A single whole-document edit, or none when the text is already formatted.
    /// Indentation comes from the request; layout from the session settings.
    pub fn format(&self, doc: &ParsedDocument, options: &FormattingOptions) -> Vec<TextEdit> {
        let options = FormatOptions {
            tab_size: options.tab_size,
            insert_spaces: options.insert_spaces,
            mode: self.settings.format_mode,
            print_width: self.settings.print_width,
        };
        let formatted = format::format(&doc.sheet, &doc.text, &options);
        if formatted == doc.text {
            return Vec::new();
        }
        vec![TextEdit {
            range: lsp_range(&doc.text, Span::new(0, doc.text.len())),
            new_text: formatted,
        }]
    }
}

#[allow(deprecated)]
fn to_lsp_symbol(text: &str, symbol: &outline::DocumentSymbol) -> DocumentSymbol {
    let children: Vec<DocumentSymbol> = symbol.children.iter().map(|c| to_lsp_symbol(text, c)).collect();
    DocumentSymbol {
        name: symbol.name.clone(),
        detail: None,
        kind: symbol_kind(symbol.kind),
        tags: None,
        deprecated: None,
        range: lsp_range(text, symbol.span),
        selection_range: lsp_range(text, symbol.selection),
        children: (!children.is_empty()).then_some(children),
    }
}
