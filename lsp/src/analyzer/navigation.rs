use cssls_core::vars::{self, Access};
use tower_lsp::lsp_types::*;

use super::{colors::single_file_edit, convert::text_edit, CssAnalyzer, ParsedDocument};

impl CssAnalyzer {
    /// Every declaration of the custom property under the cursor.
    pub fn definition(&self, doc: &ParsedDocument, uri: &Url, position: Position) -> Vec<Location> {
        let offset = doc.offset_at(position);
        vars::find_definition(&doc.sheet, offset)
            .into_iter()
            .map(|span| Location::new(uri.clone(), doc.range_of(span)))
            .collect()
    }

    /// Declarations plus `var()` usages of the custom property under the cursor.
    pub fn references(&self, doc: &ParsedDocument, uri: &Url, position: Position) -> Vec<Location> {
        let offset = doc.offset_at(position);
        vars::find_references(&doc.sheet, offset)
            .into_iter()
            .map(|span| Location::new(uri.clone(), doc.range_of(span)))
            .collect()
    }

    pub fn highlights(&self, doc: &ParsedDocument, position: Position) -> Vec<DocumentHighlight> {
        let offset = doc.offset_at(position);
        vars::find_highlights(&doc.sheet, offset)
            .into_iter()
            .map(|(span, access)| DocumentHighlight {
                range: doc.range_of(span),
                kind: Some(match access {
                    Access::Write => DocumentHighlightKind::WRITE,
                    Access::Read => DocumentHighlightKind::READ,
                }),
            })
            .collect()
    }

    pub fn prepare_rename(&self, doc: &ParsedDocument, position: Position) -> Option<PrepareRenameResponse> {
        let offset = doc.offset_at(position);
        let (span, name) = vars::prepare_rename(&doc.sheet, offset)?;
        Some(PrepareRenameResponse::RangeWithPlaceholder {
            range: doc.range_of(span),
            placeholder: name,
        })
    }

    /// `None` when the cursor is not on a custom property or `new_name` is not a valid
    /// custom-property name. A missing `--` is added.
    pub fn rename(&self, doc: &ParsedDocument, uri: &Url, position: Position, new_name: &str) -> Option<WorkspaceEdit> {
        let offset = doc.offset_at(position);
        let edits = vars::rename(&doc.sheet, offset, new_name)?;
        let edits = edits.iter().map(|e| text_edit(&doc.text, e)).collect();
        Some(single_file_edit(uri, edits))
    }
}
