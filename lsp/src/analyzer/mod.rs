use cssls_core::{
    analysis::{self, CompletionOptions},
    ast::{self, Stylesheet},
    format::FormatMode,
    token::{ParseError, Span},
};
use tower_lsp::lsp_types::*;

mod colors;
mod completions;
mod convert;
mod navigation;
mod outline;

pub use convert::{lsp_position, lsp_range, offset_at};

/// Source identifier attached to published diagnostics.
pub const DIAGNOSTIC_SOURCE: &str = "css";

/// A parsed snapshot of one document version. Everything the analyzer answers is
/// derived from this plus a cursor.
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    pub text: String,
    pub sheet: Stylesheet,
    pub errors: Vec<ParseError>,
}

impl ParsedDocument {
    pub fn parse(text: impl Into<String>) -> Self {
        let text = text.into();
        let (sheet, errors) = ast::parse(&text);
        Self { text, sheet, errors }
    }

    pub fn offset_at(&self, position: Position) -> usize {
        offset_at(&self.text, position)
    }

    pub fn range_of(&self, span: Span) -> Range {
        lsp_range(&self.text, span)
    }
}

/// Per-session analysis switches, filled from the client configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerSettings {
    pub completion: CompletionOptions,
    pub lint_enabled: bool,
    pub format_mode: FormatMode,
    pub print_width: usize,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            completion: CompletionOptions::default(),
            lint_enabled: true,
            format_mode: FormatMode::Expanded,
            print_width: 80,
        }
    }
}

/// Protocol-facing facade over the core analyses: takes a [`ParsedDocument`] and
/// editor positions, returns `lsp_types` values.
#[derive(Debug, Clone, Default)]
pub struct CssAnalyzer {
    settings: AnalyzerSettings,
}

impl CssAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: AnalyzerSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &AnalyzerSettings {
        &self.settings
    }

    /// Lint findings followed by syntax errors. With linting off only syntax errors remain.
    pub fn diagnostics(&self, doc: &ParsedDocument) -> Vec<Diagnostic> {
        let found = if self.settings.lint_enabled {
            analysis::analyze(&doc.sheet, &doc.text, &doc.errors)
        } else {
            analysis::syntax_diagnostics(&doc.text, &doc.errors)
        };
        found.iter().map(|d| convert::diagnostic(&doc.text, d)).collect()
    }
}
