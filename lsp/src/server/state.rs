use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use dashmap::DashMap;
use ropey::Rope;
use tokio::sync::Semaphore;
use tower_lsp::lsp_types::{TextDocumentContentChangeEvent, Url};
use tower_lsp::Client;

use crate::analyzer::{CssAnalyzer, ParsedDocument};
use crate::index::VariableIndex;

use super::{config::ServerConfig, text::apply_change, utils::compute_content_hash};

/// In-memory representation of an open stylesheet and its cached parse.
#[derive(Debug, Default)]
pub(crate) struct Document {
    pub(crate) content: Rope,
    pub(crate) version: i32,
    pub(crate) cached_parse: Option<Arc<ParsedDocument>>,
    pub(crate) debounce_seq: u64,
    pub(crate) content_hash: Option<u64>,
}

impl Document {
    /// Apply a `didChange` batch and move to `version`. Returns whether the text changed;
    /// when it did not, the cached parse stays valid for the new version.
    pub(crate) fn apply_changes(&mut self, version: i32, changes: &[TextDocumentContentChangeEvent]) -> bool {
        self.version = version;
        for change in changes {
            apply_change(&mut self.content, change);
        }
        let hash = compute_content_hash(&self.content.to_string());
        if self.content_hash == Some(hash) {
            return false;
        }
        self.content_hash = Some(hash);
        self.cached_parse = None;
        self.debounce_seq = self.debounce_seq.wrapping_add(1);
        true
    }
}

/// Primary LSP server state shared across handlers.
pub(crate) struct CssLanguageServer {
    pub(crate) client: Client,
    pub(crate) documents: Arc<DashMap<Url, Document>>,
    pub(crate) index: Arc<VariableIndex>,
    pub(crate) config: Mutex<ServerConfig>,
    pub(crate) compute_limiter: Mutex<Arc<Semaphore>>,
    pub(crate) workspace_roots: Mutex<Vec<PathBuf>>,
}

impl CssLanguageServer {
    pub(crate) fn new(client: Client) -> Self {
        let config = ServerConfig::default();
        let permits = config.max_concurrent;
        Self {
            client,
            documents: Arc::new(DashMap::new()),
            index: Arc::new(VariableIndex::new()),
            config: Mutex::new(config),
            compute_limiter: Mutex::new(Arc::new(Semaphore::new(permits))),
            workspace_roots: Mutex::new(Vec::new()),
        }
    }

    /// Analyzer configured from the current session settings.
    pub(crate) fn analyzer(&self) -> CssAnalyzer {
        match self.config.lock() {
            Ok(guard) => CssAnalyzer::with_settings(guard.settings),
            Err(_) => CssAnalyzer::new(),
        }
    }

    pub(crate) fn limiter(&self) -> Arc<Semaphore> {
        match self.compute_limiter.lock() {
            Ok(guard) => guard.clone(),
            Err(_) => Arc::new(Semaphore::new(1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tower_lsp::lsp_types::{Position, Range};

    fn open(text: &str, version: i32) -> Document {
        Document {
            content: Rope::from_str(text),
            version,
            cached_parse: Some(Arc::new(ParsedDocument::parse(text))),
            debounce_seq: 0,
            content_hash: Some(compute_content_hash(text)),
        }
    }

    fn replace(start: u32, end: u32, text: &str) -> TextDocumentContentChangeEvent {
        TextDocumentContentChangeEvent {
            range: Some(Range::new(Position::new(0, start), Position::new(0, end))),
            range_length: None,
            text: text.to_string(),
        }
    }

    #[test]
    fn edit_invalidates_cached_parse() {
        let mut doc = open("a { colr: red; }", 1);
        assert!(doc.apply_changes(2, &[replace(4, 8, "color")]));
        assert_eq!(doc.version, 2);
        assert_eq!(doc.content.to_string(), "a { color: red; }");
        assert!(doc.cached_parse.is_none());
        assert_eq!(doc.debounce_seq, 1);
    }

    #[test]
    fn no_op_change_still_advances_version() {
        let mut doc = open("a { color: red; }", 1);
        assert!(doc.apply_changes(2, &[replace(4, 9, "colr")]));
        // Typing the letter back and forth lands on identical text at v3.
        let seq = doc.debounce_seq;
        assert!(!doc.apply_changes(3, &[replace(4, 8, "colr")]));
        assert_eq!(doc.version, 3);
        assert_eq!(doc.debounce_seq, seq);
        assert_eq!(doc.content.to_string(), "a { colr: red; }");
    }
}
