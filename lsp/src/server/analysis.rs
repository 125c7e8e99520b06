use std::path::PathBuf;
use std::sync::Arc;

use tokio::task;
use tokio::time::{sleep, Duration};
use tower_lsp::lsp_types::{request::WorkDoneProgressCreate, *};
use tracing::{debug, info, warn};

use crate::analyzer::ParsedDocument;

use super::state::CssLanguageServer;

impl CssLanguageServer {
    /// Parsed snapshot of an open document, reusing the cached parse when the document
    /// has not changed since it was computed.
    pub(crate) async fn get_or_parse(&self, uri: &Url) -> Option<Arc<ParsedDocument>> {
        let (content_snapshot, version_snapshot, seq_snapshot) = {
            let doc = self.documents.get(uri)?;
            if let Some(cached) = doc.cached_parse.clone() {
                return Some(cached);
            }
            (doc.content.to_string(), doc.version, doc.debounce_seq)
        };

        let sem = self.limiter();
        let _permit = sem.acquire().await.ok();
        let parsed = task::spawn_blocking(move || ParsedDocument::parse(content_snapshot))
            .await
            .ok()?;
        let parsed = Arc::new(parsed);

        if let Some(mut doc) = self.documents.get_mut(uri) {
            if doc.version == version_snapshot && doc.debounce_seq == seq_snapshot {
                doc.cached_parse = Some(parsed.clone());
            }
        }
        Some(parsed)
    }

    /// After `delay_ms`, parse and lint the document, refresh its custom properties in
    /// the workspace index and publish diagnostics. Skipped when a newer version has
    /// arrived in the meantime.
    pub(crate) async fn schedule_diagnostics(&self, uri: Url, scheduled_version: i32, delay_ms: u64) {
        let documents = self.documents.clone();
        let index = self.index.clone();
        let client = self.client.clone();
        let analyzer = self.analyzer();
        let sem = self.limiter();
        tokio::spawn(async move {
            sleep(Duration::from_millis(delay_ms)).await;

            let (content_snapshot, seq_snapshot, version_snapshot) = match documents.get(&uri) {
                Some(doc) => (doc.content.to_string(), doc.debounce_seq, doc.version),
                None => return,
            };
            if version_snapshot != scheduled_version {
                return;
            }

            let _permit = sem.acquire().await.ok();
            let uri_for_index = uri.clone();
            let computed = task::spawn_blocking(move || {
                let parsed = ParsedDocument::parse(content_snapshot);
                index.index_document(&uri_for_index, &parsed.text);
                let diagnostics = analyzer.diagnostics(&parsed);
                (parsed, diagnostics)
            })
            .await;

            let (parsed, diagnostics) = match computed {
                Ok(result) => result,
                Err(e) => {
                    warn!("analysis of {} failed: {}", uri, e);
                    return;
                }
            };

            if let Some(mut doc) = documents.get_mut(&uri) {
                if doc.debounce_seq != seq_snapshot || doc.version != version_snapshot {
                    return;
                }
                doc.cached_parse = Some(Arc::new(parsed));
            } else {
                return;
            }

            debug!("publishing {} diagnostics for {}", diagnostics.len(), uri);
            client.publish_diagnostics(uri, diagnostics, Some(version_snapshot)).await;
        });
    }

    /// Index every stylesheet under the workspace roots in the background, leaving
    /// documents that are already open to their in-memory text.
    pub(crate) async fn index_workspace(&self, roots: Vec<PathBuf>) {
        if roots.is_empty() {
            return;
        }
        let documents = self.documents.clone();
        let index = self.index.clone();
        let client = self.client.clone();
        tokio::spawn(async move {
            let token = NumberOrString::String("cssls:index".to_string());
            let progress = client
                .send_request::<WorkDoneProgressCreate>(WorkDoneProgressCreateParams { token: token.clone() })
                .await
                .is_ok();
            if progress {
                client
                    .send_notification::<notification::Progress>(ProgressParams {
                        token: token.clone(),
                        value: ProgressParamsValue::WorkDone(WorkDoneProgress::Begin(WorkDoneProgressBegin {
                            title: "CSS: Indexing workspace".to_string(),
                            cancellable: Some(false),
                            message: None,
                            percentage: None,
                        })),
                    })
                    .await;
            }

            let scan_index = index.clone();
            let scanned = task::spawn_blocking(move || {
                let skip = |uri: &Url| documents.contains_key(uri);
                let mut files = 0usize;
                for root in &roots {
                    match scan_index.scan_folder(root, &skip) {
                        Ok(n) => files += n,
                        Err(e) => warn!("workspace scan of {} failed: {:#}", root.display(), e),
                    }
                }
                files
            })
            .await
            .unwrap_or_default();

            info!(
                "indexed {} stylesheets, {} custom properties",
                scanned,
                index.variable_count()
            );

            if progress {
                client
                    .send_notification::<notification::Progress>(ProgressParams {
                        token,
                        value: ProgressParamsValue::WorkDone(WorkDoneProgress::End(WorkDoneProgressEnd {
                            message: Some(format!("{scanned} stylesheets indexed")),
                        })),
                    })
                    .await;
            }
        });
    }

    /// A closed document falls back to its on-disk contents in the index.
    pub(crate) async fn reindex_from_disk(&self, uri: Url) {
        let index = self.index.clone();
        let Ok(path) = uri.to_file_path() else {
            index.remove_document(&uri);
            return;
        };
        let result = task::spawn_blocking(move || {
            if path.is_file() {
                index.index_file(&path).map(Some)
            } else {
                index.remove_document(&uri);
                Ok(None)
            }
        })
        .await;
        match result {
            Ok(Err(e)) => warn!("re-indexing closed document failed: {:#}", e),
            Err(e) => warn!("re-indexing task failed: {}", e),
            Ok(Ok(_)) => {}
        }
    }
}
