use std::path::PathBuf;

use ropey::Rope;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::LanguageServer;
use tracing::{debug, info};

use super::{
    state::{CssLanguageServer, Document},
    utils::compute_content_hash,
    CHANGE_DEBOUNCE_MS, OPEN_DEBOUNCE_MS,
};

#[allow(deprecated)]
fn workspace_roots(params: &InitializeParams) -> Vec<PathBuf> {
    let mut roots: Vec<PathBuf> = params
        .workspace_folders
        .iter()
        .flatten()
        .filter_map(|folder| folder.uri.to_file_path().ok())
        .collect();
    if roots.is_empty() {
        if let Some(path) = params.root_uri.as_ref().and_then(|uri| uri.to_file_path().ok()) {
            roots.push(path);
        }
    }
    roots
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    (!items.is_empty()).then_some(items)
}

#[tower_lsp::async_trait]
impl LanguageServer for CssLanguageServer {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        let roots = workspace_roots(&params);
        info!("CSS Language Server initializing with roots: {:?}", roots);
        if let Ok(mut guard) = self.workspace_roots.lock() {
            *guard = roots;
        }

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::INCREMENTAL)),
                hover_provider: Some(HoverProviderCapability::Simple(true)),
                completion_provider: Some(CompletionOptions {
                    resolve_provider: Some(false),
                    trigger_characters: Some(
                        ["@", ":", "-", "(", " "].iter().map(|c| c.to_string()).collect(),
                    ),
                    ..Default::default()
                }),
                color_provider: Some(ColorProviderCapability::Simple(true)),
                code_action_provider: Some(CodeActionProviderCapability::Options(CodeActionOptions {
                    code_action_kinds: Some(vec![CodeActionKind::QUICKFIX, CodeActionKind::REFACTOR_REWRITE]),
                    ..Default::default()
                })),
                definition_provider: Some(OneOf::Left(true)),
                references_provider: Some(OneOf::Left(true)),
                document_highlight_provider: Some(OneOf::Left(true)),
                rename_provider: Some(OneOf::Right(RenameOptions {
                    prepare_provider: Some(true),
                    work_done_progress_options: Default::default(),
                })),
                document_symbol_provider: Some(OneOf::Left(true)),
                folding_range_provider: Some(FoldingRangeProviderCapability::Simple(true)),
                selection_range_provider: Some(SelectionRangeProviderCapability::Simple(true)),
                document_link_provider: Some(DocumentLinkOptions {
                    resolve_provider: Some(false),
                    work_done_progress_options: Default::default(),
                }),
                document_formatting_provider: Some(OneOf::Left(true)),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "CSS Language Server".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        info!("CSS Language Server initialized");
        self.client
            .log_message(MessageType::INFO, "CSS Language Server started")
            .await;
        self.load_config().await;

        let roots = match self.workspace_roots.lock() {
            Ok(guard) => guard.clone(),
            Err(_) => Vec::new(),
        };
        self.index_workspace(roots).await;
    }

    async fn shutdown(&self) -> Result<()> {
        info!(
            "CSS Language Server shutting down ({} open documents, {} indexed stylesheets)",
            self.documents.len(),
            self.index.document_count()
        );
        Ok(())
    }

    async fn did_change_configuration(&self, _params: DidChangeConfigurationParams) {
        self.load_config().await;
        // Lint and layout settings may have changed; re-publish for open documents.
        let open: Vec<(Url, i32)> = self.documents.iter().map(|d| (d.key().clone(), d.version)).collect();
        for (uri, version) in open {
            self.schedule_diagnostics(uri, version, 0).await;
        }
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;
        debug!("opened {} (version {})", uri, version);
        let document = Document {
            content: Rope::from_str(&params.text_document.text),
            version,
            cached_parse: None,
            debounce_seq: 0,
            content_hash: Some(compute_content_hash(&params.text_document.text)),
        };
        self.documents.insert(uri.clone(), document);
        self.schedule_diagnostics(uri, version, OPEN_DEBOUNCE_MS).await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;

        let changed = self
            .documents
            .entry(uri.clone())
            .or_default()
            .apply_changes(version, &params.content_changes);
        if !changed {
            debug!("{} v{} left the text unchanged", uri, version);
        }
        // Any pending run for the previous version gives up once it sees the new one.
        self.schedule_diagnostics(uri, version, CHANGE_DEBOUNCE_MS).await;
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        debug!("closed {}", uri);
        self.documents.remove(&uri);
        self.client.publish_diagnostics(uri.clone(), Vec::new(), None).await;
        self.reindex_from_disk(uri).await;
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let uri = &params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;
        let Some(doc) = self.get_or_parse(uri).await else {
            return Ok(None);
        };
        let items = self.analyzer().completion(&doc, position);
        Ok(non_empty(items).map(CompletionResponse::Array))
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let uri = &params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;
        let Some(doc) = self.get_or_parse(uri).await else {
            return Ok(None);
        };
        Ok(self.analyzer().hover(&doc, position, Some(self.index.as_ref())))
    }

    async fn document_color(&self, params: DocumentColorParams) -> Result<Vec<ColorInformation>> {
        let Some(doc) = self.get_or_parse(&params.text_document.uri).await else {
            return Ok(Vec::new());
        };
        Ok(self.analyzer().document_colors(&doc, Some(self.index.as_ref())))
    }

    async fn color_presentation(&self, params: ColorPresentationParams) -> Result<Vec<ColorPresentation>> {
        Ok(self.analyzer().color_presentations(&params.color, params.range))
    }

    async fn code_action(&self, params: CodeActionParams) -> Result<Option<CodeActionResponse>> {
        let uri = &params.text_document.uri;
        let Some(doc) = self.get_or_parse(uri).await else {
            return Ok(None);
        };
        let actions = self
            .analyzer()
            .code_actions(&doc, uri, params.range, &params.context.diagnostics);
        Ok(non_empty(actions))
    }

    async fn goto_definition(&self, params: GotoDefinitionParams) -> Result<Option<GotoDefinitionResponse>> {
        let uri = &params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;
        let Some(doc) = self.get_or_parse(uri).await else {
            return Ok(None);
        };
        let locations = self.analyzer().definition(&doc, uri, position);
        Ok(non_empty(locations).map(GotoDefinitionResponse::Array))
    }

    async fn references(&self, params: ReferenceParams) -> Result<Option<Vec<Location>>> {
        let uri = &params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;
        let Some(doc) = self.get_or_parse(uri).await else {
            return Ok(None);
        };
        Ok(non_empty(self.analyzer().references(&doc, uri, position)))
    }

    async fn document_highlight(&self, params: DocumentHighlightParams) -> Result<Option<Vec<DocumentHighlight>>> {
        let uri = &params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;
        let Some(doc) = self.get_or_parse(uri).await else {
            return Ok(None);
        };
        Ok(non_empty(self.analyzer().highlights(&doc, position)))
    }

    async fn prepare_rename(&self, params: TextDocumentPositionParams) -> Result<Option<PrepareRenameResponse>> {
        let Some(doc) = self.get_or_parse(&params.text_document.uri).await else {
            return Ok(None);
        };
        Ok(self.analyzer().prepare_rename(&doc, params.position))
    }

    async fn rename(&self, params: RenameParams) -> Result<Option<WorkspaceEdit>> {
        let uri = &params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;
        let Some(doc) = self.get_or_parse(uri).await else {
            return Ok(None);
        };
        Ok(self.analyzer().rename(&doc, uri, position, &params.new_name))
    }

    async fn document_symbol(&self, params: DocumentSymbolParams) -> Result<Option<DocumentSymbolResponse>> {
        let Some(doc) = self.get_or_parse(&params.text_document.uri).await else {
            return Ok(None);
        };
        let symbols = self.analyzer().document_symbols(&doc);
        Ok(non_empty(symbols).map(DocumentSymbolResponse::Nested))
    }

    async fn folding_range(&self, params: FoldingRangeParams) -> Result<Option<Vec<FoldingRange>>> {
        let Some(doc) = self.get_or_parse(&params.text_document.uri).await else {
            return Ok(None);
        };
        Ok(non_empty(self.analyzer().folding_ranges(&doc)))
    }

    async fn selection_range(&self, params: SelectionRangeParams) -> Result<Option<Vec<SelectionRange>>> {
        let Some(doc) = self.get_or_parse(&params.text_document.uri).await else {
            return Ok(None);
        };
        Ok(non_empty(self.analyzer().selection_ranges(&doc, &params.positions)))
    }

    async fn document_link(&self, params: DocumentLinkParams) -> Result<Option<Vec<DocumentLink>>> {
        let uri = &params.text_document.uri;
        let Some(doc) = self.get_or_parse(uri).await else {
            return Ok(None);
        };
        Ok(non_empty(self.analyzer().document_links(&doc, uri)))
    }

    async fn formatting(&self, params: DocumentFormattingParams) -> Result<Option<Vec<TextEdit>>> {
        let Some(doc) = self.get_or_parse(&params.text_document.uri).await else {
            return Ok(None);
        };
        Ok(Some(self.analyzer().format(&doc, &params.options)))
    }
}
