//! Workspace-wide custom-property index.
//!
//! Each document contributes its `--name: value` declarations. Lookups return the value
//! from the most recently indexed document that declares the name.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use cssls_core::{ast, vars::LocalVariables, vars::VariableResolver};
use dashmap::DashMap;
use tower_lsp::lsp_types::Url;
use tracing::{debug, warn};

/// Directories never descended into while scanning a workspace folder.
const SKIPPED_DIRS: &[&str] = &["node_modules", "target", "dist"];

#[derive(Debug, Default)]
pub struct VariableIndex {
    documents: DashMap<Url, Vec<(String, String)>>,
    latest: DashMap<String, (Url, String)>,
}

impl VariableIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever `uri` contributed before with the declarations in `text`.
    /// Returns the number of custom properties the document declares.
    pub fn index_document(&self, uri: &Url, text: &str) -> usize {
        let (sheet, _) = ast::parse(text);
        let locals = LocalVariables::from_sheet(&sheet, text);
        let mut entries: Vec<(String, String)> = locals
            .iter()
            .map(|(name, value)| (name.to_string(), value.trim().to_string()))
            .collect();
        entries.sort();

        self.remove_document(uri);
        for (name, value) in &entries {
            self.latest.insert(name.clone(), (uri.clone(), value.clone()));
        }
        let count = entries.len();
        self.documents.insert(uri.clone(), entries);
        debug!("indexed {} custom properties from {}", count, uri);
        count
    }

    /// Drop the entries of `uri`. Names it owned fall back to another document that
    /// still declares them.
    pub fn remove_document(&self, uri: &Url) {
        let Some((_, entries)) = self.documents.remove(uri) else {
            return;
        };
        for (name, _) in entries {
            self.latest.remove_if(&name, |_, (owner, _)| owner == uri);
            if self.latest.contains_key(&name) {
                continue;
            }
            let replacement = self.documents.iter().find_map(|doc| {
                doc.value()
                    .iter()
                    .find(|(n, _)| *n == name)
                    .map(|(_, value)| (doc.key().clone(), value.clone()))
            });
            if let Some(owner_and_value) = replacement {
                self.latest.insert(name, owner_and_value);
            }
        }
    }

    pub fn resolve(&self, name: &str) -> Option<String> {
        self.latest.get(name).map(|entry| entry.value().1.clone())
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn variable_count(&self) -> usize {
        self.latest.len()
    }

    pub fn contains_document(&self, uri: &Url) -> bool {
        self.documents.contains_key(uri)
    }

    /// Read `path` from disk and index it.
    pub fn index_file(&self, path: &Path) -> Result<usize> {
        let text = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
        let uri = Url::from_file_path(path).map_err(|_| anyhow!("not an absolute path: {}", path.display()))?;
        Ok(self.index_document(&uri, &text))
    }

    /// Index every `*.css` file under `root`, skipping hidden and vendored directories
    /// and any file for which `skip` returns true. Unreadable files are logged and
    /// skipped. Returns the number of files indexed.
    pub fn scan_folder(&self, root: &Path, skip: &dyn Fn(&Url) -> bool) -> Result<usize> {
        let mut pending = vec![root.to_path_buf()];
        let mut indexed = 0usize;
        while let Some(dir) = pending.pop() {
            let entries = fs::read_dir(&dir).with_context(|| format!("failed to list {}", dir.display()))?;
            for entry in entries.flatten() {
                let path = entry.path();
                let name = entry.file_name();
                let name = name.to_string_lossy();
                let Ok(file_type) = entry.file_type() else {
                    continue;
                };
                if file_type.is_dir() {
                    if !name.starts_with('.') && !SKIPPED_DIRS.contains(&name.as_ref()) {
                        pending.push(path);
                    }
                    continue;
                }
                let is_css = path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("css"));
                if !file_type.is_file() || !is_css {
                    continue;
                }
                if Url::from_file_path(&path).is_ok_and(|uri| skip(&uri)) {
                    continue;
                }
                match self.index_file(&path) {
                    Ok(_) => indexed += 1,
                    Err(e) => warn!("skipping {}: {:#}", path.display(), e),
                }
            }
        }
        Ok(indexed)
    }
}

impl VariableResolver for VariableIndex {
    fn resolve(&self, name: &str) -> Option<String> {
        VariableIndex::resolve(self, name)
    }
}
