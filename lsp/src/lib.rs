//! CSS language server: protocol handlers, open-document store and the workspace
//! custom-property index, on top of `cssls_core`.

pub mod analyzer;
pub mod index;
pub mod server;
