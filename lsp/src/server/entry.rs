use tower_lsp::{LspService, Server};
use tracing_subscriber::EnvFilter;

use super::state::CssLanguageServer;

/// Environment variable holding the log filter, e.g. `CSSLS_LOG=cssls_lsp=debug`.
pub const LOG_ENV: &str = "CSSLS_LOG";

pub async fn run() {
    // stdout carries the protocol; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(CssLanguageServer::new);
    Server::new(stdin, stdout, socket).serve(service).await;
}
