#[tokio::main]
async fn main() {
    cssls_lsp::server::run().await;
}
