use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use receipt_splits::modules::receipts::adapters::outbound::scanner_in_memory::InMemoryReceiptScanner;
use receipt_splits::modules::receipts::adapters::outbound::session_store_in_memory::InMemorySessionStore;
use receipt_splits::shell::config::AppConfig;
use receipt_splits::shell::http::router;
use receipt_splits::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    // In-memory deps; sessions are lost on restart
    let store = Arc::new(InMemorySessionStore::new());
    let scanner = Arc::new(InMemoryReceiptScanner::failing(
        "no OCR backend configured; POST the scanned items to /receipts instead",
    ));
    let state = AppState::in_memory(store, scanner, config.tool_channel_capacity);
    let app = router(state, &config.graphql_path);

    tracing::info!("HTTP endpoint: http://{}", config.http_addr);
    tracing::info!(
        "GraphQL endpoint: http://{}{}",
        config.http_addr,
        config.graphql_path
    );
    let listener = tokio::net::TcpListener::bind(config.http_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
