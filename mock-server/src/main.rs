use std::sync::Arc;

use mock_server::MockZap;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "8090".to_string());
    let api_key = std::env::var("ZAP_API_KEY").ok().filter(|k| !k.is_empty());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, api_key = api_key.is_some(), "mock ZAP listening");
    mock_server::run(listener, Arc::new(MockZap::new(api_key.as_deref()))).await
}
