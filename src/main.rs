use std::sync::Arc;
use tokio::net::TcpListener;

use minwon_relay::api::create_router;
use minwon_relay::config::CONFIG;
use minwon_relay::relay::RelayClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    // Forces the required MINWON_SERVICE_KEY to be resolved before we listen.
    let relay = Arc::new(RelayClient::new(
        CONFIG.upstream_url.clone(),
        CONFIG.service_key.clone(),
    ));

    let app = create_router(relay);
    let listener = TcpListener::bind(&CONFIG.bind_addr).await?;
    tracing::info!("minwon-relay listening on {}", CONFIG.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
