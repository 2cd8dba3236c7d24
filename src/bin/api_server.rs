use anyhow::Context;
use coord_query::{api::create_router, ServerConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;
    let app = create_router(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    info!(addr = %config.bind_addr, "coordinate conversion API listening");
    info!("GET  /api/convert?lng=<lng>&lat=<lat>&from=<system>&to=<system>");
    info!("POST /api/batch   {{\"coordinates\": [...], \"from\": ..., \"to\": ...}}");
    info!("GET  /api/display?provider=<gaode|osm>&lng=<lng>&lat=<lat>&format=<decimal|dms>");
    info!("POST /api/upload  (multipart/form-data: csv file + from + to)");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
