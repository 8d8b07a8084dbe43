//! Web UI binary: serves the two-mode form page.
//!
//! Configuration is environment-only — the server is meant to sit behind a
//! `.env` file or container environment:
//!
//!   GROQ_API_KEY          Model API key (required)
//!   PAPERDESK_MODEL       Override the model ID
//!   PAPERDESK_ADDR        Listen address (default 0.0.0.0:7860)
//!   PAPERDESK_OUTPUT_DIR  Directory for generated report PDFs

use anyhow::{Context, Result};
use paperdesk::{web, Assistant, AssistantConfig};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut builder = AssistantConfig::builder();
    if let Ok(model) = std::env::var("PAPERDESK_MODEL") {
        if !model.is_empty() {
            builder = builder.model(model);
        }
    }
    if let Ok(dir) = std::env::var("PAPERDESK_OUTPUT_DIR") {
        if !dir.is_empty() {
            builder = builder.output_dir(dir);
        }
    }
    let config = builder.build().context("Invalid configuration")?;

    // Built once; every request handler shares this instance.
    let assistant = Arc::new(Assistant::new(config).context("Failed to build assistant")?);

    let addr: SocketAddr = std::env::var("PAPERDESK_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:7860".to_string())
        .parse()
        .context("Invalid PAPERDESK_ADDR")?;

    let app = web::router(assistant);

    tracing::info!("Listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
