use anyhow::{Context, Result};
use std::net::{IpAddr, SocketAddr};
use tracing::info;

use vietnam_translation_backend::{build_app, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vietnam_translation_backend=debug,tower_http=debug".into()),
        )
        .init();

    let config = Config::load(None)?;
    info!("Loaded configuration: {} engine(s) configured", config.translation.engines.len());

    info!("Loading translation models...");
    let app_state = AppState::new(config.clone()).await?;

    let app = build_app(app_state);

    let host: IpAddr = config
        .server
        .host
        .parse()
        .with_context(|| format!("server.host must be an IP address, got {}", config.server.host))?;
    let addr = SocketAddr::from((host, config.server.port));
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
