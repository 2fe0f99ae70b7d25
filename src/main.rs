// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use std::net::SocketAddr;
use std::sync::Arc;

use secrets_demo::{AppState, Config, Result, SecretsLoaded, create_router, setup_tracing};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    setup_tracing("info");

    let config = Config::from_env();
    let addr: SocketAddr = config.server_addr().parse().map_err(|e| {
        tracing::error!("Invalid server address: {}", e);
        e
    })?;

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!("Failed to bind address: {}", e);
        e
    })?;

    log_startup(&config);

    let app = create_router(Arc::new(AppState::new(config)));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            tracing::error!("Server error: {}", e);
            e
        })?;

    Ok(())
}

/// Presence only; secret values are never formatted
fn log_startup(config: &Config) {
    let SecretsLoaded {
        db_password,
        api_key,
        jwt_secret,
    } = config.secrets.loaded();

    tracing::info!("🚀 ALA Secrets Demo running on port {}", config.port);
    tracing::info!("📊 Environment: {}", config.environment);
    tracing::info!("🔐 Secrets status:");
    tracing::info!("   - DB Password: {}", status_label(db_password));
    tracing::info!("   - API Key: {}", status_label(api_key));
    tracing::info!("   - JWT Secret: {}", status_label(jwt_secret));
}

fn status_label(loaded: bool) -> &'static str {
    if loaded { "✅ Loaded" } else { "❌ Missing" }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received");
    }
}
