// src/bin/api_server.rs

use stadium_service::infra::{logging, Config};
use stadium_service::{storage, transport};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    logging::init();

    // --- Store Initialization ---
    info!("initializing stadium store");
    let store = storage::connect(config.database_backend, &config.database_url).await?;

    // --- API Server Initialization ---
    let app = transport::http::create_app(transport::http::AppState::new(store));
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "API server listening");
    info!("Swagger UI available at /swagger-ui");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
