use axum::Router;
use screener_core::Dataset;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::{routes, AppState, ServerConfig, WebError};

/// Load the dataset and build the router for `config`.
pub fn app(config: &ServerConfig) -> Result<Router, WebError> {
    let dataset = Dataset::from_path(&config.dataset)?;
    app_with_dataset(config, dataset)
}

/// Build the router around an already-loaded dataset.
pub fn app_with_dataset(config: &ServerConfig, dataset: Dataset) -> Result<Router, WebError> {
    Ok(routes::router(AppState::new(dataset), config.cors_layer()?))
}

/// Serve until Ctrl-C.
pub async fn serve(config: ServerConfig) -> Result<(), WebError> {
    let app = app(&config)?;

    let listener = TcpListener::bind(config.bind)
        .await
        .map_err(|source| WebError::Bind {
            addr: config.bind,
            source,
        })?;
    info!(addr = %config.bind, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(WebError::Serve)?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(%error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
