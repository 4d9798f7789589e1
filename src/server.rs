// ABOUTME: HTTP service assembly: shared resources, router construction, and serve loop
// ABOUTME: Binds the configured address and shuts down gracefully on Ctrl+C or SIGTERM
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::{body::Body, Router};
use calorie_craft_intelligence::NutritionConfig;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;

use crate::config::ServerConfig;
use crate::middleware::{make_request_span, setup_cors};
use crate::routes::{HealthRoutes, NutritionRoutes, ProfileRoutes};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// State shared by every handler
#[derive(Debug, Clone, Default)]
pub struct ServerResources {
    /// Estimator tables used for every request
    pub nutrition_config: NutritionConfig,
}

impl ServerResources {
    /// Resources backed by the given estimator configuration
    #[must_use]
    pub const fn new(nutrition_config: NutritionConfig) -> Self {
        Self { nutrition_config }
    }
}

/// Build the full application router
pub fn build_router(config: &ServerConfig, resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes())
        .merge(NutritionRoutes::routes(Arc::clone(&resources)))
        .merge(ProfileRoutes::routes(resources))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(setup_cors(config))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<Body>))
}

/// Serve until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the nutrition configuration is invalid, the host cannot be resolved
/// or bound, or the server fails while running
pub async fn run(config: ServerConfig) -> Result<()> {
    let nutrition_config =
        NutritionConfig::load().context("Invalid nutrition estimator configuration")?;
    let resources = Arc::new(ServerResources::new(nutrition_config));

    let addr = config.bind_address().await?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("{}", config.summary());
    info!("HTTP server listening on http://{addr}");

    serve(listener, build_router(&config, resources)).await
}

/// Serve a router on an already-bound listener
///
/// # Errors
///
/// Returns an error if the server fails while running
pub async fn serve(listener: TcpListener, router: Router) -> Result<()> {
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("HTTP server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if signal::ctrl_c().await.is_ok() {
            info!("Received Ctrl+C, shutting down");
        } else {
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
