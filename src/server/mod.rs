pub mod handlers;
mod routes;
mod types;

pub use handlers::AppState;
pub use routes::{RouteKind, build_router};
pub use types::{ApiError, ErrorResponse, PROMPT_REQUIRED, PromptQuery, ReviewRequest};

use crate::{Result, ai::AiService, config::{Config, ServerConfig}};
use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

/// Router for the configured routes, with CORS applied when enabled.
pub fn build_app(state: AppState, config: &ServerConfig) -> Router {
    let app = build_router(state, &config.routes);

    if config.cors {
        app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods(Any),
        )
    } else {
        app
    }
}

pub async fn run(config: Config) -> Result<()> {
    let app_state = AppState::new(AiService::from_config(&config.llm));

    let app = build_app(app_state, &config.server);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
