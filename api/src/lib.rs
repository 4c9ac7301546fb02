pub mod core {
    pub mod app_state;
}

pub mod error_handler;

pub mod routes {
    pub mod ask {
        pub mod ask_question_route;
        pub mod ask_request;
    }
}

use std::sync::Arc;

use ai_llm_service::warmup::spawn_warmup;
use axum::{Router, routing::post};
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

use crate::{
    core::app_state::{AppState, ServerConfig},
    error_handler::{AppError, AppResult},
    routes::ask::ask_question_route::ask_question,
};

/// Builds the HTTP router: `POST /ask` behind a permissive CORS layer.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/ask", post(ask_question))
        .layer(cors)
        .with_state(state)
}

/// Loads config from the environment, warms the model up in the background
/// and serves until Ctrl+C.
pub async fn start() -> AppResult<()> {
    let cfg = ServerConfig::from_env()?;
    let state = cfg.build_state()?;

    let listener = tokio::net::TcpListener::bind(&cfg.address)
        .await
        .map_err(|source| AppError::Bind {
            addr: cfg.address.clone(),
            source,
        })?;
    info!(address = %cfg.address, "listening");

    // One-shot; aborted below if still running at shutdown.
    let warmup = spawn_warmup(cfg.llm.clone());

    let served = axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server);

    warmup.abort();
    info!("server stopped");
    served
}

/// Returns a future that resolves when Ctrl+C is pressed.
async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        // Without a signal handler the server runs until killed.
        error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
