use crate::server::{routes, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

/// Build the Axum application
pub fn build_app(state: AppState) -> Router {
    // Browser front-ends call the server from arbitrary origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let ai_routes = Router::new()
        .route("/generate", post(routes::generate))
        .route("/status", get(routes::status))
        .route("/test", get(routes::self_test));

    Router::new()
        .nest("/ai", ai_routes)
        .route("/health", get(routes::health))
        .route("/metrics", get(routes::metrics))
        .layer(cors)
        .with_state(state)
}

/// Run the server until `shutdown` resolves
pub async fn run_server(
    state: AppState,
    addr: SocketAddr,
    shutdown: impl std::future::Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("PMG AI server listening on http://{}", addr);
    info!("POST http://{}/ai/generate", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Server shutdown complete");
    Ok(())
}
