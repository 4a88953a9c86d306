//! Mock wizard backend.
//!
//! Serves the endpoints the wizard consumes with canned behaviour so the
//! whole flow can be exercised without the real service. Runs standalone via
//! `store-wizard mock-server`.

use std::net::SocketAddr;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod error;
pub mod routes;
pub mod state;

pub use state::MockState;

/// Default port for the mock backend, matching the client's default base URL
pub const DEFAULT_PORT: u16 = 9020;

/// Build the mock backend router
pub fn build_router(state: MockState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health))
        // Integrations
        .route(
            "/api/v1/integrations/platforms",
            get(routes::integrations::platforms),
        )
        // Product generation
        .route(
            "/api/v1/wizard/llm/generate-products",
            post(routes::products::generate),
        )
        // Launch
        .route(
            "/api/v1/wizard/launch/validate",
            post(routes::launch::validate),
        )
        .route("/api/v1/wizard/launch/deploy", post(routes::launch::deploy))
        .route(
            "/api/v1/wizard/launch/status/:deployment_id",
            get(routes::launch::status),
        )
        .route("/api/v1/wizard/launch/notify", post(routes::launch::notify))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Bind a listener for the mock backend
pub async fn bind(port: u16) -> Result<tokio::net::TcpListener> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    Ok(tokio::net::TcpListener::bind(addr).await?)
}

/// Serve the mock backend on an already bound listener
pub async fn serve_on(listener: tokio::net::TcpListener, state: MockState) -> Result<()> {
    let app = build_router(state);
    tracing::info!("Mock backend listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

/// Start the mock backend
pub async fn serve(state: MockState, port: u16) -> Result<()> {
    let listener = bind(port).await?;
    serve_on(listener, state).await
}
