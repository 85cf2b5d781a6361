//! HTTP API: routing, middleware, and handlers

pub mod handlers;
pub mod headers;
pub mod middleware;

use axum::{
    extract::State,
    http::StatusCode,
    middleware as axum_middleware,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;

use crate::state::AppState;

/// Builds the application router with all routes and middleware layers.
pub fn create_router(state: AppState) -> Router {
    let cors_origins = state.config.server.cors_origins.clone();

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/favicon.ico", get(favicon))
        .route("/facilities", get(handlers::facilities::list_facilities))
        .route("/facilities/:id", get(handlers::facilities::get_facility))
        .route("/meta/regions", get(handlers::meta::list_regions))
        .route("/meta/treatments", get(handlers::meta::list_popular_treatments))
        .with_state(state)
        .layer(axum_middleware::from_fn(
            middleware::security_headers_middleware,
        ))
        .layer(axum_middleware::from_fn(middleware::request_id_middleware))
        .layer(middleware::compression())
        .layer(middleware::cors(&cors_origins))
}

/// GET / - service banner
async fn root() -> impl IntoResponse {
    Json(json!({
        "service": "facility-directory",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /health - liveness plus a database round trip
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "database": "connected",
                "service": "facility-directory",
            })),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "unhealthy",
                    "database": "disconnected",
                    "service": "facility-directory",
                })),
            )
        }
    }
}

/// Browsers request this on every visit; answer without hitting a handler 404.
async fn favicon() -> StatusCode {
    StatusCode::NO_CONTENT
}
