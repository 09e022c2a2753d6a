// src/routes/health.rs
//! Liveness probe for the weather monitoring service.
//!
//! `GET /health` answers without touching storage, so orchestrators and CI
//! can tell the process is up and serving HTTP.

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// JSON response body for the `/health` endpoint.
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Subrouter with the single GET `/health` route.
///
/// Generic over the state type so it merges into the gateway router
/// whatever state the other routes carry.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(health))
}
