//! Route gateway: merges every endpoint subrouter and attaches shared state.

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::SharedStorage;

mod devices;
mod error;
mod health;
mod temperature;

pub use error::ApiError;

// ---

pub fn router(storage: SharedStorage) -> Router {
    // ---
    Router::new()
        .merge(devices::router())
        .merge(temperature::router())
        .merge(health::router())
        .layer(TraceLayer::new_for_http())
        .with_state(storage)
}
