//! Device enrollment and enable/disable endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use std::collections::HashMap;
use tracing::info;

use super::error::ApiResult;
use crate::{EnrollResponse, SharedStorage};

// ---

pub fn router() -> Router<SharedStorage> {
    // ---
    Router::new()
        .route("/devices", get(list_devices))
        .route("/devices/{id}", post(enroll_device))
        .route("/device/enable/{id}", post(enable_device))
        .route("/device/disable/{id}", post(disable_device))
}

async fn enroll_device(
    Path(device_id): Path<String>,
    State(storage): State<SharedStorage>,
) -> Json<EnrollResponse> {
    // ---
    info!(%device_id, "POST /devices/{{id}}");
    storage.enroll_device(&device_id);
    Json(EnrollResponse { device_id })
}

async fn list_devices(State(storage): State<SharedStorage>) -> Json<HashMap<String, bool>> {
    // ---
    info!("GET /devices");
    Json(storage.list_devices())
}

async fn enable_device(
    Path(device_id): Path<String>,
    State(storage): State<SharedStorage>,
) -> ApiResult<StatusCode> {
    // ---
    info!(%device_id, "POST /device/enable/{{id}}");
    storage.enable_device(&device_id)?;
    info!(%device_id, "Enabled device");
    Ok(StatusCode::OK)
}

async fn disable_device(
    Path(device_id): Path<String>,
    State(storage): State<SharedStorage>,
) -> ApiResult<StatusCode> {
    // ---
    info!(%device_id, "POST /device/disable/{{id}}");
    storage.disable_device(&device_id)?;
    info!(%device_id, "Disabled device");
    Ok(StatusCode::OK)
}
