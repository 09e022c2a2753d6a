//! Temperature submission and daily aggregation endpoints.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::Local;
use std::collections::HashMap;
use tracing::{debug, info};

use super::error::{ApiError, ApiResult};
use crate::{AggregatedTemperatureData, SharedStorage, SubmitTemperatureRequest};

// ---

pub fn router() -> Router<SharedStorage> {
    // ---
    Router::new()
        .route("/temperature", post(submit_temperature))
        .route("/temperature/aggregated", get(aggregated_temperature))
}

/// Handle `POST /temperature`.
///
/// The body is decoded as JSON whatever the `Content-Type` header says;
/// devices are not expected to set it. Acceptance is decided by
/// [`crate::Storage::is_device_enrolled`], so disabled devices get 403 too.
async fn submit_temperature(
    State(storage): State<SharedStorage>,
    body: Bytes,
) -> ApiResult<StatusCode> {
    // ---
    info!("POST /temperature");
    let req: SubmitTemperatureRequest = serde_json::from_slice(&body)?;

    if !storage.is_device_enrolled(&req.device_id) {
        return Err(ApiError::NotEnrolled);
    }

    storage.record_temperature(&req.device_id, req.temperature);
    debug!(device_id = %req.device_id, temperature = req.temperature, "Recorded temperature");
    Ok(StatusCode::OK)
}

async fn aggregated_temperature(
    State(storage): State<SharedStorage>,
) -> Json<HashMap<String, AggregatedTemperatureData>> {
    // ---
    info!("GET /temperature/aggregated");
    let aggregated = storage.get_daily_aggregated_data(Local::now());
    debug!("Aggregated {} devices", aggregated.len());
    Json(aggregated)
}
