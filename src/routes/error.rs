//! HTTP error responses for the route handlers.
//!
//! Every failure is rendered as `{"error": "<message>"}` with the status code
//! chosen here, so handlers only ever return `Result<_, ApiError>`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::StorageError;

// ---

#[derive(Debug, Error)]
pub enum ApiError {
    // ---
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("{0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("device not enrolled")]
    NotEnrolled,
}

impl ApiError {
    // ---
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Storage(StorageError::DeviceNotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotEnrolled => StatusCode::FORBIDDEN,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // ---
        let status = self.status();
        tracing::info!(%status, error = %self, "request rejected");

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn test_status_mapping() {
        // ---
        let not_found = ApiError::from(StorageError::DeviceNotFound("x".into()));
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        assert_eq!(not_found.to_string(), "device x not found");

        let malformed = ApiError::from(serde_json::from_str::<u32>("{").unwrap_err());
        assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);

        assert_eq!(ApiError::NotEnrolled.status(), StatusCode::FORBIDDEN);
    }
}
