//! `/api/statusesApi`: project status labels

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use super::body;
use crate::error::ApiError;
use crate::models::project_status;
use crate::repositories::StatusRepository;
use crate::repositories::payload::StatusPayload;
use crate::server::AppState;

/// List active statuses ordered by label
#[utoipa::path(
    get,
    path = "/api/statusesApi",
    responses(
        (status = 200, description = "Active statuses sorted by `status`"),
        (status = 500, description = "Failed to fetch statuses", body = ApiError)
    ),
    tag = "statuses"
)]
pub async fn list_statuses(
    State(state): State<AppState>,
) -> Result<Json<Vec<project_status::Model>>, ApiError> {
    let statuses = StatusRepository::new(&state.db)
        .list_active()
        .await
        .map_err(|e| ApiError::from_repository(e, "Failed to fetch statuses"))?;

    Ok(Json(statuses))
}

/// Create a status; it is always created active
#[utoipa::path(
    post,
    path = "/api/statusesApi",
    request_body = StatusPayload,
    responses(
        (status = 200, description = "Created status"),
        (status = 400, description = "Missing status label or invalid JSON", body = ApiError),
        (status = 500, description = "Failed to create status", body = ApiError)
    ),
    tag = "statuses"
)]
pub async fn create_status(
    State(state): State<AppState>,
    payload: Result<Json<StatusPayload>, JsonRejection>,
) -> Result<Json<project_status::Model>, ApiError> {
    let status = StatusRepository::new(&state.db)
        .create(body(payload)?)
        .await
        .map_err(|e| ApiError::from_repository(e, "Failed to create status"))?;

    Ok(Json(status))
}
