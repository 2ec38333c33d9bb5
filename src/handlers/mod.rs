//! # API Handlers
//!
//! HTTP endpoint handlers for the JSON API. Each entity route lives in its own
//! module; this module holds the service-level endpoints and the query
//! helpers the entity routes share.

use axum::{
    extract::{Query, State, rejection::JsonRejection, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use serde_json::json;
use utoipa::IntoParams;

use crate::error::{self, ApiError};
use crate::models::ServiceInfo;
use crate::server::AppState;

pub mod accounts;
pub mod data;
pub mod employees;
pub mod fields;
pub mod projects;
pub mod skills;
pub mod statuses;

/// Service information
#[utoipa::path(
    get,
    path = "/api",
    responses(
        (status = 200, description = "Service information", body = ServiceInfo)
    ),
    tag = "root"
)]
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo::default())
}

/// Liveness and database connectivity
#[utoipa::path(
    get,
    path = "/healthz",
    responses(
        (status = 200, description = "Service and database are healthy"),
        (status = 503, description = "Database unavailable")
    ),
    tag = "root"
)]
pub async fn healthz(State(state): State<AppState>) -> Response {
    match crate::db::health_check(&state.db).await {
        Ok(()) => Json(json!({ "status": "ok" })).into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unavailable" })),
            )
                .into_response()
        }
    }
}

/// Fallback for methods a route does not support
pub async fn method_not_allowed() -> Response {
    error::method_not_allowed()
}

/// `?id=` selector used by PUT and DELETE
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IdQuery {
    /// Numeric id of the row to change
    pub id: Option<String>,
}

impl IdQuery {
    /// The id as a number; 400 when missing or not numeric
    pub fn require(&self) -> Result<i32, ApiError> {
        parse_id(self.id.as_deref())
    }
}

pub(crate) fn parse_id(raw: Option<&str>) -> Result<i32, ApiError> {
    let raw = raw
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ApiError::bad_request("ID is required"))?;

    raw.parse()
        .map_err(|_| ApiError::bad_request("ID must be a number"))
}

/// Unwraps an extractor result, turning query rejections into 400 errors
pub(crate) fn query<T>(extracted: Result<Query<T>, QueryRejection>) -> Result<T, ApiError> {
    extracted.map(|Query(value)| value).map_err(ApiError::from)
}

/// Unwraps a JSON body, turning rejections into 400 errors
pub(crate) fn body<T>(extracted: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    extracted.map(|Json(value)| value).map_err(ApiError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id(Some("42")).unwrap(), 42);
        assert_eq!(parse_id(Some(" 7 ")).unwrap(), 7);
    }

    #[test]
    fn test_parse_id_missing() {
        let err = parse_id(None).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message.as_ref(), "ID is required");

        let err = parse_id(Some("")).unwrap_err();
        assert_eq!(err.message.as_ref(), "ID is required");
    }

    #[test]
    fn test_parse_id_not_numeric() {
        let err = parse_id(Some("abc")).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message.as_ref(), "ID must be a number");
    }

    #[tokio::test]
    async fn test_root_returns_service_info() {
        let Json(info) = root().await;
        assert_eq!(info.service, "backoffice");
        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
    }
}
