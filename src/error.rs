//! # Error Handling
//!
//! Unified error responses for the API routes. Every error serializes as
//! `{"error": "<message>"}` and carries the request's trace id in the
//! `X-Trace-Id` header. Storage failures are logged with their cause and
//! reported to the client with a fixed context message only.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::repositories::RepositoryError;
use crate::telemetry;

/// Header carrying the request correlation id
pub const TRACE_ID_HEADER: &str = "x-trace-id";

/// Unified API error response structure
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ApiError {
    /// HTTP status code for the response
    #[serde(skip_serializing)]
    pub status: StatusCode,
    /// Human-readable error message
    #[serde(rename = "error")]
    #[schema(example = "ID is required")]
    pub message: Box<str>,
    /// Correlation trace ID, sent as a header rather than in the body
    #[serde(skip_serializing)]
    pub trace_id: Option<Box<str>>,
}

/// Body of a 405 response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MethodNotAllowed {
    #[schema(example = "Method not allowed")]
    pub message: String,
}

impl ApiError {
    /// Create a new API error with the given status code and message
    pub fn new<S: Into<String>>(status: StatusCode, message: S) -> Self {
        Self {
            status,
            message: message.into().into_boxed_str(),
            trace_id: telemetry::current_trace_id().map(String::into_boxed_str),
        }
    }

    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Map a repository failure onto a response.
    ///
    /// Validation problems keep their own message. Everything else becomes a
    /// 500 carrying `context` (e.g. "Failed to update account"), with the
    /// cause logged.
    pub fn from_repository(error: RepositoryError, context: &str) -> Self {
        match error {
            RepositoryError::Validation(message) => Self::bad_request(message),
            RepositoryError::UnknownField(_) => Self::bad_request(error.to_string()),
            RepositoryError::UnknownTable(_) => Self::not_found(error.to_string()),
            RepositoryError::NotFound { .. } | RepositoryError::Database(_) => {
                tracing::error!(error = %error, "{}", context);
                Self::internal(context)
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.status.as_u16(), self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut response = (self.status, Json(&self)).into_response();
        if let Some(trace_id) = self.trace_id.as_deref()
            && let Ok(value) = HeaderValue::from_str(trace_id)
        {
            response.headers_mut().insert(TRACE_ID_HEADER, value);
        }
        response
    }
}

// Error mappers for common sources

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let message = match rejection {
            JsonRejection::JsonDataError(err) => format!("Invalid JSON: {}", err.body_text()),
            JsonRejection::JsonSyntaxError(err) => format!("JSON syntax error: {}", err.body_text()),
            JsonRejection::MissingJsonContentType(_) => {
                "Missing 'Content-Type: application/json' header".to_string()
            }
            _ => "Invalid request body".to_string(),
        };

        Self::bad_request(message)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

/// 405 response shared by every API route
pub fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "message": "Method not allowed" })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::{TraceContext, with_trace_context};
    use sea_orm::DbErr;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_error_body_shape() {
        let response = ApiError::bad_request("ID is required").into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "ID is required" })
        );
    }

    #[test]
    fn test_validation_maps_to_400() {
        let error = ApiError::from_repository(
            RepositoryError::Validation("Missing required fields: name".into()),
            "Failed to create account",
        );

        assert_eq!(error.status, StatusCode::BAD_REQUEST);
        assert_eq!(error.message.as_ref(), "Missing required fields: name");
    }

    #[test]
    fn test_unknown_table_maps_to_404() {
        let error = ApiError::from_repository(
            RepositoryError::UnknownTable("payroll".into()),
            "Failed to fetch data",
        );

        assert_eq!(error.status, StatusCode::NOT_FOUND);
        assert_eq!(error.message.as_ref(), "Unknown resource: payroll");
    }

    #[test]
    fn test_unknown_field_maps_to_400() {
        let error = ApiError::from_repository(
            RepositoryError::UnknownField("salary".into()),
            "Failed to fetch data",
        );

        assert_eq!(error.status, StatusCode::BAD_REQUEST);
        assert_eq!(error.message.as_ref(), "Unknown field: salary");
    }

    #[test]
    fn test_missing_row_maps_to_500_with_context() {
        let error = ApiError::from_repository(
            RepositoryError::not_found("Account", 42),
            "Failed to update account",
        );

        assert_eq!(error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.message.as_ref(), "Failed to update account");
    }

    #[test]
    fn test_database_error_hides_cause() {
        let error = ApiError::from_repository(
            RepositoryError::Database(DbErr::Custom("connection reset".into())),
            "Failed to fetch employees",
        );

        assert_eq!(error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!error.message.contains("connection reset"));
    }

    #[tokio::test]
    async fn test_method_not_allowed_body() {
        let response = method_not_allowed();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            body_json(response).await,
            json!({ "message": "Method not allowed" })
        );
    }

    #[tokio::test]
    async fn test_trace_id_header_inside_context() {
        let context = TraceContext {
            trace_id: "trace-123".to_string(),
        };
        let response = with_trace_context(context, async {
            ApiError::internal("Failed to fetch accounts").into_response()
        })
        .await;

        assert_eq!(response.headers().get(TRACE_ID_HEADER).unwrap(), "trace-123");
    }

    #[test]
    fn test_no_trace_id_outside_context() {
        let error = ApiError::internal("boom");
        assert!(error.trace_id.is_none());
    }
}
