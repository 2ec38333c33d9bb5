//! `/api/dataApi`: generic access to any registered table
//!
//! The table is chosen by `tableName` and resolved through the
//! [`TableRegistry`](crate::repositories::TableRegistry); unknown tables are
//! rejected before any query runs.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::Value;
use utoipa::IntoParams;

use super::{body, parse_id, query};
use crate::error::{self, ApiError};
use crate::repositories::DataTable;
use crate::server::AppState;

/// Query parameters of the generic data route
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct DataQuery {
    /// Accessor name (`projectStatus`) or SQL table name (`project_statuses`)
    pub table_name: Option<String>,
    /// Comma-separated field list, required for GET
    pub fields: Option<String>,
    /// Row id, required for PUT and DELETE
    pub id: Option<String>,
}

impl DataQuery {
    fn table_name(&self) -> Result<&str, ApiError> {
        self.table_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| ApiError::bad_request("Table name is required"))
    }

    fn table(&self, state: &AppState) -> Result<Arc<dyn DataTable>, ApiError> {
        let name = self.table_name()?;
        state
            .registry
            .resolve(name)
            .map_err(|e| ApiError::from_repository(e, "Failed to resolve table"))
    }

    fn field_list(&self) -> Result<Vec<String>, ApiError> {
        let fields: Vec<String> = self
            .fields
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|field| !field.is_empty())
            .map(str::to_string)
            .collect();

        if fields.is_empty() {
            return Err(ApiError::bad_request("Fields are required"));
        }
        Ok(fields)
    }
}

/// Read selected fields of every row
#[utoipa::path(
    get,
    path = "/api/dataApi",
    params(DataQuery),
    responses(
        (status = 200, description = "Rows restricted to the requested fields"),
        (status = 400, description = "Missing table name, missing fields or unknown field", body = ApiError),
        (status = 404, description = "Unknown table", body = ApiError),
        (status = 500, description = "Failed to fetch data", body = ApiError)
    ),
    tag = "data"
)]
pub async fn select_rows(
    State(state): State<AppState>,
    params: Result<Query<DataQuery>, QueryRejection>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let params = query(params)?;
    let table = params.table(&state)?;
    let fields = params.field_list()?;

    let rows = table
        .select(&state.db, &fields)
        .await
        .map_err(|e| ApiError::from_repository(e, "Failed to fetch data"))?;

    Ok(Json(rows))
}

/// Insert a row
#[utoipa::path(
    post,
    path = "/api/dataApi",
    params(DataQuery),
    responses(
        (status = 201, description = "Created row"),
        (status = 400, description = "Missing table name or invalid body", body = ApiError),
        (status = 404, description = "Unknown table", body = ApiError),
        (status = 500, description = "Failed to create record", body = ApiError)
    ),
    tag = "data"
)]
pub async fn insert_row(
    State(state): State<AppState>,
    params: Result<Query<DataQuery>, QueryRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let params = query(params)?;
    let table = params.table(&state)?;
    let payload = body(payload)?;

    let row = table
        .insert(&state.db, payload)
        .await
        .map_err(|e| ApiError::from_repository(e, "Failed to create record"))?;

    Ok((StatusCode::CREATED, Json(row)))
}

/// Update a row by id
#[utoipa::path(
    put,
    path = "/api/dataApi",
    params(DataQuery),
    responses(
        (status = 200, description = "Updated row"),
        (status = 400, description = "Missing table name or id", body = ApiError),
        (status = 404, description = "Unknown table", body = ApiError),
        (status = 500, description = "Failed to update record", body = ApiError)
    ),
    tag = "data"
)]
pub async fn update_row(
    State(state): State<AppState>,
    params: Result<Query<DataQuery>, QueryRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let params = query(params)?;
    let table = params.table(&state)?;
    let id = parse_id(params.id.as_deref())?;
    let payload = body(payload)?;

    let row = table
        .update(&state.db, id, payload)
        .await
        .map_err(|e| ApiError::from_repository(e, "Failed to update record"))?;

    Ok(Json(row))
}

/// Delete a row by id
#[utoipa::path(
    delete,
    path = "/api/dataApi",
    params(DataQuery),
    responses(
        (status = 204, description = "Row deleted"),
        (status = 400, description = "Missing table name or id", body = ApiError),
        (status = 404, description = "Unknown table", body = ApiError),
        (status = 500, description = "Failed to delete record", body = ApiError)
    ),
    tag = "data"
)]
pub async fn delete_row(
    State(state): State<AppState>,
    params: Result<Query<DataQuery>, QueryRejection>,
) -> Result<StatusCode, ApiError> {
    let params = query(params)?;
    let table = params.table(&state)?;
    let id = parse_id(params.id.as_deref())?;

    table
        .delete(&state.db, id)
        .await
        .map_err(|e| ApiError::from_repository(e, "Failed to delete record"))?;

    tracing::info!(table = table.table_name(), id, "Record deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Other methods: a missing table name is still reported first
pub async fn unsupported_method(params: Result<Query<DataQuery>, QueryRejection>) -> Response {
    match query(params).and_then(|params| params.table_name().map(|_| ())) {
        Ok(()) => error::method_not_allowed(),
        Err(err) => err.into_response(),
    }
}
