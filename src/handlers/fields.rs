//! `/api/fieldsApi`: column metadata for a table
//!
//! The table name is always bound as a query parameter, never spliced into
//! the SQL text.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use sea_orm::{ConnectionTrait, DatabaseBackend, DbErr, FromQueryResult, Statement};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::query;
use crate::error::ApiError;
use crate::server::AppState;

const POSTGRES_COLUMNS_SQL: &str = r#"
SELECT column_name::text AS column_name,
       data_type::text AS data_type,
       character_maximum_length::int8 AS character_maximum_length,
       is_nullable::text AS is_nullable
FROM information_schema.columns
WHERE table_name = $1 AND table_schema = current_schema()
ORDER BY ordinal_position
"#;

const SQLITE_COLUMNS_SQL: &str = r#"
SELECT name AS column_name,
       type AS data_type,
       NULL AS character_maximum_length,
       CASE WHEN "notnull" = 1 THEN 'NO' ELSE 'YES' END AS is_nullable
FROM pragma_table_info(?)
ORDER BY cid
"#;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct FieldsQuery {
    /// Accessor name or SQL table name
    pub table_name: Option<String>,
}

/// One column of a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromQueryResult, ToSchema)]
pub struct FieldInfo {
    #[schema(example = "first_name")]
    pub column_name: String,
    #[schema(example = "text")]
    pub data_type: String,
    pub character_maximum_length: Option<i64>,
    /// `YES` or `NO`
    #[schema(example = "NO")]
    pub is_nullable: String,
}

/// Column metadata for a table
#[utoipa::path(
    get,
    path = "/api/fieldsApi",
    params(FieldsQuery),
    responses(
        (status = 200, description = "Columns in declaration order; empty for unknown tables", body = [FieldInfo]),
        (status = 400, description = "Table name is required", body = ApiError),
        (status = 500, description = "Failed to fetch fields", body = ApiError)
    ),
    tag = "data"
)]
pub async fn list_fields(
    State(state): State<AppState>,
    params: Result<Query<FieldsQuery>, QueryRejection>,
) -> Result<Json<Vec<FieldInfo>>, ApiError> {
    let params = query(params)?;
    let requested = params
        .table_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ApiError::bad_request("Table name is required"))?;

    // Accessor names map to their SQL table; anything else is looked up as given.
    let table_name = state
        .registry
        .resolve(requested)
        .map(|table| table.table_name().to_string())
        .unwrap_or_else(|_| requested.to_string());

    let statement = columns_statement(state.db.get_database_backend(), &table_name)
        .map_err(|e| {
            tracing::error!(error = %e, "Unsupported database backend for field lookup");
            ApiError::internal("Failed to fetch fields")
        })?;

    let fields = FieldInfo::find_by_statement(statement)
        .all(&state.db)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, table = %table_name, "Failed to fetch fields");
            ApiError::internal("Failed to fetch fields")
        })?;

    Ok(Json(fields))
}

/// Builds the catalog query for `backend` with `table_name` as a bound value
pub fn columns_statement(backend: DatabaseBackend, table_name: &str) -> Result<Statement, DbErr> {
    let sql = match backend {
        DatabaseBackend::Postgres => POSTGRES_COLUMNS_SQL,
        DatabaseBackend::Sqlite => SQLITE_COLUMNS_SQL,
        other => {
            return Err(DbErr::Custom(format!(
                "column metadata is not supported for {other:?}"
            )));
        }
    };

    Ok(Statement::from_sql_and_values(
        backend,
        sql,
        [table_name.into()],
    ))
}
