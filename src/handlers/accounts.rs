//! `/api/accountsApi`: account CRUD

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection, rejection::QueryRejection},
};

use super::{IdQuery, body, query};
use crate::error::ApiError;
use crate::models::account;
use crate::repositories::payload::AccountPayload;
use crate::repositories::{AccountRepository, AccountWithProjects};
use crate::server::AppState;

/// List accounts with their projects
#[utoipa::path(
    get,
    path = "/api/accountsApi",
    responses(
        (status = 200, description = "Every account, each with a `projects` array"),
        (status = 500, description = "Failed to fetch accounts", body = ApiError)
    ),
    tag = "accounts"
)]
pub async fn list_accounts(
    State(state): State<AppState>,
) -> Result<Json<Vec<AccountWithProjects>>, ApiError> {
    let accounts = AccountRepository::new(&state.db)
        .list_with_projects()
        .await
        .map_err(|e| ApiError::from_repository(e, "Failed to fetch accounts"))?;

    Ok(Json(accounts))
}

/// Create an account
#[utoipa::path(
    post,
    path = "/api/accountsApi",
    request_body = AccountPayload,
    responses(
        (status = 200, description = "Created account"),
        (status = 400, description = "Missing required fields or invalid JSON", body = ApiError),
        (status = 500, description = "Failed to create account", body = ApiError)
    ),
    tag = "accounts"
)]
pub async fn create_account(
    State(state): State<AppState>,
    payload: Result<Json<AccountPayload>, JsonRejection>,
) -> Result<Json<account::Model>, ApiError> {
    let payload = body(payload)?;

    let account = AccountRepository::new(&state.db)
        .create(payload)
        .await
        .map_err(|e| ApiError::from_repository(e, "Failed to create account"))?;

    tracing::info!(account_id = account.id, "Account created");
    Ok(Json(account))
}

/// Update an account
#[utoipa::path(
    put,
    path = "/api/accountsApi",
    params(IdQuery),
    request_body = AccountPayload,
    responses(
        (status = 200, description = "Updated account"),
        (status = 400, description = "Missing or invalid id", body = ApiError),
        (status = 500, description = "Failed to update account", body = ApiError)
    ),
    tag = "accounts"
)]
pub async fn update_account(
    State(state): State<AppState>,
    params: Result<Query<IdQuery>, QueryRejection>,
    payload: Result<Json<AccountPayload>, JsonRejection>,
) -> Result<Json<account::Model>, ApiError> {
    let id = query(params)?.require()?;
    let payload = body(payload)?;

    let account = AccountRepository::new(&state.db)
        .update(id, payload)
        .await
        .map_err(|e| ApiError::from_repository(e, "Failed to update account"))?;

    Ok(Json(account))
}

/// Delete an account
#[utoipa::path(
    delete,
    path = "/api/accountsApi",
    params(IdQuery),
    responses(
        (status = 200, description = "Deleted account"),
        (status = 400, description = "Missing or invalid id", body = ApiError),
        (status = 500, description = "Failed to delete account", body = ApiError)
    ),
    tag = "accounts"
)]
pub async fn delete_account(
    State(state): State<AppState>,
    params: Result<Query<IdQuery>, QueryRejection>,
) -> Result<Json<account::Model>, ApiError> {
    let id = query(params)?.require()?;

    let account = AccountRepository::new(&state.db)
        .delete(id)
        .await
        .map_err(|e| ApiError::from_repository(e, "Failed to delete account"))?;

    tracing::info!(account_id = id, "Account deleted");
    Ok(Json(account))
}
