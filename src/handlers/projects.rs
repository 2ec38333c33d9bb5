//! `/api/projectsApi`: project CRUD

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection, rejection::QueryRejection},
};

use super::{IdQuery, body, query};
use crate::error::ApiError;
use crate::models::project;
use crate::repositories::payload::ProjectPayload;
use crate::repositories::{ProjectRepository, ProjectWithRelations};
use crate::server::AppState;

/// List projects with status and account
#[utoipa::path(
    get,
    path = "/api/projectsApi",
    responses(
        (status = 200, description = "Every project with its `status` and `account`"),
        (status = 500, description = "Failed to fetch projects", body = ApiError)
    ),
    tag = "projects"
)]
pub async fn list_projects(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProjectWithRelations>>, ApiError> {
    let projects = ProjectRepository::new(&state.db)
        .list_with_relations()
        .await
        .map_err(|e| ApiError::from_repository(e, "Failed to fetch projects"))?;

    Ok(Json(projects))
}

/// Create a project
#[utoipa::path(
    post,
    path = "/api/projectsApi",
    request_body = ProjectPayload,
    responses(
        (status = 200, description = "Created project"),
        (status = 400, description = "Missing required fields or invalid JSON", body = ApiError),
        (status = 500, description = "Failed to create project", body = ApiError)
    ),
    tag = "projects"
)]
pub async fn create_project(
    State(state): State<AppState>,
    payload: Result<Json<ProjectPayload>, JsonRejection>,
) -> Result<Json<project::Model>, ApiError> {
    let payload = body(payload)?;

    let project = ProjectRepository::new(&state.db)
        .create(payload)
        .await
        .map_err(|e| ApiError::from_repository(e, "Failed to create project"))?;

    tracing::info!(project_id = project.id, "Project created");
    Ok(Json(project))
}

/// Update a project
#[utoipa::path(
    put,
    path = "/api/projectsApi",
    params(IdQuery),
    request_body = ProjectPayload,
    responses(
        (status = 200, description = "Updated project"),
        (status = 400, description = "Missing or invalid id", body = ApiError),
        (status = 500, description = "Failed to update project", body = ApiError)
    ),
    tag = "projects"
)]
pub async fn update_project(
    State(state): State<AppState>,
    params: Result<Query<IdQuery>, QueryRejection>,
    payload: Result<Json<ProjectPayload>, JsonRejection>,
) -> Result<Json<project::Model>, ApiError> {
    let id = query(params)?.require()?;
    let payload = body(payload)?;

    let project = ProjectRepository::new(&state.db)
        .update(id, payload)
        .await
        .map_err(|e| ApiError::from_repository(e, "Failed to update project"))?;

    Ok(Json(project))
}

/// Delete a project
#[utoipa::path(
    delete,
    path = "/api/projectsApi",
    params(IdQuery),
    responses(
        (status = 200, description = "Deleted project"),
        (status = 400, description = "Missing or invalid id", body = ApiError),
        (status = 500, description = "Failed to delete project", body = ApiError)
    ),
    tag = "projects"
)]
pub async fn delete_project(
    State(state): State<AppState>,
    params: Result<Query<IdQuery>, QueryRejection>,
) -> Result<Json<project::Model>, ApiError> {
    let id = query(params)?.require()?;

    let project = ProjectRepository::new(&state.db)
        .delete(id)
        .await
        .map_err(|e| ApiError::from_repository(e, "Failed to delete project"))?;

    tracing::info!(project_id = id, "Project deleted");
    Ok(Json(project))
}
