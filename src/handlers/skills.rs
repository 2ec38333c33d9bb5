//! `/api/skillsApi`: skill CRUD

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection, rejection::QueryRejection},
};

use super::{IdQuery, body, query};
use crate::error::ApiError;
use crate::models::skill;
use crate::repositories::payload::SkillPayload;
use crate::repositories::{SkillRepository, SkillWithEmployees};
use crate::server::AppState;

/// List skills alphabetically
#[utoipa::path(
    get,
    path = "/api/skillsApi",
    responses(
        (status = 200, description = "Every skill ordered by name, each with its `employeeSkills`"),
        (status = 500, description = "Failed to fetch skills", body = ApiError)
    ),
    tag = "skills"
)]
pub async fn list_skills(
    State(state): State<AppState>,
) -> Result<Json<Vec<SkillWithEmployees>>, ApiError> {
    let skills = SkillRepository::new(&state.db)
        .list_with_employees()
        .await
        .map_err(|e| ApiError::from_repository(e, "Failed to fetch skills"))?;

    Ok(Json(skills))
}

/// Create a skill
#[utoipa::path(
    post,
    path = "/api/skillsApi",
    request_body = SkillPayload,
    responses(
        (status = 200, description = "Created skill"),
        (status = 400, description = "Missing required fields or invalid JSON", body = ApiError),
        (status = 500, description = "Failed to create skill", body = ApiError)
    ),
    tag = "skills"
)]
pub async fn create_skill(
    State(state): State<AppState>,
    payload: Result<Json<SkillPayload>, JsonRejection>,
) -> Result<Json<SkillWithEmployees>, ApiError> {
    let payload = body(payload)?;

    let skill = SkillRepository::new(&state.db)
        .create(payload)
        .await
        .map_err(|e| ApiError::from_repository(e, "Failed to create skill"))?;

    tracing::info!(skill_id = skill.skill.id, "Skill created");
    Ok(Json(skill))
}

/// Update a skill
#[utoipa::path(
    put,
    path = "/api/skillsApi",
    params(IdQuery),
    request_body = SkillPayload,
    responses(
        (status = 200, description = "Updated skill"),
        (status = 400, description = "Missing or invalid id", body = ApiError),
        (status = 500, description = "Failed to update skill", body = ApiError)
    ),
    tag = "skills"
)]
pub async fn update_skill(
    State(state): State<AppState>,
    params: Result<Query<IdQuery>, QueryRejection>,
    payload: Result<Json<SkillPayload>, JsonRejection>,
) -> Result<Json<SkillWithEmployees>, ApiError> {
    let id = query(params)?.require()?;
    let payload = body(payload)?;

    let skill = SkillRepository::new(&state.db)
        .update(id, payload)
        .await
        .map_err(|e| ApiError::from_repository(e, "Failed to update skill"))?;

    Ok(Json(skill))
}

/// Delete a skill
#[utoipa::path(
    delete,
    path = "/api/skillsApi",
    params(IdQuery),
    responses(
        (status = 200, description = "Deleted skill"),
        (status = 400, description = "Missing or invalid id", body = ApiError),
        (status = 500, description = "Failed to delete skill", body = ApiError)
    ),
    tag = "skills"
)]
pub async fn delete_skill(
    State(state): State<AppState>,
    params: Result<Query<IdQuery>, QueryRejection>,
) -> Result<Json<skill::Model>, ApiError> {
    let id = query(params)?.require()?;

    let skill = SkillRepository::new(&state.db)
        .delete(id)
        .await
        .map_err(|e| ApiError::from_repository(e, "Failed to delete skill"))?;

    tracing::info!(skill_id = id, "Skill deleted");
    Ok(Json(skill))
}
