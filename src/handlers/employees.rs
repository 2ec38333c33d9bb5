//! `/api/employeesApi`: employee CRUD
//!
//! Responses carry the employee's skills, levels, assignments, reviews and
//! current salary. Deleting an employee removes all of those first.

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection, rejection::QueryRejection},
};

use super::{IdQuery, body, query};
use crate::error::ApiError;
use crate::models::employee;
use crate::repositories::payload::EmployeePayload;
use crate::repositories::{EmployeeDetails, EmployeeRepository};
use crate::server::AppState;

/// List employees
#[utoipa::path(
    get,
    path = "/api/employeesApi",
    responses(
        (status = 200, description = "Every employee with skills, levels, assignments, reviews and current salary"),
        (status = 500, description = "Failed to fetch employees", body = ApiError)
    ),
    tag = "employees"
)]
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmployeeDetails>>, ApiError> {
    let employees = EmployeeRepository::new(&state.db)
        .list_with_details()
        .await
        .map_err(|e| ApiError::from_repository(e, "Failed to fetch employees"))?;

    Ok(Json(employees))
}

/// Create an employee
#[utoipa::path(
    post,
    path = "/api/employeesApi",
    request_body = EmployeePayload,
    responses(
        (status = 200, description = "Created employee"),
        (status = 400, description = "Missing required fields or invalid JSON", body = ApiError),
        (status = 500, description = "Failed to create employee", body = ApiError)
    ),
    tag = "employees"
)]
pub async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<EmployeePayload>, JsonRejection>,
) -> Result<Json<EmployeeDetails>, ApiError> {
    let payload = body(payload)?;

    let employee = EmployeeRepository::new(&state.db)
        .create(payload)
        .await
        .map_err(|e| ApiError::from_repository(e, "Failed to create employee"))?;

    tracing::info!(employee_id = employee.employee.id, "Employee created");
    Ok(Json(employee))
}

/// Update an employee
#[utoipa::path(
    put,
    path = "/api/employeesApi",
    params(IdQuery),
    request_body = EmployeePayload,
    responses(
        (status = 200, description = "Updated employee"),
        (status = 400, description = "Missing or invalid id", body = ApiError),
        (status = 500, description = "Failed to update employee", body = ApiError)
    ),
    tag = "employees"
)]
pub async fn update_employee(
    State(state): State<AppState>,
    params: Result<Query<IdQuery>, QueryRejection>,
    payload: Result<Json<EmployeePayload>, JsonRejection>,
) -> Result<Json<EmployeeDetails>, ApiError> {
    let id = query(params)?.require()?;
    let payload = body(payload)?;

    let employee = EmployeeRepository::new(&state.db)
        .update(id, payload)
        .await
        .map_err(|e| ApiError::from_repository(e, "Failed to update employee"))?;

    Ok(Json(employee))
}

/// Delete an employee
#[utoipa::path(
    delete,
    path = "/api/employeesApi",
    params(IdQuery),
    responses(
        (status = 200, description = "Deleted employee"),
        (status = 400, description = "Missing or invalid id", body = ApiError),
        (status = 500, description = "Failed to delete employee", body = ApiError)
    ),
    tag = "employees"
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    params: Result<Query<IdQuery>, QueryRejection>,
) -> Result<Json<employee::Model>, ApiError> {
    let id = query(params)?.require()?;

    let employee = EmployeeRepository::new(&state.db)
        .delete(id)
        .await
        .map_err(|e| ApiError::from_repository(e, "Failed to delete employee"))?;

    tracing::info!(employee_id = id, "Employee and dependent records deleted");
    Ok(Json(employee))
}
