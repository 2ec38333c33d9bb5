//! Test utilities for database and router testing.
//!
//! Sets up in-memory SQLite databases with every migration applied, builds
//! the application router over them and inserts fixture rows.

use anyhow::Result;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use backoffice::{
    config::AppConfig,
    models::{account, employee, project, project_status, skill},
    repositories::{
        AccountRepository, EmployeeRepository, Payload, ProjectRepository, SkillRepository,
        StatusRepository,
        payload::{AccountPayload, EmployeePayload, ProjectPayload, SkillPayload, StatusPayload},
    },
    server::{AppState, create_app},
};
use chrono::NaiveDate;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, ConnectionTrait, Database, DatabaseConnection, Statement};
use serde_json::Value;
use tower::ServiceExt;

/// Sets up an in-memory SQLite database with all migrations applied.
///
/// Foreign keys stay enforced so delete cascades are exercised for real.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = Database::connect("sqlite::memory:").await?;
    Migrator::up(&db, None).await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        "PRAGMA foreign_keys = ON".to_string(),
    ))
    .await?;

    Ok(db)
}

/// Router over a fresh database, plus a handle on that database
#[allow(dead_code)]
pub async fn setup_test_app() -> Result<(Router, DatabaseConnection)> {
    let db = setup_test_db().await?;
    let app = create_app(AppState::new(db.clone(), AppConfig::default()));
    Ok((app, db))
}

/// Sends a request with an optional JSON body and returns status and JSON body.
///
/// An empty body decodes as `Value::Null`.
#[allow(dead_code)]
pub async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Sends a request and returns status, `Location` header and the body as text
#[allow(dead_code)]
pub async fn send_page(
    app: &Router,
    method: Method,
    uri: &str,
    form: Option<&str>,
) -> (StatusCode, Option<String>, String) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match form {
        Some(encoded) => builder
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(encoded.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, location, String::from_utf8(bytes.to_vec()).unwrap())
}

#[allow(dead_code)]
pub fn date(raw: &str) -> NaiveDate {
    raw.parse().unwrap()
}

#[allow(dead_code)]
pub async fn insert_account(db: &DatabaseConnection, name: &str) -> Result<account::Model> {
    Ok(AccountRepository::new(db)
        .create(AccountPayload {
            name: Some(name.to_string()),
        })
        .await?)
}

#[allow(dead_code)]
pub async fn insert_status(
    db: &DatabaseConnection,
    label: &str,
) -> Result<project_status::Model> {
    Ok(StatusRepository::new(db)
        .create(StatusPayload {
            status: Some(label.to_string()),
            ..Default::default()
        })
        .await?)
}

#[allow(dead_code)]
pub async fn insert_project(
    db: &DatabaseConnection,
    name: &str,
    status_id: i32,
    account_id: i32,
) -> Result<project::Model> {
    Ok(ProjectRepository::new(db)
        .create(ProjectPayload {
            name: Some(name.to_string()),
            description: None,
            start_date: Some(date("2024-01-15")),
            planned_end_date: Some(date("2024-06-30")),
            status_id: Some(status_id),
            account_id: Some(account_id),
        })
        .await?)
}

#[allow(dead_code)]
pub async fn insert_employee(
    db: &DatabaseConnection,
    first_name: &str,
    last_name: &str,
    employment_type: &str,
) -> Result<employee::Model> {
    let details = EmployeeRepository::new(db)
        .create(EmployeePayload {
            first_name: Some(first_name.to_string()),
            last_name: Some(last_name.to_string()),
            position: Some("Developer".to_string()),
            employment_type: Some(employment_type.to_string()),
            hire_date: Some(date("2023-01-15")),
            contact_info: Some(format!(
                "{}.{}@company.com",
                first_name.to_lowercase(),
                last_name.to_lowercase()
            )),
        })
        .await?;
    Ok(details.employee)
}

#[allow(dead_code)]
pub async fn insert_skill(db: &DatabaseConnection, name: &str) -> Result<skill::Model> {
    let created = SkillRepository::new(db)
        .create(SkillPayload {
            skill_name: Some(name.to_string()),
            description: Some(format!("{name} skill")),
        })
        .await?;
    Ok(created.skill)
}

/// Inserts any row through its payload type
#[allow(dead_code)]
pub async fn insert_with<P, A>(db: &DatabaseConnection, payload: P) -> Result<()>
where
    P: Payload<A>,
    A: ActiveModelTrait + sea_orm::ActiveModelBehavior + Send + 'static,
    <A::Entity as sea_orm::EntityTrait>::Model: sea_orm::IntoActiveModel<A>,
{
    payload.build()?.insert(db).await?;
    Ok(())
}
