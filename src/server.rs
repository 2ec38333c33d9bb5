//! # Server Configuration
//!
//! Router assembly and the serve loop. The JSON API lives under `/api`, the
//! management pages at the root, and the OpenAPI docs under `/docs`.

use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router, middleware,
    routing::{get, post},
};
use sea_orm::DatabaseConnection;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppConfig;
use crate::repositories::TableRegistry;
use crate::{db, handlers, telemetry, ui};

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Tables reachable through the generic data route
    pub registry: Arc<TableRegistry>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: AppConfig) -> Self {
        Self {
            db,
            registry: Arc::new(TableRegistry::standard()),
            config: Arc::new(config),
        }
    }
}

fn api_routes() -> Router<AppState> {
    use handlers::{accounts, data, employees, fields, projects, skills, statuses};

    Router::new()
        .route("/api", get(handlers::root))
        .route(
            "/api/accountsApi",
            get(accounts::list_accounts)
                .post(accounts::create_account)
                .put(accounts::update_account)
                .delete(accounts::delete_account)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/projectsApi",
            get(projects::list_projects)
                .post(projects::create_project)
                .put(projects::update_project)
                .delete(projects::delete_project)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/employeesApi",
            get(employees::list_employees)
                .post(employees::create_employee)
                .put(employees::update_employee)
                .delete(employees::delete_employee)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/skillsApi",
            get(skills::list_skills)
                .post(skills::create_skill)
                .put(skills::update_skill)
                .delete(skills::delete_skill)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/statusesApi",
            get(statuses::list_statuses)
                .post(statuses::create_status)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/dataApi",
            get(data::select_rows)
                .post(data::insert_row)
                .put(data::update_row)
                .delete(data::delete_row)
                .fallback(data::unsupported_method),
        )
        .route(
            "/api/fieldsApi",
            get(fields::list_fields).fallback(handlers::method_not_allowed),
        )
}

fn page_routes() -> Router<AppState> {
    use ui::pages;

    Router::new()
        .route("/", get(pages::dashboard_page))
        .route(
            "/accounts",
            get(pages::accounts_page).post(pages::create_account),
        )
        .route("/accounts/{id}", post(pages::update_account))
        .route("/accounts/{id}/delete", post(pages::delete_account))
        .route(
            "/projects",
            get(pages::projects_page).post(pages::create_project),
        )
        .route("/projects/{id}", post(pages::update_project))
        .route("/projects/{id}/delete", post(pages::delete_project))
        .route(
            "/employees",
            get(pages::employees_page).post(pages::create_employee),
        )
        .route("/employees/{id}", post(pages::update_employee))
        .route("/employees/{id}/delete", post(pages::delete_employee))
        .route("/skills", get(pages::skills_page).post(pages::create_skill))
        .route("/skills/{id}", post(pages::update_skill))
        .route("/skills/{id}/delete", post(pages::delete_skill))
}

/// Creates and configures the Axum application router
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(api_routes())
        .merge(page_routes())
        .route("/healthz", get(handlers::healthz))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(middleware::from_fn(telemetry::trace_requests))
        .layer(TraceLayer::new_for_http())
}

/// Serves the application until Ctrl-C, then closes the pool
pub async fn run_server(config: AppConfig, db: DatabaseConnection) -> anyhow::Result<()> {
    let addr = config.bind_addr().context("Invalid server address")?;
    let profile = config.profile.clone();

    let app = create_app(AppState::new(db.clone(), config));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!(%addr, %profile, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped, closing database pool");
    db::close(db).await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        crate::handlers::healthz,
        crate::handlers::accounts::list_accounts,
        crate::handlers::accounts::create_account,
        crate::handlers::accounts::update_account,
        crate::handlers::accounts::delete_account,
        crate::handlers::projects::list_projects,
        crate::handlers::projects::create_project,
        crate::handlers::projects::update_project,
        crate::handlers::projects::delete_project,
        crate::handlers::employees::list_employees,
        crate::handlers::employees::create_employee,
        crate::handlers::employees::update_employee,
        crate::handlers::employees::delete_employee,
        crate::handlers::skills::list_skills,
        crate::handlers::skills::create_skill,
        crate::handlers::skills::update_skill,
        crate::handlers::skills::delete_skill,
        crate::handlers::statuses::list_statuses,
        crate::handlers::statuses::create_status,
        crate::handlers::data::select_rows,
        crate::handlers::data::insert_row,
        crate::handlers::data::update_row,
        crate::handlers::data::delete_row,
        crate::handlers::fields::list_fields,
    ),
    components(
        schemas(
            crate::models::ServiceInfo,
            crate::error::ApiError,
            crate::error::MethodNotAllowed,
            crate::handlers::fields::FieldInfo,
            crate::repositories::payload::AccountPayload,
            crate::repositories::payload::StatusPayload,
            crate::repositories::payload::ProjectPayload,
            crate::repositories::payload::EmployeePayload,
            crate::repositories::payload::SkillPayload,
        )
    ),
    tags(
        (name = "root", description = "Service endpoints"),
        (name = "accounts", description = "Client accounts"),
        (name = "projects", description = "Projects delivered for accounts"),
        (name = "employees", description = "Employees and their records"),
        (name = "skills", description = "Skill catalogue"),
        (name = "statuses", description = "Project statuses"),
        (name = "data", description = "Generic table access"),
    ),
    info(
        title = "Backoffice API",
        description = "API for managing accounts, projects, employees and skills",
        version = env!("CARGO_PKG_VERSION"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_entity_routes() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api",
            "/healthz",
            "/api/accountsApi",
            "/api/projectsApi",
            "/api/employeesApi",
            "/api/skillsApi",
            "/api/statusesApi",
            "/api/dataApi",
            "/api/fieldsApi",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
