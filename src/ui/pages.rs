//! Page handlers for the dashboard and the management views.
//!
//! Each management view lists its collection, shows a form that creates a
//! row (or updates the row named by `?edit=`), and renders an alert banner
//! when a load or a submission fails. Successful submissions redirect back
//! to the page.

use askama::Template;
use axum::extract::rejection::FormRejection;
use axum::extract::{Form, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use chrono::NaiveDate;

use super::form::{FormCard, FormField};
use super::search::{filter_employees, filter_skills};
use super::table::{Table, TableRow};
use super::{Frame, NavItem, PageQuery, SearchBox, StatCard, render};
use crate::client::or_empty;
use crate::dashboard::{
    AccountSummary, Dashboard, DashboardStats, EmployeeStats, EmployeeSummary, ProjectSummary,
    STATUS_ACTIVE, STATUS_COMPLETED, STATUS_ON_HOLD, SkillStats, percent,
};
use crate::error::ApiError;
use crate::repositories::payload::{AccountPayload, EmployeePayload, ProjectPayload, SkillPayload};
use crate::repositories::{
    AccountRepository, EmployeeRepository, ProjectRepository, RepositoryError, SkillRepository,
    StatusRepository,
};
use crate::server::AppState;

/// Options offered by the employment type select
pub const EMPLOYMENT_TYPES: [&str; 5] = ["Full-time", "Part-time", "Contract", "Freelance", "Intern"];

#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardPage {
    frame: Frame,
    cards: Vec<StatCard>,
    recent: Vec<RecentList>,
}

struct RecentList {
    title: &'static str,
    items: Vec<String>,
}

/// Form, optional stat cards and search, then the table
#[derive(Template)]
#[template(path = "entity.html")]
struct EntityPage {
    frame: Frame,
    form: FormCard,
    cards: Vec<StatCard>,
    search: Option<SearchBox>,
    table: Table,
}

/// Alert messages and response status collected while rendering a page
struct Banner {
    status: StatusCode,
    messages: Vec<String>,
}

impl Banner {
    fn new(query: &PageQuery, failure: Option<ApiError>) -> Self {
        let mut banner = Self {
            status: StatusCode::OK,
            messages: query.error.iter().cloned().collect(),
        };
        if let Some(err) = failure {
            banner.status = err.status;
            banner.messages.push(err.message.to_string());
        }
        banner
    }

    /// Unwraps a listing, recording a failure as a 500 with `context`
    fn load<T>(&mut self, result: Result<Vec<T>, RepositoryError>, context: &str) -> Vec<T> {
        match result {
            Ok(rows) => rows,
            Err(err) => {
                let err = ApiError::from_repository(err, context);
                if self.status.is_success() {
                    self.status = err.status;
                }
                self.messages.push(err.message.to_string());
                Vec::new()
            }
        }
    }

    /// Hands the collected messages to the page layout
    fn frame(&mut self, title: &'static str, active: NavItem) -> Frame {
        Frame::new(title, active, std::mem::take(&mut self.messages))
    }
}

fn submitted<T>(form: Result<Form<T>, FormRejection>) -> Result<T, ApiError> {
    form.map(|Form(payload)| payload)
        .map_err(|rejection| ApiError::bad_request(rejection.body_text()))
}

fn edit_query(id: i32) -> PageQuery {
    PageQuery {
        edit: Some(id.to_string()),
        ..Default::default()
    }
}

fn search_box(path: &'static str, query: &PageQuery, placeholder: &'static str) -> Option<SearchBox> {
    Some(SearchBox {
        path,
        query: query.search().to_string(),
        placeholder,
    })
}

fn date_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.to_string()).unwrap_or_default()
}

// Dashboard

pub async fn dashboard_page(State(state): State<AppState>) -> Response {
    let projects = ProjectRepository::new(&state.db);
    let employees = EmployeeRepository::new(&state.db);
    let accounts = AccountRepository::new(&state.db);

    let (projects, employees, accounts) = tokio::join!(
        projects.list_with_relations(),
        employees.list_with_details(),
        accounts.list_with_projects(),
    );

    let dashboard = Dashboard::build(
        or_empty(projects, "projects")
            .iter()
            .map(ProjectSummary::from)
            .collect(),
        or_empty(employees, "employees")
            .iter()
            .map(EmployeeSummary::from)
            .collect(),
        or_empty(accounts, "accounts")
            .iter()
            .map(AccountSummary::from)
            .collect(),
    );

    render(StatusCode::OK, &dashboard_view(&dashboard))
}

fn dashboard_cards(stats: &DashboardStats) -> Vec<StatCard> {
    let share = |count: usize, total: usize| format!("{count} ({}%)", percent(count, total));
    let projects = &stats.projects;
    let employees = &stats.employees;

    vec![
        StatCard::new("Projects", projects.total)
            .line(STATUS_ACTIVE, share(projects.active, projects.total))
            .line(STATUS_COMPLETED, share(projects.completed, projects.total))
            .line(STATUS_ON_HOLD, share(projects.on_hold, projects.total)),
        StatCard::new("Employees", employees.total)
            .line("Full-time", share(employees.full_time, employees.total))
            .line("Contract", share(employees.contract, employees.total))
            .line("On projects", share(employees.with_projects, employees.total)),
        StatCard::new("Accounts", stats.accounts.total),
    ]
}

/// Counters with percentages and the recent panels
fn dashboard_view(dashboard: &Dashboard) -> DashboardPage {
    let recent_projects = dashboard
        .recent_projects
        .iter()
        .map(|p| {
            let status = p.status_label().unwrap_or("No status");
            match &p.account {
                Some(account) => format!("{} ({}, {})", p.name, status, account.name),
                None => format!("{} ({})", p.name, status),
            }
        })
        .collect();
    let recent_employees = dashboard
        .recent_employees
        .iter()
        .map(|e| format!("{} {}, {}", e.first_name, e.last_name, e.position))
        .collect();
    let recent_accounts = dashboard
        .recent_accounts
        .iter()
        .map(|a| format!("{} ({} projects)", a.name, a.projects.len()))
        .collect();

    DashboardPage {
        frame: Frame::new("Dashboard", NavItem::Dashboard, Vec::new()),
        cards: dashboard_cards(&dashboard.stats),
        recent: vec![
            RecentList {
                title: "Recent projects",
                items: recent_projects,
            },
            RecentList {
                title: "Recent employees",
                items: recent_employees,
            },
            RecentList {
                title: "Recent accounts",
                items: recent_accounts,
            },
        ],
    }
}

// Accounts

pub async fn accounts_page(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Response {
    render_accounts(&state, &query, None).await
}

async fn render_accounts(state: &AppState, query: &PageQuery, failure: Option<ApiError>) -> Response {
    let mut banner = Banner::new(query, failure);
    let accounts = banner.load(
        AccountRepository::new(&state.db).list_with_projects().await,
        "Failed to fetch accounts",
    );

    let current = query
        .editing_id()
        .and_then(|id| accounts.iter().find(|a| a.account.id == id))
        .map(|a| &a.account);

    let form = FormCard::new(
        "account",
        "/accounts",
        current.map(|a| a.id),
        vec![FormField::text("Name", "name", current.map(|a| a.name.clone()).unwrap_or_default()).required()],
    );

    let rows = accounts
        .iter()
        .map(|a| {
            TableRow::new(
                a.account.id,
                vec![
                    a.account.name.clone(),
                    a.account.created_at.format("%Y-%m-%d").to_string(),
                    a.projects.len().to_string(),
                ],
            )
        })
        .collect();

    let page = EntityPage {
        frame: banner.frame("Accounts", NavItem::Accounts),
        form,
        cards: Vec::new(),
        search: None,
        table: Table::new("/accounts", &["Name", "Created", "Projects"], rows),
    };
    render(banner.status, &page)
}

pub async fn create_account(
    State(state): State<AppState>,
    form: Result<Form<AccountPayload>, FormRejection>,
) -> Response {
    let result = match submitted(form) {
        Ok(payload) => AccountRepository::new(&state.db)
            .create(payload)
            .await
            .map_err(|err| ApiError::from_repository(err, "Failed to create account")),
        Err(err) => Err(err),
    };

    match result {
        Ok(_) => Redirect::to("/accounts").into_response(),
        Err(err) => render_accounts(&state, &PageQuery::default(), Some(err)).await,
    }
}

pub async fn update_account(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    form: Result<Form<AccountPayload>, FormRejection>,
) -> Response {
    let result = match submitted(form) {
        Ok(payload) => AccountRepository::new(&state.db)
            .update(id, payload)
            .await
            .map_err(|err| ApiError::from_repository(err, "Failed to update account")),
        Err(err) => Err(err),
    };

    match result {
        Ok(_) => Redirect::to("/accounts").into_response(),
        Err(err) => render_accounts(&state, &edit_query(id), Some(err)).await,
    }
}

pub async fn delete_account(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    match AccountRepository::new(&state.db).delete(id).await {
        Ok(_) => Redirect::to("/accounts").into_response(),
        Err(err) => {
            let err = ApiError::from_repository(err, "Failed to delete account");
            render_accounts(&state, &PageQuery::default(), Some(err)).await
        }
    }
}

// Projects

pub async fn projects_page(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Response {
    render_projects(&state, &query, None).await
}

async fn render_projects(state: &AppState, query: &PageQuery, failure: Option<ApiError>) -> Response {
    let mut banner = Banner::new(query, failure);

    let project_repo = ProjectRepository::new(&state.db);
    let status_repo = StatusRepository::new(&state.db);
    let account_repo = AccountRepository::new(&state.db);
    let (projects, statuses, accounts) = tokio::join!(
        project_repo.list_with_relations(),
        status_repo.list_active(),
        account_repo.list_with_projects(),
    );
    let projects = banner.load(projects, "Failed to fetch projects");
    let statuses = banner.load(statuses, "Failed to fetch statuses");
    let accounts = banner.load(accounts, "Failed to fetch accounts");

    let current = query
        .editing_id()
        .and_then(|id| projects.iter().find(|p| p.project.id == id))
        .map(|p| &p.project);

    let form = FormCard::new(
        "project",
        "/projects",
        current.map(|p| p.id),
        vec![
            FormField::text("Name", "name", current.map(|p| p.name.clone()).unwrap_or_default()).required(),
            FormField::textarea(
                "Description",
                "description",
                current.and_then(|p| p.description.clone()).unwrap_or_default(),
            ),
            FormField::date("Start date", "startDate", date_value(current.map(|p| p.start_date))).required(),
            FormField::date(
                "Planned end date",
                "plannedEndDate",
                date_value(current.map(|p| p.planned_end_date)),
            )
            .required(),
            FormField::select(
                "Status",
                "statusId",
                "Select status",
                statuses.iter().map(|s| (s.id.to_string(), s.status.clone())),
                &current.map(|p| p.status_id.to_string()).unwrap_or_default(),
            ),
            FormField::select(
                "Account",
                "accountId",
                "Select account",
                accounts
                    .iter()
                    .map(|a| (a.account.id.to_string(), a.account.name.clone())),
                &current.map(|p| p.account_id.to_string()).unwrap_or_default(),
            ),
        ],
    );

    let rows = projects
        .iter()
        .map(|p| {
            TableRow::new(
                p.project.id,
                vec![
                    p.project.name.clone(),
                    p.status.as_ref().map(|s| s.status.clone()).unwrap_or_default(),
                    p.account.as_ref().map(|a| a.name.clone()).unwrap_or_default(),
                    p.project.start_date.to_string(),
                    p.project.planned_end_date.to_string(),
                ],
            )
        })
        .collect();

    let page = EntityPage {
        frame: banner.frame("Projects", NavItem::Projects),
        form,
        cards: Vec::new(),
        search: None,
        table: Table::new(
            "/projects",
            &["Name", "Status", "Account", "Start date", "Planned end date"],
            rows,
        ),
    };
    render(banner.status, &page)
}

pub async fn create_project(
    State(state): State<AppState>,
    form: Result<Form<ProjectPayload>, FormRejection>,
) -> Response {
    let result = match submitted(form) {
        Ok(payload) => ProjectRepository::new(&state.db)
            .create(payload)
            .await
            .map_err(|err| ApiError::from_repository(err, "Failed to create project")),
        Err(err) => Err(err),
    };

    match result {
        Ok(_) => Redirect::to("/projects").into_response(),
        Err(err) => render_projects(&state, &PageQuery::default(), Some(err)).await,
    }
}

pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    form: Result<Form<ProjectPayload>, FormRejection>,
) -> Response {
    let result = match submitted(form) {
        Ok(payload) => ProjectRepository::new(&state.db)
            .update(id, payload)
            .await
            .map_err(|err| ApiError::from_repository(err, "Failed to update project")),
        Err(err) => Err(err),
    };

    match result {
        Ok(_) => Redirect::to("/projects").into_response(),
        Err(err) => render_projects(&state, &edit_query(id), Some(err)).await,
    }
}

pub async fn delete_project(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    match ProjectRepository::new(&state.db).delete(id).await {
        Ok(_) => Redirect::to("/projects").into_response(),
        Err(err) => {
            let err = ApiError::from_repository(err, "Failed to delete project");
            render_projects(&state, &PageQuery::default(), Some(err)).await
        }
    }
}

// Employees

pub async fn employees_page(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Response {
    render_employees(&state, &query, None).await
}

fn employee_cards(stats: &EmployeeStats) -> Vec<StatCard> {
    vec![
        StatCard::new("Total employees", stats.total),
        StatCard::new("Full-time", stats.full_time),
        StatCard::new("Contract", stats.contract),
        StatCard::new("On projects", stats.with_projects),
    ]
}

async fn render_employees(state: &AppState, query: &PageQuery, failure: Option<ApiError>) -> Response {
    let mut banner = Banner::new(query, failure);
    let employees = banner.load(
        EmployeeRepository::new(&state.db).list_with_details().await,
        "Failed to fetch employees",
    );

    let current = query
        .editing_id()
        .and_then(|id| employees.iter().find(|e| e.employee.id == id))
        .map(|e| &e.employee);
    let text = |value: Option<&String>| value.cloned().unwrap_or_default();

    let form = FormCard::new(
        "employee",
        "/employees",
        current.map(|e| e.id),
        vec![
            FormField::text("First name", "firstName", text(current.map(|e| &e.first_name))).required(),
            FormField::text("Last name", "lastName", text(current.map(|e| &e.last_name))).required(),
            FormField::text("Position", "position", text(current.map(|e| &e.position))).required(),
            FormField::select(
                "Employment type",
                "employmentType",
                "Select type",
                EMPLOYMENT_TYPES.iter().map(|t| (t.to_string(), t.to_string())),
                &text(current.map(|e| &e.employment_type)),
            ),
            FormField::date("Hire date", "hireDate", date_value(current.map(|e| e.hire_date))).required(),
            FormField::text("Contact info", "contactInfo", text(current.map(|e| &e.contact_info))).required(),
        ],
    );

    let summaries: Vec<EmployeeSummary> = employees.iter().map(EmployeeSummary::from).collect();
    let cards = employee_cards(&EmployeeStats::compute(&summaries));

    let rows = filter_employees(&employees, query.search())
        .into_iter()
        .map(|details| {
            let e = &details.employee;
            let skills = details
                .employee_skills
                .iter()
                .filter_map(|link| link.skill.as_ref().map(|s| s.skill_name.as_str()))
                .collect::<Vec<_>>()
                .join(", ");
            let salary = details
                .current_salary()
                .map(|s| format!("{:.2}", s.amount))
                .unwrap_or_else(|| "-".to_string());

            TableRow::new(
                e.id,
                vec![
                    details.full_name(),
                    e.position.clone(),
                    e.employment_type.clone(),
                    e.hire_date.to_string(),
                    e.contact_info.clone(),
                    skills,
                    salary,
                ],
            )
        })
        .collect();

    let page = EntityPage {
        frame: banner.frame("Employees", NavItem::Employees),
        form,
        cards,
        search: search_box("/employees", query, "Search employees"),
        table: Table::new(
            "/employees",
            &["Name", "Position", "Employment type", "Hire date", "Contact", "Skills", "Salary"],
            rows,
        ),
    };
    render(banner.status, &page)
}

pub async fn create_employee(
    State(state): State<AppState>,
    form: Result<Form<EmployeePayload>, FormRejection>,
) -> Response {
    let result = match submitted(form) {
        Ok(payload) => EmployeeRepository::new(&state.db)
            .create(payload)
            .await
            .map_err(|err| ApiError::from_repository(err, "Failed to create employee")),
        Err(err) => Err(err),
    };

    match result {
        Ok(_) => Redirect::to("/employees").into_response(),
        Err(err) => render_employees(&state, &PageQuery::default(), Some(err)).await,
    }
}

pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    form: Result<Form<EmployeePayload>, FormRejection>,
) -> Response {
    let result = match submitted(form) {
        Ok(payload) => EmployeeRepository::new(&state.db)
            .update(id, payload)
            .await
            .map_err(|err| ApiError::from_repository(err, "Failed to update employee")),
        Err(err) => Err(err),
    };

    match result {
        Ok(_) => Redirect::to("/employees").into_response(),
        Err(err) => render_employees(&state, &edit_query(id), Some(err)).await,
    }
}

pub async fn delete_employee(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    match EmployeeRepository::new(&state.db).delete(id).await {
        Ok(_) => Redirect::to("/employees").into_response(),
        Err(err) => {
            let err = ApiError::from_repository(err, "Failed to delete employee");
            render_employees(&state, &PageQuery::default(), Some(err)).await
        }
    }
}

// Skills

pub async fn skills_page(State(state): State<AppState>, Query(query): Query<PageQuery>) -> Response {
    render_skills(&state, &query, None).await
}

fn skill_cards(stats: &SkillStats) -> Vec<StatCard> {
    vec![
        StatCard::new("Total skills", stats.total),
        StatCard::new("Held by employees", stats.in_use),
        StatCard::new("Average proficiency", stats.average_proficiency),
        StatCard::new("Found", stats.found),
    ]
}

async fn render_skills(state: &AppState, query: &PageQuery, failure: Option<ApiError>) -> Response {
    let mut banner = Banner::new(query, failure);
    let skills = banner.load(
        SkillRepository::new(&state.db).list_with_employees().await,
        "Failed to fetch skills",
    );

    let current = query
        .editing_id()
        .and_then(|id| skills.iter().find(|s| s.skill.id == id))
        .map(|s| &s.skill);

    let form = FormCard::new(
        "skill",
        "/skills",
        current.map(|s| s.id),
        vec![
            FormField::text(
                "Skill name",
                "skillName",
                current.map(|s| s.skill_name.clone()).unwrap_or_default(),
            )
            .required(),
            FormField::textarea(
                "Description",
                "description",
                current.map(|s| s.description.clone()).unwrap_or_default(),
            )
            .required(),
        ],
    );

    let found = filter_skills(&skills, query.search());
    let levels: Vec<Vec<i32>> = skills
        .iter()
        .map(|s| {
            s.employee_skills
                .iter()
                .map(|link| link.link.proficiency_level)
                .collect()
        })
        .collect();
    let cards = skill_cards(&SkillStats::compute(&levels, found.len()));

    let rows = found
        .into_iter()
        .map(|s| {
            let holders = s
                .employee_skills
                .iter()
                .filter_map(|link| {
                    link.employee
                        .as_ref()
                        .map(|e| format!("{} {} ({})", e.first_name, e.last_name, link.link.proficiency_level))
                })
                .collect::<Vec<_>>()
                .join(", ");
            TableRow::new(
                s.skill.id,
                vec![s.skill.skill_name.clone(), s.skill.description.clone(), holders],
            )
        })
        .collect();

    let page = EntityPage {
        frame: banner.frame("Skills", NavItem::Skills),
        form,
        cards,
        search: search_box("/skills", query, "Search skills"),
        table: Table::new("/skills", &["Skill", "Description", "Employees"], rows),
    };
    render(banner.status, &page)
}

pub async fn create_skill(
    State(state): State<AppState>,
    form: Result<Form<SkillPayload>, FormRejection>,
) -> Response {
    let result = match submitted(form) {
        Ok(payload) => SkillRepository::new(&state.db)
            .create(payload)
            .await
            .map_err(|err| ApiError::from_repository(err, "Failed to create skill")),
        Err(err) => Err(err),
    };

    match result {
        Ok(_) => Redirect::to("/skills").into_response(),
        Err(err) => render_skills(&state, &PageQuery::default(), Some(err)).await,
    }
}

pub async fn update_skill(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    form: Result<Form<SkillPayload>, FormRejection>,
) -> Response {
    let result = match submitted(form) {
        Ok(payload) => SkillRepository::new(&state.db)
            .update(id, payload)
            .await
            .map_err(|err| ApiError::from_repository(err, "Failed to update skill")),
        Err(err) => Err(err),
    };

    match result {
        Ok(_) => Redirect::to("/skills").into_response(),
        Err(err) => render_skills(&state, &edit_query(id), Some(err)).await,
    }
}

pub async fn delete_skill(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    match SkillRepository::new(&state.db).delete(id).await {
        Ok(_) => Redirect::to("/skills").into_response(),
        Err(err) => {
            let err = ApiError::from_repository(err, "Failed to delete skill");
            render_skills(&state, &PageQuery::default(), Some(err)).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::{AccountName, StatusLabel};

    #[test]
    fn test_dashboard_shows_counts_and_percentages() {
        let projects = vec![
            ProjectSummary {
                id: 1,
                name: "E-commerce Platform".to_string(),
                status: Some(StatusLabel {
                    status: "Active".to_string(),
                }),
                account: Some(AccountName {
                    name: "TechCorp Solutions".to_string(),
                }),
            },
            ProjectSummary {
                id: 2,
                name: "Mobile Banking App".to_string(),
                status: Some(StatusLabel {
                    status: "Completed".to_string(),
                }),
                account: None,
            },
        ];

        let html = dashboard_view(&Dashboard::build(projects, Vec::new(), Vec::new()))
            .render()
            .unwrap();

        assert!(html.contains("Welcome to the Backoffice"));
        assert!(html.contains("<li>Active: 1 (50%)</li>"));
        assert!(html.contains("<li>Completed: 1 (50%)</li>"));
        assert!(html.contains("<li>On Hold: 0 (0%)</li>"));
        assert!(html.contains("E-commerce Platform (Active, TechCorp Solutions)"));
        assert!(html.contains("Mobile Banking App (Completed)"));
        assert!(html.contains("<li>None yet</li>"));
    }

    #[test]
    fn test_employee_cards() {
        let cards = employee_cards(&EmployeeStats {
            total: 3,
            full_time: 2,
            contract: 1,
            with_projects: 0,
        });

        let values: Vec<_> = cards.iter().map(|c| (c.title, c.value.as_str())).collect();
        assert_eq!(
            values,
            vec![
                ("Total employees", "3"),
                ("Full-time", "2"),
                ("Contract", "1"),
                ("On projects", "0"),
            ]
        );
    }

    #[test]
    fn test_skill_cards_show_decimal_average() {
        let cards = skill_cards(&SkillStats::compute(&[vec![4, 5], vec![3]], 1));

        assert_eq!(cards[1].value, "2");
        assert_eq!(cards[2].title, "Average proficiency");
        assert_eq!(cards[2].value, "3.8");
        assert_eq!(cards[3].value, "1");
    }

    #[test]
    fn test_banner_collects_failure() {
        let query = PageQuery {
            error: Some("from query".to_string()),
            ..Default::default()
        };
        let mut banner = Banner::new(&query, Some(ApiError::bad_request("Missing required fields: name")));
        let rows: Vec<i32> = banner.load(Ok(vec![1, 2]), "Failed to fetch accounts");

        assert_eq!(rows, vec![1, 2]);
        assert_eq!(banner.status, StatusCode::BAD_REQUEST);
        let frame = banner.frame("Accounts", NavItem::Accounts);
        assert_eq!(
            frame.alerts,
            vec!["from query".to_string(), "Missing required fields: name".to_string()]
        );
    }

    #[test]
    fn test_banner_load_failure_is_500() {
        let mut banner = Banner::new(&PageQuery::default(), None);
        let rows: Vec<i32> = banner.load(
            Err(RepositoryError::Database(sea_orm::DbErr::Custom("boom".to_string()))),
            "Failed to fetch skills",
        );

        assert!(rows.is_empty());
        assert_eq!(banner.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(banner.messages, vec!["Failed to fetch skills".to_string()]);
    }
}
