//! Integration tests for the employee and skill routes, including the
//! dependent-row cleanup that runs before an employee or skill is deleted

use axum::http::{Method, StatusCode};
use backoffice::models::{employee_skill, project_assignment, salary};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter};
use serde_json::json;

#[path = "test_utils/mod.rs"]
mod test_utils;

use test_utils::{
    insert_account, insert_employee, insert_project, insert_skill, insert_status, send_json,
    setup_test_app,
};

async fn post_data(app: &axum::Router, table: &str, body: serde_json::Value) -> serde_json::Value {
    let (status, created) = send_json(
        app,
        Method::POST,
        &format!("/api/dataApi?tableName={table}"),
        Some(body),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "insert into {table}: {created}");
    created
}

#[tokio::test]
async fn test_create_employee_returns_details() {
    let (app, _db) = setup_test_app().await.unwrap();

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/employeesApi",
        Some(json!({
            "firstName": "Jane",
            "lastName": "Smith",
            "position": "Project Manager",
            "employmentType": "Full-time",
            "hireDate": "2022-05-10",
            "contactInfo": "jane.smith@company.com"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["firstName"], "Jane");
    assert_eq!(body["hireDate"], "2022-05-10");
    assert_eq!(body["employeeSkills"], json!([]));
    assert_eq!(body["projectAssignments"], json!([]));
    assert_eq!(body["salaries"], json!([]));
}

#[tokio::test]
async fn test_create_employee_missing_fields() {
    let (app, _db) = setup_test_app().await.unwrap();

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/employeesApi",
        Some(json!({ "firstName": "Jane", "lastName": "Smith" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "error": "Missing required fields: position, employmentType, hireDate, contactInfo" })
    );
}

#[tokio::test]
async fn test_employee_listing_resolves_related_rows() {
    let (app, db) = setup_test_app().await.unwrap();
    let employee = insert_employee(&db, "John", "Doe", "Full-time").await.unwrap();
    let skill = insert_skill(&db, "JavaScript").await.unwrap();
    let account = insert_account(&db, "Acme").await.unwrap();
    let status = insert_status(&db, "Active").await.unwrap();
    let project = insert_project(&db, "Portal", status.id, account.id)
        .await
        .unwrap();

    post_data(
        &app,
        "employeeSkill",
        json!({ "employeeId": employee.id, "skillId": skill.id, "proficiencyLevel": 5 }),
    )
    .await;
    post_data(
        &app,
        "salary",
        json!({ "employeeId": employee.id, "amount": 5000, "startDate": "2023-01-15" }),
    )
    .await;
    post_data(
        &app,
        "salary",
        json!({ "employeeId": employee.id, "amount": 6500.5, "startDate": "2024-01-01" }),
    )
    .await;
    post_data(
        &app,
        "projectAssignment",
        json!({ "employeeId": employee.id, "projectId": project.id, "role": "Lead" }),
    )
    .await;

    let (status, listed) = send_json(&app, Method::GET, "/api/employeesApi", None).await;
    assert_eq!(status, StatusCode::OK);

    let john = &listed[0];
    assert_eq!(john["employeeSkills"][0]["skill"]["skillName"], "JavaScript");
    assert_eq!(john["employeeSkills"][0]["proficiencyLevel"], 5);
    assert_eq!(john["projectAssignments"][0]["project"]["name"], "Portal");
    let salaries = john["salaries"].as_array().unwrap();
    assert_eq!(salaries.len(), 1);
    assert_eq!(salaries[0]["amount"], 6500.5);
}

#[tokio::test]
async fn test_delete_employee_removes_dependents() {
    let (app, db) = setup_test_app().await.unwrap();
    let employee = insert_employee(&db, "Mike", "Johnson", "Contract").await.unwrap();
    let other = insert_employee(&db, "Jane", "Smith", "Full-time").await.unwrap();
    let skill = insert_skill(&db, "React").await.unwrap();
    let account = insert_account(&db, "Acme").await.unwrap();
    let status = insert_status(&db, "Active").await.unwrap();
    let project = insert_project(&db, "Portal", status.id, account.id)
        .await
        .unwrap();

    for owner in [employee.id, other.id] {
        post_data(
            &app,
            "employeeSkill",
            json!({ "employeeId": owner, "skillId": skill.id, "proficiencyLevel": 4 }),
        )
        .await;
        post_data(
            &app,
            "salary",
            json!({ "employeeId": owner, "amount": 4200, "startDate": "2023-09-01" }),
        )
        .await;
        post_data(
            &app,
            "projectAssignment",
            json!({ "employeeId": owner, "projectId": project.id }),
        )
        .await;
    }
    post_data(
        &app,
        "employeeLevel",
        json!({ "employeeId": employee.id, "level": "Senior", "effectiveDate": "2024-01-01" }),
    )
    .await;
    post_data(
        &app,
        "performanceReview",
        json!({ "employeeId": employee.id, "reviewDate": "2024-03-01", "rating": 4 }),
    )
    .await;
    post_data(
        &app,
        "absence",
        json!({ "employeeId": employee.id, "startDate": "2024-02-01", "endDate": "2024-02-05" }),
    )
    .await;

    let (code, body) = send_json(
        &app,
        Method::DELETE,
        &format!("/api/employeesApi?id={}", employee.id),
        None,
    )
    .await;
    assert_eq!(code, StatusCode::OK);
    assert_eq!(body["firstName"], "Mike");

    let remaining_skills = employee_skill::Entity::find()
        .filter(employee_skill::Column::EmployeeId.eq(employee.id))
        .count(&db)
        .await
        .unwrap();
    let remaining_salaries = salary::Entity::find()
        .filter(salary::Column::EmployeeId.eq(employee.id))
        .count(&db)
        .await
        .unwrap();
    let remaining_assignments = project_assignment::Entity::find()
        .filter(project_assignment::Column::EmployeeId.eq(employee.id))
        .count(&db)
        .await
        .unwrap();
    assert_eq!(remaining_skills, 0);
    assert_eq!(remaining_salaries, 0);
    assert_eq!(remaining_assignments, 0);

    // The other employee keeps their rows.
    let (_, listed) = send_json(&app, Method::GET, "/api/employeesApi", None).await;
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], other.id);
    assert_eq!(listed[0]["employeeSkills"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_missing_employee_is_500() {
    let (app, _db) = setup_test_app().await.unwrap();

    let (status, body) = send_json(&app, Method::DELETE, "/api/employeesApi?id=404", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to delete employee" }));
}

#[tokio::test]
async fn test_update_employee_partial() {
    let (app, db) = setup_test_app().await.unwrap();
    let employee = insert_employee(&db, "John", "Doe", "Contract").await.unwrap();

    let (status, body) = send_json(
        &app,
        Method::PUT,
        &format!("/api/employeesApi?id={}", employee.id),
        Some(json!({ "employmentType": "Full-time", "position": "Senior Developer" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["employmentType"], "Full-time");
    assert_eq!(body["position"], "Senior Developer");
    assert_eq!(body["lastName"], "Doe");
}

#[tokio::test]
async fn test_skills_listed_by_name_with_holders() {
    let (app, db) = setup_test_app().await.unwrap();
    let employee = insert_employee(&db, "John", "Doe", "Full-time").await.unwrap();

    for name in ["React", "JavaScript", "Node.js"] {
        let (status, body) = send_json(
            &app,
            Method::POST,
            "/api/skillsApi",
            Some(json!({ "skillName": name, "description": format!("{name} development") })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["employeeSkills"], json!([]));
    }

    let (_, listed) = send_json(&app, Method::GET, "/api/skillsApi", None).await;
    let names: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["skillName"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["JavaScript", "Node.js", "React"]);

    let js_id = listed[0]["id"].as_i64().unwrap();
    post_data(
        &app,
        "employeeSkill",
        json!({ "employeeId": employee.id, "skillId": js_id, "proficiencyLevel": 5 }),
    )
    .await;

    let (_, listed) = send_json(&app, Method::GET, "/api/skillsApi", None).await;
    assert_eq!(listed[0]["employeeSkills"][0]["employee"]["firstName"], "John");
}

#[tokio::test]
async fn test_delete_skill_removes_links() {
    let (app, db) = setup_test_app().await.unwrap();
    let employee = insert_employee(&db, "John", "Doe", "Full-time").await.unwrap();
    let skill = insert_skill(&db, "Node.js").await.unwrap();
    post_data(
        &app,
        "employeeSkill",
        json!({ "employeeId": employee.id, "skillId": skill.id, "proficiencyLevel": 3 }),
    )
    .await;

    let (status, body) = send_json(
        &app,
        Method::DELETE,
        &format!("/api/skillsApi?id={}", skill.id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["skillName"], "Node.js");

    let links = employee_skill::Entity::find()
        .filter(employee_skill::Column::SkillId.eq(skill.id))
        .count(&db)
        .await
        .unwrap();
    assert_eq!(links, 0);

    let (_, employees) = send_json(&app, Method::GET, "/api/employeesApi", None).await;
    assert_eq!(employees[0]["employeeSkills"], json!([]));
}

#[tokio::test]
async fn test_update_skill_description() {
    let (app, db) = setup_test_app().await.unwrap();
    let skill = insert_skill(&db, "React").await.unwrap();

    let (status, body) = send_json(
        &app,
        Method::PUT,
        &format!("/api/skillsApi?id={}", skill.id),
        Some(json!({ "description": "Component-based UI library" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["skillName"], "React");
    assert_eq!(body["description"], "Component-based UI library");
}

#[tokio::test]
async fn test_failed_employee_delete_rolls_back_dependents() {
    let (app, db) = setup_test_app().await.unwrap();
    let employee = insert_employee(&db, "Mike", "Johnson", "Contract").await.unwrap();
    let skill = insert_skill(&db, "React").await.unwrap();
    post_data(
        &app,
        "employeeSkill",
        json!({ "employeeId": employee.id, "skillId": skill.id, "proficiencyLevel": 4 }),
    )
    .await;
    post_data(
        &app,
        "salary",
        json!({ "employeeId": employee.id, "amount": 4200, "startDate": "2023-09-01" }),
    )
    .await;

    db.execute_unprepared(
        "CREATE TRIGGER keep_employees BEFORE DELETE ON employees \
         BEGIN SELECT RAISE(ABORT, 'employees are locked'); END;",
    )
    .await
    .unwrap();

    let (code, body) = send_json(
        &app,
        Method::DELETE,
        &format!("/api/employeesApi?id={}", employee.id),
        None,
    )
    .await;
    assert_eq!(code, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to delete employee" }));

    let skills = employee_skill::Entity::find()
        .filter(employee_skill::Column::EmployeeId.eq(employee.id))
        .count(&db)
        .await
        .unwrap();
    let salaries = salary::Entity::find()
        .filter(salary::Column::EmployeeId.eq(employee.id))
        .count(&db)
        .await
        .unwrap();
    assert_eq!(skills, 1);
    assert_eq!(salaries, 1);
}

#[tokio::test]
async fn test_failed_skill_delete_keeps_links() {
    let (app, db) = setup_test_app().await.unwrap();
    let employee = insert_employee(&db, "Jane", "Smith", "Full-time").await.unwrap();
    let skill = insert_skill(&db, "Node.js").await.unwrap();
    post_data(
        &app,
        "employeeSkill",
        json!({ "employeeId": employee.id, "skillId": skill.id, "proficiencyLevel": 3 }),
    )
    .await;

    db.execute_unprepared(
        "CREATE TRIGGER keep_skills BEFORE DELETE ON skills \
         BEGIN SELECT RAISE(ABORT, 'skills are locked'); END;",
    )
    .await
    .unwrap();

    let (code, body) = send_json(
        &app,
        Method::DELETE,
        &format!("/api/skillsApi?id={}", skill.id),
        None,
    )
    .await;
    assert_eq!(code, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to delete skill" }));

    let links = employee_skill::Entity::find()
        .filter(employee_skill::Column::SkillId.eq(skill.id))
        .count(&db)
        .await
        .unwrap();
    assert_eq!(links, 1);
}
