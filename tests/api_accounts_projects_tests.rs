//! Integration tests for the account, project and status routes

use axum::http::{Method, StatusCode};
use serde_json::json;

#[path = "test_utils/mod.rs"]
mod test_utils;

use test_utils::{insert_account, insert_project, insert_status, send_json, setup_test_app};

#[tokio::test]
async fn test_create_account_then_list() {
    let (app, _db) = setup_test_app().await.unwrap();

    let (status, created) = send_json(
        &app,
        Method::POST,
        "/api/accountsApi",
        Some(json!({ "name": "Acme" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["name"], "Acme");
    assert!(created["id"].as_i64().unwrap() > 0);
    assert!(created["createdAt"].is_string());

    let (status, listed) = send_json(&app, Method::GET, "/api/accountsApi", None).await;
    assert_eq!(status, StatusCode::OK);
    let accounts = listed.as_array().unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0]["id"], created["id"]);
    assert_eq!(accounts[0]["projects"], json!([]));
}

#[tokio::test]
async fn test_create_account_missing_name() {
    let (app, _db) = setup_test_app().await.unwrap();

    let (status, body) = send_json(&app, Method::POST, "/api/accountsApi", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Missing required fields: name" }));
}

#[tokio::test]
async fn test_update_account_renames() {
    let (app, db) = setup_test_app().await.unwrap();
    let account = insert_account(&db, "Acme").await.unwrap();

    let (status, body) = send_json(
        &app,
        Method::PUT,
        &format!("/api/accountsApi?id={}", account.id),
        Some(json!({ "name": "Acme Corp" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Acme Corp");
    assert_eq!(body["id"], account.id);
}

#[tokio::test]
async fn test_update_missing_account_is_500() {
    let (app, _db) = setup_test_app().await.unwrap();

    let (status, body) = send_json(
        &app,
        Method::PUT,
        "/api/accountsApi?id=999",
        Some(json!({ "name": "Ghost" })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to update account" }));
}

#[tokio::test]
async fn test_id_validation_on_every_entity_route() {
    let (app, _db) = setup_test_app().await.unwrap();

    for route in [
        "/api/accountsApi",
        "/api/projectsApi",
        "/api/employeesApi",
        "/api/skillsApi",
    ] {
        let (status, body) = send_json(&app, Method::DELETE, route, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{route}");
        assert_eq!(body, json!({ "error": "ID is required" }));

        let (status, body) = send_json(
            &app,
            Method::PUT,
            &format!("{route}?id=abc"),
            Some(json!({})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{route}");
        assert_eq!(body, json!({ "error": "ID must be a number" }));
    }
}

#[tokio::test]
async fn test_unsupported_methods_are_405() {
    let (app, _db) = setup_test_app().await.unwrap();

    for (method, route) in [
        (Method::PATCH, "/api/accountsApi"),
        (Method::PATCH, "/api/projectsApi"),
        (Method::PATCH, "/api/employeesApi"),
        (Method::PATCH, "/api/skillsApi"),
        (Method::DELETE, "/api/statusesApi"),
        (Method::POST, "/api/fieldsApi"),
        (Method::PATCH, "/api/dataApi?tableName=account"),
    ] {
        let (status, body) = send_json(&app, method.clone(), route, None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{method} {route}");
        assert_eq!(body, json!({ "message": "Method not allowed" }));
    }
}

#[tokio::test]
async fn test_delete_account_with_projects_fails() {
    let (app, db) = setup_test_app().await.unwrap();
    let account = insert_account(&db, "Acme").await.unwrap();
    let status = insert_status(&db, "Active").await.unwrap();
    insert_project(&db, "Portal", status.id, account.id)
        .await
        .unwrap();

    let (code, body) = send_json(
        &app,
        Method::DELETE,
        &format!("/api/accountsApi?id={}", account.id),
        None,
    )
    .await;
    assert_eq!(code, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to delete account" }));
}

#[tokio::test]
async fn test_delete_account_returns_row() {
    let (app, db) = setup_test_app().await.unwrap();
    let account = insert_account(&db, "Short-lived").await.unwrap();

    let (status, body) = send_json(
        &app,
        Method::DELETE,
        &format!("/api/accountsApi?id={}", account.id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Short-lived");

    let (_, listed) = send_json(&app, Method::GET, "/api/accountsApi", None).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_projects_include_status_and_account() {
    let (app, db) = setup_test_app().await.unwrap();
    let account = insert_account(&db, "TechCorp Solutions").await.unwrap();
    let status = insert_status(&db, "Active").await.unwrap();

    let (code, created) = send_json(
        &app,
        Method::POST,
        "/api/projectsApi",
        Some(json!({
            "name": "E-commerce Platform",
            "description": "Online store",
            "startDate": "2024-01-15",
            "plannedEndDate": "2024-06-30T00:00:00.000Z",
            "statusId": status.id.to_string(),
            "accountId": account.id
        })),
    )
    .await;
    assert_eq!(code, StatusCode::OK);
    assert_eq!(created["plannedEndDate"], "2024-06-30");
    assert_eq!(created["statusId"], status.id);

    let (code, listed) = send_json(&app, Method::GET, "/api/projectsApi", None).await;
    assert_eq!(code, StatusCode::OK);
    assert_eq!(listed[0]["name"], "E-commerce Platform");
    assert_eq!(listed[0]["status"]["status"], "Active");
    assert_eq!(listed[0]["account"]["name"], "TechCorp Solutions");

    let (_, accounts) = send_json(&app, Method::GET, "/api/accountsApi", None).await;
    assert_eq!(accounts[0]["projects"][0]["name"], "E-commerce Platform");
}

#[tokio::test]
async fn test_create_project_reports_all_missing_fields() {
    let (app, _db) = setup_test_app().await.unwrap();

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/projectsApi",
        Some(json!({ "name": "Half a project" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "error": "Missing required fields: startDate, plannedEndDate, statusId, accountId" })
    );
}

#[tokio::test]
async fn test_update_project_changes_only_submitted_fields() {
    let (app, db) = setup_test_app().await.unwrap();
    let account = insert_account(&db, "Acme").await.unwrap();
    let status = insert_status(&db, "Active").await.unwrap();
    let on_hold = insert_status(&db, "On Hold").await.unwrap();
    let project = insert_project(&db, "Portal", status.id, account.id)
        .await
        .unwrap();

    let (code, body) = send_json(
        &app,
        Method::PUT,
        &format!("/api/projectsApi?id={}", project.id),
        Some(json!({ "statusId": on_hold.id })),
    )
    .await;
    assert_eq!(code, StatusCode::OK);
    assert_eq!(body["statusId"], on_hold.id);
    assert_eq!(body["name"], "Portal");
    assert_eq!(body["startDate"], "2024-01-15");
}

#[tokio::test]
async fn test_statuses_list_active_in_label_order() {
    let (app, db) = setup_test_app().await.unwrap();

    for label in ["Planning", "Active", "Archived"] {
        let (status, body) = send_json(
            &app,
            Method::POST,
            "/api/statusesApi",
            Some(json!({ "status": label, "description": format!("{label} projects") })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["isActive"], true);
    }

    // Deactivate one through the generic route.
    let archived = backoffice::repositories::StatusRepository::new(&db)
        .find_by_label("Archived")
        .await
        .unwrap()
        .unwrap();
    let (status, _) = send_json(
        &app,
        Method::PUT,
        &format!("/api/dataApi?tableName=projectStatus&id={}", archived.id),
        Some(json!({ "isActive": false })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, listed) = send_json(&app, Method::GET, "/api/statusesApi", None).await;
    assert_eq!(status, StatusCode::OK);
    let labels: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["status"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["Active", "Planning"]);
}

#[tokio::test]
async fn test_create_status_requires_label() {
    let (app, _db) = setup_test_app().await.unwrap();

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/statusesApi",
        Some(json!({ "description": "no label" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Missing required fields: status" }));
}

#[tokio::test]
async fn test_invalid_json_body_is_400() {
    let (app, _db) = setup_test_app().await.unwrap();

    let request = axum::http::Request::builder()
        .method(Method::POST)
        .uri("/api/accountsApi")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.headers().contains_key("x-trace-id"));
}

#[tokio::test]
async fn test_service_info_and_health() {
    let (app, _db) = setup_test_app().await.unwrap();

    let (status, info) = send_json(&app, Method::GET, "/api", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(info["service"], "backoffice");

    let (status, health) = send_json(&app, Method::GET, "/healthz", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_update_project_clears_description() {
    let (app, db) = setup_test_app().await.unwrap();
    let account = insert_account(&db, "Acme").await.unwrap();
    let status = insert_status(&db, "Active").await.unwrap();
    let project = insert_project(&db, "Portal", status.id, account.id)
        .await
        .unwrap();
    let uri = format!("/api/projectsApi?id={}", project.id);

    let (_, body) = send_json(&app, Method::PUT, &uri, Some(json!({ "description": "Old text" }))).await;
    assert_eq!(body["description"], "Old text");

    let (code, body) = send_json(&app, Method::PUT, &uri, Some(json!({ "name": "Portal v2" }))).await;
    assert_eq!(code, StatusCode::OK);
    assert_eq!(body["description"], "Old text");

    let (code, body) = send_json(&app, Method::PUT, &uri, Some(json!({ "description": "" }))).await;
    assert_eq!(code, StatusCode::OK);
    assert!(body["description"].is_null());

    send_json(&app, Method::PUT, &uri, Some(json!({ "description": "Again" }))).await;
    let (code, body) = send_json(&app, Method::PUT, &uri, Some(json!({ "description": null }))).await;
    assert_eq!(code, StatusCode::OK);
    assert!(body["description"].is_null());
    assert_eq!(body["name"], "Portal v2");
}
