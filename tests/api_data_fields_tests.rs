//! Integration tests for the generic data route and column introspection

use axum::http::{Method, StatusCode};
use serde_json::json;

#[path = "test_utils/mod.rs"]
mod test_utils;

use test_utils::{insert_account, send_json, setup_test_app};

#[tokio::test]
async fn test_select_projects_requested_fields() {
    let (app, db) = setup_test_app().await.unwrap();
    let first = insert_account(&db, "TechCorp Solutions").await.unwrap();
    let second = insert_account(&db, "Innovate Inc.").await.unwrap();

    let (status, rows) = send_json(
        &app,
        Method::GET,
        "/api/dataApi?tableName=account&fields=id,name",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        rows,
        json!([
            { "id": first.id, "name": "TechCorp Solutions" },
            { "id": second.id, "name": "Innovate Inc." }
        ])
    );
}

#[tokio::test]
async fn test_sql_table_name_also_resolves() {
    let (app, db) = setup_test_app().await.unwrap();
    insert_account(&db, "Acme").await.unwrap();

    let (status, rows) = send_json(
        &app,
        Method::GET,
        "/api/dataApi?tableName=accounts&fields=name",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rows, json!([{ "name": "Acme" }]));
}

#[tokio::test]
async fn test_unknown_table_is_404() {
    let (app, _db) = setup_test_app().await.unwrap();

    let (status, body) = send_json(
        &app,
        Method::GET,
        "/api/dataApi?tableName=pg_user&fields=usename",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Unknown resource: pg_user" }));
}

#[tokio::test]
async fn test_unknown_field_is_400() {
    let (app, _db) = setup_test_app().await.unwrap();

    let (status, body) = send_json(
        &app,
        Method::GET,
        "/api/dataApi?tableName=account&fields=id,password",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Unknown field: password" }));
}

#[tokio::test]
async fn test_missing_table_or_fields() {
    let (app, _db) = setup_test_app().await.unwrap();

    let (status, body) = send_json(&app, Method::GET, "/api/dataApi?fields=id", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Table name is required" }));

    let (status, body) = send_json(&app, Method::GET, "/api/dataApi?tableName=skill", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Fields are required" }));
}

#[tokio::test]
async fn test_insert_update_delete_cycle() {
    let (app, _db) = setup_test_app().await.unwrap();

    let (status, created) = send_json(
        &app,
        Method::POST,
        "/api/dataApi?tableName=motivator",
        Some(json!({ "motivatorName": "Autonomy" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["motivatorName"], "Autonomy");
    let id = created["id"].as_i64().unwrap();

    let (status, updated) = send_json(
        &app,
        Method::PUT,
        &format!("/api/dataApi?tableName=motivator&id={id}"),
        Some(json!({ "description": "Freedom to choose how to work" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["motivatorName"], "Autonomy");
    assert_eq!(updated["description"], "Freedom to choose how to work");

    let (status, body) = send_json(
        &app,
        Method::DELETE,
        &format!("/api/dataApi?tableName=motivator&id={id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, serde_json::Value::Null);

    let (status, body) = send_json(
        &app,
        Method::DELETE,
        &format!("/api/dataApi?tableName=motivator&id={id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to delete record" }));
}

#[tokio::test]
async fn test_insert_validates_payload() {
    let (app, _db) = setup_test_app().await.unwrap();

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/dataApi?tableName=salary",
        Some(json!({ "amount": 100 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "error": "Missing required fields: employeeId, startDate" })
    );
}

#[tokio::test]
async fn test_data_delete_requires_id() {
    let (app, _db) = setup_test_app().await.unwrap();

    let (status, body) =
        send_json(&app, Method::DELETE, "/api/dataApi?tableName=skill", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "ID is required" }));
}

#[tokio::test]
async fn test_fields_lists_columns_in_order() {
    let (app, _db) = setup_test_app().await.unwrap();

    let (status, fields) =
        send_json(&app, Method::GET, "/api/fieldsApi?tableName=accounts", None).await;
    assert_eq!(status, StatusCode::OK);

    let names: Vec<&str> = fields
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["column_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["id", "name", "created_at"]);
    assert_eq!(fields[1]["is_nullable"], "NO");
}

#[tokio::test]
async fn test_fields_accepts_accessor_name() {
    let (app, _db) = setup_test_app().await.unwrap();

    let (status, fields) =
        send_json(&app, Method::GET, "/api/fieldsApi?tableName=skill", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = fields
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["column_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["id", "skill_name", "description"]);
}

#[tokio::test]
async fn test_fields_unknown_table_is_empty() {
    let (app, _db) = setup_test_app().await.unwrap();

    let (status, fields) = send_json(
        &app,
        Method::GET,
        "/api/fieldsApi?tableName=accounts';%20DROP%20TABLE%20accounts;--",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fields, json!([]));

    // The table is still there.
    let (status, _) = send_json(&app, Method::GET, "/api/accountsApi", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_fields_requires_table_name() {
    let (app, _db) = setup_test_app().await.unwrap();

    let (status, body) = send_json(&app, Method::GET, "/api/fieldsApi", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Table name is required" }));
}

#[tokio::test]
async fn test_repeated_field_keeps_its_value() {
    let (app, db) = setup_test_app().await.unwrap();
    let account = insert_account(&db, "Acme").await.unwrap();

    let (status, rows) = send_json(
        &app,
        Method::GET,
        "/api/dataApi?tableName=account&fields=id,name,id",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(rows, json!([{ "id": account.id, "name": "Acme" }]));
}

#[tokio::test]
async fn test_table_name_checked_before_method() {
    let (app, _db) = setup_test_app().await.unwrap();

    let (status, body) = send_json(&app, Method::PATCH, "/api/dataApi", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Table name is required" }));

    let (status, body) = send_json(&app, Method::PATCH, "/api/dataApi?tableName=account", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, json!({ "message": "Method not allowed" }));
}
