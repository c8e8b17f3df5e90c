mod common;

use axum::http::StatusCode;
use common::{create, send, setup_test_app};
use serde_json::json;

#[tokio::test]
async fn test_get_class_with_unknown_id_is_not_found() {
    let (app, _) = setup_test_app();

    let (status, body) = send(&app, "GET", "/classes/000000000000000000000000", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "ClassRoom not found");
}

#[tokio::test]
async fn test_malformed_class_id_is_bad_request() {
    let (app, _) = setup_test_app();

    for method in ["GET", "DELETE"] {
        let (status, body) = send(&app, method, "/classes/not-an-id", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid id");
    }

    let (status, _) = send(
        &app,
        "PUT",
        "/classes/65a1b2c3d4e5f60718293a4",
        Some(json!({"name": "Grade 1A"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_uppercase_hex_id_accepted() {
    let (app, _) = setup_test_app();
    let id = create(&app, "classes", json!({"name": "Grade 5A", "year": 2025})).await;

    let (status, body) = send(&app, "GET", &format!("/classes/{}", id.to_uppercase()), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["_id"], id);
}

#[tokio::test]
async fn test_class_defaults_and_update() {
    let (app, _) = setup_test_app();
    let id = create(&app, "classes", json!({"name": "Grade 5A", "year": 2025})).await;

    let (_, body) = send(&app, "GET", &format!("/classes/{id}"), None).await;
    assert_eq!(body["subject_ids"], json!([]));
    assert!(body.get("class_teacher_id").is_none());

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/classes/{id}"),
        Some(json!({"class_teacher_id": "65a1b2c3d4e5f60718293a4b"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "GET", &format!("/classes/{id}"), None).await;
    assert_eq!(body["class_teacher_id"], "65a1b2c3d4e5f60718293a4b");
    assert_eq!(body["year"], 2025);
}

#[tokio::test]
async fn test_class_year_must_be_integer() {
    let (app, _) = setup_test_app();

    let (status, _) = send(
        &app,
        "POST",
        "/classes",
        Some(json!({"name": "Grade 5A", "year": "twenty"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_class_fields_are_only_type_checked() {
    let (app, _) = setup_test_app();

    let (status, _) = send(
        &app,
        "POST",
        "/classes",
        Some(json!({"name": "", "year": 1850})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_class_search_escapes_wildcards() {
    let (app, _) = setup_test_app();
    create(&app, "classes", json!({"name": "Grade 5A", "year": 2025})).await;
    create(&app, "classes", json!({"name": "Top 10%", "year": 2025})).await;

    let (_, body) = send(&app, "GET", "/classes?q=%25", None).await;
    let classes = body.as_array().unwrap();
    assert_eq!(classes.len(), 1);
    assert_eq!(classes[0]["name"], "Top 10%");
}

#[tokio::test]
async fn test_update_with_empty_body_still_matches() {
    let (app, _) = setup_test_app();
    let id = create(&app, "classes", json!({"name": "Grade 5A", "year": 2025})).await;

    let (status, body) = send(&app, "PUT", &format!("/classes/{id}"), Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["updated"], true);
}
