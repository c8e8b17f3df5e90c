mod common;

use axum::http::StatusCode;
use common::{create, send, setup_test_app};
use schoolerp_db::{Document, DocumentStore, ObjectId};
use serde_json::json;

fn invoice(number: &str, student_id: &str) -> serde_json::Value {
    json!({
        "student_id": student_id,
        "invoice_number": number,
        "issue_date": "2025-01-10",
        "due_date": "2025-02-10",
        "amount": 1250.5
    })
}

#[tokio::test]
async fn test_create_invoice_defaults_unpaid() {
    let (app, _) = setup_test_app();
    let id = create(&app, "invoices", invoice("INV-1", "s-1")).await;

    let (status, body) = send(&app, "GET", &format!("/invoices/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "unpaid");
    assert_eq!(body["amount"], 1250.5);
    assert_eq!(body["due_date"], "2025-02-10");
}

#[tokio::test]
async fn test_invoice_accepts_negative_amount() {
    let (app, _) = setup_test_app();

    let mut body = invoice("INV-2", "s-1");
    body["amount"] = json!(-10.0);
    let id = create(&app, "invoices", body).await;

    let (_, body) = send(&app, "GET", &format!("/invoices/{id}"), None).await;
    assert_eq!(body["amount"], -10.0);
}

#[tokio::test]
async fn test_invoice_rejects_bad_dates() {
    let (app, _) = setup_test_app();

    let mut body = invoice("INV-1", "s-1");
    body["due_date"] = json!("next month");
    let (status, _) = send(&app, "POST", "/invoices", Some(body)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_invoice_search_by_status_and_student() {
    let (app, _) = setup_test_app();
    let paid = create(&app, "invoices", invoice("INV-1", "student-a")).await;
    create(&app, "invoices", invoice("INV-2", "student-b")).await;

    send(
        &app,
        "PUT",
        &format!("/invoices/{paid}"),
        Some(json!({"status": "paid"})),
    )
    .await;

    // "paid" is also a substring of "unpaid"
    let (_, body) = send(&app, "GET", "/invoices?q=paid", None).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (_, body) = send(&app, "GET", "/invoices?q=unpaid", None).await;
    let invoices = body.as_array().unwrap();
    assert_eq!(invoices.len(), 1);
    assert_eq!(invoices[0]["invoice_number"], "INV-2");

    let (_, body) = send(&app, "GET", "/invoices?q=STUDENT-A", None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_invoice_invalid_status_update() {
    let (app, _) = setup_test_app();
    let id = create(&app, "invoices", invoice("INV-1", "s-1")).await;

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/invoices/{id}"),
        Some(json!({"status": "overdue"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_documents_without_created_at_sort_last() {
    let (app, store) = setup_test_app();

    let legacy_id = ObjectId::new();
    let mut legacy = Document::new();
    legacy.insert("invoice_number".to_string(), json!("LEGACY-1"));
    store.insert_raw("feeinvoice", legacy_id, legacy).await;

    create(&app, "invoices", invoice("INV-1", "s-1")).await;

    let (_, body) = send(&app, "GET", "/invoices", None).await;
    let numbers: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["invoice_number"].as_str().unwrap())
        .collect();
    assert_eq!(numbers, vec!["INV-1", "LEGACY-1"]);

    let (status, body) = send(&app, "GET", &format!("/invoices/{legacy_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["_id"], legacy_id.to_hex());
    assert!(body.get("created_at").is_none());

    assert_eq!(store.list_collections().await.unwrap(), vec!["feeinvoice"]);
}
