//! End-to-end tests for the contact JSON API over a temporary SQLite file.

use actix_web::http::{StatusCode, header};
use actix_web::test;
use rstest::rstest;
use serde_json::{Value, json};

mod support;

use support::{TestDatabase, test_app};

#[rstest]
#[actix_web::test]
async fn list_returns_seeded_contact() {
    let db = TestDatabase::new().await;
    db.seed_john_doe().await;
    let app = test::init_service(test_app(db.http_state())).await;

    let req = test::TestRequest::get().uri("/api/contacts").to_request();
    let body: Vec<Value> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["name"], "John Doe");
    assert_eq!(body[0]["type"], "Personal");
}

#[rstest]
#[actix_web::test]
async fn get_returns_single_contact() {
    let db = TestDatabase::new().await;
    let john = db.seed_john_doe().await;
    let app = test::init_service(test_app(db.http_state())).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/contacts/{}", john.id()))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["id"], john.id().get());
    assert_eq!(body["email"], "john@example.com");
}

#[rstest]
#[actix_web::test]
async fn create_then_fetch_returns_same_fields() {
    let db = TestDatabase::new().await;
    let app = test::init_service(test_app(db.http_state())).await;

    let req = test::TestRequest::post()
        .uri("/api/contacts")
        .set_json(json!({
            "name": "Jane Doe",
            "phone": "9876543210",
            "email": "jane@example.com",
            "type": "Personal"
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let location = res
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .expect("location header")
        .to_owned();
    let created: Value = test::read_body_json(res).await;
    assert_eq!(location, format!("/api/contacts/{}", created["id"]));

    let req = test::TestRequest::get().uri(&location).to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched, created);
    assert_eq!(fetched["name"], "Jane Doe");
    assert_eq!(fetched["type"], "Personal");
}

#[rstest]
#[actix_web::test]
async fn invalid_create_is_rejected_and_not_listed() {
    let db = TestDatabase::new().await;
    let app = test::init_service(test_app(db.http_state())).await;

    let req = test::TestRequest::post()
        .uri("/api/contacts")
        .set_json(json!({"name": "Invalid User"}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let error: Value = test::read_body_json(res).await;
    assert_eq!(error["code"], "invalid_request");
    assert_eq!(error["details"]["field"], "phone");
    assert!(error["traceId"].is_string());

    let req = test::TestRequest::get().uri("/api/contacts").to_request();
    let body: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert!(body.iter().all(|contact| contact["name"] != "Invalid User"));
}

#[rstest]
#[actix_web::test]
async fn partial_update_leaves_other_fields() {
    let db = TestDatabase::new().await;
    let john = db.seed_john_doe().await;
    let app = test::init_service(test_app(db.http_state())).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/contacts/{}", john.id()))
        .set_json(json!({"name": "Updated Name"}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/contacts/{}", john.id()))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["name"], "Updated Name");
    assert_eq!(body["phone"], "1234567890");
    assert_eq!(body["email"], "john@example.com");
    assert_eq!(body["type"], "Personal");
}

#[rstest]
#[actix_web::test]
async fn blank_update_field_is_rejected() {
    let db = TestDatabase::new().await;
    let john = db.seed_john_doe().await;
    let app = test::init_service(test_app(db.http_state())).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/contacts/{}", john.id()))
        .set_json(json!({"email": "   "}))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[rstest]
#[actix_web::test]
async fn delete_then_fetch_is_not_found() {
    let db = TestDatabase::new().await;
    let john = db.seed_john_doe().await;
    let app = test::init_service(test_app(db.http_state())).await;
    let uri = format!("/api/contacts/{}", john.id());

    let req = test::TestRequest::delete().uri(&uri).to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert!(test::read_body(res).await.is_empty());

    let req = test::TestRequest::get().uri(&uri).to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete().uri(&uri).to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[case("/api/contacts/999")]
#[case("/api/contacts/not-a-number")]
#[actix_web::test]
async fn unknown_ids_are_not_found(#[case] uri: &str) {
    let db = TestDatabase::new().await;
    let app = test::init_service(test_app(db.http_state())).await;

    let req = test::TestRequest::get().uri(uri).to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let trace_header = res
        .headers()
        .get("trace-id")
        .and_then(|value| value.to_str().ok())
        .expect("trace-id header")
        .to_owned();
    let error: Value = test::read_body_json(res).await;
    assert_eq!(error["code"], "not_found");
    assert_eq!(error["traceId"], trace_header);
}

#[rstest]
#[actix_web::test]
async fn search_parameter_filters_case_insensitively() {
    let db = TestDatabase::new().await;
    db.seed_john_doe().await;
    db.seed("Jane Roe", "555", "jane@example.com", "Work").await;
    let app = test::init_service(test_app(db.http_state())).await;

    let req = test::TestRequest::get()
        .uri("/api/contacts?search=JOHN")
        .to_request();
    let body: Vec<Value> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["name"], "John Doe");
}
