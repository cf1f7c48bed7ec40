//! End-to-end tests for the HTML pages over a temporary SQLite file.

use actix_web::dev::ServiceResponse;
use actix_web::http::{StatusCode, header};
use actix_web::test;
use rstest::rstest;

mod support;

use support::{TestDatabase, test_app};

async fn body_text(res: ServiceResponse) -> String {
    String::from_utf8(test::read_body(res).await.to_vec()).expect("utf8 body")
}

fn assert_redirects_home(res: &ServiceResponse) {
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        res.headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok()),
        Some("/")
    );
}

#[rstest]
#[actix_web::test]
async fn index_lists_contacts() {
    let db = TestDatabase::new().await;
    db.seed_john_doe().await;
    let app = test::init_service(test_app(db.http_state())).await;

    let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert!(body_text(res).await.contains("John Doe"));
}

#[rstest]
#[actix_web::test]
async fn add_form_creates_contact_and_redirects() {
    let db = TestDatabase::new().await;
    let app = test::init_service(test_app(db.http_state())).await;

    let req = test::TestRequest::post()
        .uri("/add")
        .set_form([
            ("name", "Jane Doe"),
            ("phone", "9876543210"),
            ("email", "jane@example.com"),
            ("type", "Personal"),
            ("submit", "Add"),
        ])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_redirects_home(&res);

    let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(body_text(res).await.contains("Jane Doe"));
}

#[rstest]
#[actix_web::test]
async fn add_form_with_missing_field_is_rejected() {
    let db = TestDatabase::new().await;
    let app = test::init_service(test_app(db.http_state())).await;

    let req = test::TestRequest::post()
        .uri("/add")
        .set_form([("name", "Invalid User"), ("phone", "")])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get().uri("/api/contacts").to_request();
    let listed: Vec<serde_json::Value> = test::call_and_read_body_json(&app, req).await;
    assert!(listed.is_empty());
}

#[rstest]
#[actix_web::test]
async fn update_form_changes_only_supplied_fields() {
    let db = TestDatabase::new().await;
    let john = db.seed_john_doe().await;
    let app = test::init_service(test_app(db.http_state())).await;

    let req = test::TestRequest::get()
        .uri(&format!("/update/{}", john.id()))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(body_text(res).await.contains("value=\"john@example.com\""));

    let req = test::TestRequest::post()
        .uri(&format!("/update/{}", john.id()))
        .set_form([("name", "Johnny Doe"), ("submit", "Save")])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_redirects_home(&res);

    let req = test::TestRequest::get()
        .uri(&format!("/api/contacts/{}", john.id()))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["name"], "Johnny Doe");
    assert_eq!(body["phone"], "1234567890");
}

#[rstest]
#[actix_web::test]
async fn delete_link_removes_contact() {
    let db = TestDatabase::new().await;
    let john = db.seed_john_doe().await;
    let app = test::init_service(test_app(db.http_state())).await;

    let req = test::TestRequest::get()
        .uri(&format!("/delete/{}", john.id()))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_redirects_home(&res);

    for uri in [
        format!("/update/{}", john.id()),
        format!("/delete/{}", john.id()),
        format!("/api/contacts/{}", john.id()),
    ] {
        let res = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}

#[rstest]
#[actix_web::test]
async fn search_page_shows_matching_contacts() {
    let db = TestDatabase::new().await;
    db.seed_john_doe().await;
    db.seed("Jane Roe", "555", "jane@example.com", "Work").await;
    let app = test::init_service(test_app(db.http_state())).await;

    let req = test::TestRequest::get()
        .uri("/contacts?search=John")
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body = body_text(res).await;
    assert!(body.contains("John Doe"));
    assert!(!body.contains("Jane Roe"));
}

#[rstest]
#[actix_web::test]
async fn user_text_is_escaped() {
    let db = TestDatabase::new().await;
    db.seed("<script>alert(1)</script>", "1", "x@example.com", "Work")
        .await;
    let app = test::init_service(test_app(db.http_state())).await;

    let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    let body = body_text(res).await;

    assert!(body.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!body.contains("<script>alert(1)</script>"));
}
