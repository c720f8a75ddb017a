// tests/e2e_categories.rs
use axum::http::{Method, StatusCode};
use serde_json::json;

mod support;
use support::{
    ADMIN_TOKEN, AUTHOR_TOKEN, TestApp, assert_redirect, empty_request, flash_of, form_post, get,
    json_request, read_json,
};

#[tokio::test]
async fn category_with_articles_is_kept_with_warning() {
    let app = TestApp::new();
    let category = app.seeded.rust_category;

    let resp = app
        .send(empty_request(
            Method::DELETE,
            &format!("/categories/{category}"),
            Some(ADMIN_TOKEN),
        ))
        .await;
    let body = assert_redirect(resp, "/categories").await;
    assert_eq!(flash_of(&body), ("warning", "message.category_contains_articles"));
    assert!(app.store.has_category(category));
    assert_eq!(app.store.article_count(), 1);
}

#[tokio::test]
async fn empty_category_is_deleted() {
    let app = TestApp::new();
    let category = app.seeded.empty_category;

    let resp = app
        .send(get(&format!("/categories/{category}/delete"), Some(ADMIN_TOKEN)))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["category"]["name"], "Empty");

    let resp = app
        .send(form_post(
            &format!("/categories/{category}"),
            Some(ADMIN_TOKEN),
            "_method=DELETE",
        ))
        .await;
    let body = assert_redirect(resp, "/categories").await;
    assert_eq!(flash_of(&body), ("success", "message.deleted_successfully"));
    assert!(!app.store.has_category(category));
}

#[tokio::test]
async fn admin_creates_and_renames_category() {
    let app = TestApp::new();

    let resp = app
        .send(json_request(
            Method::POST,
            "/categories",
            Some(ADMIN_TOKEN),
            json!({ "name": "Web Services" }),
        ))
        .await;
    let body = assert_redirect(resp, "/categories").await;
    assert_eq!(flash_of(&body), ("success", "message.created_successfully"));
    let id = body["resource"]["id"].as_i64().expect("category id");
    assert_eq!(body["resource"]["code"], "web-services");

    let resp = app
        .send(json_request(
            Method::PUT,
            &format!("/categories/{id}"),
            Some(ADMIN_TOKEN),
            json!({ "name": "Networking" }),
        ))
        .await;
    let body = assert_redirect(resp, "/categories").await;
    assert_eq!(flash_of(&body), ("success", "message.updated_successfully"));
    assert_eq!(body["resource"]["name"], "Networking");

    let resp = app.send(get("/categories", None)).await;
    let body = read_json(resp).await;
    let names: Vec<&str> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|item| item["name"].as_str())
        .collect();
    assert_eq!(names, vec!["Empty", "Networking", "Rust"]);
    assert_eq!(body["per_page"], 6);
}

#[tokio::test]
async fn duplicate_or_short_names_are_rejected() {
    let app = TestApp::new();

    let resp = app
        .send(json_request(
            Method::POST,
            "/categories",
            Some(ADMIN_TOKEN),
            json!({ "name": "Go" }),
        ))
        .await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let resp = app
        .send(json_request(
            Method::POST,
            "/categories",
            Some(ADMIN_TOKEN),
            json!({ "name": "Rust" }),
        ))
        .await;
    assert!(matches!(
        resp.status(),
        StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY
    ));
}

#[tokio::test]
async fn regular_user_cannot_manage_categories() {
    let app = TestApp::new();
    let category = app.seeded.empty_category;

    let resp = app
        .send(empty_request(
            Method::DELETE,
            &format!("/categories/{category}"),
            Some(AUTHOR_TOKEN),
        ))
        .await;
    let body = assert_redirect(resp, "/").await;
    assert_eq!(flash_of(&body), ("warning", "message.access_denied"));
    assert!(app.store.has_category(category));
}
