// tests/e2e_users.rs
use axum::http::{Method, StatusCode};
use serde_json::json;

mod support;
use support::{
    ADMIN_TOKEN, AUTHOR_ID, READER_ID, READER_TOKEN, TestApp, assert_redirect, empty_request,
    flash_of, form_post, get, json_request, read_json,
};

#[tokio::test]
async fn registration_then_login() {
    let app = TestApp::new();

    let resp = app
        .send(form_post(
            "/register",
            None,
            "first_name=Grace&email=grace%40example.com&password=secret1&password_repeat=secret1",
        ))
        .await;
    let body = assert_redirect(resp, "/login").await;
    assert_eq!(body["resource"]["email"], "grace@example.com");
    assert_eq!(body["resource"]["roles"], json!(["user"]));

    let resp = app
        .send(json_request(
            Method::POST,
            "/login",
            None,
            json!({ "email": "grace@example.com", "password": "secret1" }),
        ))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["token"]["token"], support::security::ISSUED_TOKEN);
    assert_eq!(body["user"]["first_name"], "Grace");
}

#[tokio::test]
async fn registration_errors_are_listed_per_field() {
    let app = TestApp::new();
    let resp = app
        .send(json_request(
            Method::POST,
            "/register",
            None,
            json!({
                "first_name": "Al",
                "email": "bob@example.com",
                "password": "short",
                "password_repeat": "other"
            }),
        ))
        .await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json(resp).await;
    assert!(body["errors"]["first_name"].is_array());
    assert_eq!(body["errors"]["password"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn duplicate_email_cannot_register() {
    let app = TestApp::new();
    let resp = app
        .send(json_request(
            Method::POST,
            "/register",
            None,
            json!({
                "first_name": "Bobby",
                "email": "bob@example.com",
                "password": "secret1",
                "password_repeat": "secret1"
            }),
        ))
        .await;
    assert!(matches!(
        resp.status(),
        StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY
    ));
}

#[tokio::test]
async fn signed_in_user_is_not_registered_again() {
    let app = TestApp::new();
    let resp = app
        .send(json_request(
            Method::POST,
            "/register",
            Some(READER_TOKEN),
            json!({}),
        ))
        .await;
    assert_redirect(resp, "/").await;
}

#[tokio::test]
async fn wrong_password_is_sent_back_to_login() {
    let app = TestApp::new();
    let resp = app
        .send(json_request(
            Method::POST,
            "/login",
            None,
            json!({ "email": "bob@example.com", "password": "wrong-password" }),
        ))
        .await;
    assert_redirect(resp, "/login").await;
}

#[tokio::test]
async fn admin_toggles_role_back_and_forth() {
    let app = TestApp::new();
    let uri = format!("/users/{READER_ID}/role");

    let resp = app.send(get(&uri, Some(ADMIN_TOKEN))).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .send(empty_request(Method::PUT, &uri, Some(ADMIN_TOKEN)))
        .await;
    let body = assert_redirect(resp, "/authors").await;
    assert_eq!(flash_of(&body), ("success", "message.user_role_edited_successfully"));
    assert!(app.store.is_admin(READER_ID));

    let resp = app
        .send(form_post(&uri, Some(ADMIN_TOKEN), "_method=PUT"))
        .await;
    assert_redirect(resp, "/authors").await;
    assert!(!app.store.is_admin(READER_ID));
}

#[tokio::test]
async fn author_with_articles_is_not_deleted() {
    let app = TestApp::new();

    let resp = app
        .send(empty_request(
            Method::DELETE,
            &format!("/users/{AUTHOR_ID}"),
            Some(ADMIN_TOKEN),
        ))
        .await;
    let body = assert_redirect(resp, "/authors").await;
    assert_eq!(flash_of(&body), ("warning", "message.user_owns_articles"));
    assert!(app.store.has_user(AUTHOR_ID));

    let resp = app
        .send(empty_request(
            Method::DELETE,
            &format!("/users/{READER_ID}"),
            Some(ADMIN_TOKEN),
        ))
        .await;
    let body = assert_redirect(resp, "/authors").await;
    assert_eq!(flash_of(&body), ("success", "message.user_deleted_successfully"));
    assert!(!app.store.has_user(READER_ID));
}

#[tokio::test]
async fn regular_user_cannot_delete_users() {
    let app = TestApp::new();
    let resp = app
        .send(empty_request(
            Method::DELETE,
            &format!("/users/{AUTHOR_ID}"),
            Some(READER_TOKEN),
        ))
        .await;
    let body = assert_redirect(resp, "/authors").await;
    assert_eq!(flash_of(&body).1, "message.access_denied");
    assert!(app.store.has_user(AUTHOR_ID));
}
