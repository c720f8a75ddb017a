// tests/e2e_media.rs
use axum::http::{Method, StatusCode};

mod support;
use support::{
    ADMIN_TOKEN, AUTHOR_ID, AUTHOR_TOKEN, PNG_BYTES, READER_ID, READER_TOKEN, TestApp,
    assert_redirect, empty_request, flash_of, get, upload,
};

#[tokio::test]
async fn replacing_avatar_removes_previous_file() {
    let app = TestApp::new();

    let resp = app
        .send(upload(Method::POST, "/avatar", Some(READER_TOKEN), "image/png", &PNG_BYTES))
        .await;
    let body = assert_redirect(resp, &format!("/authors/{READER_ID}")).await;
    assert_eq!(flash_of(&body), ("success", "message.created_successfully"));
    let first = app.store.avatar_file(READER_ID).expect("avatar stored");
    assert!(app.upload_path(&first).exists());
    assert_eq!(body["resource"]["url"], format!("/uploads/{first}"));

    let avatar_id = app.store.avatar_id(READER_ID).unwrap();
    let resp = app
        .send(upload(
            Method::PUT,
            &format!("/avatar/{avatar_id}"),
            Some(READER_TOKEN),
            "image/png",
            &PNG_BYTES,
        ))
        .await;
    let body = assert_redirect(resp, &format!("/authors/{READER_ID}")).await;
    assert_eq!(flash_of(&body), ("success", "message.updated_successfully"));

    let second = app.store.avatar_file(READER_ID).unwrap();
    assert_ne!(first, second);
    assert!(!app.upload_path(&first).exists());
    assert!(app.upload_path(&second).exists());
}

#[tokio::test]
async fn avatar_delete_removes_row_and_file() {
    let app = TestApp::new();
    app.send(upload(Method::POST, "/avatar", Some(READER_TOKEN), "image/png", &PNG_BYTES))
        .await;
    let file = app.store.avatar_file(READER_ID).unwrap();
    let avatar_id = app.store.avatar_id(READER_ID).unwrap();

    let resp = app
        .send(empty_request(
            Method::DELETE,
            &format!("/avatar/{avatar_id}"),
            Some(AUTHOR_TOKEN),
        ))
        .await;
    assert_redirect(resp, &format!("/authors/{AUTHOR_ID}")).await;
    assert!(app.store.avatar_file(READER_ID).is_some());

    let resp = app
        .send(empty_request(
            Method::DELETE,
            &format!("/avatar/{avatar_id}"),
            Some(READER_TOKEN),
        ))
        .await;
    let body = assert_redirect(resp, &format!("/authors/{READER_ID}")).await;
    assert_eq!(flash_of(&body), ("success", "message.deleted_successfully"));
    assert!(app.store.avatar_file(READER_ID).is_none());
    assert!(!app.upload_path(&file).exists());
}

#[tokio::test]
async fn non_image_upload_is_rejected() {
    let app = TestApp::new();
    let resp = app
        .send(upload(Method::POST, "/avatar", Some(READER_TOKEN), "text/plain", b"hello"))
        .await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(app.store.avatar_file(READER_ID).is_none());
}

#[tokio::test]
async fn article_photo_is_added_then_replaced() {
    let app = TestApp::new();
    let article = app.seeded.author_article;

    let resp = app
        .send(upload(
            Method::POST,
            &format!("/articles/{article}/photo"),
            Some(AUTHOR_TOKEN),
            "image/png",
            &PNG_BYTES,
        ))
        .await;
    let body = assert_redirect(resp, &format!("/articles/{article}")).await;
    assert_eq!(flash_of(&body), ("success", "message.photo_created_successfully"));
    let (photo_id, first) = app.store.photo_of(article).expect("photo stored");

    let resp = app
        .send(upload(
            Method::PUT,
            &format!("/articles/{article}/photo/{photo_id}"),
            Some(ADMIN_TOKEN),
            "image/jpeg",
            &[0xFF, 0xD8, 0xFF, 0xE0, 0, 16],
        ))
        .await;
    let body = assert_redirect(resp, &format!("/articles/{article}")).await;
    assert_eq!(flash_of(&body), ("success", "message.photo_updated_successfully"));
    let (_, second) = app.store.photo_of(article).unwrap();
    assert!(second.ends_with(".jpg"));
    assert!(!app.upload_path(&first).exists());

    let resp = app.send(get(&format!("/uploads/{second}"), None)).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn stranger_cannot_attach_photo() {
    let app = TestApp::new();
    let article = app.seeded.author_article;

    let resp = app
        .send(upload(
            Method::POST,
            &format!("/articles/{article}/photo"),
            Some(READER_TOKEN),
            "image/png",
            &PNG_BYTES,
        ))
        .await;
    let body = assert_redirect(resp, &format!("/articles/{article}")).await;
    assert_eq!(flash_of(&body).1, "message.access_denied");
    assert!(app.store.photo_of(article).is_none());
}
