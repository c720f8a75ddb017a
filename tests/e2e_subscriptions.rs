// tests/e2e_subscriptions.rs
use axum::http::{Method, StatusCode};

mod support;
use support::{
    ADMIN_ID, AUTHOR_ID, AUTHOR_TOKEN, READER_ID, READER_TOKEN, TestApp, assert_redirect,
    empty_request, flash_of, get, read_json,
};

#[tokio::test]
async fn follow_then_unfollow_restores_collections() {
    let app = TestApp::new();
    app.store.seed_follow(READER_ID, ADMIN_ID);
    let follows_before = app.store.follows_of(READER_ID);
    let followers_before = app.store.followers_of(AUTHOR_ID);

    let resp = app
        .send(empty_request(
            Method::POST,
            &format!("/subscriptions/{AUTHOR_ID}/follow"),
            Some(READER_TOKEN),
        ))
        .await;
    let body = assert_redirect(resp, &format!("/authors/{AUTHOR_ID}")).await;
    assert_eq!(flash_of(&body), ("success", "message.followed_created_successfully"));
    assert!(app.store.follows_of(READER_ID).contains(&AUTHOR_ID));
    assert!(app.store.followers_of(AUTHOR_ID).contains(&READER_ID));

    let resp = app
        .send(empty_request(
            Method::POST,
            &format!("/subscriptions/{AUTHOR_ID}/unfollow"),
            Some(READER_TOKEN),
        ))
        .await;
    let body = assert_redirect(resp, &format!("/authors/{AUTHOR_ID}")).await;
    assert_eq!(flash_of(&body), ("success", "message.followed_deleted_successfully"));

    assert_eq!(app.store.follows_of(READER_ID), follows_before);
    assert_eq!(app.store.followers_of(AUTHOR_ID), followers_before);
}

#[tokio::test]
async fn repeated_follow_changes_nothing() {
    let app = TestApp::new();
    app.store.seed_follow(READER_ID, AUTHOR_ID);

    let resp = app
        .send(empty_request(
            Method::POST,
            &format!("/subscriptions/{AUTHOR_ID}/follow"),
            Some(READER_TOKEN),
        ))
        .await;
    let body = assert_redirect(resp, &format!("/authors/{AUTHOR_ID}")).await;
    assert!(body.get("flash").is_none());
    assert_eq!(app.store.follows_of(READER_ID).len(), 1);
}

#[tokio::test]
async fn users_cannot_follow_themselves() {
    let app = TestApp::new();
    let resp = app
        .send(empty_request(
            Method::POST,
            &format!("/subscriptions/{AUTHOR_ID}/follow"),
            Some(AUTHOR_TOKEN),
        ))
        .await;
    let body = assert_redirect(resp, &format!("/authors/{AUTHOR_ID}")).await;
    assert_eq!(flash_of(&body).1, "message.access_denied");
    assert!(app.store.follows_of(AUTHOR_ID).is_empty());
}

#[tokio::test]
async fn feed_and_collections_follow_the_graph() {
    let app = TestApp::new();
    app.store.seed_follow(READER_ID, AUTHOR_ID);

    let resp = app.send(get("/subscriptions", Some(READER_TOKEN))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"][0]["author"]["id"], AUTHOR_ID);

    let resp = app
        .send(get("/subscriptions/authors", Some(READER_TOKEN)))
        .await;
    let body = read_json(resp).await;
    assert_eq!(body["items"][0]["first_name"], "Bob");

    let resp = app
        .send(get("/subscriptions/followers", Some(AUTHOR_TOKEN)))
        .await;
    let body = read_json(resp).await;
    assert_eq!(body["items"][0]["first_name"], "Cleo");

    let resp = app.send(get("/subscriptions", Some(AUTHOR_TOKEN))).await;
    let body = read_json(resp).await;
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn author_profile_shows_subscription_state() {
    let app = TestApp::new();
    app.store.seed_follow(READER_ID, AUTHOR_ID);

    let resp = app
        .send(get(&format!("/authors/{AUTHOR_ID}"), Some(READER_TOKEN)))
        .await;
    let body = read_json(resp).await;
    assert_eq!(body["is_subscribed"], true);
    assert_eq!(body["is_self"], false);
    assert_eq!(body["articles"]["total"], 1);

    let resp = app.send(get(&format!("/authors/{AUTHOR_ID}"), None)).await;
    let body = read_json(resp).await;
    assert_eq!(body["is_subscribed"], false);

    let resp = app.send(get("/authors", None)).await;
    let body = read_json(resp).await;
    let names: Vec<&str> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|author| author["first_name"].as_str())
        .collect();
    assert_eq!(names, vec!["Cleo", "Bob", "Ada"]);
}
