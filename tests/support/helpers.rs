// tests/support/helpers.rs
use super::mocks::{self, DummyPasswordHasher, DummyTokenManager, FixedClock, MemoryStore};
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use folio_core::application::services::{ApplicationServices, Ports, Repositories};
use folio_core::domain::user::Role;
use folio_core::infrastructure::{
    markdown::PulldownMarkdownRenderer, storage::LocalFileStorage, util::DefaultSlugGenerator,
};
use folio_core::presentation::http::{
    routes::{RouterOptions, build_app},
    state::HttpState,
};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub const PNG_BYTES: [u8; 12] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 13];
const MULTIPART_BOUNDARY: &str = "folio-test-boundary";

/// Ids of the rows every [`TestApp`] starts with.
#[derive(Debug, Clone, Copy)]
pub struct Seeded {
    pub rust_category: i64,
    pub empty_category: i64,
    pub axum_tag: i64,
    pub author_article: i64,
}

pub struct TestApp {
    pub router: Router,
    pub store: MemoryStore,
    pub services: Arc<ApplicationServices>,
    pub seeded: Seeded,
    upload_dir: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        let store = MemoryStore::default();
        let admin = store.seed_user("Ada", "ada@example.com", &[Role::Admin]);
        let author = store.seed_user("Bob", "bob@example.com", &[]);
        let reader = store.seed_user("Cleo", "cleo@example.com", &[]);
        assert_eq!(
            (admin, author, reader),
            (mocks::ADMIN_ID, mocks::AUTHOR_ID, mocks::READER_ID)
        );

        let rust_category = store.seed_category("Rust");
        let empty_category = store.seed_category("Empty");
        let axum_tag = store.seed_tag("axum");
        let author_article =
            store.seed_article("Routing with axum", author, rust_category, &[axum_tag]);

        let upload_dir = tempfile::tempdir().expect("temp upload dir");
        let services = Arc::new(ApplicationServices::new(
            repositories(&store),
            ports(upload_dir.path().to_path_buf()),
        ));
        let state = HttpState {
            services: Arc::clone(&services),
            upload_dir: upload_dir.path().to_path_buf(),
        };
        let router = build_app(state, &RouterOptions::default());

        Self {
            router,
            store,
            services,
            seeded: Seeded {
                rust_category,
                empty_category,
                axum_tag,
                author_article,
            },
            upload_dir,
        }
    }

    pub fn upload_path(&self, file: &str) -> PathBuf {
        self.upload_dir.path().join(file)
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        use tower::ServiceExt as _;
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible")
    }
}

pub fn repositories(store: &MemoryStore) -> Repositories {
    Repositories {
        users: Arc::new(store.clone()),
        follows: Arc::new(store.clone()),
        article_write: Arc::new(store.clone()),
        article_read: Arc::new(store.clone()),
        categories: Arc::new(store.clone()),
        tags: Arc::new(store.clone()),
        comments: Arc::new(store.clone()),
        photos: Arc::new(store.clone()),
        avatars: Arc::new(store.clone()),
    }
}

pub fn ports(upload_dir: PathBuf) -> Ports {
    Ports {
        password_hasher: Arc::new(DummyPasswordHasher),
        token_manager: Arc::new(DummyTokenManager),
        clock: Arc::new(FixedClock),
        slugger: Arc::new(DefaultSlugGenerator),
        storage: Arc::new(LocalFileStorage::new(upload_dir, "/uploads")),
        markdown: Arc::new(PulldownMarkdownRenderer),
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, bearer(token));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn json_request(method: Method, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, bearer(token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// A `POST` with an urlencoded body, the way an HTML form submits.
pub fn form_post(uri: &str, token: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, bearer(token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn empty_request(method: Method, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, bearer(token));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn upload(
    method: Method,
    uri: &str,
    token: Option<&str>,
    content_type: &str,
    bytes: &[u8],
) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{MULTIPART_BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"picture.png\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{MULTIPART_BOUNDARY}--\r\n").as_bytes());

    let mut builder = Request::builder().method(method).uri(uri).header(
        header::CONTENT_TYPE,
        format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
    );
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, bearer(token));
    }
    builder.body(Body::from(body)).unwrap()
}

pub async fn read_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected a JSON body")
}

/// Asserts a `303 See Other` to `location` and returns the JSON body.
pub async fn assert_redirect(resp: Response, location: &str) -> Value {
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let actual = resp
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert_eq!(actual, location);
    read_json(resp).await
}

pub fn flash_of(body: &Value) -> (&str, &str) {
    let flash = &body["flash"];
    (
        flash["level"].as_str().unwrap_or_default(),
        flash["message"].as_str().unwrap_or_default(),
    )
}
