// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{
    articles, auth, authors, categories, media, search, subscriptions, tags, users,
};
use crate::presentation::http::middleware::{
    method_override::{OVERRIDE_HEADER, method_override},
    rate_limit,
};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{get, post, put},
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};

/// Largest accepted multipart body for photo and avatar uploads.
const UPLOAD_BODY_LIMIT: usize = 5 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct RouterOptions {
    pub allowed_origins: Vec<String>,
    pub rate_limit: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:3000".into()],
            rate_limit: false,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Full application: the method override runs before route matching so a
/// `POST` carrying `_method=DELETE` reaches the `DELETE` handler.
pub fn build_app(state: HttpState, options: &RouterOptions) -> Router {
    Router::new()
        .fallback_service(build_router(state, options))
        .layer(middleware::from_fn(method_override))
}

pub fn build_router(state: HttpState, options: &RouterOptions) -> Router {
    let upload_dir = state.upload_dir.clone();

    Router::new()
        .route("/health", get(health))
        .merge(auth_routes(options.rate_limit))
        .route("/", get(articles::list_articles))
        .route(
            "/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route("/articles/new", get(articles::new_article_form))
        .route(
            "/articles/{id}",
            get(articles::view_article)
                .post(articles::add_comment)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
        .route("/articles/{id}/edit", get(articles::edit_article_form))
        .route("/articles/{id}/delete", get(articles::delete_article_form))
        .route("/articles/{id}/photo/new", get(media::new_photo_form))
        .route(
            "/articles/{id}/photo",
            post(media::add_photo).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        .route(
            "/articles/{id}/photo/{photo_id}",
            put(media::replace_photo).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        .route(
            "/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/categories/{id}",
            put(categories::update_category).delete(categories::delete_category),
        )
        .route("/categories/{id}/articles", get(categories::category_articles))
        .route("/categories/{id}/edit", get(categories::edit_category_form))
        .route("/categories/{id}/delete", get(categories::delete_category_form))
        .route("/tags/{id}/articles", get(tags::tag_articles))
        .route("/authors", get(authors::list_authors))
        .route("/authors/{id}", get(authors::view_author))
        .route("/subscriptions", get(subscriptions::feed))
        .route("/subscriptions/authors", get(subscriptions::followed_authors))
        .route("/subscriptions/followers", get(subscriptions::followers))
        .route("/subscriptions/{id}/follow", post(subscriptions::follow))
        .route("/subscriptions/{id}/unfollow", post(subscriptions::unfollow))
        .route(
            "/avatar",
            post(media::add_avatar).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        .route(
            "/avatar/{id}",
            put(media::replace_avatar)
                .delete(media::delete_avatar)
                .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        .route(
            "/users/{id}/role",
            get(users::role_form).put(users::toggle_role),
        )
        .route("/users/{id}", axum::routing::delete(users::delete_user))
        .route("/users/{id}/delete", get(users::delete_user_form))
        .route("/search", get(search::search))
        .nest_service("/uploads", ServeDir::new(upload_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&options.allowed_origins))
        .layer(Extension(state))
}

fn auth_routes(rate_limit: bool) -> Router {
    let router = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login));

    if !rate_limit {
        return router;
    }
    match rate_limit::rate_limit_layer() {
        Some(layer) => router.layer(layer),
        None => {
            tracing::warn!("rate limiter configuration rejected; continuing without it");
            router
        }
    }
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::HeaderName::from_static(OVERRIDE_HEADER),
        ])
        .max_age(Duration::from_secs(3600))
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
