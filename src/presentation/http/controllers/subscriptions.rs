// src/presentation/http/controllers/subscriptions.rs
use super::{PageParams, author_route};
use crate::application::dto::{ArticleDto, AuthorDto, PaginatedResult};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::response::FlashRedirect;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};

pub async fn feed(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<PaginatedResult<ArticleDto>>> {
    state
        .services
        .article_queries
        .feed(&user, params.page)
        .await
        .into_http()
        .map(Json)
}

pub async fn followed_authors(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<PaginatedResult<AuthorDto>>> {
    state
        .services
        .user_queries
        .followed_authors(&user, params.page)
        .await
        .into_http()
        .map(Json)
}

pub async fn followers(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<PaginatedResult<AuthorDto>>> {
    state
        .services
        .user_queries
        .followers(&user, params.page)
        .await
        .into_http()
        .map(Json)
}

pub async fn follow(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(author_id): Path<i64>,
) -> HttpResult<FlashRedirect> {
    let location = author_route(author_id);
    let created = state
        .services
        .user_commands
        .follow(&user, author_id)
        .await
        .into_http_or(&location)?;

    Ok(if created {
        FlashRedirect::success(location, "message.followed_created_successfully")
    } else {
        FlashRedirect::to(location)
    })
}

pub async fn unfollow(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(author_id): Path<i64>,
) -> HttpResult<FlashRedirect> {
    let location = author_route(author_id);
    let removed = state
        .services
        .user_commands
        .unfollow(&user, author_id)
        .await
        .into_http_or(&location)?;

    Ok(if removed {
        FlashRedirect::success(location, "message.followed_deleted_successfully")
    } else {
        FlashRedirect::to(location)
    })
}
