// src/presentation/http/controllers/authors.rs
use super::PageParams;
use crate::application::dto::{AuthorDto, AuthorViewDto, PaginatedResult};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::MaybeAuthenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};

pub async fn list_authors(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<PaginatedResult<AuthorDto>>> {
    state
        .services
        .user_queries
        .list_authors(params.page)
        .await
        .into_http()
        .map(Json)
}

pub async fn view_author(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<AuthorViewDto>> {
    state
        .services
        .user_queries
        .author_profile(actor.0.as_ref(), id, params.page)
        .await
        .into_http()
        .map(Json)
}
