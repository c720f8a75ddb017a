// src/presentation/http/controllers/categories.rs
use super::PageParams;
use crate::application::{
    commands::categories::CategoryDeletion,
    dto::{CategoryArticlesDto, CategoryDeleteView, CategoryDto, PaginatedResult},
    forms::CategoryForm,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, Payload};
use crate::presentation::http::response::{FlashLevel, FlashRedirect};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};

const INDEX: &str = "/categories";

pub async fn list_categories(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<PaginatedResult<CategoryDto>>> {
    state
        .services
        .category_queries
        .list_categories(params.page)
        .await
        .into_http()
        .map(Json)
}

pub async fn category_articles(
    Extension(state): Extension<HttpState>,
    Path(name): Path<String>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<CategoryArticlesDto>> {
    state
        .services
        .article_queries
        .list_by_category(&name, params.page)
        .await
        .into_http()
        .map(Json)
}

pub async fn create_category(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Payload(form): Payload<CategoryForm>,
) -> HttpResult<FlashRedirect> {
    let category = state
        .services
        .category_commands
        .create_category(&user, form)
        .await
        .into_http()?;

    Ok(FlashRedirect::success(INDEX, "message.created_successfully").resource(&category))
}

pub async fn edit_category_form(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<CategoryDto>> {
    state
        .services
        .category_queries
        .edit_form(&user, id)
        .await
        .into_http()
        .map(Json)
}

pub async fn update_category(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Payload(form): Payload<CategoryForm>,
) -> HttpResult<FlashRedirect> {
    let category = state
        .services
        .category_commands
        .update_category(&user, id, form)
        .await
        .into_http()?;

    Ok(FlashRedirect::success(INDEX, "message.updated_successfully").resource(&category))
}

pub async fn delete_category_form(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<CategoryDeleteView>> {
    state
        .services
        .category_queries
        .delete_form(&user, id)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_category(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<FlashRedirect> {
    let outcome = state
        .services
        .category_commands
        .delete_category(&user, id)
        .await
        .into_http()?;

    Ok(match outcome {
        CategoryDeletion::Deleted => FlashRedirect::success(INDEX, "message.deleted_successfully"),
        CategoryDeletion::ContainsArticles { .. } => FlashRedirect::to(INDEX)
            .flash(FlashLevel::Warning, "message.category_contains_articles"),
    })
}
