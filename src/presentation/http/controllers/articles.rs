// src/presentation/http/controllers/articles.rs
use super::{PageParams, article_route};
use crate::application::{
    ApplicationResult,
    dto::{ArticleDto, ArticleFormView, ArticleViewDto, PaginatedResult},
    error::ApplicationError,
    forms::{ArticleForm, CommentForm},
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated, Payload};
use crate::presentation::http::response::{FlashLevel, FlashRedirect};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;

fn first_page() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
pub struct ArticleViewParams {
    #[serde(default = "first_page")]
    pub comments_page: u32,
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<PaginatedResult<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles(params.page)
        .await
        .into_http()
        .map(Json)
}

pub async fn new_article_form(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<ArticleFormView>> {
    state
        .services
        .article_queries
        .new_article_form(&user)
        .await
        .into_http()
        .map(Json)
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Payload(form): Payload<ArticleForm>,
) -> HttpResult<FlashRedirect> {
    let article = state
        .services
        .article_commands
        .create_article(&user, form)
        .await
        .into_http()?;

    Ok(FlashRedirect::success(
        format!("/articles/{}/photo/new", article.id),
        "message.article_created_successfully",
    )
    .resource(&article))
}

pub async fn view_article(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
    Query(params): Query<ArticleViewParams>,
) -> HttpResult<Json<ArticleViewDto>> {
    state
        .services
        .article_queries
        .view_article(actor.0.as_ref(), id, params.comments_page)
        .await
        .into_http()
        .map(Json)
}

/// Comment submission from the article page.
pub async fn add_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Payload(form): Payload<CommentForm>,
) -> HttpResult<FlashRedirect> {
    let result = state
        .services
        .comment_commands
        .add_comment(&user, id, form)
        .await;
    comment_outcome(result, id)
}

fn comment_outcome<T: serde::Serialize>(
    result: ApplicationResult<T>,
    article_id: i64,
) -> HttpResult<FlashRedirect> {
    let location = article_route(article_id);
    match result {
        Ok(comment) => Ok(FlashRedirect::success(
            location,
            "message.comment_created_successfully",
        )
        .resource(&comment)),
        Err(
            err @ (ApplicationError::InvalidForm(_)
            | ApplicationError::NotFound(_)
            | ApplicationError::Unauthorized(_)
            | ApplicationError::Forbidden(_)),
        ) => Err(HttpError::with_fallback(err, &location)),
        Err(err) => {
            tracing::error!(article_id, error = %err, "failed to save comment");
            Ok(FlashRedirect::to(location).flash(FlashLevel::Danger, "message.comment_not_saved"))
        }
    }
}

pub async fn edit_article_form(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleFormView>> {
    state
        .services
        .article_queries
        .edit_article_form(&user, id)
        .await
        .into_http()
        .map(Json)
}

pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Payload(form): Payload<ArticleForm>,
) -> HttpResult<FlashRedirect> {
    let article = state
        .services
        .article_commands
        .update_article(&user, id, form)
        .await
        .into_http()?;

    Ok(FlashRedirect::success("/", "message.article_updated_successfully").resource(&article))
}

pub async fn delete_article_form(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .delete_article_form(&user, id)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<FlashRedirect> {
    state
        .services
        .article_commands
        .delete_article(&user, id)
        .await
        .into_http()?;

    Ok(FlashRedirect::success("/", "message.article_deleted_successfully"))
}
