// src/presentation/http/controllers/media.rs
use super::{article_route, author_route};
use crate::application::dto::ArticleDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, FileUpload};
use crate::presentation::http::response::FlashRedirect;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

/// Upload step shown right after an article is created.
pub async fn new_photo_form(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(article_id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .photo_form(&user, article_id)
        .await
        .into_http_or(&article_route(article_id))
        .map(Json)
}

pub async fn add_photo(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(article_id): Path<i64>,
    FileUpload(upload): FileUpload,
) -> HttpResult<FlashRedirect> {
    let location = article_route(article_id);
    let photo = state
        .services
        .media_commands
        .add_photo(&user, article_id, upload)
        .await
        .into_http_or(&location)?;

    Ok(FlashRedirect::success(location, "message.photo_created_successfully").resource(&photo))
}

pub async fn replace_photo(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path((article_id, photo_id)): Path<(i64, i64)>,
    FileUpload(upload): FileUpload,
) -> HttpResult<FlashRedirect> {
    let location = article_route(article_id);
    let photo = state
        .services
        .media_commands
        .replace_photo(&user, article_id, photo_id, upload)
        .await
        .into_http_or(&location)?;

    Ok(FlashRedirect::success(location, "message.photo_updated_successfully").resource(&photo))
}

pub async fn add_avatar(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    FileUpload(upload): FileUpload,
) -> HttpResult<FlashRedirect> {
    let location = author_route(user.id);
    let avatar = state
        .services
        .media_commands
        .add_avatar(&user, upload)
        .await
        .into_http_or(&location)?;

    Ok(FlashRedirect::success(location, "message.created_successfully").resource(&avatar))
}

pub async fn replace_avatar(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(avatar_id): Path<i64>,
    FileUpload(upload): FileUpload,
) -> HttpResult<FlashRedirect> {
    let location = author_route(user.id);
    let avatar = state
        .services
        .media_commands
        .replace_avatar(&user, avatar_id, upload)
        .await
        .into_http_or(&location)?;

    Ok(FlashRedirect::success(location, "message.updated_successfully").resource(&avatar))
}

pub async fn delete_avatar(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(avatar_id): Path<i64>,
) -> HttpResult<FlashRedirect> {
    let location = author_route(user.id);
    state
        .services
        .media_commands
        .delete_avatar(&user, avatar_id)
        .await
        .into_http_or(&location)?;

    Ok(FlashRedirect::success(location, "message.deleted_successfully"))
}
