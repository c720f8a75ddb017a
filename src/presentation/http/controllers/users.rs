// src/presentation/http/controllers/users.rs
use crate::application::{commands::users::UserDeletion, dto::AuthorDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::response::{FlashLevel, FlashRedirect};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

const AUTHOR_INDEX: &str = "/authors";

pub async fn role_form(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<AuthorDto>> {
    state
        .services
        .user_queries
        .admin_user_view(&user, id)
        .await
        .into_http_or(AUTHOR_INDEX)
        .map(Json)
}

/// Grants the admin role, or revokes it when already present.
pub async fn toggle_role(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<FlashRedirect> {
    let updated = state
        .services
        .user_commands
        .toggle_admin(&user, id)
        .await
        .into_http_or(AUTHOR_INDEX)?;

    Ok(
        FlashRedirect::success(AUTHOR_INDEX, "message.user_role_edited_successfully")
            .resource(&updated),
    )
}

pub async fn delete_user_form(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<AuthorDto>> {
    state
        .services
        .user_queries
        .admin_user_view(&user, id)
        .await
        .into_http_or(AUTHOR_INDEX)
        .map(Json)
}

pub async fn delete_user(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<FlashRedirect> {
    let outcome = state
        .services
        .user_commands
        .delete_user(&user, id)
        .await
        .into_http_or(AUTHOR_INDEX)?;

    Ok(match outcome {
        UserDeletion::Deleted => {
            FlashRedirect::success(AUTHOR_INDEX, "message.user_deleted_successfully")
        }
        UserDeletion::OwnsArticles { .. } => FlashRedirect::to(AUTHOR_INDEX)
            .flash(FlashLevel::Warning, "message.user_owns_articles"),
    })
}
