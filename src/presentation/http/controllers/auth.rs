// src/presentation/http/controllers/auth.rs
use crate::application::{
    dto::LoginResult,
    forms::{LoginForm, RegistrationForm},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{MaybeAuthenticated, Payload};
use crate::presentation::http::response::FlashRedirect;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

pub async fn register(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Payload(form): Payload<RegistrationForm>,
) -> HttpResult<FlashRedirect> {
    if actor.0.is_some() {
        return Ok(FlashRedirect::to("/"));
    }

    let user = state
        .services
        .user_commands
        .register(form)
        .await
        .into_http()?;

    Ok(FlashRedirect::success("/login", "message.registered_successfully").resource(&user))
}

pub async fn login(
    Extension(state): Extension<HttpState>,
    Payload(form): Payload<LoginForm>,
) -> HttpResult<Json<LoginResult>> {
    state
        .services
        .user_commands
        .login(form)
        .await
        .into_http()
        .map(Json)
}
