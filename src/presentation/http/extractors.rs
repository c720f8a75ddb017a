// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError, ports::storage::UploadedFile},
    presentation::http::state::HttpState,
};
use axum::{
    Extension, Form, Json,
    extract::{FromRequest, FromRequestParts, Multipart, Request},
    http::{header, request::Parts},
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};
use serde::de::DeserializeOwned;

use super::error::HttpError;

#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Option<AuthenticatedUser>);

async fn app_state<S: Send + Sync>(parts: &mut Parts, state: &S) -> Result<HttpState, HttpError> {
    Extension::<HttpState>::from_request_parts(parts, state)
        .await
        .map(|Extension(app_state)| app_state)
        .map_err(|_| {
            HttpError::from_error(ApplicationError::Infrastructure(
                "application state missing".into(),
            ))
        })
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = app_state(parts, state).await?;

        let header = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::Unauthorized(
                    "missing Authorization header".into(),
                ))
            })?;

        let user = app_state
            .services
            .authenticate(header.token())
            .await
            .map_err(HttpError::from_error)?;

        Ok(Self(user))
    }
}

impl<S> FromRequestParts<S> for MaybeAuthenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    /// An invalid or expired token is treated like an anonymous visit.
    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = app_state(parts, state).await?;

        let Some(header) = parts.headers.typed_get::<Authorization<Bearer>>() else {
            return Ok(Self(None));
        };

        match app_state.services.authenticate(header.token()).await {
            Ok(user) => Ok(Self(Some(user))),
            Err(ApplicationError::Unauthorized(reason)) => {
                tracing::debug!(%reason, "ignoring invalid bearer token");
                Ok(Self(None))
            }
            Err(err) => Err(HttpError::from_error(err)),
        }
    }
}

/// Request body accepted as JSON or as an urlencoded form, picked by `Content-Type`.
#[derive(Debug, Clone)]
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/json"));

        if is_json {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| HttpError::bad_request(rejection.body_text()))?;
            Ok(Self(value))
        } else {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|rejection| HttpError::bad_request(rejection.body_text()))?;
            Ok(Self(value))
        }
    }
}

/// The `file` part of a multipart upload.
#[derive(Debug, Clone)]
pub struct FileUpload(pub UploadedFile);

impl<S> FromRequest<S> for FileUpload
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|rejection| HttpError::bad_request(rejection.body_text()))?;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|err| HttpError::bad_request(err.body_text()))?
        {
            if field.name() != Some("file") {
                continue;
            }
            let original_name = field.file_name().map(str::to_string);
            let content_type = field.content_type().map(str::to_string);
            let bytes = field
                .bytes()
                .await
                .map_err(|err| HttpError::bad_request(err.body_text()))?;
            return Ok(Self(UploadedFile {
                original_name,
                content_type,
                bytes,
            }));
        }

        Err(HttpError::from_error(ApplicationError::invalid_field(
            "file",
            "Please choose a file to upload",
        )))
    }
}
