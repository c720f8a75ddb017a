use crate::application::{ApplicationResult, error::ApplicationError, forms::FormErrors};
use crate::presentation::http::response::{Flash, FlashLevel};
use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

pub const LOGIN_ROUTE: &str = "/login";

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
    errors: Option<FormErrors>,
    redirect: Option<Redirection>,
}

#[derive(Debug)]
struct Redirection {
    location: String,
    flash: Flash,
}

impl HttpError {
    /// Maps an application error; forbidden actions fall back to the article index.
    pub fn from_error(err: ApplicationError) -> Self {
        Self::with_fallback(err, "/")
    }

    /// Like [`HttpError::from_error`] but forbidden actions redirect to `fallback`.
    pub fn with_fallback(err: ApplicationError, fallback: &str) -> Self {
        match err {
            ApplicationError::InvalidForm(errors) => Self {
                errors: Some(errors),
                ..Self::new(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "the submitted form contains errors".into(),
                )
            },
            ApplicationError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::Conflict(msg) => Self::new(StatusCode::CONFLICT, msg),
            ApplicationError::Unauthorized(msg) => Self::redirect(
                msg,
                LOGIN_ROUTE,
                Flash::new(FlashLevel::Warning, "message.login_required"),
            ),
            ApplicationError::Forbidden(msg) => Self::redirect(
                msg,
                fallback,
                Flash::new(FlashLevel::Warning, "message.access_denied"),
            ),
            ApplicationError::Infrastructure(msg) => {
                tracing::error!(error = %msg, "request failed");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".into(),
                )
            }
            ApplicationError::Domain(domain_err) => {
                Self::new(StatusCode::BAD_REQUEST, domain_err.to_string())
            }
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message.into())
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self {
            status,
            message,
            errors: None,
            redirect: None,
        }
    }

    fn redirect(message: String, location: &str, flash: Flash) -> Self {
        Self {
            redirect: Some(Redirection {
                location: location.to_string(),
                flash,
            }),
            ..Self::new(StatusCode::SEE_OTHER, message)
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorBody {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
            errors: self.errors,
            redirect: self.redirect.as_ref().map(|r| r.location.clone()),
            flash: self.redirect.as_ref().map(|r| r.flash.clone()),
        };

        match self.redirect {
            Some(redirect) => (
                self.status,
                [(header::LOCATION, redirect.location)],
                Json(payload),
            )
                .into_response(),
            None => (self.status, Json(payload)).into_response(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<FormErrors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    redirect: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    flash: Option<Flash>,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;

    /// Forbidden errors redirect to `fallback` instead of the index.
    fn into_http_or(self, fallback: &str) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }

    fn into_http_or(self, fallback: &str) -> HttpResult<T> {
        self.map_err(|err| HttpError::with_fallback(err, fallback))
    }
}
