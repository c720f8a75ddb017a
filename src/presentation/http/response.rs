//! Redirect-with-flash responses returned by every successful mutation.
use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Info,
    Warning,
    Danger,
}

/// One-shot message for the next page, keyed by a translation id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn new(level: FlashLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// `303 See Other` with a `Location` header and a JSON body echoing the target.
#[derive(Debug)]
pub struct FlashRedirect {
    location: String,
    flash: Option<Flash>,
    resource: Option<Value>,
}

impl FlashRedirect {
    pub fn to(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            flash: None,
            resource: None,
        }
    }

    pub fn success(location: impl Into<String>, message: &str) -> Self {
        Self::to(location).flash(FlashLevel::Success, message)
    }

    pub fn flash(mut self, level: FlashLevel, message: &str) -> Self {
        self.flash = Some(Flash::new(level, message));
        self
    }

    pub fn resource(mut self, resource: &impl Serialize) -> Self {
        match serde_json::to_value(resource) {
            Ok(value) => self.resource = Some(value),
            Err(err) => tracing::warn!(error = %err, "failed to serialize redirect resource"),
        }
        self
    }
}

#[derive(Serialize)]
struct RedirectBody {
    redirect: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    flash: Option<Flash>,
    #[serde(skip_serializing_if = "Option::is_none")]
    resource: Option<Value>,
}

impl IntoResponse for FlashRedirect {
    fn into_response(self) -> Response {
        let body = RedirectBody {
            redirect: self.location.clone(),
            flash: self.flash,
            resource: self.resource,
        };
        (
            StatusCode::SEE_OTHER,
            [(header::LOCATION, self.location)],
            Json(body),
        )
            .into_response()
    }
}
