//! Lets HTML-style forms issue `PUT`, `PATCH` and `DELETE` through `POST`.
use axum::{
    body::{Body, to_bytes},
    extract::Request,
    http::{HeaderValue, Method, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

pub const OVERRIDE_HEADER: &str = "x-http-method-override";
const OVERRIDE_FIELD: &str = "_method";
const MAX_FORM_BYTES: usize = 1024 * 1024;

fn parse_override(value: &str) -> Option<Method> {
    match value.trim().to_ascii_uppercase().as_str() {
        "PUT" => Some(Method::PUT),
        "PATCH" => Some(Method::PATCH),
        "DELETE" => Some(Method::DELETE),
        _ => None,
    }
}

fn is_urlencoded(content_type: Option<&HeaderValue>) -> bool {
    content_type
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"))
}

/// Rewrites the method of a `POST` from the override header or the `_method` form field.
pub async fn method_override(request: Request, next: Next) -> Response {
    if request.method() != Method::POST {
        return next.run(request).await;
    }

    let from_header = request
        .headers()
        .get(OVERRIDE_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(parse_override);

    let (mut parts, body) = request.into_parts();
    let (method, body) = match from_header {
        Some(method) => (Some(method), body),
        None if is_urlencoded(parts.headers.get(header::CONTENT_TYPE)) => {
            let bytes = match to_bytes(body, MAX_FORM_BYTES).await {
                Ok(bytes) => bytes,
                Err(err) => {
                    return (axum::http::StatusCode::PAYLOAD_TOO_LARGE, err.to_string())
                        .into_response();
                }
            };
            let method = serde_urlencoded::from_bytes::<Vec<(String, String)>>(&bytes)
                .ok()
                .and_then(|pairs| {
                    pairs
                        .into_iter()
                        .find(|(key, _)| key == OVERRIDE_FIELD)
                        .and_then(|(_, value)| parse_override(&value))
                });
            (method, Body::from(bytes))
        }
        None => (None, body),
    };

    if let Some(method) = method {
        tracing::trace!(%method, uri = %parts.uri, "method override");
        parts.method = method;
    }

    next.run(Request::from_parts(parts, body)).await
}
