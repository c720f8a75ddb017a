//! Typed form bindings with field-level validation.
mod article;
mod category;
mod comment;
mod errors;
mod login;
mod registration;
mod tags;

pub use article::{ArticleForm, ValidArticle};
pub use category::CategoryForm;
pub use comment::CommentForm;
pub use errors::FormErrors;
pub use login::LoginForm;
pub use registration::{RegistrationForm, ValidRegistration};
pub use tags::TagsTransformer;

use serde::{Deserialize, Deserializer};

/// Accepts a numeric id from JSON or a (possibly empty) string from a urlencoded form.
pub(crate) fn optional_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Int(value)) => Ok(Some(value)),
        Some(Raw::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(Raw::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
