use super::{FormErrors, TagsTransformer, optional_id};
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::article::{ArticleBody, ArticleTitle};
use crate::domain::category::CategoryId;
use crate::domain::tag::TagName;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default, deserialize_with = "optional_id")]
    pub category_id: Option<i64>,
    /// Comma-separated tag names.
    #[serde(default)]
    pub tags: String,
}

#[derive(Debug, Clone)]
pub struct ValidArticle {
    pub title: ArticleTitle,
    pub body: ArticleBody,
    pub category_id: CategoryId,
    pub tag_names: Vec<TagName>,
}

impl ArticleForm {
    pub fn validate(self) -> ApplicationResult<ValidArticle> {
        let mut errors = FormErrors::new();
        let title = errors.capture("title", ArticleTitle::new(self.title));
        let body = errors.capture("body", ArticleBody::new(self.body));
        let category_id = match self.category_id {
            Some(id) => errors.capture("category_id", CategoryId::new(id)),
            None => {
                errors.add("category_id", "category is required");
                None
            }
        };
        let tag_names = errors.capture("tags", TagsTransformer::parse(&self.tags));

        match (title, body, category_id, tag_names) {
            (Some(title), Some(body), Some(category_id), Some(tag_names)) if errors.is_empty() => {
                Ok(ValidArticle {
                    title,
                    body,
                    category_id,
                    tag_names,
                })
            }
            _ => Err(ApplicationError::InvalidForm(errors)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_form_binds_every_field() {
        let form = ArticleForm {
            title: "Hello".into(),
            body: "# Body".into(),
            category_id: Some(3),
            tags: "rust, web".into(),
        };
        let valid = form.validate().unwrap();
        assert_eq!(valid.title.as_str(), "Hello");
        assert_eq!(valid.category_id, CategoryId::new(3).unwrap());
        assert_eq!(valid.tag_names.len(), 2);
    }

    #[test]
    fn missing_fields_are_reported_together() {
        let err = ArticleForm::default().validate().unwrap_err();
        let ApplicationError::InvalidForm(errors) = err else {
            panic!("expected form errors");
        };
        assert!(!errors.field("title").is_empty());
        assert!(!errors.field("body").is_empty());
        assert!(!errors.field("category_id").is_empty());
        assert!(errors.field("tags").is_empty());
    }

    #[test]
    fn urlencoded_empty_category_is_missing() {
        let form: ArticleForm =
            serde_urlencoded::from_str("title=t&body=b&category_id=&tags=").unwrap();
        assert_eq!(form.category_id, None);
        let form: ArticleForm =
            serde_urlencoded::from_str("title=t&body=b&category_id=4&_method=PUT").unwrap();
        assert_eq!(form.category_id, Some(4));
    }
}
