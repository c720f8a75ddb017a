use super::FormErrors;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::comment::CommentContent;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentForm {
    #[serde(default)]
    pub content: String,
}

impl CommentForm {
    pub fn validate(self) -> ApplicationResult<CommentContent> {
        let mut errors = FormErrors::new();
        errors
            .capture("content", CommentContent::new(self.content))
            .ok_or(ApplicationError::InvalidForm(errors))
    }
}
