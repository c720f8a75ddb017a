use super::FormErrors;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::category::CategoryName;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryForm {
    #[serde(default)]
    pub name: String,
}

impl CategoryForm {
    pub fn validate(self) -> ApplicationResult<CategoryName> {
        let mut errors = FormErrors::new();
        errors
            .capture("name", CategoryName::new(self.name))
            .ok_or(ApplicationError::InvalidForm(errors))
    }
}
