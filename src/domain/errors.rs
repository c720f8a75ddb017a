// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}

/// Checks the character length of a trimmed value against inclusive bounds.
pub(crate) fn ensure_length(
    field: &str,
    value: &str,
    min: usize,
    max: usize,
) -> DomainResult<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(format!("{field} cannot be empty")));
    }
    let len = trimmed.chars().count();
    if len < min {
        return Err(DomainError::validation(format!(
            "{field} must be at least {min} characters long"
        )));
    }
    if len > max {
        return Err(DomainError::validation(format!(
            "{field} must be at most {max} characters long"
        )));
    }
    Ok(())
}
