use crate::domain::errors::{DomainError, DomainResult, ensure_length};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentId(pub i64);

impl CommentId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("comment id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CommentId> for i64 {
    fn from(value: CommentId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentContent(String);

impl CommentContent {
    pub const MAX_LENGTH: usize = 1000;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        ensure_length("comment", &value, 1, Self::MAX_LENGTH)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<CommentContent> for String {
    fn from(value: CommentContent) -> Self {
        value.0
    }
}
