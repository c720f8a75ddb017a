use crate::domain::tag::value_objects::{TagCode, TagId, TagName};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: TagId,
    pub name: TagName,
    pub code: TagCode,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTag {
    pub name: TagName,
    pub code: TagCode,
    pub created_at: DateTime<Utc>,
}
