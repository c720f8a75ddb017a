use crate::domain::errors::DomainResult;
use crate::domain::tag::{
    entity::{NewTag, Tag},
    value_objects::{TagCode, TagId, TagName},
};
use async_trait::async_trait;

#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn find_by_id(&self, id: TagId) -> DomainResult<Option<Tag>>;
    /// Exact-name lookup; unknown names are simply absent from the result.
    async fn find_by_names(&self, names: &[TagName]) -> DomainResult<Vec<Tag>>;
    async fn find_by_code(&self, code: &TagCode) -> DomainResult<Option<Tag>>;
    async fn insert(&self, tag: NewTag) -> DomainResult<Tag>;
    async fn search(&self, term: &str) -> DomainResult<Vec<Tag>>;
}
