use crate::domain::category::{
    entity::{Category, CategoryUpdate, NewCategory},
    value_objects::{CategoryCode, CategoryId},
};
use crate::domain::errors::DomainResult;
use crate::domain::pagination::{Page, PageRequest};
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Categories ordered by name.
    async fn list(&self, page: PageRequest) -> DomainResult<Page<Category>>;
    async fn list_all(&self) -> DomainResult<Vec<Category>>;
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Category>>;
    async fn find_by_code(&self, code: &CategoryCode) -> DomainResult<Option<Category>>;
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;
    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category>;
    async fn delete(&self, id: CategoryId) -> DomainResult<()>;
    async fn count_articles(&self, id: CategoryId) -> DomainResult<u64>;
}
