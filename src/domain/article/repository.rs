use crate::domain::article::entity::{Article, ArticleDetails, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::tag::TagId;
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Selection applied to article listings. Results are always newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleFilter {
    All,
    CategoryName(String),
    Author(UserId),
    /// Articles written by the authors `UserId` follows.
    FollowedBy(UserId),
    Tag(TagId),
    TitleContains(String),
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    /// Removes the article along with its comments, cover photo row and tag links.
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleDetails>>;
    async fn list(
        &self,
        filter: ArticleFilter,
        page: PageRequest,
    ) -> DomainResult<Page<ArticleDetails>>;
}
