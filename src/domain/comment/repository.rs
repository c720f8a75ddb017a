use crate::domain::article::ArticleId;
use crate::domain::comment::entity::{Comment, CommentDetails, NewComment};
use crate::domain::errors::DomainResult;
use crate::domain::pagination::{Page, PageRequest};
use async_trait::async_trait;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;

    /// Newest comments first.
    async fn list_for_article(
        &self,
        article_id: ArticleId,
        page: PageRequest,
    ) -> DomainResult<Page<CommentDetails>>;
}
