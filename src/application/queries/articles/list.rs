use super::ArticleQueryService;
use crate::{
    application::{
        capability::ensure_capability,
        dto::{ArticleDto, AuthenticatedUser, CategoryArticlesDto, PaginatedResult, TagArticlesDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{article::ArticleFilter, tag::TagId},
};

impl ArticleQueryService {
    /// Home page listing, newest first.
    pub async fn list_articles(&self, page: u32) -> ApplicationResult<PaginatedResult<ArticleDto>> {
        self.page_of(ArticleFilter::All, page).await
    }

    pub async fn list_by_category(
        &self,
        name: &str,
        page: u32,
    ) -> ApplicationResult<CategoryArticlesDto> {
        let category = self
            .category_repo
            .find_by_name(name)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("category '{name}' not found")))?;

        let articles = self
            .page_of(ArticleFilter::CategoryName(category.name.to_string()), page)
            .await?;
        Ok(CategoryArticlesDto {
            category: category.into(),
            articles,
        })
    }

    pub async fn list_by_tag(&self, tag_id: i64, page: u32) -> ApplicationResult<TagArticlesDto> {
        let tag_id = TagId::new(tag_id)?;
        let tag = self
            .tag_repo
            .find_by_id(tag_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("tag not found"))?;

        let articles = self.page_of(ArticleFilter::Tag(tag.id), page).await?;
        Ok(TagArticlesDto {
            tag: tag.into(),
            articles,
        })
    }

    /// Articles written by the authors `actor` is subscribed to.
    pub async fn feed(
        &self,
        actor: &AuthenticatedUser,
        page: u32,
    ) -> ApplicationResult<PaginatedResult<ArticleDto>> {
        ensure_capability(actor, "subscriptions", "manage")?;
        self.page_of(ArticleFilter::FollowedBy(actor.id), page).await
    }
}
