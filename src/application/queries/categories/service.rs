use std::sync::Arc;

use crate::{
    application::{
        capability::ensure_capability,
        dto::{AuthenticatedUser, CategoryDeleteView, CategoryDto, PaginatedResult},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        category::{Category, CategoryId, CategoryRepository},
        pagination::{CATEGORIES_PER_PAGE, PageRequest},
    },
};

pub struct CategoryQueryService {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryQueryService {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_categories(
        &self,
        page: u32,
    ) -> ApplicationResult<PaginatedResult<CategoryDto>> {
        let page = self
            .repo
            .list(PageRequest::new(page, CATEGORIES_PER_PAGE))
            .await?;
        Ok(PaginatedResult::from_page(page, CategoryDto::from))
    }

    pub async fn edit_form(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
    ) -> ApplicationResult<CategoryDto> {
        ensure_capability(actor, "categories", "manage")?;
        Ok(self.load(id).await?.into())
    }

    /// The delete page tells the admin how many articles still block removal.
    pub async fn delete_form(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
    ) -> ApplicationResult<CategoryDeleteView> {
        ensure_capability(actor, "categories", "manage")?;
        let category = self.load(id).await?;
        let article_count = self.repo.count_articles(category.id).await?;
        Ok(CategoryDeleteView {
            category: category.into(),
            article_count,
        })
    }

    async fn load(&self, id: i64) -> ApplicationResult<Category> {
        let id = CategoryId::new(id)?;
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))
    }
}
