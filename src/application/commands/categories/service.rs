use std::sync::Arc;

use crate::{
    application::{
        capability::ensure_capability,
        dto::{AuthenticatedUser, CategoryDto},
        error::{ApplicationError, ApplicationResult},
        forms::CategoryForm,
    },
    domain::category::{
        Category, CategoryId, CategoryName, CategoryRepository, CategoryUpdate, NewCategory,
        services::CategoryCodeService,
    },
};

/// Result of a category removal request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryDeletion {
    Deleted,
    /// Nothing was removed because articles still reference the category.
    ContainsArticles { count: u64 },
}

pub struct CategoryCommandService {
    repo: Arc<dyn CategoryRepository>,
    codes: Arc<CategoryCodeService>,
}

impl CategoryCommandService {
    pub fn new(repo: Arc<dyn CategoryRepository>, codes: Arc<CategoryCodeService>) -> Self {
        Self { repo, codes }
    }

    pub async fn create_category(
        &self,
        actor: &AuthenticatedUser,
        form: CategoryForm,
    ) -> ApplicationResult<CategoryDto> {
        ensure_capability(actor, "categories", "manage")?;
        let name = form.validate()?;
        self.ensure_name_available(&name, None).await?;

        let code = self.codes.generate_unique_code(&name, None).await?;
        let created = self.repo.insert(NewCategory { name, code }).await?;
        tracing::info!(category = %created.name, "category created");
        Ok(created.into())
    }

    pub async fn update_category(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
        form: CategoryForm,
    ) -> ApplicationResult<CategoryDto> {
        ensure_capability(actor, "categories", "manage")?;
        let category = self.load(id).await?;
        let name = form.validate()?;
        self.ensure_name_available(&name, Some(category.id)).await?;

        let code = if name == category.name {
            category.code
        } else {
            self.codes
                .generate_unique_code(&name, Some(category.id))
                .await?
        };
        let updated = self
            .repo
            .update(CategoryUpdate {
                id: category.id,
                name,
                code,
            })
            .await?;
        Ok(updated.into())
    }

    /// Deletes an empty category; a category that still has articles is kept.
    pub async fn delete_category(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
    ) -> ApplicationResult<CategoryDeletion> {
        ensure_capability(actor, "categories", "manage")?;
        let category = self.load(id).await?;

        let count = self.repo.count_articles(category.id).await?;
        if count > 0 {
            tracing::info!(category = %category.name, count, "refusing to delete non-empty category");
            return Ok(CategoryDeletion::ContainsArticles { count });
        }

        self.repo.delete(category.id).await?;
        tracing::info!(category = %category.name, "category deleted");
        Ok(CategoryDeletion::Deleted)
    }

    async fn load(&self, id: i64) -> ApplicationResult<Category> {
        let id = CategoryId::new(id)?;
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))
    }

    async fn ensure_name_available(
        &self,
        name: &CategoryName,
        ignore_id: Option<CategoryId>,
    ) -> ApplicationResult<()> {
        match self.repo.find_by_name(name.as_str()).await? {
            Some(existing) if Some(existing.id) != ignore_id => Err(
                ApplicationError::invalid_field("name", "This value is already used."),
            ),
            _ => Ok(()),
        }
    }
}
