use super::ArticleQueryService;
use crate::{
    application::{
        capability::ensure_capability,
        dto::{ArticleDto, ArticleFormValues, ArticleFormView, AuthenticatedUser, CategoryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::specifications::{CanDeleteArticleSpec, CanUpdateArticleSpec},
        media::specifications::CanManagePhotoSpec,
    },
};

impl ArticleQueryService {
    pub async fn new_article_form(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<ArticleFormView> {
        ensure_capability(actor, "articles", "create")?;
        Ok(ArticleFormView {
            categories: self.categories().await?,
            article_id: None,
            values: None,
        })
    }

    /// Edit form pre-filled with the stored values; tags come back as a comma list.
    pub async fn edit_article_form(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
    ) -> ApplicationResult<ArticleFormView> {
        let details = self.load(id).await?;
        if !CanUpdateArticleSpec::new(&actor.capabilities, &details.article, actor.id)
            .is_satisfied()
        {
            return Err(ApplicationError::forbidden(
                "insufficient privileges to update article",
            ));
        }

        Ok(ArticleFormView {
            categories: self.categories().await?,
            article_id: Some(details.article.id.into()),
            values: Some(ArticleFormValues::from(&details)),
        })
    }

    /// Confirmation data for the delete page.
    pub async fn delete_article_form(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
    ) -> ApplicationResult<ArticleDto> {
        let details = self.load(id).await?;
        if !CanDeleteArticleSpec::new(&actor.capabilities, &details.article, actor.id)
            .is_satisfied()
        {
            return Err(ApplicationError::forbidden(
                "insufficient privileges to delete article",
            ));
        }
        Ok(ArticleDto::from_details(details, &self.uploads))
    }

    /// Article the cover-photo upload step is about.
    pub async fn photo_form(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
    ) -> ApplicationResult<ArticleDto> {
        let details = self.load(id).await?;
        if !CanManagePhotoSpec::new(&actor.capabilities, &details.article, actor.id).is_satisfied()
        {
            return Err(ApplicationError::forbidden(
                "only the author or an admin may change the cover photo",
            ));
        }
        Ok(ArticleDto::from_details(details, &self.uploads))
    }

    async fn categories(&self) -> ApplicationResult<Vec<CategoryDto>> {
        let categories = self.category_repo.list_all().await?;
        Ok(categories.into_iter().map(CategoryDto::from).collect())
    }
}
