use super::ArticleCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleId, specifications::CanDeleteArticleSpec},
};

impl ArticleCommandService {
    pub async fn delete_article(&self, actor: &AuthenticatedUser, id: i64) -> ApplicationResult<()> {
        let id = ArticleId::new(id)?;
        let details = self.load(id).await?;

        let delete_spec = CanDeleteArticleSpec::new(&actor.capabilities, &details.article, actor.id);
        if !delete_spec.is_satisfied() {
            return Err(ApplicationError::forbidden(
                "insufficient privileges to delete article",
            ));
        }

        self.write_repo.delete(id).await?;
        if let Some(photo) = &details.photo {
            self.uploads.post_remove(&photo.file).await;
        }

        tracing::info!(article_id = %id, actor_id = %actor.id, "article deleted");
        Ok(())
    }
}
