use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
        forms::ArticleForm,
    },
    domain::article::{ArticleId, ArticleUpdate, specifications::CanUpdateArticleSpec},
};

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
        form: ArticleForm,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(id)?;
        let mut article = self.load(id).await?.article;

        let update_spec = CanUpdateArticleSpec::new(&actor.capabilities, &article, actor.id);
        if !update_spec.is_satisfied() {
            return Err(ApplicationError::forbidden(
                "insufficient privileges to update article",
            ));
        }

        let valid = form.validate()?;
        self.ensure_category_exists(valid.category_id).await?;
        let tags = self.tags.reverse_transform(&valid.tag_names).await?;

        article.revise(valid.title, valid.body, valid.category_id);
        let update =
            ArticleUpdate::from_article(&article, tags.iter().map(|tag| tag.id).collect());
        self.write_repo.update(update).await?;

        tracing::info!(article_id = %id, editor_id = %actor.id, "article updated");
        self.reload(id).await
    }
}
