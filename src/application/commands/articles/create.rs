use super::ArticleCommandService;
use crate::{
    application::{
        capability::ensure_capability,
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
        forms::ArticleForm,
    },
    domain::article::NewArticle,
};

impl ArticleCommandService {
    /// Publishes a new article authored by `actor`. The publication date is the
    /// creation time.
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        form: ArticleForm,
    ) -> ApplicationResult<ArticleDto> {
        ensure_capability(actor, "articles", "create")?;

        let valid = form.validate()?;
        self.ensure_category_exists(valid.category_id).await?;
        let tags = self.tags.reverse_transform(&valid.tag_names).await?;

        let new_article = NewArticle {
            title: valid.title,
            body: valid.body,
            published_at: self.clock.now(),
            category_id: valid.category_id,
            author_id: actor.id,
            tag_ids: tags.iter().map(|tag| tag.id).collect(),
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(article_id = %created.id, author_id = %actor.id, "article created");
        self.reload(created.id).await
    }
}
