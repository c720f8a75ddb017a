use std::sync::Arc;

use crate::{
    application::{
        capability::ensure_capability,
        dto::{AuthenticatedUser, CommentDto},
        error::{ApplicationError, ApplicationResult},
        forms::CommentForm,
        ports::time::Clock,
    },
    domain::{
        article::{ArticleId, ArticleReadRepository},
        comment::{CommentDetails, CommentRepository, NewComment},
        user::UserRepository,
    },
};

pub struct CommentCommandService {
    comment_repo: Arc<dyn CommentRepository>,
    article_repo: Arc<dyn ArticleReadRepository>,
    user_repo: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
        user_repo: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            comment_repo,
            article_repo,
            user_repo,
            clock,
        }
    }

    pub async fn add_comment(
        &self,
        actor: &AuthenticatedUser,
        article_id: i64,
        form: CommentForm,
    ) -> ApplicationResult<CommentDto> {
        ensure_capability(actor, "comments", "create")?;
        let article_id = ArticleId::new(article_id)?;
        if self.article_repo.find_by_id(article_id).await?.is_none() {
            return Err(ApplicationError::not_found("article not found"));
        }
        let content = form.validate()?;

        let author = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("account no longer exists"))?;

        let comment = self
            .comment_repo
            .insert(NewComment {
                content,
                article_id,
                author_id: actor.id,
                created_at: self.clock.now(),
            })
            .await?;

        Ok(CommentDetails {
            comment,
            author: author.summary(),
        }
        .into())
    }
}
