use super::UserCommandService;
use crate::{
    application::{
        capability::ensure_capability,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::specifications::CanFollowSpec,
};

impl UserCommandService {
    /// Subscribes `actor` to an author. Returns `false` when already subscribed.
    pub async fn follow(
        &self,
        actor: &AuthenticatedUser,
        author_id: i64,
    ) -> ApplicationResult<bool> {
        ensure_capability(actor, "subscriptions", "manage")?;
        let author = self.load_user(author_id).await?;

        if !CanFollowSpec::new(actor.id, author.id).is_satisfied() {
            return Err(ApplicationError::forbidden("users cannot follow themselves"));
        }

        let created = self.follow_repo.follow(actor.id, author.id).await?;
        if created {
            tracing::debug!(follower = %actor.id, followed = %author.id, "subscription added");
        }
        Ok(created)
    }

    /// Removes a subscription. Returns `false` when there was none.
    pub async fn unfollow(
        &self,
        actor: &AuthenticatedUser,
        author_id: i64,
    ) -> ApplicationResult<bool> {
        ensure_capability(actor, "subscriptions", "manage")?;
        let author = self.load_user(author_id).await?;
        Ok(self.follow_repo.unfollow(actor.id, author.id).await?)
    }
}
