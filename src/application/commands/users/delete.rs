use super::UserCommandService;
use crate::application::{
    capability::ensure_capability, dto::AuthenticatedUser, error::ApplicationResult,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserDeletion {
    Deleted,
    /// The user still authors articles and was kept.
    OwnsArticles { count: u64 },
}

impl UserCommandService {
    pub async fn delete_user(
        &self,
        actor: &AuthenticatedUser,
        user_id: i64,
    ) -> ApplicationResult<UserDeletion> {
        ensure_capability(actor, "users", "manage")?;
        let user = self.load_user(user_id).await?;

        let count = self.user_repo.count_articles(user.id).await?;
        if count > 0 {
            return Ok(UserDeletion::OwnsArticles { count });
        }

        let avatar = self.avatar_repo.find_by_user(user.id).await?;
        self.user_repo.delete(user.id).await?;
        if let Some(avatar) = &avatar {
            self.uploads.post_remove(&avatar.file).await;
        }

        tracing::info!(user_id = %user.id, actor_id = %actor.id, "user deleted");
        Ok(UserDeletion::Deleted)
    }
}
