use super::UserCommandService;
use crate::{
    application::{
        capability::ensure_capability,
        dto::{AuthenticatedUser, AuthorDto},
        error::ApplicationResult,
    },
    domain::user::AuthorProfile,
};

impl UserCommandService {
    /// Grants the admin role to a regular user or takes it away from an admin.
    pub async fn toggle_admin(
        &self,
        actor: &AuthenticatedUser,
        user_id: i64,
    ) -> ApplicationResult<AuthorDto> {
        ensure_capability(actor, "users", "manage")?;

        let mut user = self.load_user(user_id).await?;
        let now_admin = user.toggle_admin(self.clock.now());
        let updated = self
            .user_repo
            .update_roles(user.id, user.roles(), user.updated_at)
            .await?;
        tracing::info!(user_id = %updated.id, admin = now_admin, actor_id = %actor.id, "user role changed");

        let avatar = self.avatar_repo.find_by_user(updated.id).await?;
        Ok(AuthorDto::from_profile(
            AuthorProfile {
                user: updated,
                avatar,
            },
            &self.uploads,
        ))
    }
}
