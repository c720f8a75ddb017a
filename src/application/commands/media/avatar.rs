use super::MediaCommandService;
use crate::{
    application::{
        capability::ensure_capability,
        dto::{AuthenticatedUser, AvatarDto},
        error::{ApplicationError, ApplicationResult},
        ports::storage::UploadedFile,
    },
    domain::media::{Avatar, AvatarId, NewAvatar, specifications::CanManageAvatarSpec},
};

impl MediaCommandService {
    pub async fn add_avatar(
        &self,
        actor: &AuthenticatedUser,
        upload: UploadedFile,
    ) -> ApplicationResult<AvatarDto> {
        ensure_capability(actor, "media", "manage:own")?;
        if self.avatar_repo.find_by_user(actor.id).await?.is_some() {
            return Err(ApplicationError::conflict("user already has an avatar"));
        }

        let file = self.uploads.pre_persist(&upload).await?;
        let inserted = self
            .avatar_repo
            .insert(NewAvatar {
                user_id: actor.id,
                file: file.clone(),
                created_at: self.clock.now(),
            })
            .await;

        match inserted {
            Ok(avatar) => Ok(AvatarDto::from_avatar(avatar, &self.uploads)),
            Err(err) => {
                self.uploads.post_remove(&file).await;
                Err(err.into())
            }
        }
    }

    /// Swaps the avatar image; the previous file is removed from storage.
    pub async fn replace_avatar(
        &self,
        actor: &AuthenticatedUser,
        avatar_id: i64,
        upload: UploadedFile,
    ) -> ApplicationResult<AvatarDto> {
        let avatar = self.owned_avatar(actor, avatar_id).await?;

        let file = self.uploads.pre_persist(&upload).await?;
        let updated = match self
            .avatar_repo
            .replace_file(avatar.id, file.clone(), self.clock.now())
            .await
        {
            Ok(updated) => updated,
            Err(err) => {
                self.uploads.post_remove(&file).await;
                return Err(err.into());
            }
        };

        self.uploads.post_remove(&avatar.file).await;
        tracing::debug!(avatar_id = avatar.id.0, "avatar replaced");
        Ok(AvatarDto::from_avatar(updated, &self.uploads))
    }

    pub async fn delete_avatar(
        &self,
        actor: &AuthenticatedUser,
        avatar_id: i64,
    ) -> ApplicationResult<()> {
        let avatar = self.owned_avatar(actor, avatar_id).await?;
        self.avatar_repo.delete(avatar.id).await?;
        self.uploads.post_remove(&avatar.file).await;
        Ok(())
    }

    async fn owned_avatar(
        &self,
        actor: &AuthenticatedUser,
        avatar_id: i64,
    ) -> ApplicationResult<Avatar> {
        let avatar_id = AvatarId::new(avatar_id)?;
        let avatar = self
            .avatar_repo
            .find_by_id(avatar_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("avatar not found"))?;

        if !CanManageAvatarSpec::new(&avatar, actor.id).is_satisfied() {
            return Err(ApplicationError::forbidden("avatars can only be changed by their owner"));
        }
        Ok(avatar)
    }
}
