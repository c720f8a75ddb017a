use std::sync::Arc;

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
    },
    uploads::UploadListener,
};
use crate::domain::{
    media::AvatarRepository,
    user::{FollowRepository, User, UserId, UserRepository},
};

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) follow_repo: Arc<dyn FollowRepository>,
    pub(super) avatar_repo: Arc<dyn AvatarRepository>,
    pub(super) uploads: Arc<UploadListener>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    pub(super) clock: Arc<dyn Clock>,
}

impl UserCommandService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        follow_repo: Arc<dyn FollowRepository>,
        avatar_repo: Arc<dyn AvatarRepository>,
        uploads: Arc<UploadListener>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            follow_repo,
            avatar_repo,
            uploads,
            password_hasher,
            token_manager,
            clock,
        }
    }

    pub(super) async fn load_user(&self, id: i64) -> ApplicationResult<User> {
        let id = UserId::new(id)?;
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))
    }
}
