use std::sync::Arc;

use crate::{
    application::{
        dto::AuthorDto,
        error::{ApplicationError, ApplicationResult},
        uploads::UploadListener,
    },
    domain::{
        article::ArticleReadRepository,
        user::{AuthorProfile, FollowRepository, UserId, UserRepository},
    },
};

pub struct UserQueryService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) follow_repo: Arc<dyn FollowRepository>,
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
    pub(super) uploads: Arc<UploadListener>,
}

impl UserQueryService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        follow_repo: Arc<dyn FollowRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
        uploads: Arc<UploadListener>,
    ) -> Self {
        Self {
            user_repo,
            follow_repo,
            article_repo,
            uploads,
        }
    }

    pub(super) async fn load_profile(&self, id: i64) -> ApplicationResult<AuthorProfile> {
        let id = UserId::new(id)?;
        self.user_repo
            .find_profile(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))
    }

    pub(super) fn to_dto(&self, profile: AuthorProfile) -> AuthorDto {
        AuthorDto::from_profile(profile, &self.uploads)
    }
}
