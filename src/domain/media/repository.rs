use crate::domain::article::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::media::entity::{Avatar, NewAvatar, NewPhoto, Photo};
use crate::domain::media::value_objects::{AvatarId, PhotoId, StoredFileName};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait PhotoRepository: Send + Sync {
    async fn find_by_id(&self, id: PhotoId) -> DomainResult<Option<Photo>>;
    async fn find_by_article(&self, article_id: ArticleId) -> DomainResult<Option<Photo>>;
    async fn insert(&self, photo: NewPhoto) -> DomainResult<Photo>;
    async fn replace_file(
        &self,
        id: PhotoId,
        file: StoredFileName,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Photo>;
}

#[async_trait]
pub trait AvatarRepository: Send + Sync {
    async fn find_by_id(&self, id: AvatarId) -> DomainResult<Option<Avatar>>;
    async fn find_by_user(&self, user_id: UserId) -> DomainResult<Option<Avatar>>;
    async fn insert(&self, avatar: NewAvatar) -> DomainResult<Avatar>;
    async fn replace_file(
        &self,
        id: AvatarId,
        file: StoredFileName,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Avatar>;
    async fn delete(&self, id: AvatarId) -> DomainResult<()>;
}
