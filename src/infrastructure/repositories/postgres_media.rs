// src/infrastructure/repositories/postgres_media.rs
use super::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::media::{
    Avatar, AvatarId, AvatarRepository, NewAvatar, NewPhoto, Photo, PhotoId, PhotoRepository,
    StoredFileName,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresPhotoRepository {
    pool: PgPool,
}

impl PostgresPhotoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresAvatarRepository {
    pool: PgPool,
}

impl PostgresAvatarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
pub(super) struct PhotoRow {
    pub(super) id: i64,
    pub(super) article_id: i64,
    pub(super) file: String,
    pub(super) created_at: DateTime<Utc>,
    pub(super) updated_at: DateTime<Utc>,
}

impl TryFrom<PhotoRow> for Photo {
    type Error = DomainError;

    fn try_from(row: PhotoRow) -> Result<Self, Self::Error> {
        Ok(Photo {
            id: PhotoId::new(row.id)?,
            article_id: ArticleId::new(row.article_id)?,
            file: StoredFileName::new(row.file)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct AvatarRow {
    id: i64,
    user_id: i64,
    file: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<AvatarRow> for Avatar {
    type Error = DomainError;

    fn try_from(row: AvatarRow) -> Result<Self, Self::Error> {
        Ok(Avatar {
            id: AvatarId::new(row.id)?,
            user_id: UserId::new(row.user_id)?,
            file: StoredFileName::new(row.file)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl PhotoRepository for PostgresPhotoRepository {
    async fn find_by_id(&self, id: PhotoId) -> DomainResult<Option<Photo>> {
        let row = sqlx::query_as::<_, PhotoRow>(
            "SELECT id, article_id, file, created_at, updated_at FROM photos WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        row.map(Photo::try_from).transpose()
    }

    async fn find_by_article(&self, article_id: ArticleId) -> DomainResult<Option<Photo>> {
        let row = sqlx::query_as::<_, PhotoRow>(
            "SELECT id, article_id, file, created_at, updated_at FROM photos WHERE article_id = $1",
        )
        .bind(i64::from(article_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        row.map(Photo::try_from).transpose()
    }

    async fn insert(&self, photo: NewPhoto) -> DomainResult<Photo> {
        let row = sqlx::query_as::<_, PhotoRow>(
            "INSERT INTO photos (article_id, file, created_at, updated_at) VALUES ($1, $2, $3, $3)
             RETURNING id, article_id, file, created_at, updated_at",
        )
        .bind(i64::from(photo.article_id))
        .bind(photo.file.as_str())
        .bind(photo.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Photo::try_from(row)
    }

    async fn replace_file(
        &self,
        id: PhotoId,
        file: StoredFileName,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Photo> {
        let row = sqlx::query_as::<_, PhotoRow>(
            "UPDATE photos SET file = $2, updated_at = $3 WHERE id = $1
             RETURNING id, article_id, file, created_at, updated_at",
        )
        .bind(i64::from(id))
        .bind(file.as_str())
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::not_found("photo not found"))?;
        Photo::try_from(row)
    }
}

#[async_trait]
impl AvatarRepository for PostgresAvatarRepository {
    async fn find_by_id(&self, id: AvatarId) -> DomainResult<Option<Avatar>> {
        let row = sqlx::query_as::<_, AvatarRow>(
            "SELECT id, user_id, file, created_at, updated_at FROM avatars WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        row.map(Avatar::try_from).transpose()
    }

    async fn find_by_user(&self, user_id: UserId) -> DomainResult<Option<Avatar>> {
        let row = sqlx::query_as::<_, AvatarRow>(
            "SELECT id, user_id, file, created_at, updated_at FROM avatars WHERE user_id = $1",
        )
        .bind(i64::from(user_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        row.map(Avatar::try_from).transpose()
    }

    async fn insert(&self, avatar: NewAvatar) -> DomainResult<Avatar> {
        let row = sqlx::query_as::<_, AvatarRow>(
            "INSERT INTO avatars (user_id, file, created_at, updated_at) VALUES ($1, $2, $3, $3)
             RETURNING id, user_id, file, created_at, updated_at",
        )
        .bind(i64::from(avatar.user_id))
        .bind(avatar.file.as_str())
        .bind(avatar.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Avatar::try_from(row)
    }

    async fn replace_file(
        &self,
        id: AvatarId,
        file: StoredFileName,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Avatar> {
        let row = sqlx::query_as::<_, AvatarRow>(
            "UPDATE avatars SET file = $2, updated_at = $3 WHERE id = $1
             RETURNING id, user_id, file, created_at, updated_at",
        )
        .bind(i64::from(id))
        .bind(file.as_str())
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::not_found("avatar not found"))?;
        Avatar::try_from(row)
    }

    async fn delete(&self, id: AvatarId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM avatars WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("avatar not found"));
        }
        Ok(())
    }
}
