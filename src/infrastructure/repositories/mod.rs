// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_article;
mod postgres_category;
mod postgres_comment;
mod postgres_media;
mod postgres_tag;
mod postgres_user;

use crate::application::services::Repositories;
use sqlx::PgPool;
use std::sync::Arc;

pub(crate) use error::{like_pattern, map_sqlx, to_count};
pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
pub use postgres_category::PostgresCategoryRepository;
pub use postgres_comment::PostgresCommentRepository;
pub use postgres_media::{PostgresAvatarRepository, PostgresPhotoRepository};
pub use postgres_tag::PostgresTagRepository;
pub use postgres_user::{PostgresFollowRepository, PostgresUserRepository};

/// Every repository backed by the same pool.
pub fn postgres_repositories(pool: &PgPool) -> Repositories {
    Repositories {
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        follows: Arc::new(PostgresFollowRepository::new(pool.clone())),
        article_write: Arc::new(PostgresArticleWriteRepository::new(pool.clone())),
        article_read: Arc::new(PostgresArticleReadRepository::new(pool.clone())),
        categories: Arc::new(PostgresCategoryRepository::new(pool.clone())),
        tags: Arc::new(PostgresTagRepository::new(pool.clone())),
        comments: Arc::new(PostgresCommentRepository::new(pool.clone())),
        photos: Arc::new(PostgresPhotoRepository::new(pool.clone())),
        avatars: Arc::new(PostgresAvatarRepository::new(pool.clone())),
    }
}
