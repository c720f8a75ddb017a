use crate::domain::article::ArticleId;
use crate::domain::media::value_objects::{AvatarId, PhotoId, StoredFileName};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// Cover photo of an article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub id: PhotoId,
    pub article_id: ArticleId,
    pub file: StoredFileName,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPhoto {
    pub article_id: ArticleId,
    pub file: StoredFileName,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Avatar {
    pub id: AvatarId,
    pub user_id: UserId,
    pub file: StoredFileName,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewAvatar {
    pub user_id: UserId,
    pub file: StoredFileName,
    pub created_at: DateTime<Utc>,
}
