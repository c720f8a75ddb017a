use crate::application::uploads::UploadListener;
use crate::domain::user::{AuthorProfile, AuthorSummary, Role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{articles::ArticleDto, media::AvatarDto, pagination::PaginatedResult, serde_time};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthorSummaryDto {
    pub id: i64,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blog_name: Option<String>,
}

impl From<AuthorSummary> for AuthorSummaryDto {
    fn from(author: AuthorSummary) -> Self {
        Self {
            id: author.id.into(),
            first_name: author.first_name.into(),
            blog_name: author.blog_name.map(Into::into),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorDto {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub blog_name: Option<String>,
    pub bio: Option<String>,
    pub roles: Vec<Role>,
    pub is_admin: bool,
    pub avatar: Option<AvatarDto>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl AuthorDto {
    pub fn from_profile(profile: AuthorProfile, uploads: &UploadListener) -> Self {
        let AuthorProfile { user, avatar } = profile;
        Self {
            id: user.id.into(),
            email: user.email.to_string(),
            first_name: user.first_name.to_string(),
            blog_name: user.blog_name.clone().map(Into::into),
            bio: user.bio.clone().map(Into::into),
            roles: user.roles().iter().copied().collect(),
            is_admin: user.is_admin(),
            avatar: avatar.map(|avatar| AvatarDto::from_avatar(avatar, uploads)),
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorViewDto {
    pub author: AuthorDto,
    pub articles: PaginatedResult<ArticleDto>,
    pub is_subscribed: bool,
    pub is_self: bool,
}
