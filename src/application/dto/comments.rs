use crate::domain::comment::CommentDetails;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{serde_time, users::AuthorSummaryDto};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentDto {
    pub id: i64,
    pub article_id: i64,
    pub content: String,
    pub author: AuthorSummaryDto,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<CommentDetails> for CommentDto {
    fn from(details: CommentDetails) -> Self {
        let CommentDetails { comment, author } = details;
        Self {
            id: comment.id.into(),
            article_id: comment.article_id.into(),
            content: comment.content.into(),
            author: author.into(),
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}
