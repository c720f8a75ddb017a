use crate::domain::article::ArticleId;
use crate::domain::comment::value_objects::{CommentContent, CommentId};
use crate::domain::user::{AuthorSummary, UserId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub content: CommentContent,
    pub article_id: ArticleId,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub content: CommentContent,
    pub article_id: ArticleId,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// Comment joined with its author for display.
#[derive(Debug, Clone)]
pub struct CommentDetails {
    pub comment: Comment,
    pub author: AuthorSummary,
}
