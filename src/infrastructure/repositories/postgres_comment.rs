// src/infrastructure/repositories/postgres_comment.rs
use super::{map_sqlx, to_count};
use crate::domain::article::ArticleId;
use crate::domain::comment::{
    Comment, CommentContent, CommentDetails, CommentId, CommentRepository, NewComment,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::user::{AuthorSummary, BlogName, FirstName, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    content: String,
    article_id: i64,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            content: CommentContent::new(row.content)?,
            article_id: ArticleId::new(row.article_id)?,
            author_id: UserId::new(row.author_id)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct CommentDetailsRow {
    #[sqlx(flatten)]
    comment: CommentRow,
    author_first_name: String,
    author_blog_name: Option<String>,
}

impl TryFrom<CommentDetailsRow> for CommentDetails {
    type Error = DomainError;

    fn try_from(row: CommentDetailsRow) -> Result<Self, Self::Error> {
        let comment = Comment::try_from(row.comment)?;
        let author = AuthorSummary {
            id: comment.author_id,
            first_name: FirstName::new(row.author_first_name)?,
            blog_name: row.author_blog_name.map(BlogName::new).transpose()?,
        };
        Ok(CommentDetails { comment, author })
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let row = sqlx::query_as::<_, CommentRow>(
            "INSERT INTO comments (content, article_id, author_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $4)
             RETURNING id, content, article_id, author_id, created_at, updated_at",
        )
        .bind(comment.content.as_str())
        .bind(i64::from(comment.article_id))
        .bind(i64::from(comment.author_id))
        .bind(comment.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Comment::try_from(row)
    }

    async fn list_for_article(
        &self,
        article_id: ArticleId,
        page: PageRequest,
    ) -> DomainResult<Page<CommentDetails>> {
        let total =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM comments WHERE article_id = $1")
                .bind(i64::from(article_id))
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx)?;

        let rows = sqlx::query_as::<_, CommentDetailsRow>(
            "SELECT c.id, c.content, c.article_id, c.author_id, c.created_at, c.updated_at,
                    u.first_name AS author_first_name, u.blog_name AS author_blog_name
             FROM comments c
             JOIN users u ON u.id = c.author_id
             WHERE c.article_id = $1
             ORDER BY c.created_at DESC, c.id DESC
             LIMIT $2 OFFSET $3",
        )
        .bind(i64::from(article_id))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let items = rows
            .into_iter()
            .map(CommentDetails::try_from)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Page::new(items, to_count(total), page))
    }
}
