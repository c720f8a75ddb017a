// src/infrastructure/repositories/postgres_tag.rs
use super::{like_pattern, map_sqlx};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::tag::{NewTag, Tag, TagCode, TagId, TagName, TagRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const TAG_COLUMNS: &str = "id, name, code, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresTagRepository {
    pool: PgPool,
}

impl PostgresTagRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
pub(super) struct TagRow {
    pub(super) id: i64,
    pub(super) name: String,
    pub(super) code: String,
    pub(super) created_at: DateTime<Utc>,
    pub(super) updated_at: DateTime<Utc>,
}

impl TryFrom<TagRow> for Tag {
    type Error = DomainError;

    fn try_from(row: TagRow) -> Result<Self, Self::Error> {
        Ok(Tag {
            id: TagId::new(row.id)?,
            name: TagName::new(row.name)?,
            code: TagCode::new(row.code)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn into_tags(rows: Vec<TagRow>) -> DomainResult<Vec<Tag>> {
    rows.into_iter().map(Tag::try_from).collect()
}

#[async_trait]
impl TagRepository for PostgresTagRepository {
    async fn find_by_id(&self, id: TagId) -> DomainResult<Option<Tag>> {
        let row =
            sqlx::query_as::<_, TagRow>(&format!("SELECT {TAG_COLUMNS} FROM tags WHERE id = $1"))
                .bind(i64::from(id))
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx)?;
        row.map(Tag::try_from).transpose()
    }

    async fn find_by_names(&self, names: &[TagName]) -> DomainResult<Vec<Tag>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }
        let names: Vec<&str> = names.iter().map(TagName::as_str).collect();
        let rows = sqlx::query_as::<_, TagRow>(&format!(
            "SELECT {TAG_COLUMNS} FROM tags WHERE name = ANY($1) ORDER BY name ASC"
        ))
        .bind(names)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;
        into_tags(rows)
    }

    async fn find_by_code(&self, code: &TagCode) -> DomainResult<Option<Tag>> {
        let row =
            sqlx::query_as::<_, TagRow>(&format!("SELECT {TAG_COLUMNS} FROM tags WHERE code = $1"))
                .bind(code.as_str())
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx)?;
        row.map(Tag::try_from).transpose()
    }

    async fn insert(&self, tag: NewTag) -> DomainResult<Tag> {
        let row = sqlx::query_as::<_, TagRow>(&format!(
            "INSERT INTO tags (name, code, created_at, updated_at) VALUES ($1, $2, $3, $3)
             RETURNING {TAG_COLUMNS}"
        ))
        .bind(tag.name.as_str())
        .bind(tag.code.as_str())
        .bind(tag.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Tag::try_from(row)
    }

    async fn search(&self, term: &str) -> DomainResult<Vec<Tag>> {
        let rows = sqlx::query_as::<_, TagRow>(&format!(
            "SELECT {TAG_COLUMNS} FROM tags WHERE name ILIKE $1 ORDER BY name ASC"
        ))
        .bind(like_pattern(term))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;
        into_tags(rows)
    }
}
