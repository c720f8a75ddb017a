// src/infrastructure/repositories/postgres_article.rs
use super::postgres_media::PhotoRow;
use super::postgres_tag::TagRow;
use super::{like_pattern, map_sqlx, to_count};
use crate::domain::article::{
    Article, ArticleBody, ArticleDetails, ArticleFilter, ArticleId, ArticleReadRepository,
    ArticleTitle, ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use crate::domain::category::{Category, CategoryCode, CategoryId, CategoryName};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::media::Photo;
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::tag::{Tag, TagId};
use crate::domain::user::{AuthorSummary, BlogName, FirstName, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, Transaction};
use std::collections::HashMap;

const DETAILS_SELECT: &str = "SELECT a.id, a.title, a.body, a.published_at, a.category_id, a.author_id, \
     c.name AS category_name, c.code AS category_code, \
     u.first_name AS author_first_name, u.blog_name AS author_blog_name, \
     p.id AS photo_id, p.file AS photo_file, \
     p.created_at AS photo_created_at, p.updated_at AS photo_updated_at \
     FROM articles a \
     JOIN categories c ON c.id = a.category_id \
     JOIN users u ON u.id = a.author_id \
     LEFT JOIN photos p ON p.article_id = a.id";

const COUNT_SELECT: &str =
    "SELECT COUNT(1) FROM articles a JOIN categories c ON c.id = a.category_id";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    body: String,
    published_at: DateTime<Utc>,
    category_id: i64,
    author_id: i64,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            body: ArticleBody::new(row.body)?,
            published_at: row.published_at,
            category_id: CategoryId::new(row.category_id)?,
            author_id: UserId::new(row.author_id)?,
        })
    }
}

#[derive(Debug, FromRow)]
struct ArticleDetailsRow {
    #[sqlx(flatten)]
    article: ArticleRow,
    category_name: String,
    category_code: String,
    author_first_name: String,
    author_blog_name: Option<String>,
    photo_id: Option<i64>,
    photo_file: Option<String>,
    photo_created_at: Option<DateTime<Utc>>,
    photo_updated_at: Option<DateTime<Utc>>,
}

impl ArticleDetailsRow {
    fn into_details(self, tags: Vec<Tag>) -> DomainResult<ArticleDetails> {
        let article = Article::try_from(self.article)?;
        let category = Category {
            id: article.category_id,
            name: CategoryName::new(self.category_name)?,
            code: CategoryCode::new(self.category_code)?,
        };
        let author = AuthorSummary {
            id: article.author_id,
            first_name: FirstName::new(self.author_first_name)?,
            blog_name: self.author_blog_name.map(BlogName::new).transpose()?,
        };
        let photo = match (
            self.photo_id,
            self.photo_file,
            self.photo_created_at,
            self.photo_updated_at,
        ) {
            (Some(id), Some(file), Some(created_at), Some(updated_at)) => {
                Some(Photo::try_from(PhotoRow {
                    id,
                    article_id: i64::from(article.id),
                    file,
                    created_at,
                    updated_at,
                })?)
            }
            _ => None,
        };

        Ok(ArticleDetails {
            article,
            category,
            author,
            tags,
            photo,
        })
    }
}

#[derive(Debug, FromRow)]
struct ArticleTagRow {
    article_id: i64,
    #[sqlx(flatten)]
    tag: TagRow,
}

async fn replace_tag_links(
    tx: &mut Transaction<'_, Postgres>,
    article_id: ArticleId,
    tag_ids: &[TagId],
) -> DomainResult<()> {
    sqlx::query("DELETE FROM articles_tags WHERE article_id = $1")
        .bind(i64::from(article_id))
        .execute(&mut **tx)
        .await
        .map_err(map_sqlx)?;

    if tag_ids.is_empty() {
        return Ok(());
    }

    let ids: Vec<i64> = tag_ids.iter().map(|id| i64::from(*id)).collect();
    sqlx::query(
        "INSERT INTO articles_tags (article_id, tag_id)
         SELECT $1, UNNEST($2::BIGINT[])
         ON CONFLICT DO NOTHING",
    )
    .bind(i64::from(article_id))
    .bind(ids)
    .execute(&mut **tx)
    .await
    .map_err(map_sqlx)?;
    Ok(())
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            body,
            published_at,
            category_id,
            author_id,
            tag_ids,
        } = article;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (title, body, published_at, category_id, author_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, title, body, published_at, category_id, author_id",
        )
        .bind(title.as_str())
        .bind(body.as_str())
        .bind(published_at)
        .bind(i64::from(category_id))
        .bind(i64::from(author_id))
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        let article = Article::try_from(row)?;
        replace_tag_links(&mut tx, article.id, &tag_ids).await?;
        tx.commit().await.map_err(map_sqlx)?;

        Ok(article)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            body,
            category_id,
            tag_ids,
        } = update;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        let row = sqlx::query_as::<_, ArticleRow>(
            "UPDATE articles SET title = $2, body = $3, category_id = $4 WHERE id = $1
             RETURNING id, title, body, published_at, category_id, author_id",
        )
        .bind(i64::from(id))
        .bind(title.as_str())
        .bind(body.as_str())
        .bind(i64::from(category_id))
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::not_found("article not found"))?;

        replace_tag_links(&mut tx, id, &tag_ids).await?;
        tx.commit().await.map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let article_id = i64::from(id);
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        for statement in [
            "DELETE FROM comments WHERE article_id = $1",
            "DELETE FROM photos WHERE article_id = $1",
            "DELETE FROM articles_tags WHERE article_id = $1",
        ] {
            sqlx::query(statement)
                .bind(article_id)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
        }

        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(article_id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("article not found"));
        }

        tx.commit().await.map_err(map_sqlx)
    }
}

impl PostgresArticleReadRepository {
    fn apply_filter<'a>(builder: &mut QueryBuilder<'a, Postgres>, filter: &'a ArticleFilter) {
        match filter {
            ArticleFilter::All => {}
            ArticleFilter::CategoryName(name) => {
                builder.push(" WHERE c.name = ");
                builder.push_bind(name.as_str());
            }
            ArticleFilter::Author(author_id) => {
                builder.push(" WHERE a.author_id = ");
                builder.push_bind(i64::from(*author_id));
            }
            ArticleFilter::FollowedBy(user_id) => {
                builder.push(
                    " WHERE a.author_id IN (SELECT followed_id FROM user_follows WHERE follower_id = ",
                );
                builder.push_bind(i64::from(*user_id));
                builder.push(")");
            }
            ArticleFilter::Tag(tag_id) => {
                builder.push(
                    " WHERE EXISTS (SELECT 1 FROM articles_tags at WHERE at.article_id = a.id AND at.tag_id = ",
                );
                builder.push_bind(i64::from(*tag_id));
                builder.push(")");
            }
            ArticleFilter::TitleContains(term) => {
                builder.push(" WHERE a.title ILIKE ");
                builder.push_bind(like_pattern(term));
            }
        }
    }

    /// Loads the tags of every listed article in one round trip.
    async fn attach_tags(&self, rows: Vec<ArticleDetailsRow>) -> DomainResult<Vec<ArticleDetails>> {
        let ids: Vec<i64> = rows.iter().map(|row| row.article.id).collect();
        let mut tags_by_article: HashMap<i64, Vec<Tag>> = HashMap::new();

        if !ids.is_empty() {
            let tag_rows = sqlx::query_as::<_, ArticleTagRow>(
                "SELECT at.article_id, t.id, t.name, t.code, t.created_at, t.updated_at
                 FROM articles_tags at
                 JOIN tags t ON t.id = at.tag_id
                 WHERE at.article_id = ANY($1)
                 ORDER BY t.name ASC",
            )
            .bind(ids.as_slice())
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

            for row in tag_rows {
                tags_by_article
                    .entry(row.article_id)
                    .or_default()
                    .push(Tag::try_from(row.tag)?);
            }
        }

        rows.into_iter()
            .map(|row| {
                let tags = tags_by_article.remove(&row.article.id).unwrap_or_default();
                row.into_details(tags)
            })
            .collect()
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleDetails>> {
        let row =
            sqlx::query_as::<_, ArticleDetailsRow>(&format!("{DETAILS_SELECT} WHERE a.id = $1"))
                .bind(i64::from(id))
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx)?;

        match row {
            Some(row) => Ok(self.attach_tags(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn list(
        &self,
        filter: ArticleFilter,
        page: PageRequest,
    ) -> DomainResult<Page<ArticleDetails>> {
        let mut count: QueryBuilder<Postgres> = QueryBuilder::new(COUNT_SELECT);
        Self::apply_filter(&mut count, &filter);
        let total = count
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(DETAILS_SELECT);
        Self::apply_filter(&mut builder, &filter);
        builder.push(" ORDER BY a.published_at DESC, a.id DESC LIMIT ");
        builder.push_bind(page.limit());
        builder.push(" OFFSET ");
        builder.push_bind(page.offset());

        let rows = builder
            .build_query_as::<ArticleDetailsRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let items = self.attach_tags(rows).await?;
        Ok(Page::new(items, to_count(total), page))
    }
}
