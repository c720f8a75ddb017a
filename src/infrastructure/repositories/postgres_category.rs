// src/infrastructure/repositories/postgres_category.rs
use super::{map_sqlx, to_count};
use crate::domain::category::{
    Category, CategoryCode, CategoryId, CategoryName, CategoryRepository, CategoryUpdate,
    NewCategory,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::{Page, PageRequest};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    code: String,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: CategoryId::new(row.id)?,
            name: CategoryName::new(row.name)?,
            code: CategoryCode::new(row.code)?,
        })
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn list(&self, page: PageRequest) -> DomainResult<Page<Category>> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM categories")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, code FROM categories ORDER BY name ASC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let items = rows
            .into_iter()
            .map(Category::try_from)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Page::new(items, to_count(total), page))
    }

    async fn list_all(&self) -> DomainResult<Vec<Category>> {
        sqlx::query_as::<_, CategoryRow>("SELECT id, name, code FROM categories ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?
            .into_iter()
            .map(Category::try_from)
            .collect()
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let row =
            sqlx::query_as::<_, CategoryRow>("SELECT id, name, code FROM categories WHERE id = $1")
                .bind(i64::from(id))
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx)?;
        row.map(Category::try_from).transpose()
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, code FROM categories WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        row.map(Category::try_from).transpose()
    }

    async fn find_by_code(&self, code: &CategoryCode) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, code FROM categories WHERE code = $1",
        )
        .bind(code.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        row.map(Category::try_from).transpose()
    }

    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "INSERT INTO categories (name, code) VALUES ($1, $2) RETURNING id, name, code",
        )
        .bind(category.name.as_str())
        .bind(category.code.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Category::try_from(row)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "UPDATE categories SET name = $2, code = $3 WHERE id = $1 RETURNING id, name, code",
        )
        .bind(i64::from(update.id))
        .bind(update.name.as_str())
        .bind(update.code.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::not_found("category not found"))?;
        Category::try_from(row)
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("category not found"));
        }
        Ok(())
    }

    async fn count_articles(&self, id: CategoryId) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM articles WHERE category_id = $1")
            .bind(i64::from(id))
            .fetch_one(&self.pool)
            .await
            .map(to_count)
            .map_err(map_sqlx)
    }
}
