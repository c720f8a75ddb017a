// src/infrastructure/repositories/postgres_user.rs
use super::{map_sqlx, to_count};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::media::{Avatar, AvatarId, StoredFileName};
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::user::{
    AuthorProfile, Bio, BlogName, Email, FirstName, FollowRepository, NewUser, PasswordHash, Role,
    User, UserId, UserRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::collections::BTreeSet;

const USER_COLUMNS: &str =
    "u.id, u.email, u.password_hash, u.roles, u.first_name, u.blog_name, u.bio, u.created_at, u.updated_at";

const PROFILE_SELECT: &str = "SELECT u.id, u.email, u.password_hash, u.roles, u.first_name, \
     u.blog_name, u.bio, u.created_at, u.updated_at, \
     a.id AS avatar_id, a.file AS avatar_file, \
     a.created_at AS avatar_created_at, a.updated_at AS avatar_updated_at \
     FROM users u LEFT JOIN avatars a ON a.user_id = u.id";

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    email: String,
    password_hash: String,
    roles: Vec<String>,
    first_name: String,
    blog_name: Option<String>,
    bio: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let roles = row
            .roles
            .iter()
            .map(|role| role.parse::<Role>())
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(User::new(
            UserId::new(row.id)?,
            Email::new(row.email)?,
            PasswordHash::new(row.password_hash)?,
            roles,
            FirstName::new(row.first_name)?,
            row.blog_name.map(BlogName::new).transpose()?,
            row.bio.map(Bio::new).transpose()?,
            row.created_at,
            row.updated_at,
        ))
    }
}

#[derive(Debug, FromRow)]
struct ProfileRow {
    #[sqlx(flatten)]
    user: UserRow,
    avatar_id: Option<i64>,
    avatar_file: Option<String>,
    avatar_created_at: Option<DateTime<Utc>>,
    avatar_updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<ProfileRow> for AuthorProfile {
    type Error = DomainError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        let user = User::try_from(row.user)?;
        let avatar = match (
            row.avatar_id,
            row.avatar_file,
            row.avatar_created_at,
            row.avatar_updated_at,
        ) {
            (Some(id), Some(file), Some(created_at), Some(updated_at)) => Some(Avatar {
                id: AvatarId::new(id)?,
                user_id: user.id,
                file: StoredFileName::new(file)?,
                created_at,
                updated_at,
            }),
            _ => None,
        };
        Ok(AuthorProfile { user, avatar })
    }
}

fn role_names(roles: &BTreeSet<Role>) -> Vec<String> {
    roles.iter().map(|role| role.as_str().to_string()).collect()
}

fn into_profiles(rows: Vec<ProfileRow>) -> DomainResult<Vec<AuthorProfile>> {
    rows.into_iter().map(AuthorProfile::try_from).collect()
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let NewUser {
            email,
            password_hash,
            roles,
            first_name,
            created_at,
        } = new_user;

        let row = sqlx::query_as::<_, UserRow>(&format!(
            "INSERT INTO users AS u (email, password_hash, roles, first_name, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $5)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(email.as_str())
        .bind(password_hash.as_str())
        .bind(role_names(&roles))
        .bind(first_name.as_str())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        User::try_from(row)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users u WHERE u.id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users u WHERE u.email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_profile(&self, id: UserId) -> DomainResult<Option<AuthorProfile>> {
        let row = sqlx::query_as::<_, ProfileRow>(&format!("{PROFILE_SELECT} WHERE u.id = $1"))
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(AuthorProfile::try_from).transpose()
    }

    async fn list_authors(&self, page: PageRequest) -> DomainResult<Page<AuthorProfile>> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let rows = sqlx::query_as::<_, ProfileRow>(&format!(
            "{PROFILE_SELECT} ORDER BY u.first_name DESC, u.id DESC LIMIT $1 OFFSET $2"
        ))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(Page::new(into_profiles(rows)?, to_count(total), page))
    }

    async fn search(&self, term: &str) -> DomainResult<Vec<AuthorProfile>> {
        let rows = sqlx::query_as::<_, ProfileRow>(&format!(
            "{PROFILE_SELECT}
             WHERE u.first_name ILIKE $1 OR u.blog_name ILIKE $1
             ORDER BY u.first_name ASC, u.id ASC"
        ))
        .bind(super::like_pattern(term))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        into_profiles(rows)
    }

    async fn update_roles(
        &self,
        id: UserId,
        roles: &BTreeSet<Role>,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<User> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "UPDATE users AS u SET roles = $2, updated_at = $3 WHERE u.id = $1
             RETURNING {USER_COLUMNS}"
        ))
        .bind(i64::from(id))
        .bind(role_names(roles))
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::not_found("user not found"))?;

        User::try_from(row)
    }

    async fn count_articles(&self, id: UserId) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM articles WHERE author_id = $1")
            .bind(i64::from(id))
            .fetch_one(&self.pool)
            .await
            .map(to_count)
            .map_err(map_sqlx)
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        let user_id = i64::from(id);
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        for statement in [
            "DELETE FROM comments WHERE author_id = $1",
            "DELETE FROM avatars WHERE user_id = $1",
            "DELETE FROM user_follows WHERE follower_id = $1 OR followed_id = $1",
        ] {
            sqlx::query(statement)
                .bind(user_id)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
        }

        // Articles are not removed here; an author of any article fails the
        // foreign key and the whole transaction rolls back.
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("user not found"));
        }

        tx.commit().await.map_err(map_sqlx)
    }
}

#[derive(Clone)]
pub struct PostgresFollowRepository {
    pool: PgPool,
}

impl PostgresFollowRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn page_of(
        &self,
        join_on: &str,
        filter_column: &str,
        user: UserId,
        page: PageRequest,
    ) -> DomainResult<Page<AuthorProfile>> {
        let total = sqlx::query_scalar::<_, i64>(&format!(
            "SELECT COUNT(1) FROM user_follows f WHERE f.{filter_column} = $1"
        ))
        .bind(i64::from(user))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let rows = sqlx::query_as::<_, ProfileRow>(&format!(
            "{PROFILE_SELECT}
             JOIN user_follows f ON {join_on}
             WHERE f.{filter_column} = $1
             ORDER BY u.first_name ASC, u.id ASC
             LIMIT $2 OFFSET $3"
        ))
        .bind(i64::from(user))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(Page::new(into_profiles(rows)?, to_count(total), page))
    }
}

#[async_trait]
impl FollowRepository for PostgresFollowRepository {
    async fn follow(&self, follower: UserId, followed: UserId) -> DomainResult<bool> {
        let result = sqlx::query(
            "INSERT INTO user_follows (follower_id, followed_id) VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(i64::from(follower))
        .bind(i64::from(followed))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(result.rows_affected() > 0)
    }

    async fn unfollow(&self, follower: UserId, followed: UserId) -> DomainResult<bool> {
        let result =
            sqlx::query("DELETE FROM user_follows WHERE follower_id = $1 AND followed_id = $2")
                .bind(i64::from(follower))
                .bind(i64::from(followed))
                .execute(&self.pool)
                .await
                .map_err(map_sqlx)?;
        Ok(result.rows_affected() > 0)
    }

    async fn is_following(&self, follower: UserId, followed: UserId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                SELECT 1 FROM user_follows WHERE follower_id = $1 AND followed_id = $2
             )",
        )
        .bind(i64::from(follower))
        .bind(i64::from(followed))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn followed_authors(
        &self,
        user: UserId,
        page: PageRequest,
    ) -> DomainResult<Page<AuthorProfile>> {
        self.page_of("f.followed_id = u.id", "follower_id", user, page)
            .await
    }

    async fn followers(
        &self,
        user: UserId,
        page: PageRequest,
    ) -> DomainResult<Page<AuthorProfile>> {
        self.page_of("f.follower_id = u.id", "followed_id", user, page)
            .await
    }
}
