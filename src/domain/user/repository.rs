use crate::domain::errors::DomainResult;
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::user::{
    entity::{AuthorProfile, NewUser, User},
    value_objects::{Email, Role, UserId},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>>;

    async fn find_profile(&self, id: UserId) -> DomainResult<Option<AuthorProfile>>;

    /// Authors ordered by first name, descending.
    async fn list_authors(&self, page: PageRequest) -> DomainResult<Page<AuthorProfile>>;

    /// Case-insensitive match on first name or blog name, ordered by first name.
    async fn search(&self, term: &str) -> DomainResult<Vec<AuthorProfile>>;

    async fn update_roles(
        &self,
        id: UserId,
        roles: &BTreeSet<Role>,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<User>;

    async fn count_articles(&self, id: UserId) -> DomainResult<u64>;

    /// Removes the user with their comments, avatar row and follow edges.
    async fn delete(&self, id: UserId) -> DomainResult<()>;
}

/// Directed "follows" edges between users.
#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Returns `false` when the edge already existed.
    async fn follow(&self, follower: UserId, followed: UserId) -> DomainResult<bool>;

    /// Returns `false` when there was no edge to remove.
    async fn unfollow(&self, follower: UserId, followed: UserId) -> DomainResult<bool>;

    async fn is_following(&self, follower: UserId, followed: UserId) -> DomainResult<bool>;

    /// Authors followed by `user`, ordered by first name ascending.
    async fn followed_authors(
        &self,
        user: UserId,
        page: PageRequest,
    ) -> DomainResult<Page<AuthorProfile>>;

    /// Users following `user`, ordered by first name ascending.
    async fn followers(&self, user: UserId, page: PageRequest)
    -> DomainResult<Page<AuthorProfile>>;
}
