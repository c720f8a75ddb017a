// src/domain/user/entity.rs
use crate::domain::media::Avatar;
use crate::domain::user::value_objects::{
    Bio, BlogName, Email, FirstName, PasswordHash, Role, UserId,
};
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub password_hash: PasswordHash,
    roles: BTreeSet<Role>,
    pub first_name: FirstName,
    pub blog_name: Option<BlogName>,
    pub bio: Option<Bio>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: UserId,
        email: Email,
        password_hash: PasswordHash,
        roles: impl IntoIterator<Item = Role>,
        first_name: FirstName,
        blog_name: Option<BlogName>,
        bio: Option<Bio>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            password_hash,
            roles: normalize_roles(roles),
            first_name,
            blog_name,
            bio,
            created_at,
            updated_at,
        }
    }

    /// Every user carries the `user` role regardless of what was stored.
    pub fn roles(&self) -> &BTreeSet<Role> {
        &self.roles
    }

    pub fn is_admin(&self) -> bool {
        self.roles.contains(&Role::Admin)
    }

    pub fn make_admin(&mut self, now: DateTime<Utc>) {
        if self.roles.insert(Role::Admin) {
            self.updated_at = now;
        }
    }

    pub fn divest_admin(&mut self, now: DateTime<Utc>) {
        if self.roles.remove(&Role::Admin) {
            self.updated_at = now;
        }
    }

    /// Flips the admin role and returns whether the user is now an admin.
    pub fn toggle_admin(&mut self, now: DateTime<Utc>) -> bool {
        if self.is_admin() {
            self.divest_admin(now);
        } else {
            self.make_admin(now);
        }
        self.is_admin()
    }

    pub fn summary(&self) -> AuthorSummary {
        AuthorSummary {
            id: self.id,
            first_name: self.first_name.clone(),
            blog_name: self.blog_name.clone(),
        }
    }
}

fn normalize_roles(roles: impl IntoIterator<Item = Role>) -> BTreeSet<Role> {
    let mut set: BTreeSet<Role> = roles.into_iter().collect();
    set.insert(Role::User);
    set
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub password_hash: PasswordHash,
    pub roles: BTreeSet<Role>,
    pub first_name: FirstName,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn register(
        email: Email,
        password_hash: PasswordHash,
        first_name: FirstName,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            email,
            password_hash,
            roles: normalize_roles([Role::User]),
            first_name,
            created_at,
        }
    }
}

/// Author reference embedded in article and comment listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorSummary {
    pub id: UserId,
    pub first_name: FirstName,
    pub blog_name: Option<BlogName>,
}

#[derive(Debug, Clone)]
pub struct AuthorProfile {
    pub user: User,
    pub avatar: Option<Avatar>,
}
