// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use folio_core::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use folio_core::domain::user::{Role, UserId, capabilities_for};
use std::collections::BTreeSet;

pub const ADMIN_TOKEN: &str = "admin-token";
pub const AUTHOR_TOKEN: &str = "author-token";
pub const READER_TOKEN: &str = "reader-token";
pub const ISSUED_TOKEN: &str = "issued-token";

pub const ADMIN_ID: i64 = 1;
pub const AUTHOR_ID: i64 = 2;
pub const READER_ID: i64 = 3;

/// Maps the constant tokens above to seeded users.
#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, _subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let now = super::time::fixed_now();
        Ok(AuthTokenDto {
            token: ISSUED_TOKEN.into(),
            issued_at: now,
            expires_at: now + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        match token {
            ADMIN_TOKEN => Ok(actor(ADMIN_ID, "ada@example.com", &[Role::User, Role::Admin])),
            AUTHOR_TOKEN => Ok(actor(AUTHOR_ID, "bob@example.com", &[Role::User])),
            READER_TOKEN => Ok(actor(READER_ID, "cleo@example.com", &[Role::User])),
            _ => Err(ApplicationError::unauthorized("invalid token")),
        }
    }
}

pub fn actor(id: i64, email: &str, roles: &[Role]) -> AuthenticatedUser {
    let now = super::time::fixed_now();
    let roles: BTreeSet<Role> = roles.iter().copied().collect();
    AuthenticatedUser {
        id: UserId::new(id).expect("invalid user id"),
        email: email.into(),
        capabilities: capabilities_for(&roles),
        roles,
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}

/// Stores passwords as `hashed:<password>`.
#[derive(Clone, Debug, Default)]
pub struct DummyPasswordHasher;

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("hashed:{password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}
