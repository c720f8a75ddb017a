// src/infrastructure/security/claims.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::{Capability, Role, UserId, capabilities_for};
use biscuit_auth::builder::{Fact, Predicate, Term};
use chrono::{DateTime, Utc};
use std::collections::{BTreeSet, HashSet};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Rebuilds the acting user from the facts of a verified token.
pub fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<AuthenticatedUser> {
    let ctx = ClaimsContext::from_facts(facts);
    build_authenticated_user(ctx)
}

fn build_authenticated_user(ctx: ClaimsContext) -> ApplicationResult<AuthenticatedUser> {
    let user_id = ctx
        .user_id
        .ok_or_else(|| ApplicationError::unauthorized("missing user id"))?;
    let email = ctx
        .email
        .ok_or_else(|| ApplicationError::unauthorized("missing email"))?;
    let issued_at = ctx
        .issued_at
        .ok_or_else(|| ApplicationError::unauthorized("missing issued_at"))?;
    let expires_at = ctx
        .expires_at
        .ok_or_else(|| ApplicationError::unauthorized("missing expires_at"))?;

    let id = UserId::new(user_id)
        .map_err(|_| ApplicationError::unauthorized("invalid user id in token"))?;

    let mut roles = ctx.roles;
    roles.insert(Role::User);

    let mut capabilities = capabilities_for(&roles);
    capabilities.extend(ctx.capabilities);

    Ok(AuthenticatedUser {
        id,
        email,
        roles,
        capabilities,
        issued_at: DateTime::<Utc>::from(issued_at),
        expires_at: DateTime::<Utc>::from(expires_at),
    })
}

#[derive(Default)]
struct ClaimsContext {
    user_id: Option<i64>,
    email: Option<String>,
    roles: BTreeSet<Role>,
    issued_at: Option<SystemTime>,
    expires_at: Option<SystemTime>,
    capabilities: HashSet<Capability>,
}

impl ClaimsContext {
    fn from_facts(facts: Vec<Fact>) -> Self {
        let mut ctx = ClaimsContext::default();
        for fact in facts {
            ctx.apply(fact.predicate);
        }
        ctx
    }

    fn apply(&mut self, predicate: Predicate) {
        match (predicate.name.as_str(), predicate.terms.as_slice()) {
            ("user", [Term::Integer(id), Term::Str(email)]) => {
                self.user_id = Some(*id);
                self.email = Some(email.clone());
            }
            ("role", [Term::Str(name)]) => {
                if let Ok(role) = name.parse() {
                    self.roles.insert(role);
                }
            }
            ("issued_at", [Term::Date(seconds)]) => {
                self.issued_at = Some(UNIX_EPOCH + Duration::from_secs(*seconds));
            }
            ("expires_at", [Term::Date(seconds)]) => {
                self.expires_at = Some(UNIX_EPOCH + Duration::from_secs(*seconds));
            }
            ("right", [Term::Str(resource), Term::Str(action)]) => {
                self.capabilities
                    .insert(Capability::new(resource.clone(), action.clone()));
            }
            _ => {}
        }
    }
}
