// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenManager,
};
use async_trait::async_trait;
use biscuit_auth::{
    Biscuit, KeyPair, PrivateKey, PublicKey,
    builder::{Algorithm, AuthorizerBuilder, Term},
};
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use std::{
    collections::HashMap,
    fmt::Write as _,
    sync::Arc,
    time::{Duration, SystemTime},
};

/// Issues and verifies Ed25519-signed biscuit bearer tokens.
#[derive(Clone)]
pub struct BiscuitTokenManager {
    root: Arc<KeyPair>,
    public: PublicKey,
    ttl: Duration,
}

impl BiscuitTokenManager {
    pub fn new(private_key_hex: &str, ttl: Duration) -> ApplicationResult<Self> {
        let private = PrivateKey::from_bytes_hex(private_key_hex, Algorithm::Ed25519)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let keypair = KeyPair::from(&private);
        let public = keypair.public();

        Ok(Self {
            root: Arc::new(keypair),
            public,
            ttl,
        })
    }
}

fn escape_literal(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

fn build_code_and_params(
    subject: &TokenSubject,
    issued_at: SystemTime,
    expires_at: SystemTime,
) -> (String, HashMap<String, Term>) {
    let mut params: HashMap<String, Term> = HashMap::new();
    params.insert("uid".to_string(), i64::from(subject.user_id).into());
    params.insert("email".to_string(), subject.email.clone().into());
    params.insert("issued".to_string(), issued_at.into());
    params.insert("exp".to_string(), expires_at.into());

    let mut code = String::from(
        r#"
        user({uid}, {email});
        issued_at({issued});
        expires_at({exp});
        check if time($now), $now >= {issued};
        check if time($now), $now <= {exp};
        "#,
    );

    for role in &subject.roles {
        let _ = writeln!(code, r#"role("{}");"#, role.as_str());
    }

    let mut rights: Vec<_> = subject.capabilities.iter().collect();
    rights.sort_by(|a, b| (&a.resource, &a.action).cmp(&(&b.resource, &b.action)));
    for cap in rights {
        let _ = writeln!(
            code,
            r#"right("{}", "{}");"#,
            escape_literal(&cap.resource),
            escape_literal(&cap.action)
        );
    }

    (code, params)
}

fn build_and_serialize_biscuit(
    code: &str,
    params: HashMap<String, Term>,
    root: &KeyPair,
) -> ApplicationResult<String> {
    let token = Biscuit::builder()
        .code_with_params(code, params, HashMap::new())
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
        .build(root)
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

    token
        .seal()
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
        .to_base64()
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))
}

fn ttl_to_expires_in_seconds(ttl: Duration) -> i64 {
    ChronoDuration::from_std(ttl)
        .map(|d| d.num_seconds())
        .unwrap_or(i64::MAX)
        .max(0)
}

#[async_trait]
impl TokenManager for BiscuitTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = SystemTime::now();
        let expires_at = issued_at
            .checked_add(self.ttl)
            .ok_or_else(|| ApplicationError::infrastructure("token expiration overflow"))?;
        let (code, params) = build_code_and_params(&subject, issued_at, expires_at);

        let token = build_and_serialize_biscuit(&code, params, self.root.as_ref())?;
        tracing::debug!(user_id = %subject.user_id, "issued access token");

        Ok(AuthTokenDto {
            token,
            issued_at: DateTime::<Utc>::from(issued_at),
            expires_at: DateTime::<Utc>::from(expires_at),
            expires_in: ttl_to_expires_in_seconds(self.ttl),
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let biscuit = Biscuit::from_base64(token, self.public)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        // The token's own checks carry the expiry; the policy only has to admit it.
        let mut authorizer = AuthorizerBuilder::new()
            .time()
            .code("allow if true")
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
            .build(&biscuit)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        authorizer
            .authorize()
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        let (facts, _, _, _) = authorizer.dump();
        super::claims::parse_claims(facts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::{Role, UserId, capabilities_for};
    use std::collections::BTreeSet;

    const KEY: &str = "4f2c8a1be03d9f7765a1c2d3e4f5061728394a5b6c7d8e9f0a1b2c3d4e5f6071";

    fn subject(roles: &[Role]) -> TokenSubject {
        let roles: BTreeSet<Role> = roles.iter().copied().collect();
        TokenSubject {
            user_id: UserId::new(7).unwrap(),
            email: "ada@example.com".into(),
            capabilities: capabilities_for(&roles),
            roles,
        }
    }

    #[tokio::test]
    async fn issued_token_authenticates_with_roles_and_rights() {
        let manager = BiscuitTokenManager::new(KEY, Duration::from_secs(600)).unwrap();
        let issued = manager
            .issue(subject(&[Role::User, Role::Admin]))
            .await
            .unwrap();
        assert_eq!(issued.expires_in, 600);

        let user = manager.authenticate(&issued.token).await.unwrap();
        assert_eq!(i64::from(user.id), 7);
        assert_eq!(user.email, "ada@example.com");
        assert!(user.is_admin());
        assert!(user.has_capability("categories", "manage"));
        assert!(user.has_capability("comments", "create"));
    }

    #[tokio::test]
    async fn token_signed_by_another_key_is_rejected() {
        let other = BiscuitTokenManager::new(
            "0000000000000000000000000000000000000000000000000000000000000001",
            Duration::from_secs(600),
        )
        .unwrap();
        let issued = other.issue(subject(&[Role::User])).await.unwrap();

        let manager = BiscuitTokenManager::new(KEY, Duration::from_secs(600)).unwrap();
        let err = manager.authenticate(&issued.token).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn garbage_token_is_unauthorized() {
        let manager = BiscuitTokenManager::new(KEY, Duration::from_secs(600)).unwrap();
        let err = manager.authenticate("not-a-token").await.unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
    }
}
