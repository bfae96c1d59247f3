//! Admin session tokens.
//!
//! A successful password check returns an HS256-signed JWT. Every admin
//! request presents it and it is validated per request, so an unlocked
//! admin view is only as good as an unexpired, correctly signed token.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Subject embedded in every admin session token.
pub const ADMIN_SUBJECT: &str = "admin";

/// Claims embedded in a session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionClaims {
    pub sub: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier for audit logs.
    pub jti: String,
}

/// Session token settings.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Dedicated signing secret. When `None`, the admin password signs.
    pub secret: Option<String>,
    /// Token lifetime in minutes.
    pub expiry_mins: i64,
}

impl SessionConfig {
    /// Eight hours, roughly one browsing session.
    pub const DEFAULT_EXPIRY_MINS: i64 = 480;
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: None,
            expiry_mins: Self::DEFAULT_EXPIRY_MINS,
        }
    }
}

/// Issue a session token valid for `expiry_mins`.
pub fn issue_session_token(
    secret: &str,
    expiry_mins: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let claims = SessionClaims {
        sub: ADMIN_SUBJECT.to_string(),
        exp: now + expiry_mins * 60,
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Validate a session token's signature, expiry and subject.
pub fn validate_session_token(
    token: &str,
    secret: &str,
) -> Result<SessionClaims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default(); // HS256, validates exp
    validation.sub = Some(ADMIN_SUBJECT.to_string());
    let data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )?;
    Ok(data.claims)
}
