//! Signed admin session tokens.
//!
//! The admin session is a stateless HS256 JWT carried in a cookie. Its expiry
//! is fixed at issuance and is never extended by later requests.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Subject claim used for the single admin identity.
pub const ADMIN_SUBJECT: &str = "admin";

/// Absolute admin session lifetime (5 minutes).
pub const SESSION_LIFETIME_SECS: i64 = 300;

/// Error type for session token operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to encode session: {0}")]
    EncodingError(String),

    #[error("Session has expired")]
    Expired,

    #[error("Invalid session")]
    InvalidToken,

    #[error("Session does not grant admin access")]
    NotAdmin,
}

/// Claims stored in the session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (always [`ADMIN_SUBJECT`] for now)
    pub sub: String,
    /// The "is admin" flag
    pub admin: bool,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Issues and verifies signed admin session tokens.
#[derive(Clone)]
pub struct SessionSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    lifetime_secs: i64,
}

impl std::fmt::Debug for SessionSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionSigner")
            .field("lifetime_secs", &self.lifetime_secs)
            .field("encoding_key", &"[REDACTED]")
            .field("decoding_key", &"[REDACTED]")
            .finish()
    }
}

impl SessionSigner {
    /// Creates a signer from a shared secret and a lifetime in seconds.
    pub fn new(secret: &str, lifetime_secs: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            lifetime_secs,
        }
    }

    /// Generates a random secret suitable for a single process lifetime.
    pub fn generate_secret() -> String {
        let mut bytes = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut bytes);
        STANDARD.encode(bytes)
    }

    pub fn lifetime_secs(&self) -> i64 {
        self.lifetime_secs
    }

    /// Issues an admin session starting now.
    pub fn issue_admin(&self) -> Result<String, SessionError> {
        self.issue_admin_at(Utc::now())
    }

    /// Issues an admin session as if it had been created at `issued_at`.
    pub fn issue_admin_at(&self, issued_at: DateTime<Utc>) -> Result<String, SessionError> {
        let claims = SessionClaims {
            sub: ADMIN_SUBJECT.to_string(),
            admin: true,
            iat: issued_at.timestamp(),
            exp: (issued_at + Duration::seconds(self.lifetime_secs)).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| SessionError::EncodingError(e.to_string()))
    }

    /// Verifies a token and checks that it carries the admin flag.
    pub fn verify_admin(&self, token: &str) -> Result<SessionClaims, SessionError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        let claims = decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => SessionError::Expired,
                _ => SessionError::InvalidToken,
            })?
            .claims;

        if !claims.admin || claims.sub != ADMIN_SUBJECT {
            return Err(SessionError::NotAdmin);
        }

        Ok(claims)
    }
}
