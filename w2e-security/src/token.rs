use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;
use w2e_core::Settings;

use crate::error::SecurityError;

/// Registered claims carried by a signed token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject the token was issued for.
    pub sub: String,
    /// Issued-at, seconds since the epoch.
    pub iat: i64,
    /// Expiry, seconds since the epoch.
    pub exp: i64,
}

impl Claims {
    /// Claims for `sub`, valid for `ttl` from now.
    pub fn new(sub: impl Into<String>, ttl: Duration) -> Self {
        let now = Utc::now();
        Claims {
            sub: sub.into(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }
}

/// HS256 token signer/verifier.
///
/// This is the deferred failure point for the token-signing secret:
/// [`from_settings`](TokenSigner::from_settings) errors iff `JWT_SECRET` is
/// unset, while settings construction never does.
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenSigner {
    /// Build a signer from the resolved settings.
    ///
    /// # Errors
    ///
    /// [`SecurityError::MissingSecret`] when `jwt_secret` is unset.
    pub fn from_settings(settings: &Settings) -> Result<Self, SecurityError> {
        let secret = settings
            .jwt_secret
            .as_deref()
            .ok_or(SecurityError::MissingSecret)?;
        Ok(Self::new(secret))
    }

    /// Build a signer from a raw secret.
    pub fn new(secret: &str) -> Self {
        TokenSigner {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// Sign `claims` into a compact token.
    pub fn sign(&self, claims: &Claims) -> Result<String, SecurityError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(|e| SecurityError::SigningFailed(e.to_string()))
    }

    /// Verify a token's signature and standard claims, returning its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, SecurityError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => SecurityError::TokenExpired,
                _ => SecurityError::InvalidToken(e.to_string()),
            }
        })?;
        debug!(sub = %data.claims.sub, "token verified");
        Ok(data.claims)
    }
}
