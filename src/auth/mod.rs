pub mod password;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config::{SecurityConfig, MAX_JWT_EXPIRY_SECS};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub exp: i64,
    pub iat: i64,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("JWT secret not configured")]
    MissingSecret,

    #[error("JWT lifetime must be between 1 and {max} seconds, got {0}", max = MAX_JWT_EXPIRY_SECS)]
    InvalidLifetime(i64),

    #[error("JWT generation error: {0}")]
    Generation(String),

    /// Malformed, badly signed and expired tokens all land here
    #[error("Token is not valid")]
    Invalid,
}

/// Issues and verifies session tokens.
///
/// Stateless: a token is valid as long as its signature checks out against the
/// configured secret and its `exp` claim is still in the future.
pub struct TokenAuthority {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validity: Duration,
}

impl TokenAuthority {
    pub fn new(secret: &str, validity: Duration) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::MissingSecret);
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validity,
        })
    }

    pub fn from_config(security: &SecurityConfig) -> Result<Self, TokenError> {
        let secs = security.jwt_expiry_secs;
        if !(1..=MAX_JWT_EXPIRY_SECS).contains(&secs) {
            return Err(TokenError::InvalidLifetime(secs));
        }
        Self::new(&security.jwt_secret, Duration::seconds(secs))
    }

    pub fn issue(&self, user_id: Uuid) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id,
            exp: (now + self.validity).timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Generation(e.to_string()))
    }

    pub fn verify(&self, token: &str) -> Result<Uuid, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            tracing::debug!("Token rejected: {}", e);
            TokenError::Invalid
        })?;

        Ok(data.claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authority() -> TokenAuthority {
        TokenAuthority::new("test-secret", Duration::hours(1)).unwrap()
    }

    #[test]
    fn issued_token_verifies_to_same_user() {
        let tokens = authority();
        let user_id = Uuid::new_v4();

        let token = tokens.issue(user_id).unwrap();
        assert_eq!(tokens.verify(&token).unwrap(), user_id);
    }

    #[test]
    fn expired_token_is_invalid() {
        let tokens = TokenAuthority::new("test-secret", Duration::seconds(-30)).unwrap();
        let token = tokens.issue(Uuid::new_v4()).unwrap();

        assert_eq!(tokens.verify(&token), Err(TokenError::Invalid));
    }

    #[test]
    fn token_signed_with_other_secret_is_invalid() {
        let other = TokenAuthority::new("another-secret", Duration::hours(1)).unwrap();
        let token = other.issue(Uuid::new_v4()).unwrap();

        assert_eq!(authority().verify(&token), Err(TokenError::Invalid));
    }

    #[test]
    fn garbage_is_invalid() {
        assert_eq!(authority().verify("not.a.jwt"), Err(TokenError::Invalid));
        assert_eq!(authority().verify(""), Err(TokenError::Invalid));
    }

    #[test]
    fn config_lifetime_outside_bounds_is_rejected() {
        let mut security = crate::config::AppConfig::development().security;
        for secs in [0, -1, i64::MAX] {
            security.jwt_expiry_secs = secs;
            assert!(matches!(
                TokenAuthority::from_config(&security),
                Err(TokenError::InvalidLifetime(s)) if s == secs
            ));
        }

        security.jwt_expiry_secs = 60;
        assert!(TokenAuthority::from_config(&security).is_ok());
    }

    #[test]
    fn empty_secret_is_rejected() {
        assert!(matches!(
            TokenAuthority::new("", Duration::hours(1)),
            Err(TokenError::MissingSecret)
        ));
    }
}
