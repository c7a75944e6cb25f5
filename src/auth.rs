use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// Lifetime of a generated token in seconds
pub const TOKEN_TTL_SECS: i64 = 3600;

/// Claims carried by a Zoom API JWT
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoomClaims {
    pub iss: String,
    pub exp: i64,
}

/// Authentication utilities for the Zoom API
pub struct ZoomAuth;

impl ZoomAuth {
    /// Get current timestamp for token claims
    pub fn get_timestamp() -> i64 {
        Utc::now().timestamp()
    }

    /// Generate a JWT for the given credentials, valid for one hour from now
    pub fn generate_jwt(api_key: &str, api_secret: &str) -> Result<String> {
        Self::generate_jwt_with_expiry(
            api_key,
            api_secret,
            Self::get_timestamp() + TOKEN_TTL_SECS,
        )
    }

    /// Generate a JWT with an explicit `exp` claim (unix seconds)
    pub fn generate_jwt_with_expiry(api_key: &str, api_secret: &str, exp: i64) -> Result<String> {
        let claims = ZoomClaims {
            iss: api_key.to_string(),
            exp,
        };

        debug!("Signing token for key {} expiring at {}", api_key, exp);

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(api_secret.as_bytes()),
        )?;
        Ok(token)
    }
}

/// Produces the auth token attached to every request
#[cfg_attr(test, mockall::automock)]
pub trait TokenGenerator: Send + Sync {
    fn generate(&self, api_key: &str, api_secret: &str) -> Result<String>;
}

/// Default generator: HS256 JWT signed with the API secret
#[derive(Debug, Clone, Copy, Default)]
pub struct JwtGenerator;

impl TokenGenerator for JwtGenerator {
    fn generate(&self, api_key: &str, api_secret: &str) -> Result<String> {
        ZoomAuth::generate_jwt(api_key, api_secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{decode, decode_header, DecodingKey, Validation};

    #[test]
    fn test_get_timestamp() {
        let timestamp = ZoomAuth::get_timestamp();
        assert!(timestamp > 0);
    }

    #[test]
    fn test_generate_jwt_with_expiry_is_deterministic() {
        let first = ZoomAuth::generate_jwt_with_expiry("KEY", "SECRET", 1_900_000_000).unwrap();
        let second = ZoomAuth::generate_jwt_with_expiry("KEY", "SECRET", 1_900_000_000).unwrap();
        assert_eq!(first, second);

        let other_secret =
            ZoomAuth::generate_jwt_with_expiry("KEY", "OTHER", 1_900_000_000).unwrap();
        assert_ne!(first, other_secret);
    }

    #[test]
    fn test_generate_jwt_claims() {
        let before = ZoomAuth::get_timestamp();
        let token = ZoomAuth::generate_jwt("KEY", "SECRET").unwrap();

        let header = decode_header(&token).unwrap();
        assert_eq!(header.alg, Algorithm::HS256);
        assert_eq!(header.typ.as_deref(), Some("JWT"));

        let data = decode::<ZoomClaims>(
            &token,
            &DecodingKey::from_secret(b"SECRET"),
            &Validation::new(Algorithm::HS256),
        )
        .unwrap();
        assert_eq!(data.claims.iss, "KEY");
        assert!(data.claims.exp >= before + TOKEN_TTL_SECS);
        assert!(data.claims.exp <= ZoomAuth::get_timestamp() + TOKEN_TTL_SECS);
    }

    #[test]
    fn test_token_rejected_with_wrong_secret() {
        let token = JwtGenerator.generate("KEY", "SECRET").unwrap();
        let result = decode::<ZoomClaims>(
            &token,
            &DecodingKey::from_secret(b"NOT-THE-SECRET"),
            &Validation::new(Algorithm::HS256),
        );
        assert!(result.is_err());
    }
}
