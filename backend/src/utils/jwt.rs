//! JWT token utilities for authentication.
//!
//! Provides token creation and validation. Tokens are stateless: nothing is
//! written server-side at login, and a token is accepted later on signature
//! and expiry alone.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::errors::ServiceError;

/// JWT claims: the user's identifier and email bound to an expiry.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User ID
    pub sub: i64,
    /// User email
    pub email: String,
    /// Token expiration timestamp
    pub exp: usize,
    /// Token issued at timestamp
    pub iat: usize,
}

/// JWT token utility for creating and validating tokens
pub struct JwtUtils {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expires_in_seconds: u64,
}

impl JwtUtils {
    /// Creates a new JwtUtils instance from the injected configuration.
    pub fn new(config: &Config) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        JwtUtils {
            encoding_key,
            decoding_key,
            validation,
            expires_in_seconds: config.jwt_expires_in_seconds,
        }
    }

    /// Generates a signed token for the given user.
    pub fn generate_token(&self, user_id: i64, email: &str) -> Result<String, ServiceError> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.expires_in_seconds as i64);

        let claims = Claims {
            sub: user_id,
            email: email.to_string(),
            exp: exp.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| ServiceError::internal(format!("Token generation failed: {e}")))
    }

    /// Validates a token's signature and expiry, returning its claims.
    pub fn validate_token(&self, token: &str) -> Result<Claims, ServiceError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|_| ServiceError::InvalidCredentials)
    }
}

impl Claims {
    /// Check if token has expired
    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as usize;
        now > self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(expires_in_seconds: u64) -> Config {
        Config {
            database_url: "postgres://localhost/test".to_string(),
            max_connections: 1,
            acquire_timeout_seconds: 1,
            jwt_secret: "test-secret".to_string(),
            jwt_expires_in_seconds: expires_in_seconds,
            server_port: 3333,
            request_timeout_seconds: 30,
        }
    }

    #[test]
    fn token_round_trips_user_identity() {
        let jwt = JwtUtils::new(&test_config(3600));
        let token = jwt.generate_token(42, "ana@x.com").unwrap();
        assert!(!token.is_empty());

        let claims = jwt.validate_token(&token).unwrap();
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.email, "ana@x.com");
    }

    #[test]
    fn expiry_is_in_the_future_at_issuance() {
        let jwt = JwtUtils::new(&test_config(3600));
        let token = jwt.generate_token(1, "ana@x.com").unwrap();
        let claims = jwt.validate_token(&token).unwrap();

        let now = Utc::now().timestamp() as usize;
        assert!(claims.exp > now);
        assert_eq!(claims.exp - claims.iat, 3600);
        assert!(!claims.is_expired());
    }

    #[test]
    fn expired_token_is_rejected() {
        // A token whose lifetime already elapsed must fail validation.
        let jwt = JwtUtils::new(&test_config(3600));
        let now = Utc::now();
        let claims = Claims {
            sub: 1,
            email: "ana@x.com".to_string(),
            exp: (now - Duration::seconds(120)).timestamp() as usize,
            iat: (now - Duration::seconds(3720)).timestamp() as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("test-secret".as_bytes()),
        )
        .unwrap();

        assert!(claims.is_expired());
        assert!(matches!(
            jwt.validate_token(&token),
            Err(ServiceError::InvalidCredentials)
        ));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let issuer = JwtUtils::new(&test_config(3600));
        let token = issuer.generate_token(1, "ana@x.com").unwrap();

        let mut other = test_config(3600);
        other.jwt_secret = "another-secret".to_string();
        let verifier = JwtUtils::new(&other);

        assert!(verifier.validate_token(&token).is_err());
    }
}
