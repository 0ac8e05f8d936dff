//! JWT token service.
//!
//! Tokens are HS256-signed and carry the user's identifier as `sub`.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::Error, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use common::JwtConfig;
use domain::{ROLE_USER, SECONDS_PER_HOUR, TOKEN_TYPE_BEARER};

/// JWT claims payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iss: String,
    pub scope: String,
    pub exp: i64,
    pub iat: i64,
}

/// Token response returned after successful authentication
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    /// JWT access token
    pub access_token: String,
    /// Token type (always "Bearer")
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Token lifetime in seconds
    #[schema(example = 86400)]
    pub expires_in: i64,
}

/// Issues and verifies access tokens.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    expiration_hours: i64,
}

impl TokenService {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            issuer: config.issuer.clone(),
            expiration_hours: config.expiration_hours,
        }
    }

    /// Sign a token for `subject`.
    pub fn issue(&self, subject: &str) -> Result<TokenResponse, Error> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.expiration_hours);

        let claims = Claims {
            sub: subject.to_string(),
            iss: self.issuer.clone(),
            scope: ROLE_USER.to_string(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)?;

        Ok(TokenResponse {
            access_token: token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: self.expiration_hours * SECONDS_PER_HOUR,
        })
    }

    /// Check signature, expiry and issuer; return the claims.
    pub fn verify(&self, token: &str) -> Result<Claims, Error> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.issuer]);

        let data = decode::<Claims>(token, &self.decoding_key, &validation)?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new(&JwtConfig::default())
    }

    #[test]
    fn test_issue_then_verify() {
        let service = service();
        let token = service.issue("0f8fad5b-d9cb-469f-a165-70867728950e").unwrap();

        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.expires_in, 24 * 3600);

        let claims = service.verify(&token.access_token).unwrap();
        assert_eq!(claims.sub, "0f8fad5b-d9cb-469f-a165-70867728950e");
        assert_eq!(claims.iss, "auth-api");
        assert_eq!(claims.scope, "user");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let service = service();
        let mut token = service.issue("subject").unwrap().access_token;
        token.push('x');

        assert!(service.verify(&token).is_err());
    }

    #[test]
    fn test_foreign_secret_is_rejected() {
        let other = TokenService::new(&JwtConfig {
            secret: "another-secret-key-that-is-long-enough".to_string(),
            ..JwtConfig::default()
        });
        let token = other.issue("subject").unwrap().access_token;

        assert!(service().verify(&token).is_err());
    }

    #[test]
    fn test_foreign_issuer_is_rejected() {
        let other = TokenService::new(&JwtConfig {
            issuer: "someone-else".to_string(),
            ..JwtConfig::default()
        });
        let token = other.issue("subject").unwrap().access_token;

        assert!(service().verify(&token).is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let config = JwtConfig::default();
        let now = Utc::now();
        let claims = Claims {
            sub: "subject".to_string(),
            iss: config.issuer.clone(),
            scope: ROLE_USER.to_string(),
            exp: (now - Duration::hours(2)).timestamp(),
            iat: (now - Duration::hours(3)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .unwrap();

        assert!(TokenService::new(&config).verify(&token).is_err());
    }
}
