//! JWT token generation and validation
//!
//! Provides access and refresh token management with pre-computed keys.
//! Both token kinds carry the same identity claims and differ only in
//! `token_type` and lifetime.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use ttrack_shared::{AuthError, Role};
use uuid::Uuid;

pub const ACCESS_TOKEN: &str = "access";
pub const REFRESH_TOKEN: &str = "refresh";

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user email)
    pub sub: String,
    /// Database id of the user
    pub user_id: i64,
    /// Role names granted to the user
    pub roles: Vec<String>,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Token type: "access" or "refresh"
    pub token_type: String,
    /// Unique token id; keeps tokens minted in the same second distinct
    pub jti: String,
}

/// Identity a token is minted for
#[derive(Debug, Clone)]
pub struct TokenSubject {
    pub user_id: i64,
    pub email: String,
    pub role: Role,
}

/// Pre-computed JWT keys, shared through `Arc`
#[derive(Clone)]
pub struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }
}

/// JWT service for token operations
///
/// Create once at startup and keep in `AppState`.
#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    access_token_expiry_secs: i64,
    refresh_token_expiry_secs: i64,
}

impl JwtService {
    pub fn new(secret: &str, access_token_expiry_secs: i64, refresh_token_expiry_secs: i64) -> Self {
        Self {
            keys: JwtKeys::new(secret),
            access_token_expiry_secs,
            refresh_token_expiry_secs,
        }
    }

    /// Generate an access token for a user
    #[inline]
    pub fn generate_access_token(&self, subject: &TokenSubject) -> Result<String, AuthError> {
        self.generate_token(subject, ACCESS_TOKEN, self.access_token_expiry_secs)
    }

    /// Generate a refresh token for a user
    #[inline]
    pub fn generate_refresh_token(&self, subject: &TokenSubject) -> Result<String, AuthError> {
        self.generate_token(subject, REFRESH_TOKEN, self.refresh_token_expiry_secs)
    }

    fn generate_token(
        &self,
        subject: &TokenSubject,
        token_type: &str,
        expiry_secs: i64,
    ) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = now + Duration::seconds(expiry_secs);

        let claims = Claims {
            sub: subject.email.clone(),
            user_id: subject.user_id,
            roles: vec![subject.role.as_str().to_string()],
            exp: exp.timestamp(),
            iat: now.timestamp(),
            token_type: token_type.to_string(),
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::default(), &claims, &self.keys.encoding).map_err(|e| {
            tracing::error!(error = %e, token_type, "Failed to encode token");
            AuthError::TokenGeneration
        })
    }

    /// Validate signature and expiry, returning the claims
    pub fn validate_token(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.keys.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            })
    }

    /// Validate an access token specifically
    #[inline]
    pub fn validate_access_token(&self, token: &str) -> Result<Claims, AuthError> {
        self.validate_typed(token, ACCESS_TOKEN)
    }

    /// Validate a refresh token specifically
    #[inline]
    pub fn validate_refresh_token(&self, token: &str) -> Result<Claims, AuthError> {
        self.validate_typed(token, REFRESH_TOKEN)
    }

    fn validate_typed(&self, token: &str, expected: &'static str) -> Result<Claims, AuthError> {
        let claims = self.validate_token(token)?;
        if claims.token_type != expected {
            return Err(AuthError::WrongTokenType { expected });
        }
        Ok(claims)
    }

    #[inline]
    pub fn access_token_expiry_secs(&self) -> i64 {
        self.access_token_expiry_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> JwtService {
        JwtService::new("test-secret", 3600, 604800)
    }

    fn subject() -> TokenSubject {
        TokenSubject {
            user_id: 42,
            email: "john.doe@example.com".to_string(),
            role: Role::User,
        }
    }

    #[test]
    fn test_access_token_carries_identity_claims() {
        let service = create_test_service();

        let token = service.generate_access_token(&subject()).unwrap();
        let claims = service.validate_access_token(&token).unwrap();

        assert_eq!(claims.sub, "john.doe@example.com");
        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.roles, vec!["USER".to_string()]);
        assert_eq!(claims.token_type, ACCESS_TOKEN);
        assert!(claims.iat > 0);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_generate_and_validate_refresh_token() {
        let service = create_test_service();

        let token = service.generate_refresh_token(&subject()).unwrap();
        let claims = service.validate_refresh_token(&token).unwrap();

        assert_eq!(claims.token_type, REFRESH_TOKEN);
        assert_eq!(claims.exp - claims.iat, 604800);
    }

    #[test]
    fn test_token_types_are_not_interchangeable() {
        let service = create_test_service();

        let access = service.generate_access_token(&subject()).unwrap();
        let refresh = service.generate_refresh_token(&subject()).unwrap();

        assert_eq!(
            service.validate_refresh_token(&access).unwrap_err(),
            AuthError::WrongTokenType { expected: REFRESH_TOKEN }
        );
        assert_eq!(
            service.validate_access_token(&refresh).unwrap_err(),
            AuthError::WrongTokenType { expected: ACCESS_TOKEN }
        );
    }

    #[test]
    fn test_consecutive_tokens_differ() {
        let service = create_test_service();
        let first = service.generate_refresh_token(&subject()).unwrap();
        let second = service.generate_refresh_token(&subject()).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_invalid_token_rejected() {
        let service = create_test_service();
        assert_eq!(
            service.validate_token("invalid.token.here").unwrap_err(),
            AuthError::InvalidToken
        );
    }

    #[test]
    fn test_expired_token_rejected() {
        // Past the default 60s leeway
        let service = JwtService::new("test-secret", -120, -120);
        let token = service.generate_access_token(&subject()).unwrap();
        assert_eq!(
            service.validate_access_token(&token).unwrap_err(),
            AuthError::TokenExpired
        );
    }

    #[test]
    fn test_foreign_secret_rejected() {
        let issuer = JwtService::new("other-secret", 3600, 604800);
        let token = issuer.generate_access_token(&subject()).unwrap();
        assert!(create_test_service().validate_access_token(&token).is_err());
    }

    #[test]
    fn test_admin_role_claim() {
        let service = create_test_service();
        let mut admin = subject();
        admin.role = Role::Admin;
        let token = service.generate_access_token(&admin).unwrap();
        let claims = service.validate_access_token(&token).unwrap();
        assert_eq!(claims.roles, vec!["ADMIN".to_string()]);
    }
}
