//! Authenticated principal extraction
//!
//! Mobile clients send `Authorization: Bearer <jwt>`; browsers carry the
//! same access token in an HttpOnly cookie. The header wins when both are
//! present. Refresh tokens are never accepted here.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::FromRef,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use axum_extra::extract::cookie::CookieJar;
use ttrack_shared::AuthError;

/// Authenticated user extracted from an access token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: i64,
    pub email: String,
    pub roles: Vec<String>,
}

/// Where the access token was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenSource {
    Bearer(String),
    Cookie(String),
}

impl TokenSource {
    pub fn token(&self) -> &str {
        match self {
            TokenSource::Bearer(t) | TokenSource::Cookie(t) => t,
        }
    }
}

/// Locate the access token in the request headers
///
/// A present but malformed `Authorization` header is rejected outright
/// rather than falling back to the cookie.
pub fn find_token(headers: &HeaderMap, cookie_name: &str) -> Result<TokenSource, ApiError> {
    if let Some(value) = headers.get(AUTHORIZATION) {
        let value = value
            .to_str()
            .map_err(|_| ApiError::Unauthorized("Invalid authorization header".to_string()))?;
        let token = value
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Unauthorized("Invalid authorization format".to_string()))?;
        return Ok(TokenSource::Bearer(token.trim().to_string()));
    }

    CookieJar::from_headers(headers)
        .get(cookie_name)
        .map(|c| TokenSource::Cookie(c.value().to_string()))
        .ok_or_else(|| AuthError::MissingToken.into())
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let source = find_token(&parts.headers, &app_state.config().cookie.name)?;
        let claims = app_state
            .jwt()
            .validate_access_token(source.token())
            .map_err(|e| {
                tracing::debug!(error = %e, "Rejected access token");
                ApiError::from(e)
            })?;

        Ok(AuthUser {
            user_id: claims.user_id,
            email: claims.sub,
            roles: claims.roles,
        })
    }
}
