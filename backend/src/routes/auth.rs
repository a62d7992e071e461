//! Authentication routes
//!
//! Web clients log in through `/login` and carry the access token in an
//! HttpOnly cookie. Mobile clients use `/mobile-login` and
//! `/mobile-refresh` and keep the token pair themselves.

use crate::auth::{cookie, AuthUser};
use crate::error::ApiResult;
use crate::extract::ValidatedJson;
use crate::services::AuthService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use axum_extra::extract::cookie::CookieJar;
use ttrack_shared::{LoginRequest, RefreshTokenRequest, TokenResponse};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/refresh", post(refresh))
        .route("/mobile-login", post(mobile_login))
        .route("/mobile-refresh", post(mobile_refresh))
        .route("/logout", post(logout))
}

/// Web login
///
/// POST /auth/login
///
/// Answers 204 and sets the access token cookie.
async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> ApiResult<(CookieJar, StatusCode)> {
    let token = AuthService::login(&state.db, state.jwt(), &req.email, &req.password).await?;
    Ok((with_token(&state, jar, token), StatusCode::NO_CONTENT))
}

/// Re-issue the web access token
///
/// POST /auth/refresh
///
/// # Authentication
/// Cookie or Bearer access token.
async fn refresh(
    State(state): State<AppState>,
    auth_user: AuthUser,
    jar: CookieJar,
) -> ApiResult<(CookieJar, StatusCode)> {
    let token = AuthService::refresh_login(&state.db, state.jwt(), &auth_user).await?;
    Ok((with_token(&state, jar, token), StatusCode::NO_CONTENT))
}

/// Mobile login
///
/// POST /auth/mobile-login
async fn mobile_login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let tokens =
        AuthService::mobile_login(&state.db, state.jwt(), &req.email, &req.password).await?;
    Ok(Json(tokens))
}

/// Rotate the mobile token pair
///
/// POST /auth/mobile-refresh
async fn mobile_refresh(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RefreshTokenRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let tokens = AuthService::refresh_tokens(&state.db, state.jwt(), &req.refresh_token).await?;
    Ok(Json(tokens))
}

/// Clear the web session cookie
///
/// POST /auth/logout
async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, StatusCode) {
    let jar = jar.add(cookie::removal_cookie(&state.config().cookie));
    (jar, StatusCode::NO_CONTENT)
}

fn with_token(state: &AppState, jar: CookieJar, token: String) -> CookieJar {
    jar.add(cookie::access_token_cookie(
        &state.config().cookie,
        token,
        state.jwt().access_token_expiry_secs(),
    ))
}
