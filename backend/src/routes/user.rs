//! User routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::extract::ValidatedJson;
use crate::services::UserService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use ttrack_shared::{CreateUserRequest, UserResponse};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_current_user))
        .route("/create", post(create_user))
}

/// Self-registration
///
/// POST /user/create
async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let user = UserService::create(&state.db, req).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Profile of the caller
///
/// GET /user
async fn get_current_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> ApiResult<Json<UserResponse>> {
    let user = UserService::get_current(&state.db, auth_user.user_id).await?;
    Ok(Json(user))
}
