//! Exercise catalogue routes
//!
//! All endpoints require authentication.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::extract::{ApiQuery, ValidatedJson};
use crate::services::ExerciseService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use ttrack_shared::{ExerciseRequest, ExerciseResponse, Page, PageQuery};

pub fn exercise_routes() -> Router<AppState> {
    Router::new().route("/", get(list_exercises).post(create_exercise))
}

/// POST /exercise
async fn create_exercise(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidatedJson(req): ValidatedJson<ExerciseRequest>,
) -> ApiResult<(StatusCode, Json<ExerciseResponse>)> {
    let exercise = ExerciseService::create(&state.db, req).await?;
    Ok((StatusCode::CREATED, Json(exercise)))
}

/// GET /exercise?page=0&size=20
async fn list_exercises(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> ApiResult<Json<Page<ExerciseResponse>>> {
    let page = ExerciseService::list(&state.db, query).await?;
    Ok(Json(page))
}
