//! Session exercise routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::extract::ValidatedJson;
use crate::services::SessionExerciseService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use ttrack_shared::{CreateSessionExerciseRequest, SessionExerciseResponse};

pub fn session_exercise_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/training-sessions/:id/session-exercise",
            post(create_session_exercise),
        )
        .route("/training-session/:id", get(list_session_exercises))
}

/// POST /session-exercise/training-sessions/:id/session-exercise
async fn create_session_exercise(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(training_session_id): Path<i64>,
    ValidatedJson(req): ValidatedJson<CreateSessionExerciseRequest>,
) -> ApiResult<(StatusCode, Json<SessionExerciseResponse>)> {
    let created = SessionExerciseService::create(&state.db, training_session_id, req).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /session-exercise/training-session/:id
async fn list_session_exercises(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(training_session_id): Path<i64>,
) -> ApiResult<Json<Vec<SessionExerciseResponse>>> {
    let exercises =
        SessionExerciseService::list_by_training_session(&state.db, training_session_id).await?;
    Ok(Json(exercises))
}
