//! Training session routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::extract::ValidatedJson;
use crate::services::TrainingSessionService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use ttrack_shared::{
    CreateTrainingSessionRequest, TrainingSessionResponse, UpdateTrainingSessionStatusRequest,
};

pub fn training_session_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_training_session))
        .route("/:id", get(get_training_session))
        .route("/:id/status", put(update_status))
}

/// POST /training-session/create
async fn create_training_session(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateTrainingSessionRequest>,
) -> ApiResult<(StatusCode, Json<TrainingSessionResponse>)> {
    let session = TrainingSessionService::create(&state.db, req).await?;
    Ok((StatusCode::CREATED, Json(session)))
}

/// GET /training-session/:id
async fn get_training_session(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<TrainingSessionResponse>> {
    let session = TrainingSessionService::get(&state.db, id).await?;
    Ok(Json(session))
}

/// PUT /training-session/:id/status
async fn update_status(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<i64>,
    ValidatedJson(req): ValidatedJson<UpdateTrainingSessionStatusRequest>,
) -> ApiResult<Json<TrainingSessionResponse>> {
    let session = TrainingSessionService::update_status(&state.db, id, req.status).await?;
    Ok(Json(session))
}
