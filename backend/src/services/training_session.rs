//! Training session service

use crate::error::ApiError;
use crate::repositories::{
    CreateTrainingSession, TrainingSessionRecord, TrainingSessionRepository, UserRepository,
};
use crate::services::parse_column;
use sqlx::PgPool;
use tracing::{info, warn};
use ttrack_shared::{
    CreateTrainingSessionRequest, TrainingSessionResponse, TrainingSessionStatus,
};

pub struct TrainingSessionService;

impl TrainingSessionService {
    /// Open a session for an existing user; every session starts as `STARTED`
    pub async fn create(
        pool: &PgPool,
        request: CreateTrainingSessionRequest,
    ) -> Result<TrainingSessionResponse, ApiError> {
        if !UserRepository::exists_by_id(pool, request.user_id)
            .await
            .map_err(ApiError::Internal)?
        {
            warn!(user_id = request.user_id, "Training session for unknown user");
            return Err(ApiError::field("user_id", "NOT_FOUND", "User not found"));
        }

        let input = CreateTrainingSession {
            user_id: request.user_id,
            name: request.name,
            description: request.description,
            status: TrainingSessionStatus::Started.as_str().to_string(),
        };

        let record = TrainingSessionRepository::create(pool, input)
            .await
            .map_err(ApiError::Internal)?;

        info!(
            training_session_id = record.id,
            user_id = record.user_id,
            "Training session created"
        );
        to_response(record)
    }

    pub async fn get(pool: &PgPool, id: i64) -> Result<TrainingSessionResponse, ApiError> {
        let record = TrainingSessionRepository::find_by_id(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| not_found(id))?;

        to_response(record)
    }

    /// Overwrite the status. Any transition is allowed.
    pub async fn update_status(
        pool: &PgPool,
        id: i64,
        status: TrainingSessionStatus,
    ) -> Result<TrainingSessionResponse, ApiError> {
        let record = TrainingSessionRepository::update_status(pool, id, status.as_str())
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| not_found(id))?;

        info!(training_session_id = id, status = %status, "Training session status updated");
        to_response(record)
    }
}

pub(crate) fn not_found(id: i64) -> ApiError {
    ApiError::NotFound(format!("Training session {} not found", id))
}

fn to_response(record: TrainingSessionRecord) -> Result<TrainingSessionResponse, ApiError> {
    Ok(TrainingSessionResponse {
        status: parse_column("status", &record.status)?,
        id: record.id,
        name: record.name,
        description: record.description,
        user_id: record.user_id,
        created_at: record.created_at,
    })
}
