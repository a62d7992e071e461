//! Session exercise service

use crate::error::ApiError;
use crate::repositories::{
    CreateSessionExercise, ExerciseRepository, SessionExerciseRecord, SessionExerciseRepository,
    TrainingSessionRepository,
};
use crate::services::{parse_column, training_session};
use chrono::Utc;
use sqlx::PgPool;
use tracing::{info, warn};
use ttrack_shared::{CreateSessionExerciseRequest, SessionExerciseResponse};

pub struct SessionExerciseService;

impl SessionExerciseService {
    /// Attach a catalogue exercise to a training session
    ///
    /// Both the session and the exercise must exist. `created_at`
    /// defaults to the current time when the client omits it.
    pub async fn create(
        pool: &PgPool,
        training_session_id: i64,
        request: CreateSessionExerciseRequest,
    ) -> Result<SessionExerciseResponse, ApiError> {
        ensure_session_exists(pool, training_session_id).await?;

        if !ExerciseRepository::exists_by_id(pool, request.exercise_id)
            .await
            .map_err(ApiError::Internal)?
        {
            warn!(exercise_id = request.exercise_id, "Session exercise for unknown exercise");
            return Err(ApiError::NotFound(format!(
                "Exercise {} not found",
                request.exercise_id
            )));
        }

        let input = CreateSessionExercise {
            rounds: Some(request.rounds),
            sets: Some(request.sets),
            repetitions: Some(request.repetitions),
            sprints: request.sprints,
            time: request.time,
            weight: request.weight,
            distance: request.distance,
            start_time: request.start_time,
            end_time: request.end_time,
            rest_time: request.rest_time,
            status: request.status.as_str().to_string(),
            exercise_order: request.exercise_order,
            exercise_id: request.exercise_id,
            training_session_id,
            created_at: request
                .created_at
                .unwrap_or_else(|| Utc::now().naive_utc()),
            unit_of_measurement: request.unit_of_measurement.map(|u| u.as_str().to_string()),
        };

        let record = SessionExerciseRepository::create(pool, input)
            .await
            .map_err(ApiError::Internal)?;

        info!(
            session_exercise_id = record.id,
            training_session_id,
            exercise_id = record.exercise_id,
            "Session exercise created"
        );
        to_response(record)
    }

    /// Exercises of a session ordered by `exercise_order`
    pub async fn list_by_training_session(
        pool: &PgPool,
        training_session_id: i64,
    ) -> Result<Vec<SessionExerciseResponse>, ApiError> {
        ensure_session_exists(pool, training_session_id).await?;

        let records =
            SessionExerciseRepository::find_by_training_session_id(pool, training_session_id)
                .await
                .map_err(ApiError::Internal)?;

        if records.is_empty() {
            warn!(training_session_id, "Training session has no exercises");
        }

        records.into_iter().map(to_response).collect()
    }
}

async fn ensure_session_exists(pool: &PgPool, id: i64) -> Result<(), ApiError> {
    if TrainingSessionRepository::exists_by_id(pool, id)
        .await
        .map_err(ApiError::Internal)?
    {
        Ok(())
    } else {
        Err(training_session::not_found(id))
    }
}

fn to_response(record: SessionExerciseRecord) -> Result<SessionExerciseResponse, ApiError> {
    let unit_of_measurement = record
        .unit_of_measurement
        .as_deref()
        .map(|u| parse_column("unit_of_measurement", u))
        .transpose()?;

    Ok(SessionExerciseResponse {
        status: parse_column("status", &record.status)?,
        unit_of_measurement,
        id: record.id,
        rounds: record.rounds,
        sets: record.sets,
        repetitions: record.repetitions,
        sprints: record.sprints,
        time: record.time,
        weight: record.weight,
        distance: record.distance,
        start_time: record.start_time,
        end_time: record.end_time,
        rest_time: record.rest_time,
        exercise_order: record.exercise_order,
        exercise_id: record.exercise_id,
        training_session_id: record.training_session_id,
        created_at: record.created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use ttrack_shared::{SessionExerciseStatus, UnitOfMeasurement};

    fn record(unit: Option<&str>) -> SessionExerciseRecord {
        let day = NaiveDate::from_ymd_opt(2026, 1, 13).unwrap();
        SessionExerciseRecord {
            id: 1,
            rounds: Some(3),
            sets: Some(4),
            repetitions: Some(12),
            sprints: None,
            time: NaiveTime::from_hms_opt(0, 30, 0),
            weight: Some(60.0),
            distance: None,
            start_time: day.and_hms_opt(10, 0, 0).unwrap(),
            end_time: day.and_hms_opt(10, 30, 0).unwrap(),
            rest_time: 90,
            status: "FINISHED".to_string(),
            exercise_order: 2,
            exercise_id: 7,
            training_session_id: 11,
            created_at: day.and_hms_opt(9, 55, 0).unwrap(),
            unit_of_measurement: unit.map(str::to_string),
        }
    }

    #[test]
    fn test_to_response_parses_enums() {
        let response = to_response(record(Some("MILES"))).unwrap();
        assert_eq!(response.status, SessionExerciseStatus::Finished);
        assert_eq!(response.unit_of_measurement, Some(UnitOfMeasurement::Miles));
        assert_eq!(response.training_session_id, 11);
    }

    #[test]
    fn test_to_response_without_unit() {
        let response = to_response(record(None)).unwrap();
        assert!(response.unit_of_measurement.is_none());
    }

    #[test]
    fn test_to_response_rejects_corrupt_unit() {
        assert!(to_response(record(Some("FURLONGS"))).is_err());
    }
}
