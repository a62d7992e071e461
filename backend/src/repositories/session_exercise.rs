//! Session exercise repository
//!
//! A session exercise links one catalogue exercise into one training
//! session together with the performance numbers recorded for it.

use anyhow::Result;
use chrono::{NaiveDateTime, NaiveTime};
use sqlx::PgPool;

/// Session exercise record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SessionExerciseRecord {
    pub id: i64,
    pub rounds: Option<i32>,
    pub sets: Option<i32>,
    pub repetitions: Option<i32>,
    pub sprints: Option<i32>,
    pub time: Option<NaiveTime>,
    pub weight: Option<f64>,
    pub distance: Option<f64>,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub rest_time: i32,
    pub status: String,
    pub exercise_order: i32,
    pub exercise_id: i64,
    pub training_session_id: i64,
    pub created_at: NaiveDateTime,
    pub unit_of_measurement: Option<String>,
}

/// Input for creating a session exercise
#[derive(Debug, Clone)]
pub struct CreateSessionExercise {
    pub rounds: Option<i32>,
    pub sets: Option<i32>,
    pub repetitions: Option<i32>,
    pub sprints: Option<i32>,
    pub time: Option<NaiveTime>,
    pub weight: Option<f64>,
    pub distance: Option<f64>,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub rest_time: i32,
    pub status: String,
    pub exercise_order: i32,
    pub exercise_id: i64,
    pub training_session_id: i64,
    pub created_at: NaiveDateTime,
    pub unit_of_measurement: Option<String>,
}

pub struct SessionExerciseRepository;

impl SessionExerciseRepository {
    pub async fn create(
        pool: &PgPool,
        input: CreateSessionExercise,
    ) -> Result<SessionExerciseRecord> {
        let record = sqlx::query_as::<_, SessionExerciseRecord>(
            r#"
            INSERT INTO ttrack.session_exercise (
                rounds, sets, repetitions, sprints, time, weight, distance,
                start_time, end_time, rest_time, status, exercise_order,
                exercise_id, training_session_id, created_at, unit_of_measurement
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            RETURNING id, rounds, sets, repetitions, sprints, time, weight, distance,
                      start_time, end_time, rest_time, status, exercise_order,
                      exercise_id, training_session_id, created_at, unit_of_measurement
            "#,
        )
        .bind(input.rounds)
        .bind(input.sets)
        .bind(input.repetitions)
        .bind(input.sprints)
        .bind(input.time)
        .bind(input.weight)
        .bind(input.distance)
        .bind(input.start_time)
        .bind(input.end_time)
        .bind(input.rest_time)
        .bind(&input.status)
        .bind(input.exercise_order)
        .bind(input.exercise_id)
        .bind(input.training_session_id)
        .bind(input.created_at)
        .bind(&input.unit_of_measurement)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// All exercises of a session in performing order
    pub async fn find_by_training_session_id(
        pool: &PgPool,
        training_session_id: i64,
    ) -> Result<Vec<SessionExerciseRecord>> {
        let records = sqlx::query_as::<_, SessionExerciseRecord>(
            r#"
            SELECT id, rounds, sets, repetitions, sprints, time, weight, distance,
                   start_time, end_time, rest_time, status, exercise_order,
                   exercise_id, training_session_id, created_at, unit_of_measurement
            FROM ttrack.session_exercise
            WHERE training_session_id = $1
            ORDER BY exercise_order, id
            "#,
        )
        .bind(training_session_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }
}
