//! Training session repository

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// Training session record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TrainingSessionRecord {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a training session
#[derive(Debug, Clone)]
pub struct CreateTrainingSession {
    pub user_id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: String,
}

pub struct TrainingSessionRepository;

impl TrainingSessionRepository {
    pub async fn create(
        pool: &PgPool,
        input: CreateTrainingSession,
    ) -> Result<TrainingSessionRecord> {
        let record = sqlx::query_as::<_, TrainingSessionRecord>(
            r#"
            INSERT INTO ttrack.training_session (name, description, status, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, description, status, user_id, created_at
            "#,
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(&input.status)
        .bind(input.user_id)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<TrainingSessionRecord>> {
        let record = sqlx::query_as::<_, TrainingSessionRecord>(
            r#"
            SELECT id, name, description, status, user_id, created_at
            FROM ttrack.training_session
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    pub async fn exists_by_id(pool: &PgPool, id: i64) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM ttrack.training_session WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// Overwrite the status; returns `None` when the session does not exist
    pub async fn update_status(
        pool: &PgPool,
        id: i64,
        status: &str,
    ) -> Result<Option<TrainingSessionRecord>> {
        let record = sqlx::query_as::<_, TrainingSessionRecord>(
            r#"
            UPDATE ttrack.training_session
            SET status = $2
            WHERE id = $1
            RETURNING id, name, description, status, user_id, created_at
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }
}
