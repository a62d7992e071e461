//! Exercise catalogue repository

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// Exercise record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ExerciseRecord {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[sqlx(rename = "type")]
    pub exercise_type: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
}

/// Input for creating an exercise
#[derive(Debug, Clone)]
pub struct CreateExercise {
    pub name: String,
    pub description: String,
    pub exercise_type: String,
    pub image: String,
}

pub struct ExerciseRepository;

impl ExerciseRepository {
    pub async fn create(pool: &PgPool, input: CreateExercise) -> Result<ExerciseRecord> {
        let record = sqlx::query_as::<_, ExerciseRecord>(
            r#"
            INSERT INTO ttrack.exercise (name, description, type, image)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, description, type, image, created_at
            "#,
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(&input.exercise_type)
        .bind(&input.image)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// One page of exercises ordered by id, plus the total row count
    pub async fn find_page(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<ExerciseRecord>, i64)> {
        let records = sqlx::query_as::<_, ExerciseRecord>(
            r#"
            SELECT id, name, description, type, image, created_at
            FROM ttrack.exercise
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM ttrack.exercise")
            .fetch_one(pool)
            .await?;

        Ok((records, total))
    }

    pub async fn exists_by_id(pool: &PgPool, id: i64) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM ttrack.exercise WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }
}
