//! Exercise catalogue service

use crate::error::ApiError;
use crate::repositories::{CreateExercise, ExerciseRecord, ExerciseRepository};
use crate::services::parse_column;
use sqlx::PgPool;
use tracing::{debug, info};
use ttrack_shared::{ExerciseRequest, ExerciseResponse, Page, PageQuery};

pub struct ExerciseService;

impl ExerciseService {
    pub async fn create(
        pool: &PgPool,
        request: ExerciseRequest,
    ) -> Result<ExerciseResponse, ApiError> {
        let input = CreateExercise {
            name: request.name.trim().to_string(),
            description: request.description,
            exercise_type: request.exercise_type.as_str().to_string(),
            image: request.image,
        };

        let record = ExerciseRepository::create(pool, input)
            .await
            .map_err(ApiError::Internal)?;

        info!(exercise_id = record.id, "Exercise created");
        to_response(record)
    }

    /// One zero-based page of the catalogue ordered by id
    pub async fn list(pool: &PgPool, query: PageQuery) -> Result<Page<ExerciseResponse>, ApiError> {
        let request = query.normalize();

        let (records, total) = ExerciseRepository::find_page(pool, request.size, request.offset())
            .await
            .map_err(ApiError::Internal)?;

        debug!(
            page = request.page,
            size = request.size,
            total,
            "Listed exercises"
        );

        let data = records
            .into_iter()
            .map(to_response)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(data, total, request))
    }
}

fn to_response(record: ExerciseRecord) -> Result<ExerciseResponse, ApiError> {
    Ok(ExerciseResponse {
        exercise_type: parse_column("type", &record.exercise_type)?,
        id: record.id,
        name: record.name,
        description: record.description,
        image: record.image,
        created_at: record.created_at,
    })
}
