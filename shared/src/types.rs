//! API request and response types

use crate::models::{
    ExerciseType, Role, SessionExerciseStatus, TrainingSessionStatus, UnitOfMeasurement,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Default page size when the client does not ask for one
pub const DEFAULT_PAGE_SIZE: i64 = 20;
/// Upper bound on a single page
pub const MAX_PAGE_SIZE: i64 = 100;
/// Highest page index whose offset still fits in an `i64` at any page size
pub const MAX_PAGE: i64 = i64::MAX / MAX_PAGE_SIZE;

// ============================================================================
// Pagination
// ============================================================================

/// Zero-based page request (`?page=0&size=20`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
}

/// Page request with defaults applied and bounds enforced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub size: i64,
}

impl PageRequest {
    /// Row offset, saturating rather than overflowing
    pub fn offset(&self) -> i64 {
        self.page.saturating_mul(self.size)
    }
}

impl PageQuery {
    /// Clamp to `0 <= page <= MAX_PAGE` and `1 <= size <= MAX_PAGE_SIZE`
    pub fn normalize(&self) -> PageRequest {
        PageRequest {
            page: self.page.unwrap_or(0).clamp(0, MAX_PAGE),
            size: self
                .size
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .clamp(1, MAX_PAGE_SIZE),
        }
    }
}

/// Paginated response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub size: i64,
    pub total_pages: i64,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, total: i64, request: PageRequest) -> Self {
        let total_pages = if total == 0 {
            0
        } else {
            (total + request.size - 1) / request.size
        };
        Self {
            data,
            total,
            page: request.page,
            size: request.size,
            total_pages,
        }
    }
}

// ============================================================================
// Auth
// ============================================================================

/// Login request (web and mobile)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Mobile refresh request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(custom(function = "crate::validation::not_blank_field"))]
    pub refresh_token: String,
}

/// Token pair returned to mobile clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    pub expires_in: i64,
}

// ============================================================================
// User
// ============================================================================

/// Self-registration request. The role is always assigned server-side.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(custom(function = "crate::validation::not_blank_field"))]
    pub name: String,
    #[validate(custom(function = "crate::validation::not_blank_field"))]
    pub lastname: String,
    #[validate(custom(function = "crate::validation::not_blank_field"))]
    pub nickname: String,
    pub date_birth: NaiveDate,
    #[validate(custom(function = "crate::validation::email_field"))]
    pub email: String,
    #[validate(custom(function = "crate::validation::password_field"))]
    pub password: String,
}

/// Public view of a user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub lastname: String,
    pub nickname: String,
    pub date_birth: NaiveDate,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Exercise
// ============================================================================

/// Exercise creation request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ExerciseRequest {
    #[validate(custom(function = "crate::validation::not_blank_field"))]
    pub name: String,
    #[validate(custom(function = "crate::validation::not_blank_field"))]
    pub description: String,
    #[serde(rename = "type")]
    pub exercise_type: ExerciseType,
    #[validate(custom(function = "crate::validation::not_blank_field"))]
    pub image: String,
}

/// Exercise response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub exercise_type: ExerciseType,
    pub image: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Training Session
// ============================================================================

/// Training session creation request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTrainingSessionRequest {
    #[validate(range(min = 1, message = "user_id must be positive"))]
    pub user_id: i64,
    #[validate(length(max = 255))]
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Status overwrite request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateTrainingSessionStatusRequest {
    pub status: TrainingSessionStatus,
}

/// Training session response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingSessionResponse {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: TrainingSessionStatus,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Session Exercise
// ============================================================================

/// Request to attach an exercise to a training session
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSessionExerciseRequest {
    #[validate(range(min = 0))]
    pub rounds: i32,
    #[validate(range(min = 0))]
    pub sets: i32,
    #[validate(range(min = 0))]
    pub repetitions: i32,
    #[validate(range(min = 0))]
    pub sprints: Option<i32>,
    pub time: Option<NaiveTime>,
    #[validate(range(min = 0.0))]
    pub weight: Option<f64>,
    #[validate(range(min = 0.0))]
    pub distance: Option<f64>,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    #[validate(range(min = 0))]
    pub rest_time: i32,
    pub status: SessionExerciseStatus,
    #[validate(range(min = 0))]
    pub exercise_order: i32,
    #[validate(range(min = 1))]
    pub exercise_id: i64,
    pub created_at: Option<NaiveDateTime>,
    pub unit_of_measurement: Option<UnitOfMeasurement>,
}

/// Session exercise response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionExerciseResponse {
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
    pub status: SessionExerciseStatus,
    pub exercise_order: i32,
    pub exercise_id: i64,
    pub training_session_id: i64,
    pub created_at: NaiveDateTime,
    pub unit_of_measurement: Option<UnitOfMeasurement>,
}
