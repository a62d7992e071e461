//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories, the JWT service and password hashing.

pub mod auth;
pub mod exercise;
pub mod session_exercise;
pub mod training_session;
pub mod user;

pub use auth::AuthService;
pub use exercise::ExerciseService;
pub use session_exercise::SessionExerciseService;
pub use training_session::TrainingSessionService;
pub use user::UserService;

use crate::error::ApiError;
use std::str::FromStr;

/// Parse an enum column read back from the database
///
/// The schema constrains these columns, so a failure here means the
/// stored data is corrupt.
pub(crate) fn parse_column<T>(column: &str, value: &str) -> Result<T, ApiError>
where
    T: FromStr<Err = String>,
{
    value
        .parse()
        .map_err(|e: String| ApiError::Internal(anyhow::anyhow!("column {}: {}", column, e)))
}
