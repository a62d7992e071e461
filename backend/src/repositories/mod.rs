//! Repository layer for database operations
//!
//! Repositories are unit structs whose associated functions take a `&PgPool`
//! and return `anyhow::Result`. Enum columns travel as their text names.

pub mod exercise;
pub mod session_exercise;
pub mod training_session;
pub mod user;

pub use exercise::{CreateExercise, ExerciseRecord, ExerciseRepository};
pub use session_exercise::{
    CreateSessionExercise, SessionExerciseRecord, SessionExerciseRepository,
};
pub use training_session::{
    CreateTrainingSession, TrainingSessionRecord, TrainingSessionRepository,
};
pub use user::{CreateUser, UserRecord, UserRepository};
