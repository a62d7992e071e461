//! Domain enums for the ttrack application
//!
//! Every enum travels as its SCREAMING_SNAKE_CASE name, both on the wire
//! and in the database `TEXT` columns. Parsing is exact and case-sensitive
//! so that a stored value always round-trips to the same variant.
//!
//! Status enums carry no transition rules: any value may replace any other.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// User Role
// ============================================================================

/// Role granted to a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(Role::User),
            "ADMIN" => Ok(Role::Admin),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

// ============================================================================
// Exercise Type
// ============================================================================

/// Training modality of an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExerciseType {
    Strength,
    Cardio,
    Flexibility,
    Balance,
    Hypertrophy,
    Hiit,
    Plyometrics,
}

impl ExerciseType {
    pub const ALL: [ExerciseType; 7] = [
        ExerciseType::Strength,
        ExerciseType::Cardio,
        ExerciseType::Flexibility,
        ExerciseType::Balance,
        ExerciseType::Hypertrophy,
        ExerciseType::Hiit,
        ExerciseType::Plyometrics,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseType::Strength => "STRENGTH",
            ExerciseType::Cardio => "CARDIO",
            ExerciseType::Flexibility => "FLEXIBILITY",
            ExerciseType::Balance => "BALANCE",
            ExerciseType::Hypertrophy => "HYPERTROPHY",
            ExerciseType::Hiit => "HIIT",
            ExerciseType::Plyometrics => "PLYOMETRICS",
        }
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExerciseType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown exercise type: {}", s))
    }
}

// ============================================================================
// Training Session Status
// ============================================================================

/// Lifecycle marker of a training session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrainingSessionStatus {
    #[default]
    Started,
    InProgress,
    Finished,
    IsTemplate,
}

impl TrainingSessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrainingSessionStatus::Started => "STARTED",
            TrainingSessionStatus::InProgress => "IN_PROGRESS",
            TrainingSessionStatus::Finished => "FINISHED",
            TrainingSessionStatus::IsTemplate => "IS_TEMPLATE",
        }
    }
}

impl fmt::Display for TrainingSessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrainingSessionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STARTED" => Ok(TrainingSessionStatus::Started),
            "IN_PROGRESS" => Ok(TrainingSessionStatus::InProgress),
            "FINISHED" => Ok(TrainingSessionStatus::Finished),
            "IS_TEMPLATE" => Ok(TrainingSessionStatus::IsTemplate),
            _ => Err(format!("Unknown training session status: {}", s)),
        }
    }
}

// ============================================================================
// Session Exercise Status
// ============================================================================

/// Completion marker of one exercise inside a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionExerciseStatus {
    Started,
    InProgress,
    Finished,
    NotFinished,
}

impl SessionExerciseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionExerciseStatus::Started => "STARTED",
            SessionExerciseStatus::InProgress => "IN_PROGRESS",
            SessionExerciseStatus::Finished => "FINISHED",
            SessionExerciseStatus::NotFinished => "NOT_FINISHED",
        }
    }
}

impl fmt::Display for SessionExerciseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SessionExerciseStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STARTED" => Ok(SessionExerciseStatus::Started),
            "IN_PROGRESS" => Ok(SessionExerciseStatus::InProgress),
            "FINISHED" => Ok(SessionExerciseStatus::Finished),
            "NOT_FINISHED" => Ok(SessionExerciseStatus::NotFinished),
            _ => Err(format!("Unknown session exercise status: {}", s)),
        }
    }
}

// ============================================================================
// Distance Unit
// ============================================================================

/// Unit used for the distance of a session exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnitOfMeasurement {
    Kilometers,
    Miles,
}

impl UnitOfMeasurement {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitOfMeasurement::Kilometers => "KILOMETERS",
            UnitOfMeasurement::Miles => "MILES",
        }
    }
}

impl fmt::Display for UnitOfMeasurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitOfMeasurement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "KILOMETERS" => Ok(UnitOfMeasurement::Kilometers),
            "MILES" => Ok(UnitOfMeasurement::Miles),
            _ => Err(format!("Unknown unit of measurement: {}", s)),
        }
    }
}
