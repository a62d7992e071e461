//! User registration and profile lookup
//!
//! Password hashing is offloaded to the blocking thread pool via
//! `spawn_blocking`.

use crate::auth::PasswordService;
use crate::error::ApiError;
use crate::repositories::{CreateUser, UserRecord, UserRepository};
use crate::services::parse_column;
use sqlx::PgPool;
use tracing::{info, warn};
use ttrack_shared::{AuthError, CreateUserRequest, Role, UserResponse};

/// User service
pub struct UserService;

impl UserService {
    /// Register a new account with the `USER` role
    pub async fn create(
        pool: &PgPool,
        request: CreateUserRequest,
    ) -> Result<UserResponse, ApiError> {
        let email = request.email.trim().to_string();

        if UserRepository::email_exists(pool, &email)
            .await
            .map_err(ApiError::Internal)?
        {
            warn!(email = %email, "Registration with existing email");
            return Err(email_taken());
        }

        let password_hash = PasswordService::hash_async(request.password)
            .await
            .map_err(ApiError::Internal)?;

        let input = CreateUser {
            name: request.name.trim().to_string(),
            lastname: request.lastname.trim().to_string(),
            nickname: request.nickname.trim().to_string(),
            date_birth: request.date_birth,
            email,
            password_hash,
            role: Role::User.as_str().to_string(),
        };

        // Two concurrent registrations can both pass the existence check
        let user = UserRepository::create(pool, input).await.map_err(|e| {
            if is_unique_violation(&e) {
                email_taken()
            } else {
                ApiError::Internal(e)
            }
        })?;

        info!(user_id = user.id, "User registered");
        to_response(user)
    }

    /// Profile of the authenticated user
    pub async fn get_current(pool: &PgPool, user_id: i64) -> Result<UserResponse, ApiError> {
        let user = UserRepository::find_by_id(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::from(AuthError::UserNotFound))?;

        to_response(user)
    }
}

fn email_taken() -> ApiError {
    ApiError::field("email", "ALREADY_EXISTS", "Email is already registered")
}

fn is_unique_violation(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<sqlx::Error>(),
        Some(sqlx::Error::Database(db)) if db.is_unique_violation()
    )
}

fn to_response(user: UserRecord) -> Result<UserResponse, ApiError> {
    Ok(UserResponse {
        role: parse_column("role", &user.role)?,
        id: user.id,
        name: user.name,
        lastname: user.lastname,
        nickname: user.nickname,
        date_birth: user.date_birth,
        email: user.email,
        created_at: user.created_at,
    })
}
