//! User repository for database operations

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;

/// User record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub lastname: String,
    pub nickname: String,
    pub date_birth: NaiveDate,
    pub email: String,
    /// bcrypt hash
    pub password: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a user
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub lastname: String,
    pub nickname: String,
    pub date_birth: NaiveDate,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

/// User repository for database operations
pub struct UserRepository;

impl UserRepository {
    /// Insert a new user
    pub async fn create(pool: &PgPool, input: CreateUser) -> Result<UserRecord> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO ttrack.users (name, lastname, nickname, date_birth, email, password, role)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, lastname, nickname, date_birth, email, password, role, created_at
            "#,
        )
        .bind(&input.name)
        .bind(&input.lastname)
        .bind(&input.nickname)
        .bind(input.date_birth)
        .bind(&input.email)
        .bind(&input.password_hash)
        .bind(&input.role)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Find user by email
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, name, lastname, nickname, date_birth, email, password, role, created_at
            FROM ttrack.users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Find user by ID
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, name, lastname, nickname, date_birth, email, password, role, created_at
            FROM ttrack.users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Check if a user with this ID exists
    pub async fn exists_by_id(pool: &PgPool, id: i64) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM ttrack.users WHERE id = $1)
            "#,
        )
        .bind(id)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// Check if email exists
    pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM ttrack.users WHERE email = $1)
            "#,
        )
        .bind(email)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }
}
