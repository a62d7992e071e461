//! Error types for the ttrack application

use thiserror::Error;

/// Credential and token failures surfaced by the auth flow
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email or password.")]
    InvalidCredentials,

    #[error("User not found.")]
    UserNotFound,

    #[error("Missing token")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Expected a {expected} token")]
    WrongTokenType { expected: &'static str },

    #[error("Failed to generate token")]
    TokenGeneration,
}

impl AuthError {
    /// Token generation is a server fault; everything else is the caller's
    pub fn is_client_error(&self) -> bool {
        !matches!(self, AuthError::TokenGeneration)
    }
}
