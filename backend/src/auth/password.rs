//! Password hashing using bcrypt
//!
//! bcrypt is CPU-bound; the async variants move the work onto the blocking
//! thread pool so request handlers never stall the runtime.

use anyhow::Result;

/// Password hashing service
pub struct PasswordService;

impl PasswordService {
    /// Hash a password with the default bcrypt cost (blocking)
    pub fn hash(password: &str) -> Result<String> {
        bcrypt::hash(password, bcrypt::DEFAULT_COST)
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))
    }

    /// Hash a password on the blocking thread pool
    pub async fn hash_async(password: String) -> Result<String> {
        tokio::task::spawn_blocking(move || Self::hash(&password))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }

    /// Verify a password against a bcrypt hash (blocking)
    ///
    /// A malformed stored hash is reported as an error, not as a mismatch.
    pub fn verify(password: &str, hash: &str) -> Result<bool> {
        bcrypt::verify(password, hash).map_err(|e| anyhow::anyhow!("Invalid hash format: {}", e))
    }

    /// Verify a password on the blocking thread pool
    pub async fn verify_async(password: String, hash: String) -> Result<bool> {
        tokio::task::spawn_blocking(move || Self::verify(&password, &hash))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }
}
