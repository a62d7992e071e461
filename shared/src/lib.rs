//! ttrack Shared Library
//!
//! Domain enums, request/response types and validation helpers shared
//! by the backend and its tests.

pub mod errors;
pub mod models;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use models::*;
pub use types::*;
