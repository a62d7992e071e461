//! Authentication module
//!
//! JWT access/refresh tokens with bcrypt password hashing. Tokens reach
//! the server either as a bearer header or as an HttpOnly cookie.

pub mod cookie;
mod jwt;
mod middleware;
mod password;

pub use jwt::{Claims, JwtService, TokenSubject, ACCESS_TOKEN, REFRESH_TOKEN};
pub use middleware::{find_token, AuthUser, TokenSource};
pub use password::PasswordService;
