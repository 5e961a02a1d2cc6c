//! HTTP Middleware
//!
//! Currently just bearer-token authentication.

pub mod auth;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
