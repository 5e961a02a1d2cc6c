//! Backend Server
//!
//! The Axum HTTP server: authentication, per-user configuration, and the
//! static resource catalogs.
//!
//! ## Module Structure
//!
//! ```text
//! backend/
//! ├── auth/        - Users, tokens, auth endpoints
//! ├── config/      - User configuration store + endpoints
//! ├── error/       - ApiError taxonomy + response conversion
//! ├── middleware/  - Bearer-token authentication
//! ├── resource/    - Language/theme catalogs
//! ├── routes/      - Route table + router assembly
//! ├── seed.rs      - Idempotent catalog seeding
//! ├── server/      - Settings, state, app assembly
//! ├── user/        - Self-service profile management
//! └── main.rs      - Binary entry point
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod middleware;
pub mod resource;
pub mod routes;
pub mod seed;
pub mod server;
pub mod user;

pub use error::ApiError;
pub use server::{create_app, AppState, ServerSettings, StartupError};
