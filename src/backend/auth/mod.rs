//! Authentication & Sessions
//!
//! ## Module Structure
//!
//! ```text
//! auth/
//! ├── users.rs     - User rows + queries
//! ├── tokens.rs    - JWT access tokens + rotating refresh tokens
//! └── handlers/    - login / register / refresh / logout endpoints
//! ```

pub mod handlers;
pub mod tokens;
pub mod users;

pub use handlers::{login, logout, refresh, register};
pub use tokens::{create_access_token, verify_access_token, Claims};
pub use users::{create_user, get_user_by_email, get_user_by_id, UserRecord};
