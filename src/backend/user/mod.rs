//! User Profile
//!
//! Self-service account management for the authenticated caller.
//!
//! ## Module Structure
//!
//! ```text
//! user/
//! ├── store.rs     - Profile and password-hash updates
//! └── handlers.rs  - GET/PUT /user/profile, PUT /user/password
//! ```

pub mod handlers;
pub mod store;

pub use handlers::{get_profile, put_password, put_profile};
