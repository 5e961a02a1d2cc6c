//! User Configuration
//!
//! Per-user configuration persistence and its two HTTP endpoints.
//!
//! ## Module Structure
//!
//! ```text
//! config/
//! ├── store.rs     - Row types + get-or-create / versioned update queries
//! └── handlers.rs  - GET/PUT /config/user
//! ```

pub mod handlers;
pub mod store;

pub use handlers::{get_user_config, put_user_config};
pub use store::{get_or_create_config, update_config, UserConfigRecord};
