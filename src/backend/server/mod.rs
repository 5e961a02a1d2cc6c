//! Server Assembly
//!
//! ## Module Structure
//!
//! ```text
//! server/
//! ├── config.rs  - Environment settings + database connection
//! ├── state.rs   - AppState and FromRef impls
//! └── init.rs    - Application assembly
//! ```

pub mod config;
pub mod init;
pub mod state;

pub use config::{ServerSettings, StartupError};
pub use init::create_app;
pub use state::AppState;
